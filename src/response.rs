//! Request/response envelope for the profile collection message.
//!
//! Callers on the other side of a message channel send a
//! [`ProfileRequest`] and receive a [`ProfileResponse`]:
//!
//! ```json
//! { "success": true, "data": { "platform": "instagram", ... } }
//! { "success": false, "message": "Not on a supported profile page", "kind": "unsupported_platform" }
//! ```

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::options::Options;
use crate::result::ExtractionResult;
use crate::url_utils;

/// Actions the extraction side answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    CollectProfileData,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRequest {
    pub action: Action,
}

impl ProfileRequest {
    #[must_use]
    pub fn collect_profile_data() -> Self {
        Self {
            action: Action::CollectProfileData,
        }
    }
}

/// Outcome of a request, tagged by `success`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ExtractionResult>,

    /// Human-readable failure message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Stable failure tag, see [`Error::kind`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl ProfileResponse {
    #[must_use]
    pub fn success(data: ExtractionResult) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            kind: None,
        }
    }

    #[must_use]
    pub fn failure(err: &Error) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(err.to_string()),
            kind: Some(err.kind().to_string()),
        }
    }

    #[must_use]
    pub fn from_result(result: Result<ExtractionResult>) -> Self {
        match result {
            Ok(data) => Self::success(data),
            Err(err) => Self::failure(&err),
        }
    }
}

/// Answers `request` for the page `html` served from `host`.
#[must_use]
pub fn handle_request(
    request: &ProfileRequest,
    html: &str,
    host: &str,
    options: &Options,
) -> ProfileResponse {
    match request.action {
        Action::CollectProfileData => {
            info!("handling collectProfileData for {host}");
            ProfileResponse::from_result(crate::extract_with_options(html, host, options))
        }
    }
}

/// Answers `request` for a page named by a full URL or a bare host.
///
/// A full URL supplies the host and becomes the base for relative media
/// addresses; anything else is taken as the host itself.
#[must_use]
pub fn handle_request_for_target(
    request: &ProfileRequest,
    html: &str,
    target: &str,
    options: &Options,
) -> ProfileResponse {
    match url_utils::extract_hostname(target) {
        Some(host) => {
            let options = options.clone().with_page_url(target);
            handle_request(request, html, &host, &options)
        }
        None => handle_request(request, html, target, options),
    }
}
