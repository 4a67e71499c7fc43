//! Platform detection from the page's host address.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::url_utils;

/// Social platform a page belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    Facebook,
    Unsupported,
}

impl Platform {
    /// Lower-case identifier, as serialised.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Instagram => "instagram",
            Self::Facebook => "facebook",
            Self::Unsupported => "unsupported",
        }
    }

    #[must_use]
    pub fn is_supported(self) -> bool {
        self != Self::Unsupported
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a host address.
///
/// Plain substring match, so subdomains (`www.`, `m.`, `web.`) are accepted.
///
/// # Example
///
/// ```rust
/// use rs_profile_extract::platform::{detect, Platform};
///
/// assert_eq!(detect("www.instagram.com"), Platform::Instagram);
/// assert_eq!(detect("m.facebook.com"), Platform::Facebook);
/// assert_eq!(detect("example.com"), Platform::Unsupported);
/// ```
#[must_use]
pub fn detect(host: &str) -> Platform {
    if host.contains("instagram.com") {
        Platform::Instagram
    } else if host.contains("facebook.com") {
        Platform::Facebook
    } else {
        Platform::Unsupported
    }
}

/// Classifies a full page URL by its host component.
///
/// Unparseable URLs and URLs without a host are unsupported.
#[must_use]
pub fn detect_url(page_url: &str) -> Platform {
    url_utils::extract_hostname(page_url).map_or(Platform::Unsupported, |host| detect(&host))
}
