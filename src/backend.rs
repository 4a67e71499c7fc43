//! Request payloads for the content-generation backend.
//!
//! Only the outbound side is modelled. The extracted profile travels inside
//! `profile_data` exactly as returned by extraction; response bodies are
//! left to the caller.

use serde::Serialize;
use url::Url;

use crate::result::ExtractionResult;

/// Copywriting endpoint.
pub const GENERATE_COPY_PATH: &str = "/gerar-copy-social-media";

/// Hashtag research endpoint.
pub const HASHTAG_RESEARCH_PATH: &str = "/pesquisar-hashtags";

/// Image generation endpoint.
pub const GENERATE_IMAGE_PATH: &str = "/gerar-imagem";

/// Prompt sent when only a profile is available.
pub const PROFILE_ONLY_PROMPT: &str = "Based on the user's profile";

/// Backend deployment to address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiEnvironment {
    #[default]
    Production,
    Development,
}

impl ApiEnvironment {
    #[must_use]
    pub fn base_url(self) -> &'static str {
        match self {
            Self::Production => "https://monsterapp-backend.onrender.com",
            Self::Development => "http://127.0.0.1:8000",
        }
    }
}

/// Full URL of `path` on the given deployment.
///
/// # Errors
///
/// Returns [`RequestError::InvalidUrl`] when `path` cannot be joined.
pub fn endpoint_url(env: ApiEnvironment, path: &str) -> Result<Url, RequestError> {
    Url::parse(env.base_url())
        .and_then(|base| base.join(path))
        .map_err(|e| RequestError::InvalidUrl(e.to_string()))
}

/// A payload could not be built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("Please enter a prompt or analyze a profile first.")]
    MissingPromptAndProfile,

    #[error("Please provide a topic for the hashtag research.")]
    MissingTopic,

    #[error("Please describe the image you want to create.")]
    MissingImagePrompt,

    #[error("invalid endpoint URL: {0}")]
    InvalidUrl(String),
}

/// Body of [`GENERATE_COPY_PATH`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateCopyRequest {
    pub prompt: String,
    pub tone: String,
    pub niche: String,
    pub profile_data: Option<ExtractionResult>,
}

impl GenerateCopyRequest {
    /// A blank prompt is replaced by [`PROFILE_ONLY_PROMPT`] when a profile
    /// is present.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::MissingPromptAndProfile`] when both are absent.
    pub fn new(
        prompt: &str,
        tone: impl Into<String>,
        niche: impl Into<String>,
        profile_data: Option<ExtractionResult>,
    ) -> Result<Self, RequestError> {
        let prompt = prompt.trim();
        let prompt = match (prompt.is_empty(), profile_data.is_some()) {
            (false, _) => prompt.to_string(),
            (true, true) => PROFILE_ONLY_PROMPT.to_string(),
            (true, false) => return Err(RequestError::MissingPromptAndProfile),
        };

        Ok(Self {
            prompt,
            tone: tone.into(),
            niche: niche.into(),
            profile_data,
        })
    }
}

/// Body of [`HASHTAG_RESEARCH_PATH`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HashtagResearchRequest {
    pub topic: String,
    pub niche: String,
    pub profile_data: Option<ExtractionResult>,
}

impl HashtagResearchRequest {
    /// # Errors
    ///
    /// Returns [`RequestError::MissingTopic`] when `topic` is blank.
    pub fn new(
        topic: &str,
        niche: impl Into<String>,
        profile_data: Option<ExtractionResult>,
    ) -> Result<Self, RequestError> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(RequestError::MissingTopic);
        }
        Ok(Self {
            topic: topic.to_string(),
            niche: niche.into(),
            profile_data,
        })
    }
}

/// Body of [`GENERATE_IMAGE_PATH`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateImageRequest {
    pub prompt: String,
    pub style: String,
}

impl GenerateImageRequest {
    /// # Errors
    ///
    /// Returns [`RequestError::MissingImagePrompt`] when `prompt` is blank.
    pub fn new(prompt: &str, style: impl Into<String>) -> Result<Self, RequestError> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(RequestError::MissingImagePrompt);
        }
        Ok(Self {
            prompt: prompt.to_string(),
            style: style.into(),
        })
    }
}
