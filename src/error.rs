//! Error types for rs-profile-extract.
//!
//! Only two failures escape an extraction call. Everything else a locator
//! runs into is downgraded to a field default inside [`crate::locator`].

/// Error type for extraction operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The page host does not belong to a supported platform.
    #[error("Not on a supported profile page")]
    UnsupportedPlatform {
        /// Host address that failed detection.
        host: String,
    },

    /// The platform was recognised but its structural anchor was missing.
    #[error("Profile structure not found: {0}")]
    StructuralMismatch(String),
}

impl Error {
    /// Stable machine-readable tag for this error.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnsupportedPlatform { .. } => "unsupported_platform",
            Self::StructuralMismatch(_) => "structural_mismatch",
        }
    }
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
