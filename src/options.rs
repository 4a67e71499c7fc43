//! Configuration options for profile extraction.
//!
//! The `Options` struct holds the tunable limits of the locator heuristics.

/// Configuration options for profile extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_profile_extract::Options;
///
/// let options = Options {
///     max_recent_media: 3,
///     ..Options::default()
/// };
/// assert_eq!(options.min_bio_line_len, 50);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Maximum number of recent media URLs collected from the post grid.
    ///
    /// Default: `9`
    pub max_recent_media: usize,

    /// Minimum line length (characters) for the Facebook long-line bio heuristic.
    ///
    /// A line must be strictly longer than this to count as a biography.
    ///
    /// Default: `50`
    pub min_bio_line_len: usize,

    /// Full URL of the page the HTML was captured from.
    ///
    /// When set, relative media addresses are resolved against it.
    ///
    /// Default: `None`
    pub page_url: Option<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_recent_media: 9,
            min_bio_line_len: 50,
            page_url: None,
        }
    }
}

impl Options {
    /// Returns a copy of these options with `page_url` set.
    #[must_use]
    pub fn with_page_url(mut self, url: impl Into<String>) -> Self {
        self.page_url = Some(url.into());
        self
    }
}
