//! # rs-profile-extract
//!
//! Heuristic extraction of public profile data from Instagram and Facebook
//! profile pages captured as HTML.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_profile_extract::extract;
//!
//! let html = r#"<header>
//!     <h2>natgeo</h2>
//!     <ul><li><span>12</span></li><li><span>34</span></li><li><span>56</span></li></ul>
//! </header>
//! <div data-testid="UserDescription">Exploring the world 🌍 #Travel</div>"#;
//!
//! let result = extract(html, "www.instagram.com")?;
//! assert_eq!(result.username, "natgeo");
//! assert_eq!(result.counts.followers(), "34");
//! assert!(result.extracted_hashtags.contains("#travel"));
//! # Ok::<(), rs_profile_extract::Error>(())
//! ```
//!
//! ## Features
//!
//! - **Platform Detection**: Classifies the page host as Instagram, Facebook or unsupported
//! - **Fallback Locators**: Ordered strategy chains per field; missing elements degrade to defaults
//! - **Token Extraction**: Unique emoji and lower-cased hashtags from the bio
//! - **Flat Records**: Results serialise to the key/value payload the content backend expects
//!
//! Extraction is synchronous and pure with respect to the HTML it is given.
//! A page captured before it finished rendering yields more default fields,
//! never a wait.

mod error;
mod extract;
mod options;
mod patterns;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Platform detection from host addresses.
pub mod platform;

/// Emoji and hashtag extraction.
pub mod tokens;

/// Per-platform field locator strategy chains.
pub mod locator;

/// URL utilities for host extraction and media resolution.
pub mod url_utils;

/// Message envelope for profile collection requests.
pub mod response;

/// Outbound payloads for the content-generation backend.
pub mod backend;

// Public API - re-exports
pub use error::{Error, Result};
pub use extract::ProfileExtractor;
pub use options::Options;
pub use platform::Platform;
pub use result::{ExtractionResult, ProfileCounts, NOT_AVAILABLE};

/// Extracts profile data from a page using default options.
///
/// # Arguments
///
/// * `html` - The page HTML
/// * `host` - Host address the page was served from (`www.instagram.com`)
///
/// # Example
///
/// ```rust
/// use rs_profile_extract::{extract, Error};
///
/// let err = extract("<html></html>", "example.com").unwrap_err();
/// assert!(matches!(err, Error::UnsupportedPlatform { .. }));
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn extract(html: &str, host: &str) -> Result<ExtractionResult> {
    extract_with_options(html, host, &Options::default())
}

/// Extracts profile data from a page with custom options.
///
/// # Example
///
/// ```rust
/// use rs_profile_extract::{extract_with_options, Options};
///
/// let html = r#"<h1 aria-label="Jane Doe">Jane Doe</h1><span>120 friends</span>"#;
/// let options = Options { min_bio_line_len: 30, ..Options::default() };
/// let result = extract_with_options(html, "www.facebook.com", &options)?;
/// assert_eq!(result.counts.friends(), Some("120"));
/// # Ok::<(), rs_profile_extract::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn extract_with_options(html: &str, host: &str, options: &Options) -> Result<ExtractionResult> {
    ProfileExtractor::new().extract_html(html, host, options)
}

/// Extracts profile data from an already parsed document.
#[allow(clippy::missing_errors_doc)]
pub fn extract_document(doc: &dom::Document, host: &str, options: &Options) -> Result<ExtractionResult> {
    ProfileExtractor::new().extract(doc, host, options)
}

/// Extracts profile data given the full page URL.
///
/// The host is taken from `page_url`, which also becomes the base for
/// resolving relative media addresses.
///
/// # Example
///
/// ```rust
/// use rs_profile_extract::{extract_from_url, Options};
///
/// let html = r#"<header><h2>someone</h2></header>
/// <article><a href="/p/abc/"><img src="/media/abc.jpg"></a></article>"#;
/// let result = extract_from_url(html, "https://www.instagram.com/someone/", &Options::default())?;
/// assert_eq!(result.recent_media, vec!["https://www.instagram.com/media/abc.jpg"]);
/// # Ok::<(), rs_profile_extract::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn extract_from_url(html: &str, page_url: &str, options: &Options) -> Result<ExtractionResult> {
    let host = url_utils::extract_hostname(page_url).unwrap_or_default();
    let options = options.clone().with_page_url(page_url);
    extract_with_options(html, &host, &options)
}
