//! Profile extraction orchestration.
//!
//! Detects the platform, runs the matching field locator, then derives the
//! emoji and hashtag sets from the resolved bio. Tokens come from the bio
//! only; post captions are not read.

use log::{info, warn};

use crate::dom::{self, Document};
use crate::error::{Error, Result};
use crate::locator::{FacebookLocator, InstagramLocator, ProfileLocator};
use crate::options::Options;
use crate::platform::{self, Platform};
use crate::result::ExtractionResult;
use crate::tokens::{extract_emojis, extract_hashtags};

type BoxedLocator = Box<dyn ProfileLocator + Send + Sync>;

/// Runs platform detection and field location for a page.
///
/// Holds no per-call state, so one extractor can serve any number of
/// concurrent calls.
///
/// # Example
///
/// ```rust
/// use rs_profile_extract::{dom, Options, ProfileExtractor};
///
/// let doc = dom::parse("<header><h2>natgeo</h2></header>");
/// let result = ProfileExtractor::new()
///     .extract(&doc, "www.instagram.com", &Options::default())?;
/// assert_eq!(result.username, "natgeo");
/// # Ok::<(), rs_profile_extract::Error>(())
/// ```
pub struct ProfileExtractor {
    locators: Vec<BoxedLocator>,
}

impl Default for ProfileExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileExtractor {
    /// Extractor with the built-in Instagram and Facebook locators.
    #[must_use]
    pub fn new() -> Self {
        Self {
            locators: vec![Box::new(InstagramLocator), Box::new(FacebookLocator)],
        }
    }

    /// Registers `locator`, replacing any locator for the same platform.
    #[must_use]
    pub fn with_locator(mut self, locator: impl ProfileLocator + Send + Sync + 'static) -> Self {
        let platform = locator.platform();
        self.locators.retain(|l| l.platform() != platform);
        self.locators.push(Box::new(locator));
        self
    }

    fn locator_for(&self, platform: Platform) -> Option<&BoxedLocator> {
        self.locators.iter().find(|l| l.platform() == platform)
    }

    /// Extracts profile data from a parsed page served from `host`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedPlatform`] when `host` matches no
    /// registered platform, before any locator runs, and
    /// [`Error::StructuralMismatch`] when the platform's structural anchor is
    /// missing from the page.
    pub fn extract(&self, doc: &Document, host: &str, options: &Options) -> Result<ExtractionResult> {
        let platform = platform::detect(host);
        let locator = self
            .locator_for(platform)
            .filter(|_| platform.is_supported())
            .ok_or_else(|| Error::UnsupportedPlatform {
                host: host.to_string(),
            })?;

        info!("collecting {platform} profile data from {host}");

        let fields = locator.locate(&dom::root(doc), options).map_err(|mismatch| {
            warn!("{platform}: {mismatch}");
            Error::StructuralMismatch(mismatch.0)
        })?;

        let extracted_emojis = extract_emojis(&fields.bio);
        let extracted_hashtags = extract_hashtags(&fields.bio);

        Ok(ExtractionResult {
            platform,
            username: fields.username,
            bio: fields.bio,
            counts: fields.counts,
            recent_media: fields.recent_media,
            extracted_emojis,
            extracted_hashtags,
        })
    }

    /// Parses `html` and extracts profile data from it.
    ///
    /// # Errors
    ///
    /// See [`ProfileExtractor::extract`].
    pub fn extract_html(&self, html: &str, host: &str, options: &Options) -> Result<ExtractionResult> {
        if !platform::detect(host).is_supported() {
            return Err(Error::UnsupportedPlatform {
                host: host.to_string(),
            });
        }
        self.extract(&dom::parse(html), host, options)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use dom_query::Selection;

    use super::*;
    use crate::locator::{ProfileFields, StructuralMismatch};
    use crate::result::ProfileCounts;

    /// Records every call and returns a fixed bio.
    struct SpyLocator {
        platform: Platform,
        calls: Arc<AtomicUsize>,
        bio: &'static str,
    }

    impl ProfileLocator for SpyLocator {
        fn platform(&self) -> Platform {
            self.platform
        }

        fn locate(
            &self,
            _root: &Selection<'_>,
            _options: &Options,
        ) -> std::result::Result<ProfileFields, StructuralMismatch> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(ProfileFields {
                username: "spy".to_string(),
                bio: self.bio.to_string(),
                counts: ProfileCounts::unavailable(self.platform),
                recent_media: Vec::new(),
            })
        }
    }

    fn spy(platform: Platform, bio: &'static str) -> (SpyLocator, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            SpyLocator {
                platform,
                calls: Arc::clone(&calls),
                bio,
            },
            calls,
        )
    }

    #[test]
    fn unsupported_host_never_runs_a_locator() {
        let (instagram, ig_calls) = spy(Platform::Instagram, "");
        let (facebook, fb_calls) = spy(Platform::Facebook, "");
        let extractor = ProfileExtractor::new()
            .with_locator(instagram)
            .with_locator(facebook);

        let doc = dom::parse("<header><h2>x</h2></header>");
        let err = extractor
            .extract(&doc, "example.com", &Options::default())
            .unwrap_err();

        assert!(matches!(err, Error::UnsupportedPlatform { ref host } if host == "example.com"));
        assert_eq!(ig_calls.load(Ordering::SeqCst), 0);
        assert_eq!(fb_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn registered_locator_replaces_builtin() {
        let (instagram, calls) = spy(Platform::Instagram, "hello #World 🌍");
        let extractor = ProfileExtractor::new().with_locator(instagram);

        let result = extractor
            .extract_html("<div></div>", "instagram.com", &Options::default())
            .unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(result.username, "spy");
        assert!(result.extracted_hashtags.contains("#world"));
        assert!(result.extracted_emojis.contains("🌍"));
    }

    #[test]
    fn structural_failure_maps_to_error() {
        let err = ProfileExtractor::new()
            .extract_html("<main></main>", "www.instagram.com", &Options::default())
            .unwrap_err();
        assert!(matches!(err, Error::StructuralMismatch(_)));
    }

    #[test]
    fn extractor_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ProfileExtractor>();
    }
}
