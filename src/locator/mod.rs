//! Field Locators
//!
//! Each platform describes its profile fields as ordered strategy chains.
//! A strategy is a named, pure lookup over the parsed page; [`resolve`]
//! runs a chain front to back and keeps the first non-blank result.
//!
//! Failures inside a strategy never escape: they are logged and the chain
//! moves on. When every strategy misses, the caller substitutes the field's
//! default. The only hard failure is a missing structural anchor, reported
//! by [`ProfileLocator::locate`] as [`StructuralMismatch`].

use std::fmt;

use dom_query::Selection;
use log::debug;

use crate::dom;
use crate::options::Options;
use crate::platform::Platform;
use crate::result::ProfileCounts;

pub mod facebook;
pub mod instagram;

pub use facebook::FacebookLocator;
pub use instagram::InstagramLocator;

/// Profile field a strategy chain resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Username,
    Bio,
    Counts,
    Followers,
    Friends,
    RecentMedia,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Username => "username",
            Self::Bio => "bio",
            Self::Counts => "counts",
            Self::Followers => "followers",
            Self::Friends => "friends",
            Self::RecentMedia => "recent_media",
        })
    }
}

/// Why a single strategy produced nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldLookupFailure {
    /// No element matched the selector.
    #[error("no element matched `{0}`")]
    NoMatch(&'static str),

    /// The element exists but carries no text.
    #[error("element `{0}` has no usable text")]
    NoText(&'static str),

    /// No text node mentions the label.
    #[error("no text mentions `{0}`")]
    NoLabel(&'static str),

    /// The surrounding structure is not shaped as expected.
    #[error("unexpected layout: {0}")]
    Layout(String),
}

/// Outcome of one strategy.
pub type Lookup<T> = std::result::Result<T, FieldLookupFailure>;

/// The page a strategy looks at.
#[derive(Clone)]
pub struct LocatorContext<'a> {
    /// Root element of the page.
    pub root: Selection<'a>,

    /// Structural anchor other fields are positioned against, if the
    /// platform has one (the Instagram profile header).
    pub anchor: Option<Selection<'a>>,

    pub options: &'a Options,
}

impl<'a> LocatorContext<'a> {
    #[must_use]
    pub fn new(root: Selection<'a>, options: &'a Options) -> Self {
        Self {
            root,
            anchor: None,
            options,
        }
    }

    #[must_use]
    pub fn with_anchor(mut self, anchor: Selection<'a>) -> Self {
        self.anchor = Some(anchor);
        self
    }

    /// The structural anchor, or a layout failure when there is none.
    pub fn anchor(&self) -> Lookup<&Selection<'a>> {
        self.anchor
            .as_ref()
            .ok_or_else(|| FieldLookupFailure::Layout("no structural anchor".to_string()))
    }
}

/// One named way of locating a field.
pub struct Strategy<T> {
    pub name: &'static str,
    pub lookup: fn(&LocatorContext<'_>) -> Lookup<T>,
}

/// Values that can be blank; a blank result counts as a miss.
pub trait Resolvable {
    fn is_blank(&self) -> bool;
}

impl Resolvable for String {
    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }
}

impl<T> Resolvable for Vec<T> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<const N: usize> Resolvable for [String; N] {
    fn is_blank(&self) -> bool {
        self.iter().all(Resolvable::is_blank)
    }
}

/// Run a strategy chain in order and return the first non-blank value.
///
/// Returns `None` when the chain is exhausted.
pub fn resolve<T: Resolvable>(
    field: Field,
    chain: &[Strategy<T>],
    ctx: &LocatorContext<'_>,
) -> Option<T> {
    for strategy in chain {
        match (strategy.lookup)(ctx) {
            Ok(value) if !value.is_blank() => {
                debug!("{field}: resolved by `{}`", strategy.name);
                return Some(value);
            }
            Ok(_) => debug!("{field}: `{}` produced a blank value", strategy.name),
            Err(failure) => debug!("{field}: `{}` missed: {failure}", strategy.name),
        }
    }
    debug!("{field}: {} strategies exhausted, using default", chain.len());
    None
}

/// Trimmed text of the first element under `scope` matching `selector`.
pub fn text_at(scope: &Selection<'_>, selector: &'static str) -> Lookup<String> {
    let element =
        dom::query_selector(scope, selector).ok_or(FieldLookupFailure::NoMatch(selector))?;
    dom::trimmed_text(&element).ok_or(FieldLookupFailure::NoText(selector))
}

/// Fields a platform locator resolved, defaults already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileFields {
    pub username: String,
    pub bio: String,
    pub counts: ProfileCounts,
    pub recent_media: Vec<String>,
}

/// The structural anchor of a recognised platform was not found.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct StructuralMismatch(pub String);

/// Per-platform field locator.
pub trait ProfileLocator {
    /// Platform this locator understands.
    fn platform(&self) -> Platform;

    /// Resolve every profile field under `root`.
    ///
    /// # Errors
    ///
    /// Returns [`StructuralMismatch`] when the platform's structural anchor
    /// is missing. Individual field misses are never errors.
    fn locate(
        &self,
        root: &Selection<'_>,
        options: &Options,
    ) -> std::result::Result<ProfileFields, StructuralMismatch>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn always_missing(_ctx: &LocatorContext<'_>) -> Lookup<String> {
        Err(FieldLookupFailure::NoMatch("missing"))
    }

    fn blank(_ctx: &LocatorContext<'_>) -> Lookup<String> {
        Ok("   ".to_string())
    }

    fn first_paragraph(ctx: &LocatorContext<'_>) -> Lookup<String> {
        text_at(&ctx.root, "p")
    }

    fn fixed(_ctx: &LocatorContext<'_>) -> Lookup<String> {
        Ok("fixed".to_string())
    }

    #[test]
    fn resolve_skips_misses_and_blanks() {
        let doc = dom::parse("<div><p> found </p></div>");
        let options = Options::default();
        let ctx = LocatorContext::new(dom::root(&doc), &options);
        let chain = [
            Strategy { name: "missing", lookup: always_missing },
            Strategy { name: "blank", lookup: blank },
            Strategy { name: "paragraph", lookup: first_paragraph },
            Strategy { name: "fixed", lookup: fixed },
        ];

        assert_eq!(resolve(Field::Bio, &chain, &ctx), Some("found".to_string()));
    }

    #[test]
    fn resolve_exhausted_chain_is_none() {
        let doc = dom::parse("<div></div>");
        let options = Options::default();
        let ctx = LocatorContext::new(dom::root(&doc), &options);
        let chain = [
            Strategy { name: "missing", lookup: always_missing },
            Strategy { name: "paragraph", lookup: first_paragraph },
        ];

        assert_eq!(resolve(Field::Username, &chain, &ctx), None);
    }

    #[test]
    fn resolve_empty_chain_is_none() {
        let doc = dom::parse("<div></div>");
        let options = Options::default();
        let ctx = LocatorContext::new(dom::root(&doc), &options);
        let chain: [Strategy<String>; 0] = [];

        assert_eq!(resolve(Field::Bio, &chain, &ctx), None);
    }

    #[test]
    fn anchor_absent_is_layout_failure() {
        let doc = dom::parse("<div></div>");
        let options = Options::default();
        let ctx = LocatorContext::new(dom::root(&doc), &options);
        assert!(matches!(ctx.anchor(), Err(FieldLookupFailure::Layout(_))));
    }

    #[test]
    fn count_triples_blank_only_when_all_blank() {
        let all_blank = [String::new(), " ".to_string(), String::new()];
        let partial = [String::new(), "12".to_string(), String::new()];
        assert!(all_blank.is_blank());
        assert!(!partial.is_blank());
    }

    #[test]
    fn text_at_reports_reason() {
        let doc = dom::parse("<div><span> </span></div>");
        let root = dom::root(&doc);
        assert_eq!(text_at(&root, "h2"), Err(FieldLookupFailure::NoMatch("h2")));
        assert_eq!(text_at(&root, "span"), Err(FieldLookupFailure::NoText("span")));
    }
}
