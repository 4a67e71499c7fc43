//! Facebook profile locator.
//!
//! Facebook markup has no stable profile anchor, so this locator never
//! reports a structural mismatch; every field simply falls back to its
//! default. Post counts are not exposed by the layout.

use dom_query::Selection;

use super::{
    resolve, text_at, Field, FieldLookupFailure, LocatorContext, Lookup, ProfileFields,
    ProfileLocator, Strategy, StructuralMismatch,
};
use crate::dom;
use crate::options::Options;
use crate::platform::Platform;
use crate::result::{ProfileCounts, NOT_AVAILABLE};

const NAMED_HEADING: &str = "h1[aria-label]";
const PROFILE_LINK: &str = r#"a[role="link"][tabindex="0"][href*="/profile.php"], a[role="link"][tabindex="0"][href*="/groups/"]"#;
const PAGELET_BIO_SPAN: &str = r#"div[data-pagelet="ProfileAppSection_0"] span[dir="auto"]"#;
const ABOUT_SECTION: &str = r#"div[role="main"] div[data-pagelet="ProfileAppSection_0"]"#;
const TEXT_SPANS: &str = "span";

const FOLLOWERS_LABEL: &str = "followers";
const FRIENDS_LABEL: &str = "friends";

pub static USERNAME: &[Strategy<String>] = &[
    Strategy {
        name: "named-heading",
        lookup: named_heading,
    },
    Strategy {
        name: "profile-link",
        lookup: profile_link,
    },
];

pub static BIO: &[Strategy<String>] = &[
    Strategy {
        name: "pagelet-span",
        lookup: pagelet_span,
    },
    Strategy {
        name: "pagelet-long-line",
        lookup: pagelet_long_line,
    },
];

pub static FOLLOWERS: &[Strategy<String>] = &[Strategy {
    name: "labelled-span",
    lookup: followers_span,
}];

pub static FRIENDS: &[Strategy<String>] = &[Strategy {
    name: "labelled-span",
    lookup: friends_span,
}];

/// Field locator for `facebook.com` profile pages.
#[derive(Debug, Clone, Copy, Default)]
pub struct FacebookLocator;

impl ProfileLocator for FacebookLocator {
    fn platform(&self) -> Platform {
        Platform::Facebook
    }

    fn locate(
        &self,
        root: &Selection<'_>,
        options: &Options,
    ) -> Result<ProfileFields, StructuralMismatch> {
        let ctx = LocatorContext::new(root.clone(), options);
        let na = || NOT_AVAILABLE.to_string();

        Ok(ProfileFields {
            username: resolve(Field::Username, USERNAME, &ctx).unwrap_or_default(),
            bio: resolve(Field::Bio, BIO, &ctx).unwrap_or_default(),
            counts: ProfileCounts::Facebook {
                posts: na(),
                followers: resolve(Field::Followers, FOLLOWERS, &ctx).unwrap_or_else(na),
                friends: resolve(Field::Friends, FRIENDS, &ctx).unwrap_or_else(na),
            },
            recent_media: Vec::new(),
        })
    }
}

fn named_heading(ctx: &LocatorContext<'_>) -> Lookup<String> {
    text_at(&ctx.root, NAMED_HEADING)
}

fn profile_link(ctx: &LocatorContext<'_>) -> Lookup<String> {
    text_at(&ctx.root, PROFILE_LINK)
}

fn pagelet_span(ctx: &LocatorContext<'_>) -> Lookup<String> {
    text_at(&ctx.root, PAGELET_BIO_SPAN)
}

/// First rendered line of the intro section long enough to read as a
/// biography rather than a label.
fn pagelet_long_line(ctx: &LocatorContext<'_>) -> Lookup<String> {
    let section = dom::query_selector(&ctx.root, ABOUT_SECTION)
        .ok_or(FieldLookupFailure::NoMatch(ABOUT_SECTION))?;
    let min_len = ctx.options.min_bio_line_len;

    dom::inner_text_lines(&section)
        .into_iter()
        .find(|line| line.chars().count() > min_len)
        .ok_or_else(|| FieldLookupFailure::Layout(format!("no line longer than {min_len} chars")))
}

fn followers_span(ctx: &LocatorContext<'_>) -> Lookup<String> {
    labelled_value(&ctx.root, FOLLOWERS_LABEL)
}

fn friends_span(ctx: &LocatorContext<'_>) -> Lookup<String> {
    labelled_value(&ctx.root, FRIENDS_LABEL)
}

/// Text of the first span mentioning `label`, with the label removed.
///
/// `"1.2K followers"` yields `"1.2K"`.
fn labelled_value(root: &Selection<'_>, label: &'static str) -> Lookup<String> {
    dom::query_selector_all(root, TEXT_SPANS)
        .iter()
        .map(dom::text_content)
        .find(|text| text.contains(label))
        .map(|text| text.replacen(label, "", 1).trim().to_string())
        .ok_or(FieldLookupFailure::NoLabel(label))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locate(html: &str) -> ProfileFields {
        let doc = dom::parse(html);
        FacebookLocator
            .locate(&dom::root(&doc), &Options::default())
            .unwrap()
    }

    const LONG_BIO: &str =
        "Photographer and traveller sharing stories from every corner of the world.";

    #[test]
    fn empty_page_is_all_defaults() {
        let fields = locate("<div></div>");
        assert_eq!(fields.username, "");
        assert_eq!(fields.bio, "");
        assert_eq!(fields.counts, ProfileCounts::unavailable(Platform::Facebook));
        assert!(fields.recent_media.is_empty());
    }

    #[test]
    fn username_from_labelled_heading() {
        let fields = locate(r#"<h1 aria-label="Jane Doe">Jane Doe</h1>"#);
        assert_eq!(fields.username, "Jane Doe");
    }

    #[test]
    fn username_ignores_unlabelled_heading() {
        let fields = locate(
            r#"<h1>Feed</h1>
            <a role="link" tabindex="0" href="https://www.facebook.com/groups/123/">Rust Users</a>"#,
        );
        assert_eq!(fields.username, "Rust Users");
    }

    #[test]
    fn username_from_profile_php_link() {
        let fields = locate(
            r#"<a role="link" tabindex="0" href="/profile.php?id=42">John Roe</a>"#,
        );
        assert_eq!(fields.username, "John Roe");
    }

    #[test]
    fn bio_from_pagelet_span() {
        let fields = locate(
            r#"<div data-pagelet="ProfileAppSection_0">
                <span>Intro</span><span dir="auto"> Short bio </span>
            </div>"#,
        );
        assert_eq!(fields.bio, "Short bio");
    }

    #[test]
    fn bio_from_long_line() {
        let fields = locate(&format!(
            r#"<div role="main"><div data-pagelet="ProfileAppSection_0">
                <div>Intro</div>
                <div>Lives in Lisbon</div>
                <div>{LONG_BIO}</div>
            </div></div>"#
        ));
        assert_eq!(fields.bio, LONG_BIO);
    }

    #[test]
    fn bio_long_line_needs_main_role() {
        let fields = locate(&format!(
            r#"<div data-pagelet="ProfileAppSection_0"><div>{LONG_BIO}</div></div>"#
        ));
        assert_eq!(fields.bio, "");
    }

    #[test]
    fn counts_strip_labels() {
        let fields = locate(
            r#"<div><span>1.2K followers</span><span>345 friends</span></div>"#,
        );
        assert_eq!(fields.counts.followers(), "1.2K");
        assert_eq!(fields.counts.friends(), Some("345"));
        assert_eq!(fields.counts.posts(), NOT_AVAILABLE);
    }

    #[test]
    fn counts_without_labels_are_unavailable() {
        let fields = locate(r#"<span>Photos</span><span>About</span>"#);
        assert_eq!(fields.counts.followers(), NOT_AVAILABLE);
        assert_eq!(fields.counts.friends(), Some(NOT_AVAILABLE));
    }

    #[test]
    fn bare_label_is_unavailable() {
        let fields = locate(r#"<span>followers</span>"#);
        assert_eq!(fields.counts.followers(), NOT_AVAILABLE);
    }
}
