//! Instagram profile locator.
//!
//! Every field is positioned relative to the profile `<header>`, so a page
//! without one is reported as a structural mismatch instead of yielding an
//! all-default record.

use dom_query::Selection;
use log::warn;

use super::{
    resolve, text_at, Field, FieldLookupFailure, LocatorContext, Lookup, ProfileFields,
    ProfileLocator, Strategy, StructuralMismatch,
};
use crate::dom;
use crate::options::Options;
use crate::platform::Platform;
use crate::result::{ProfileCounts, NOT_AVAILABLE};
use crate::url_utils;

const HEADER: &str = "header";
const USERNAME_HEADING: &str = "h2";
const USER_DESCRIPTION: &str = r#"div[data-testid="UserDescription"]"#;
const PRIMARY_HEADING: &str = "h1";
const COUNTS_LIST: &str = "ul";
const GRID_POST_LINKS: &str = r#"article a[href^="/p/"]"#;
const MAIN_POST_LINKS: &str = r#"main a[href^="/p/"], main a[href^="/reel/"]"#;

/// Username strategies (in priority order)
pub static USERNAME: &[Strategy<String>] = &[Strategy {
    name: "header-heading",
    lookup: header_heading,
}];

/// Bio strategies (in priority order)
pub static BIO: &[Strategy<String>] = &[
    Strategy {
        name: "user-description",
        lookup: user_description,
    },
    Strategy {
        name: "heading-sibling",
        lookup: heading_sibling,
    },
];

/// Posts / followers / following, in that order
pub static COUNTS: &[Strategy<[String; 3]>] = &[
    Strategy {
        name: "header-stat-list",
        lookup: header_stat_list,
    },
    Strategy {
        name: "header-span-lists",
        lookup: header_span_lists,
    },
];

/// Recent media strategies (in priority order)
pub static RECENT_MEDIA: &[Strategy<Vec<String>>] = &[
    Strategy {
        name: "article-post-grid",
        lookup: article_post_grid,
    },
    Strategy {
        name: "main-post-links",
        lookup: main_post_links,
    },
];

/// Field locator for `instagram.com` profile pages.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstagramLocator;

impl ProfileLocator for InstagramLocator {
    fn platform(&self) -> Platform {
        Platform::Instagram
    }

    fn locate(
        &self,
        root: &Selection<'_>,
        options: &Options,
    ) -> Result<ProfileFields, StructuralMismatch> {
        let Some(header) = dom::query_selector(root, HEADER) else {
            warn!("instagram: profile header not found");
            return Err(StructuralMismatch(
                "Instagram profile header not found".to_string(),
            ));
        };

        let ctx = LocatorContext::new(root.clone(), options).with_anchor(header);

        let username = resolve(Field::Username, USERNAME, &ctx).unwrap_or_default();
        let bio = resolve(Field::Bio, BIO, &ctx).unwrap_or_default();
        let counts = resolve(Field::Counts, COUNTS, &ctx).map_or_else(
            || ProfileCounts::unavailable(Platform::Instagram),
            |[posts, followers, following]| ProfileCounts::Instagram {
                posts,
                followers,
                following,
            },
        );
        let recent_media = resolve(Field::RecentMedia, RECENT_MEDIA, &ctx).unwrap_or_default();

        Ok(ProfileFields {
            username,
            bio,
            counts,
            recent_media,
        })
    }
}

// ============================================================
// USERNAME
// ============================================================

fn header_heading(ctx: &LocatorContext<'_>) -> Lookup<String> {
    text_at(ctx.anchor()?, USERNAME_HEADING)
}

// ============================================================
// BIO
// ============================================================

fn user_description(ctx: &LocatorContext<'_>) -> Lookup<String> {
    text_at(&ctx.root, USER_DESCRIPTION)
}

/// Older layouts put the bio in the element right after the name heading.
fn heading_sibling(ctx: &LocatorContext<'_>) -> Lookup<String> {
    let heading = dom::query_selector(ctx.anchor()?, PRIMARY_HEADING)
        .ok_or(FieldLookupFailure::NoMatch(PRIMARY_HEADING))?;
    let sibling = dom::next_element_sibling(&heading).ok_or_else(|| {
        FieldLookupFailure::Layout("primary heading has no following sibling".to_string())
    })?;
    dom::trimmed_text(&sibling).ok_or(FieldLookupFailure::NoText("h1 + *"))
}

// ============================================================
// COUNTS
// ============================================================

fn header_stat_list(ctx: &LocatorContext<'_>) -> Lookup<[String; 3]> {
    let list = dom::query_selector(ctx.anchor()?, COUNTS_LIST)
        .ok_or(FieldLookupFailure::NoMatch(COUNTS_LIST))?;

    let entries = dom::children_with_tag(&list, "li");
    let found = entries.len();
    let mut values = entries.iter().map(stat_value);

    match (values.next(), values.next(), values.next()) {
        (Some(posts), Some(followers), Some(following)) => Ok([posts, followers, following]),
        _ => Err(FieldLookupFailure::Layout(format!(
            "expected at least 3 count entries, found {found}"
        ))),
    }
}

/// First list anywhere in the header with at least three span-bearing
/// entries. Covers headers that carry an action or link list before the
/// stats.
fn header_span_lists(ctx: &LocatorContext<'_>) -> Lookup<[String; 3]> {
    dom::query_selector_all(ctx.anchor()?, COUNTS_LIST)
        .iter()
        .find_map(|list| {
            let entries: Vec<_> = dom::children_with_tag(list, "li")
                .into_iter()
                .filter(|entry| dom::query_selector(entry, "span").is_some())
                .collect();
            match entries.as_slice() {
                [posts, followers, following, ..] => {
                    Some([stat_value(posts), stat_value(followers), stat_value(following)])
                }
                _ => None,
            }
        })
        .ok_or_else(|| {
            FieldLookupFailure::Layout("no header list with 3 span entries".to_string())
        })
}

/// Value of one stat entry: its first span, unwrapped to a nested span when
/// present. Entries without a span contribute their own text.
fn stat_value(entry: &Selection<'_>) -> String {
    let value = match dom::query_selector(entry, "span") {
        Some(span) => {
            let inner = dom::query_selector(&span, "span").unwrap_or(span);
            dom::trimmed_text(&inner)
        }
        None => dom::trimmed_text(entry),
    };
    value.unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

// ============================================================
// RECENT MEDIA
// ============================================================

fn article_post_grid(ctx: &LocatorContext<'_>) -> Lookup<Vec<String>> {
    collect_post_media(ctx, GRID_POST_LINKS)
}

fn main_post_links(ctx: &LocatorContext<'_>) -> Lookup<Vec<String>> {
    collect_post_media(ctx, MAIN_POST_LINKS)
}

/// Image addresses of the first `max_recent_media` post links, in page order.
/// Links without an image use up their slot and are skipped.
fn collect_post_media(ctx: &LocatorContext<'_>, selector: &'static str) -> Lookup<Vec<String>> {
    let anchors = dom::query_selector_all(&ctx.root, selector);
    if anchors.is_empty() {
        return Err(FieldLookupFailure::NoMatch(selector));
    }

    let base = ctx
        .options
        .page_url
        .as_deref()
        .and_then(url_utils::parse_page_url);

    Ok(anchors
        .iter()
        .take(ctx.options.max_recent_media)
        .filter_map(anchor_image)
        .map(|src| url_utils::resolve_media_url(&src, base.as_ref()))
        .collect())
}

fn anchor_image(anchor: &Selection<'_>) -> Option<String> {
    let img = dom::query_selector(anchor, "img")?;

    dom::get_attribute(&img, "src")
        .filter(|src| !src.trim().is_empty())
        .or_else(|| {
            dom::get_attribute(&img, "srcset")
                .and_then(|srcset| url_utils::first_srcset_candidate(&srcset).map(str::to_string))
        })
}
