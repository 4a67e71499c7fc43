//! Emoji and hashtag token extraction from free text.
//!
//! Both extractors are total: text without matches yields an empty set.

use std::collections::BTreeSet;

use crate::patterns::{EMOJI, HASHTAG};

/// Extracts the unique emoji tokens found in `text`.
///
/// Uniqueness is by exact code point sequence.
///
/// # Example
///
/// ```rust
/// use rs_profile_extract::tokens::extract_emojis;
///
/// let emojis = extract_emojis("coffee ☕ and code 💻 ☕");
/// assert_eq!(emojis.len(), 2);
/// assert!(emojis.contains("☕"));
/// ```
#[must_use]
pub fn extract_emojis(text: &str) -> BTreeSet<String> {
    EMOJI
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Extracts the unique hashtags found in `text`, lower-cased.
///
/// # Example
///
/// ```rust
/// use rs_profile_extract::tokens::extract_hashtags;
///
/// let tags = extract_hashtags("#Foo #foo #bar");
/// assert_eq!(tags.into_iter().collect::<Vec<_>>(), vec!["#bar", "#foo"]);
/// ```
#[must_use]
pub fn extract_hashtags(text: &str) -> BTreeSet<String> {
    HASHTAG
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keycap_emoji_keeps_its_digit() {
        let emojis = extract_emojis("call 1\u{FE0F}\u{20E3} now");
        assert_eq!(emojis, BTreeSet::from(["1\u{FE0F}\u{20E3}".to_string()]));
    }

    #[test]
    fn empty_text_yields_empty_sets() {
        assert!(extract_emojis("").is_empty());
        assert!(extract_hashtags("").is_empty());
    }

    #[test]
    fn duplicate_emojis_collapse() {
        let emojis = extract_emojis("🔥🔥 hot 🔥");
        assert_eq!(emojis.len(), 1);
        assert!(emojis.contains("🔥"));
    }

    #[test]
    fn hashtags_are_case_insensitive() {
        let tags = extract_hashtags("#Foo #foo");
        assert_eq!(tags.len(), 1);
        assert!(tags.contains("#foo"));
    }

    #[test]
    fn hashtags_accept_unicode_words() {
        let tags = extract_hashtags("Dia de #Café em #SãoPaulo");
        assert!(tags.contains("#café"));
        assert!(tags.contains("#sãopaulo"));
    }

    #[test]
    fn lone_hash_is_not_a_tag() {
        assert!(extract_hashtags("# not a tag, nor is #").is_empty());
    }
}
