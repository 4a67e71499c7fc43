//! Compiled regex patterns for token extraction.
//!
//! All patterns are compiled once on first use via `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Emoji
// =============================================================================

/// A single emoji code point: copyright/registered marks, the symbol blocks
/// between letterlike symbols and miscellaneous arrows, a few CJK symbols, and
/// the supplementary emoji planes (U+1F000 onward).
const EMOJI_BASE: &str = r"[\u{00A9}\u{00AE}\u{203C}\u{2049}\u{2122}\u{2139}\u{2194}-\u{21FF}\u{2300}-\u{23FF}\u{24C2}\u{25A0}-\u{27BF}\u{2900}-\u{297F}\u{2B00}-\u{2BFF}\u{3030}\u{303D}\u{3297}\u{3299}\u{1F000}-\u{1F1E5}\u{1F200}-\u{1FAFF}]";

/// Skin tone modifiers, variation selector 16 and the combining keycap.
const EMOJI_MODIFIER: &str = r"[\u{1F3FB}-\u{1F3FF}\u{FE0F}\u{20E3}]";

/// Matches one emoji token.
///
/// Keycaps, flags (regional indicator pairs) and zero-width-joiner sequences
/// such as family or profession emoji are matched as a single token.
pub static EMOJI: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"[0-9#*]\u{{FE0F}}?\u{{20E3}}|[\u{{1F1E6}}-\u{{1F1FF}}]{{2}}|{EMOJI_BASE}{EMOJI_MODIFIER}*(?:\u{{200D}}{EMOJI_BASE}{EMOJI_MODIFIER}*)*"
    );
    Regex::new(&pattern).expect("EMOJI regex")
});

// =============================================================================
// Hashtag
// =============================================================================

/// Matches `#` followed by one or more Unicode word characters.
pub static HASHTAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#\w+").expect("HASHTAG regex"));
