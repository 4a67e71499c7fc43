//! Result types for extraction output.
//!
//! An [`ExtractionResult`] is built fresh for every call and handed to the
//! caller by value. It serialises to a flat key/value record, which is the
//! payload later forwarded to the content backend.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::platform::Platform;

/// Placeholder for counts a page does not expose.
pub const NOT_AVAILABLE: &str = "N/A";

/// Follower-style counts, shaped per platform.
///
/// Values are kept as displayed on the page (`"1,234"`, `"5.6K"`).
/// Serialised flat into the surrounding record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProfileCounts {
    Instagram {
        posts: String,
        followers: String,
        following: String,
    },
    Facebook {
        /// Always [`NOT_AVAILABLE`]; the layout exposes no post count.
        posts: String,
        followers: String,
        friends: String,
    },
}

impl ProfileCounts {
    /// Counts with every value set to [`NOT_AVAILABLE`].
    ///
    /// Unsupported platforms get the Instagram shape.
    #[must_use]
    pub fn unavailable(platform: Platform) -> Self {
        let na = || NOT_AVAILABLE.to_string();
        match platform {
            Platform::Facebook => Self::Facebook {
                posts: na(),
                followers: na(),
                friends: na(),
            },
            Platform::Instagram | Platform::Unsupported => Self::Instagram {
                posts: na(),
                followers: na(),
                following: na(),
            },
        }
    }

    #[must_use]
    pub fn posts(&self) -> &str {
        match self {
            Self::Instagram { posts, .. } | Self::Facebook { posts, .. } => posts,
        }
    }

    #[must_use]
    pub fn followers(&self) -> &str {
        match self {
            Self::Instagram { followers, .. } | Self::Facebook { followers, .. } => followers,
        }
    }

    /// Accounts followed; Instagram only.
    #[must_use]
    pub fn following(&self) -> Option<&str> {
        match self {
            Self::Instagram { following, .. } => Some(following),
            Self::Facebook { .. } => None,
        }
    }

    /// Friend count; Facebook only.
    #[must_use]
    pub fn friends(&self) -> Option<&str> {
        match self {
            Self::Facebook { friends, .. } => Some(friends),
            Self::Instagram { .. } => None,
        }
    }
}

/// Profile data extracted from one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub platform: Platform,

    /// Display username, `""` when not found.
    pub username: String,

    /// Biography text, `""` when not found.
    pub bio: String,

    #[serde(flatten)]
    pub counts: ProfileCounts,

    /// Image URLs of the most recent posts, in page order.
    #[serde(rename = "recent_posts", default)]
    pub recent_media: Vec<String>,

    /// Unique emoji found in the bio.
    #[serde(default)]
    pub extracted_emojis: BTreeSet<String>,

    /// Unique hashtags found in the bio, lower-cased.
    #[serde(default)]
    pub extracted_hashtags: BTreeSet<String>,
}

impl ExtractionResult {
    /// Flat key/value form of this result.
    #[must_use]
    pub fn to_record(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(record)) => record,
            _ => Map::new(),
        }
    }

    /// Short human-readable profile summary.
    #[must_use]
    pub fn summary(&self) -> String {
        let bio = if self.bio.is_empty() { "Not found." } else { &self.bio };

        let mut out = String::from("📊 **Profile Analysis**\n");
        out.push_str("--------------------\n");
        out.push_str(&format!("**Platform:** {}\n", self.platform));
        out.push_str(&format!("**Username:** {}\n", self.username));
        out.push_str(&format!("**Bio:** {bio}\n"));
        out
    }
}
