//! Snippet domain types.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Store-assigned snippet identifier. Always >= 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SnippetId(i64);

impl SnippetId {
    /// Wraps a raw id, rejecting values below 1.
    pub fn new(raw: i64) -> Option<Self> {
        (raw >= 1).then_some(Self(raw))
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for SnippetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error for ids that are non-numeric or below 1.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid snippet id: {0:?}")]
pub struct InvalidSnippetId(pub String);

impl FromStr for SnippetId {
    type Err = InvalidSnippetId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| InvalidSnippetId(s.to_string()))
    }
}

/// Number of days a snippet stays live after creation, at most
/// [`ExpiresDays::MAX_DAYS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExpiresDays(u32);

impl ExpiresDays {
    /// Upper bound on the expiry window. SQLite date arithmetic yields NULL
    /// past year 9999.
    pub const MAX_DAYS: u32 = 365_000;

    /// Day count, clamped to [`Self::MAX_DAYS`].
    pub const fn new(days: u32) -> Self {
        if days > Self::MAX_DAYS {
            Self(Self::MAX_DAYS)
        } else {
            Self(days)
        }
    }

    pub fn days(self) -> u32 {
        self.0
    }

    /// SQLite date modifier, e.g. `+7 days`.
    pub(crate) fn as_modifier(self) -> String {
        format!("+{} days", self.0)
    }
}

/// Error for day counts that are not whole numbers in `0..=MAX_DAYS`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expiry must be a whole number of days between 0 and 365000, got {0:?}")]
pub struct InvalidExpiresDays(pub String);

impl FromStr for ExpiresDays {
    type Err = InvalidExpiresDays;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .ok()
            .filter(|days| *days <= Self::MAX_DAYS)
            .map(Self)
            .ok_or_else(|| InvalidExpiresDays(s.to_string()))
    }
}

/// A persisted snippet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    pub id: SnippetId,
    pub title: String,
    pub content: String,
    /// Store-clock creation time.
    pub created: DateTime<Utc>,
    /// `created` plus the requested number of days.
    pub expires: DateTime<Utc>,
}

impl Snippet {
    /// True if the snippet is still live at `now`.
    pub fn is_live_at(&self, now: DateTime<Utc>) -> bool {
        self.expires > now
    }
}
