//! Debounce value objects
//!
//! Action kinds, the per-action TTL policy and deterministic debounce keys.
//!
//! Keys are built from typed segments joined with `:`. Each segment escapes
//! `%` and `:` so two different tuples can never produce the same key.

use crate::constants::{
    DEBOUNCE_COMMENT_TTL_SECS, DEBOUNCE_DISLIKE_TTL_SECS, DEBOUNCE_ENDPOINT_SEGMENT,
    DEBOUNCE_KEY_SEPARATOR, DEBOUNCE_LIKE_TTL_SECS, DEBOUNCE_POST_TTL_SECS,
};
use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// User-triggered action subject to debouncing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DebounceAction {
    Like,
    Unlike,
    Dislike,
    Undislike,
    Comment,
    Post,
}

impl DebounceAction {
    /// All action kinds
    pub const ALL: [DebounceAction; 6] = [
        Self::Like,
        Self::Unlike,
        Self::Dislike,
        Self::Undislike,
        Self::Comment,
        Self::Post,
    ];

    /// Canonical lowercase name
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Unlike => "unlike",
            Self::Dislike => "dislike",
            Self::Undislike => "undislike",
            Self::Comment => "comment",
            Self::Post => "post",
        }
    }
}

impl fmt::Display for DebounceAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DebounceAction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::invalid_argument(format!("Unknown debounce action: {s}")))
    }
}

/// Debounce window per action kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebounceTtlPolicy {
    /// Like / unlike window (seconds)
    pub like_secs: u64,
    /// Dislike / undislike window (seconds)
    pub dislike_secs: u64,
    /// Comment window (seconds)
    pub comment_secs: u64,
    /// Post creation window (seconds)
    pub post_secs: u64,
}

impl Default for DebounceTtlPolicy {
    fn default() -> Self {
        Self {
            like_secs: DEBOUNCE_LIKE_TTL_SECS,
            dislike_secs: DEBOUNCE_DISLIKE_TTL_SECS,
            comment_secs: DEBOUNCE_COMMENT_TTL_SECS,
            post_secs: DEBOUNCE_POST_TTL_SECS,
        }
    }
}

impl DebounceTtlPolicy {
    /// Window applied to `action`
    pub fn ttl_for(&self, action: DebounceAction) -> Duration {
        let secs = match action {
            DebounceAction::Like | DebounceAction::Unlike => self.like_secs,
            DebounceAction::Dislike | DebounceAction::Undislike => self.dislike_secs,
            DebounceAction::Comment => self.comment_secs,
            DebounceAction::Post => self.post_secs,
        };
        Duration::from_secs(secs)
    }
}

/// Deterministic key identifying one (actor, action, target) tuple
///
/// The key is used bare; the debounce gate adds its namespace prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DebounceKey(String);

impl DebounceKey {
    /// Wrap an already-derived key
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Join escaped segments with the key separator
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut key = String::new();
        for (i, segment) in segments.into_iter().enumerate() {
            if i > 0 {
                key.push(DEBOUNCE_KEY_SEPARATOR);
            }
            escape_segment_into(segment.as_ref(), &mut key);
        }
        Self(key)
    }

    /// Key for `actor` performing `action` on `target_kind`/`target_id`
    ///
    /// Layout: `action:target_kind:target_id:actor`.
    pub fn for_action(
        action: DebounceAction,
        actor: &str,
        target_kind: &str,
        target_id: &str,
    ) -> Self {
        Self::from_segments([action.as_str(), target_kind, target_id, actor])
    }

    /// Key for `actor` commenting on post `post_id`
    pub fn comment(actor: &str, post_id: &str) -> Self {
        Self::for_action(DebounceAction::Comment, actor, "post", post_id)
    }

    /// Key for `actor` creating a post
    pub fn post_create(actor: &str) -> Self {
        Self::from_segments([DebounceAction::Post.as_str(), "create", actor])
    }

    /// Start an endpoint-style key: `ep:prefix[:user:<id>][:<arg>]`
    pub fn builder(prefix: impl Into<String>) -> DebounceKeyBuilder {
        DebounceKeyBuilder::new(prefix)
    }

    /// Key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the key is empty (rejected by the gate)
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for DebounceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DebounceKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DebounceKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for DebounceKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// Builder for per-endpoint keys
///
/// Mirrors a key made of an endpoint name, the logged-in user (when the
/// endpoint debounces per user) and the first simple argument. Keys start
/// with a fixed `ep` segment so they cannot collide with action keys.
#[derive(Debug, Clone)]
pub struct DebounceKeyBuilder {
    prefix: String,
    user: Option<String>,
    arg: Option<String>,
}

impl DebounceKeyBuilder {
    /// Start a key for `prefix`
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            user: None,
            arg: None,
        }
    }

    /// Scope the key to one user
    pub fn user(mut self, user_id: impl fmt::Display) -> Self {
        self.user = Some(user_id.to_string());
        self
    }

    /// Scope the key to one argument value; only the first call counts
    pub fn arg(mut self, arg: impl fmt::Display) -> Self {
        if self.arg.is_none() {
            self.arg = Some(arg.to_string());
        }
        self
    }

    /// Build the key
    pub fn build(self) -> DebounceKey {
        let mut segments = vec![DEBOUNCE_ENDPOINT_SEGMENT.to_string(), self.prefix];
        if let Some(user) = self.user {
            segments.push("user".to_string());
            segments.push(user);
        }
        if let Some(arg) = self.arg {
            segments.push(arg);
        }
        DebounceKey::from_segments(segments)
    }
}

fn escape_segment_into(segment: &str, out: &mut String) {
    for c in segment.chars() {
        match c {
            '%' => out.push_str("%25"),
            DEBOUNCE_KEY_SEPARATOR => out.push_str("%3A"),
            other => out.push(other),
        }
    }
}
