//! Debounce gate configuration types

use coord_application::use_cases::DebounceSettings;
use coord_domain::constants::{
    DEBOUNCE_COMMENT_TTL_SECS, DEBOUNCE_DISLIKE_TTL_SECS, DEBOUNCE_LIKE_TTL_SECS, DEBOUNCE_MARKER,
    DEBOUNCE_NAMESPACE, DEBOUNCE_POST_TTL_SECS, DEBOUNCE_REJECTION_MESSAGE,
};
use coord_domain::value_objects::DebounceTtlPolicy;
use serde::{Deserialize, Serialize};

/// Debounce gate configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebounceConfig {
    /// Prefix of every debounce record
    pub namespace: String,

    /// Value stored in every debounce record
    pub marker: String,

    /// Like / unlike window (seconds)
    pub like_secs: u64,

    /// Dislike / undislike window (seconds)
    pub dislike_secs: u64,

    /// Comment window (seconds)
    pub comment_secs: u64,

    /// Post creation window (seconds)
    pub post_secs: u64,

    /// Message returned to rejected callers
    pub rejection_message: String,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self {
            namespace: DEBOUNCE_NAMESPACE.to_string(),
            marker: DEBOUNCE_MARKER.to_string(),
            like_secs: DEBOUNCE_LIKE_TTL_SECS,
            dislike_secs: DEBOUNCE_DISLIKE_TTL_SECS,
            comment_secs: DEBOUNCE_COMMENT_TTL_SECS,
            post_secs: DEBOUNCE_POST_TTL_SECS,
            rejection_message: DEBOUNCE_REJECTION_MESSAGE.to_string(),
        }
    }
}

impl DebounceConfig {
    /// Debounce gate settings
    pub fn settings(&self) -> DebounceSettings {
        DebounceSettings {
            namespace: self.namespace.clone(),
            marker: self.marker.clone(),
            ttl_policy: DebounceTtlPolicy {
                like_secs: self.like_secs,
                dislike_secs: self.dislike_secs,
                comment_secs: self.comment_secs,
                post_secs: self.post_secs,
            },
            rejection_message: self.rejection_message.clone(),
        }
    }
}
