//! Client configuration.
//!
//! The page is served by the same origin as the activities API, so the
//! defaults need no runtime input. Builders exist for hosting the board
//! under a different API prefix.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_API_ROOT: &str = "/activities";
pub const DEFAULT_MESSAGE_TTL_MS: u64 = 5_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Collection endpoint; per-activity routes are nested below it.
    pub api_root: String,
    /// How long a signup message stays visible.
    pub message_ttl: Duration,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            api_root: DEFAULT_API_ROOT.to_owned(),
            message_ttl: Duration::from_millis(DEFAULT_MESSAGE_TTL_MS),
        }
    }
}

impl BoardConfig {
    /// Replace the API root. Trailing slashes are dropped.
    #[must_use]
    pub fn with_api_root(mut self, root: impl Into<String>) -> Self {
        self.api_root = normalize_api_root(&root.into());
        self
    }

    #[must_use]
    pub fn with_message_ttl(mut self, ttl: Duration) -> Self {
        self.message_ttl = ttl;
        self
    }
}

fn normalize_api_root(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_ROOT.to_owned()
    } else {
        trimmed.to_owned()
    }
}
