//! Backend location.

use crate::error::{ApiError, Result};
use reqwest::Url;

/// Prefix under which the backend mounts every endpoint.
const API_PREFIX: &str = "api";

/// Validated backend base URL.
///
/// Endpoints live under `{base}/api/...`; a path prefix on the base (for a
/// backend mounted under a sub-path) is preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base: Url,
}

impl ApiConfig {
    /// Parse and validate a base URL such as `https://invite.example.com`.
    ///
    /// Query strings and fragments are dropped. URLs that cannot carry a path
    /// (`mailto:`, `data:`, a bare `host:port`) are rejected.
    pub fn new(base_url: &str) -> Result<Self> {
        let trimmed = base_url.trim();
        let mut base = Url::parse(trimmed).map_err(|e| ApiError::InvalidBaseUrl {
            url: trimmed.to_string(),
            reason: e.to_string(),
        })?;
        if base.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl {
                url: trimmed.to_string(),
                reason: "URL cannot carry a path".to_string(),
            });
        }
        base.set_query(None);
        base.set_fragment(None);
        Ok(Self { base })
    }

    /// Build `{base}/api/{segments...}`. Each segment is percent-encoded, so an
    /// identifier containing `/` stays a single segment.
    pub fn endpoint<I, S>(&self, segments: I) -> Url
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut url = self.base.clone();
        // `new` rejected cannot-be-a-base URLs, so this always succeeds.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().push(API_PREFIX).extend(segments);
        }
        url
    }
}
