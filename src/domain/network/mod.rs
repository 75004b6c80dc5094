// SPDX-License-Identifier: MPL-2.0
//! Network value objects.
//!
//! This module provides type-safe wrappers for request settings,
//! ensuring they are always within valid ranges.

use std::time::Duration;
use url::Url;

// =============================================================================
// Timeout Bounds
// =============================================================================

/// Request timeout bounds in seconds (1 to 120).
pub mod timeout_bounds {
    /// Minimum request timeout.
    pub const MIN: u32 = 1;
    /// Maximum request timeout.
    pub const MAX: u32 = 120;
    /// Default request timeout.
    pub const DEFAULT: u32 = 10;
}

/// Host the ledger service listens on during local development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Path segment of the accounts collection, appended to the base URL.
pub const ACCOUNTS_SEGMENT: &str = "accounts";

// =============================================================================
// RequestTimeout
// =============================================================================

/// Request timeout in seconds.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (1–120 seconds).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTimeout(u32);

impl RequestTimeout {
    /// Creates a new timeout value, clamping to valid range.
    #[must_use]
    pub fn new(secs: u32) -> Self {
        Self(secs.clamp(timeout_bounds::MIN, timeout_bounds::MAX))
    }

    /// Returns the value in seconds.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns the timeout as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs(u64::from(self.0))
    }
}

impl Default for RequestTimeout {
    fn default() -> Self {
        Self(timeout_bounds::DEFAULT)
    }
}

// =============================================================================
// ApiBaseUrl
// =============================================================================

/// Scheme + host (+ optional port and path prefix) of the ledger service.
///
/// Query and fragment are dropped; trailing slashes of the prefix are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiBaseUrl(Url);

impl ApiBaseUrl {
    /// Parses and normalizes a user-supplied base URL.
    ///
    /// Returns `None` unless the value is an absolute `http`/`https` URL
    /// with a host.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let mut url = Url::parse(raw.trim()).ok()?;
        if !matches!(url.scheme(), "http" | "https")
            || url.host_str().is_none_or(str::is_empty)
            || url.cannot_be_a_base()
        {
            return None;
        }

        url.set_query(None);
        url.set_fragment(None);
        let prefix = url.path().trim_end_matches('/').to_string();
        url.set_path(&prefix);
        Some(Self(url))
    }

    /// Returns the normalized base, without a trailing slash.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str().trim_end_matches('/')
    }

    /// Full URL of the accounts collection.
    #[must_use]
    pub fn accounts_url(&self) -> Url {
        let mut url = self.0.clone();
        // Only fails for cannot-be-a-base URLs, which `parse` rejects.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(ACCOUNTS_SEGMENT);
        }
        url
    }
}

impl Default for ApiBaseUrl {
    fn default() -> Self {
        Self::parse(DEFAULT_BASE_URL).expect("DEFAULT_BASE_URL is a valid http URL")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_clamps_to_bounds() {
        assert_eq!(RequestTimeout::new(0).value(), timeout_bounds::MIN);
        assert_eq!(RequestTimeout::new(500).value(), timeout_bounds::MAX);
        assert_eq!(RequestTimeout::new(30).value(), 30);
    }

    #[test]
    fn timeout_default_and_duration() {
        let timeout = RequestTimeout::default();
        assert_eq!(timeout.value(), timeout_bounds::DEFAULT);
        assert_eq!(timeout.as_duration(), Duration::from_secs(10));
    }

    #[test]
    fn default_base_points_at_local_service() {
        assert_eq!(ApiBaseUrl::default().as_str(), DEFAULT_BASE_URL);
        assert_eq!(
            ApiBaseUrl::default().accounts_url().as_str(),
            "http://localhost:5000/accounts"
        );
    }

    #[test]
    fn base_url_trailing_slashes_are_dropped() {
        let base = ApiBaseUrl::parse("https://ledger.example.com/api/").expect("valid url");
        assert_eq!(base.as_str(), "https://ledger.example.com/api");
        assert_eq!(
            base.accounts_url().as_str(),
            "https://ledger.example.com/api/accounts"
        );
    }

    #[test]
    fn base_url_drops_query_and_fragment() {
        let base = ApiBaseUrl::parse("http://ledger.test:5000/v1?debug=1#top").expect("valid url");
        assert_eq!(base.as_str(), "http://ledger.test:5000/v1");
        assert_eq!(
            base.accounts_url().as_str(),
            "http://ledger.test:5000/v1/accounts"
        );
    }

    #[test]
    fn base_url_rejects_malformed_hosts_and_ports() {
        assert!(ApiBaseUrl::parse("http://local host:5000").is_none());
        assert!(ApiBaseUrl::parse("http://localhost:50 00").is_none());
        assert!(ApiBaseUrl::parse("http://localhost:99999").is_none());
        assert!(ApiBaseUrl::parse("mailto:ops@ledger.test").is_none());
    }

    #[test]
    fn base_url_rejects_other_schemes_and_blank_hosts() {
        assert!(ApiBaseUrl::parse("ftp://example.com").is_none());
        assert!(ApiBaseUrl::parse("localhost:5000").is_none());
        assert!(ApiBaseUrl::parse("http://").is_none());
        assert!(ApiBaseUrl::parse("   ").is_none());
    }
}

const _: () = {
    assert!(timeout_bounds::MIN > 0);
    assert!(timeout_bounds::MIN <= timeout_bounds::DEFAULT);
    assert!(timeout_bounds::DEFAULT <= timeout_bounds::MAX);
};
