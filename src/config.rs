//! Transport configuration.
//!
//! This module provides:
//! - Operational constants used as defaults (redirect hop cap, timeout, User-Agent)
//! - The [`TransportConfig`] options applied to the HTTP client and the chain walk

use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::Method;

// Redirect handling
/// Maximum number of redirect hops to follow.
/// Prevents infinite redirect loops and excessive request chains.
pub const MAX_REDIRECT_HOPS: usize = 10;

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent string for HTTP requests.
pub const DEFAULT_USER_AGENT: &str = concat!("url_status/", env!("CARGO_PKG_VERSION"));

/// Transport options for a [`Resolver`](crate::Resolver).
///
/// All fields have working defaults; construct with `TransportConfig::default()`
/// and override what the call site needs. The configuration is captured at
/// resolver construction and applies to every resolution made through that
/// resolver, so two resolvers with different configurations can run side by side.
///
/// # Examples
///
/// ```
/// use url_status::TransportConfig;
/// use reqwest::Method;
///
/// let config = TransportConfig {
///     method: Method::HEAD,
///     follow_redirects: false,
///     ..TransportConfig::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Request method issued for every hop in the chain
    pub method: Method,

    /// Extra request headers sent with every request
    pub headers: HeaderMap,

    /// Per-request timeout; `None` leaves the transport unbounded
    pub timeout: Option<Duration>,

    /// Whether to follow the redirect chain to its terminal response.
    ///
    /// When `false`, resolution stops at the first response; a redirect target
    /// is still recorded in the report but never requested.
    pub follow_redirects: bool,

    /// Maximum number of requests issued per resolution.
    ///
    /// The entry request is always issued; the cap bounds the redirect hops
    /// followed after it, so `0` behaves the same as `1`.
    pub max_redirect_hops: usize,

    /// HTTP User-Agent header value
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        TransportConfig {
            method: Method::GET,
            headers: HeaderMap::new(),
            timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            follow_redirects: true,
            max_redirect_hops: MAX_REDIRECT_HOPS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_config_defaults() {
        let config = TransportConfig::default();
        assert_eq!(config.method, Method::GET);
        assert!(config.headers.is_empty());
        assert_eq!(config.timeout, Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)));
        assert!(config.follow_redirects);
        assert_eq!(config.max_redirect_hops, MAX_REDIRECT_HOPS);
        assert!(config.user_agent.starts_with("url_status/"));
    }

    #[test]
    fn test_transport_config_override_keeps_rest() {
        let config = TransportConfig {
            follow_redirects: false,
            ..TransportConfig::default()
        };
        assert!(!config.follow_redirects);
        assert_eq!(config.method, Method::GET);
        assert_eq!(config.max_redirect_hops, MAX_REDIRECT_HOPS);
    }
}
