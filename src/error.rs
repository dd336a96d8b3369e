//! Error types for the URL status resolver.
//!
//! Transport failures are never surfaced through these types: an unreachable or
//! malformed URL folds into a negative [`StatusReport`](crate::StatusReport).
//! What remains loud is resolver construction and malformed status-code queries.

use thiserror::Error;

/// Error types for resolver construction.
#[derive(Error, Debug)]
pub enum ResolverError {
    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] reqwest::Error),
}

/// A status-code query outside the representable three-digit range.
///
/// Returned by [`StatusReport::status_equals`](crate::StatusReport::status_equals)
/// when the queried value is greater than 999. This reports a caller mistake,
/// not a network condition.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid status code query: {0} is not a three-digit code")]
pub struct InvalidStatusCode(
    /// The rejected query value.
    pub u16,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_status_code_display() {
        let err = InvalidStatusCode(1000);
        assert_eq!(
            err.to_string(),
            "invalid status code query: 1000 is not a three-digit code"
        );
    }
}
