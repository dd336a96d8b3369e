//! Status reports.
//!
//! This module defines the [`StatusReport`] snapshot returned by a resolution
//! and the assembly logic that folds the observed HTTP exchanges into it. The
//! assembly is pure: it sees only status codes and `Location` header values, so
//! it can be exercised without touching the network.

use serde::Serialize;

use crate::error::InvalidStatusCode;

/// One HTTP exchange in a redirect chain, reduced to the header facts the
/// report needs.
///
/// The transport walk produces these in chronological order, the entry URL's
/// response first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Exchange {
    /// Status code of the response, when one was observed.
    pub(crate) status: Option<u16>,
    /// Raw `Location` header value, when present.
    pub(crate) location: Option<String>,
}

/// Immutable snapshot of a URL resolution: terminal status, redirect chain,
/// and reachability.
///
/// A report is fully populated by [`Resolver::resolve`](crate::Resolver::resolve)
/// before it is returned and never changes afterward, so it can be cloned,
/// serialized, or shared across tasks freely.
///
/// An unreachable URL (DNS failure, refused connection, malformed input) yields
/// a negative report rather than an error: [`is_valid`](Self::is_valid) is
/// `false`, [`code`](Self::code) is `0`, both redirect sequences are empty, and
/// [`reached_url`](Self::reached_url) is the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    target_url: String,
    reached_url: String,
    is_valid: bool,
    redirected_urls: Vec<String>,
    redirected_codes: Vec<u16>,
    code: u16,
}

impl StatusReport {
    /// Builds a report from the header exchanges observed along a redirect chain.
    ///
    /// Each exchange contributes independently: an observed status code becomes
    /// the terminal [`code`](Self::code) and marks the report valid; an absolute
    /// `Location` value (one starting with `http`) is appended to the redirect
    /// sequences together with that exchange's status code. Relative `Location`
    /// values never enter the report, even when the walk followed them.
    pub(crate) fn from_exchanges(target_url: &str, exchanges: &[Exchange]) -> StatusReport {
        let mut is_valid = false;
        let mut code = 0;
        let mut redirected_urls = Vec::new();
        let mut redirected_codes = Vec::new();

        for exchange in exchanges {
            if let Some(status) = exchange.status {
                code = status;
                is_valid = true;
            }
            if let Some(location) = exchange.location.as_deref() {
                if location.starts_with("http") {
                    redirected_urls.push(location.to_string());
                    redirected_codes.push(exchange.status.unwrap_or(0));
                }
            }
        }

        let reached_url = redirected_urls
            .last()
            .cloned()
            .unwrap_or_else(|| target_url.to_string());

        StatusReport {
            target_url: target_url.to_string(),
            reached_url,
            is_valid,
            redirected_urls,
            redirected_codes,
            code,
        }
    }

    /// Builds the degraded report for a URL no response was obtained from.
    pub(crate) fn unreachable(target_url: &str) -> StatusReport {
        StatusReport {
            target_url: target_url.to_string(),
            reached_url: String::new(),
            is_valid: false,
            redirected_urls: Vec::new(),
            redirected_codes: Vec::new(),
            code: 0,
        }
    }

    /// The URL the resolution was asked for, exactly as passed in.
    pub fn target_url(&self) -> &str {
        &self.target_url
    }

    /// The final URL reached after following redirects.
    ///
    /// Equals [`target_url`](Self::target_url) when no redirect was recorded,
    /// and the empty string when no response was obtained at all.
    pub fn reached_url(&self) -> &str {
        &self.reached_url
    }

    /// Whether at least one HTTP response carrying a status code was observed.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Every absolute redirect target encountered, oldest first.
    pub fn redirected_urls(&self) -> &[String] {
        &self.redirected_urls
    }

    /// The status codes paired positionally with
    /// [`redirected_urls`](Self::redirected_urls); always the same length.
    pub fn redirected_codes(&self) -> &[u16] {
        &self.redirected_codes
    }

    /// The terminal HTTP status code, or `0` when none was observed.
    pub fn code(&self) -> u16 {
        self.code
    }

    /// Whether the terminal status code equals `code`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidStatusCode`] when `code` is greater than 999 and can
    /// never match a three-digit status code. A reachable URL whose terminal
    /// code merely differs is `Ok(false)`, not an error.
    pub fn status_equals(&self, code: u16) -> Result<bool, InvalidStatusCode> {
        if code > 999 {
            return Err(InvalidStatusCode(code));
        }
        Ok(self.code == code)
    }

    /// Whether the terminal status code is `200 OK`.
    pub fn is_200(&self) -> bool {
        self.code == 200
    }

    /// Whether the terminal status code is `401 Unauthorized`.
    pub fn is_401(&self) -> bool {
        self.code == 401
    }

    /// Whether the terminal status code is `403 Forbidden`.
    pub fn is_403(&self) -> bool {
        self.code == 403
    }

    /// Whether the terminal status code is `404 Not Found`.
    pub fn is_404(&self) -> bool {
        self.code == 404
    }

    /// Whether the terminal status code is `405 Method Not Allowed`.
    pub fn is_405(&self) -> bool {
        self.code == 405
    }

    /// Whether the terminal status code is `500 Internal Server Error`.
    pub fn is_500(&self) -> bool {
        self.code == 500
    }

    /// Whether the terminal status code is `503 Service Unavailable`.
    pub fn is_503(&self) -> bool {
        self.code == 503
    }
}
