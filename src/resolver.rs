//! URL status resolution.
//!
//! This module owns the HTTP client and the redirect-chain walk. The client is
//! built with automatic redirects disabled so the walk observes every header
//! block in the chain instead of only the final response.

use anyhow::Result;
use log::{debug, warn};
use reqwest::header::LOCATION;
use reqwest::{Client, ClientBuilder};
use url::Url;

use crate::config::TransportConfig;
use crate::error::ResolverError;
use crate::report::{Exchange, StatusReport};

/// Resolves the observable HTTP status of URLs.
///
/// A `Resolver` wraps a [`reqwest::Client`] configured from a
/// [`TransportConfig`]. Construction validates the configuration; resolution
/// itself never fails: an unreachable URL produces a negative [`StatusReport`]
/// instead of an error.
///
/// The configuration is captured per instance, so a shared `Resolver` can serve
/// concurrent [`resolve`](Self::resolve) calls without interference, and
/// resolvers with different configurations can coexist in one process.
#[derive(Debug, Clone)]
pub struct Resolver {
    client: Client,
    config: TransportConfig,
}

impl Resolver {
    /// Creates a resolver with the default [`TransportConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ResolverError::HttpClientError`] if the HTTP client cannot be
    /// built from the default configuration.
    pub fn new() -> Result<Resolver, ResolverError> {
        Resolver::with_config(TransportConfig::default())
    }

    /// Creates a resolver with the given transport configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Transport options applied to every resolution made through
    ///   this resolver.
    ///
    /// # Errors
    ///
    /// Returns [`ResolverError::HttpClientError`] if the HTTP client cannot be
    /// built from `config`.
    pub fn with_config(config: TransportConfig) -> Result<Resolver, ResolverError> {
        let client = init_client(&config)?;
        Ok(Resolver { client, config })
    }

    /// Resolves the status of `url`, following its redirect chain to the end.
    ///
    /// Requests are issued sequentially until the chain reaches a non-redirect
    /// response, the hop cap, or a transport failure. Any failure to obtain a
    /// response, including a `url` that does not parse, is reported through the
    /// returned [`StatusReport`] rather than as an error.
    pub async fn resolve(&self, url: &str) -> StatusReport {
        debug!("Resolving status for {url}");
        match walk_redirect_chain(&self.client, url, &self.config).await {
            Ok(exchanges) => StatusReport::from_exchanges(url, &exchanges),
            Err(e) => {
                debug!("No response obtained for {url}: {e:#}");
                StatusReport::unreachable(url)
            }
        }
    }
}

/// Initializes the HTTP client with automatic redirects disabled so the chain
/// can be tracked hop by hop.
fn init_client(config: &TransportConfig) -> Result<Client, reqwest::Error> {
    let mut builder = ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .user_agent(config.user_agent.clone())
        .default_headers(config.headers.clone());
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }
    builder.build()
}

/// Walks the redirect chain starting at `start_url`, recording one [`Exchange`]
/// per response.
///
/// A hop is followed only when the response status is a redirect (3xx), a
/// `Location` header is present, and `config` allows it. An absolute `Location`
/// is requested as-is; anything else is joined against the current URL. A
/// transport failure on any hop fails the walk as a whole.
async fn walk_redirect_chain(
    client: &Client,
    start_url: &str,
    config: &TransportConfig,
) -> Result<Vec<Exchange>> {
    let mut exchanges: Vec<Exchange> = Vec::new();
    let mut current = Url::parse(start_url)?;

    loop {
        let response = client
            .request(config.method.clone(), current.clone())
            .send()
            .await?;
        let status = response.status();
        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        exchanges.push(Exchange {
            status: Some(status.as_u16()),
            location: location.clone(),
        });

        if !status.is_redirection() {
            break;
        }
        if !config.follow_redirects {
            break;
        }
        let Some(location) = location else {
            warn!(
                "Redirect status {} from {current} had no Location header",
                status.as_u16()
            );
            break;
        };
        if exchanges.len() >= config.max_redirect_hops {
            warn!(
                "Reached maximum redirect hops ({}) for {start_url}",
                config.max_redirect_hops
            );
            break;
        }

        let next = Url::parse(&location).or_else(|_| current.join(&location))?;
        debug!("Following redirect {} -> {next}", status.as_u16());
        current = next;
    }

    Ok(exchanges)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use reqwest::Method;

    use super::*;

    #[test]
    fn test_init_client_with_defaults() {
        let config = TransportConfig::default();
        assert!(init_client(&config).is_ok());
    }

    #[test]
    fn test_init_client_without_timeout() {
        let config = TransportConfig {
            timeout: None,
            ..TransportConfig::default()
        };
        assert!(init_client(&config).is_ok());
    }

    #[test]
    fn test_resolver_construction() {
        assert!(Resolver::new().is_ok());

        let config = TransportConfig {
            method: Method::HEAD,
            timeout: Some(Duration::from_secs(1)),
            follow_redirects: false,
            ..TransportConfig::default()
        };
        assert!(Resolver::with_config(config).is_ok());
    }
}
