//! url_status library: observable HTTP status resolution for single URLs
//!
//! This library issues a request against a URL, follows the redirect chain the
//! server produces, and reports what it observed: the original URL, the final
//! URL reached, every absolute redirect target with its status code, the
//! terminal status code, and whether any response was obtained at all.
//!
//! # Example
//!
//! ```no_run
//! use url_status::Resolver;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let resolver = Resolver::new()?;
//! let report = resolver.resolve("https://example.com/").await;
//!
//! if report.is_valid() {
//!     println!(
//!         "{} -> {} ({})",
//!         report.target_url(),
//!         report.reached_url(),
//!         report.code()
//!     );
//! } else {
//!     println!("{}: no response", report.target_url());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

mod config;
mod error;
mod report;
mod resolver;

// Re-export public API
pub use config::TransportConfig;
pub use error::{InvalidStatusCode, ResolverError};
pub use report::StatusReport;
pub use resolver::Resolver;
