//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter. The filter
//! comes from `RUST_LOG`; when that is unset, [`DEFAULT_FILTER`] applies.
//!
//! ## Levels
//!
//! - `info`: one line per agent run, actor lifecycle, and every HTTP request (via
//!   `tower_http::trace`)
//! - `debug`: full payloads, including the raw model response and the sanitized
//!   model text
//! - `warn`: model output that had to be replaced by the fallback plan
//! - `error`: plan source and basket failures that fail a request
//!
//! ```bash
//! # Default
//! cargo run
//!
//! # See what the model actually returned
//! RUST_LOG=shop_agent=debug cargo run
//! ```
//!
//! The API key is never written to the log.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "shop_agent=info,tower_http=info";

pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
