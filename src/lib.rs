//! autocomplete-cli: query autocomplete suggestions from public endpoints
//!
//! Supports Google, YouTube, Bing, Amazon and DuckDuckGo. Requests are spaced
//! by a process-wide rate limiter; see [`network::RateLimiter`].

pub mod autocomplete;
pub mod config;
pub mod error;
pub mod network;

pub use autocomplete::{CommandResult, Source, SuggestOptions, Suggester};
pub use config::Settings;
pub use error::AutocompleteError;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
