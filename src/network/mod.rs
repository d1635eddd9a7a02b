//! HTTP networking module
//!
//! Provides the rate-limited HTTP client used by every suggestion backend.

mod client;
mod rate_limiter;

pub use client::{FetchResponse, HttpClient};
pub use rate_limiter::RateLimiter;
