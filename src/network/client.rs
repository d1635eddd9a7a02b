//! HTTP client for making requests to suggestion endpoints

use super::rate_limiter::RateLimiter;
use crate::config::OutgoingSettings;
use anyhow::{Context, Result};
use reqwest::{Client, Response};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Raw response handed back to a backend
#[derive(Debug)]
pub struct FetchResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub text: String,
}

impl FetchResponse {
    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP client wrapper that routes every request through one rate limiter
///
/// Clones share the limiter, so spacing holds across all of them.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    limiter: Arc<RateLimiter>,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self> {
        Self::with_settings(&OutgoingSettings::default())
    }

    /// Create a new HTTP client with custom settings
    pub fn with_settings(settings: &OutgoingSettings) -> Result<Self> {
        let mut builder = Client::builder()
            .user_agent(settings.user_agent.clone())
            .gzip(true)
            .brotli(true);

        if let Some(secs) = settings.request_timeout {
            let timeout = Duration::try_from_secs_f64(secs)
                .with_context(|| format!("Invalid request timeout: {}", secs))?;
            builder = builder.timeout(timeout);
        }

        // SSL verification
        if !settings.verify_ssl {
            builder = builder.danger_accept_invalid_certs(true);
        }

        // Proxy settings
        if let Some(ref proxy_url) = settings.proxies.all {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        } else {
            if let Some(ref http) = settings.proxies.http {
                builder = builder.proxy(reqwest::Proxy::http(http)?);
            }
            if let Some(ref https) = settings.proxies.https {
                builder = builder.proxy(reqwest::Proxy::https(https)?);
            }
        }

        Ok(Self {
            client: builder.build()?,
            limiter: Arc::new(RateLimiter::new()),
        })
    }

    /// GET a fully built URL once the rate limiter lets it through
    ///
    /// Status codes are not interpreted here and nothing is retried.
    pub async fn fetch(&self, url: Url, delay: Duration) -> crate::error::Result<FetchResponse> {
        self.limiter.acquire(delay).await;

        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;

        Self::parse_response(response).await
    }

    /// Parse response into FetchResponse
    async fn parse_response(response: Response) -> crate::error::Result<FetchResponse> {
        let status = response.status().as_u16();
        let url = response.url().to_string();
        let text = response.text().await?;

        debug!("{} answered {} ({} bytes)", url, status, text.len());

        Ok(FetchResponse { status, text })
    }

    /// The limiter shared by every request from this client
    pub fn rate_limiter(&self) -> &RateLimiter {
        &self.limiter
    }
}
