//! Autocomplete backends for search suggestions
//!
//! Provides autocomplete suggestions from Google, YouTube, Bing, Amazon and
//! DuckDuckGo behind one dispatch point. Every request goes through the
//! rate limiter owned by the [`HttpClient`].

mod backends;
mod output;

pub use backends::{
    get_backend, Amazon, AutocompleteBackend, Bing, DuckDuckGo, Google,
};
pub use output::{print_suggestions, write_suggestions, NO_SUGGESTIONS};

use crate::config::{EndpointSettings, Settings};
use crate::error::{AutocompleteError, Result};
use crate::network::HttpClient;
use std::fmt;
use std::io::Write;
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;

/// Delay between consecutive requests when none is given (milliseconds)
pub const DEFAULT_DELAY_MS: u64 = 100;

/// Upstream suggestion source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    Google,
    YouTube,
    Bing,
    Amazon,
    DuckDuckGo,
}

impl Source {
    /// Every source, in display order
    pub const ALL: [Source; 5] = [
        Source::Google,
        Source::YouTube,
        Source::Bing,
        Source::Amazon,
        Source::DuckDuckGo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Google => "google",
            Source::YouTube => "youtube",
            Source::Bing => "bing",
            Source::Amazon => "amazon",
            Source::DuckDuckGo => "duckduckgo",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Source {
    type Err = AutocompleteError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "google" => Ok(Source::Google),
            "youtube" => Ok(Source::YouTube),
            "bing" => Ok(Source::Bing),
            "amazon" => Ok(Source::Amazon),
            "duckduckgo" | "ddg" => Ok(Source::DuckDuckGo),
            _ => Err(AutocompleteError::UnknownSource(s.to_string())),
        }
    }
}

/// Per-call request options
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestOptions {
    /// Language code (e.g. en, de)
    pub lang: Option<String>,
    /// Country or region code (e.g. us, uk)
    pub country: Option<String>,
    /// Minimum delay since the previous request, in milliseconds
    pub delay: Option<u64>,
}

impl SuggestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn delay(mut self, delay_ms: u64) -> Self {
        self.delay = Some(delay_ms);
        self
    }

    /// Delay to apply, falling back to [`DEFAULT_DELAY_MS`]
    pub fn effective_delay(&self) -> Duration {
        Duration::from_millis(self.delay.unwrap_or(DEFAULT_DELAY_MS))
    }
}

/// Outcome of a command, for the CLI to map onto an exit code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub success: bool,
    pub error: Option<String>,
}

impl CommandResult {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failed(error: impl fmt::Display) -> Self {
        Self {
            success: false,
            error: Some(error.to_string()),
        }
    }
}

/// Dispatches queries to backends through one rate-limited client
#[derive(Clone)]
pub struct Suggester {
    client: HttpClient,
    endpoints: EndpointSettings,
}

impl Suggester {
    pub fn new(client: HttpClient, endpoints: EndpointSettings) -> Self {
        Self { client, endpoints }
    }

    /// Build the client and endpoints from settings
    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        let client = HttpClient::with_settings(&settings.outgoing)?;
        Ok(Self::new(client, settings.endpoints.clone()))
    }

    /// Fetch suggestions for a query from one source
    pub async fn fetch_suggestions(
        &self,
        query: &str,
        options: &SuggestOptions,
        source: Source,
    ) -> Result<Vec<String>> {
        debug!("Fetching {} suggestions", source);
        let backend = get_backend(source, &self.endpoints);
        backend.suggest(&self.client, query, options).await
    }

    /// Fetch suggestions for a source given by name
    pub async fn fetch_suggestions_by_name(
        &self,
        query: &str,
        options: &SuggestOptions,
        source: &str,
    ) -> Result<Vec<String>> {
        let source = source.parse()?;
        self.fetch_suggestions(query, options, source).await
    }

    /// Fetch and print to stdout, folding any error into the result
    pub async fn handle_command(
        &self,
        query: &str,
        options: &SuggestOptions,
        source: Source,
    ) -> CommandResult {
        let suggestions = match self.fetch_suggestions(query, options, source).await {
            Ok(suggestions) => suggestions,
            Err(e) => return CommandResult::failed(e),
        };

        match print_suggestions(&suggestions) {
            Ok(()) => CommandResult::ok(),
            Err(e) => CommandResult::failed(e),
        }
    }

    /// Fetch and write to `out`, folding any error into the result
    pub async fn handle_command_with<W: Write>(
        &self,
        out: &mut W,
        query: &str,
        options: &SuggestOptions,
        source: Source,
    ) -> CommandResult {
        let suggestions = match self.fetch_suggestions(query, options, source).await {
            Ok(suggestions) => suggestions,
            Err(e) => return CommandResult::failed(e),
        };

        match write_suggestions(out, &suggestions).and_then(|_| out.flush()) {
            Ok(()) => CommandResult::ok(),
            Err(e) => CommandResult::failed(e),
        }
    }

    /// Forget the last request time, as in a fresh process
    pub async fn reset_rate_limiter(&self) {
        self.client.rate_limiter().reset().await;
    }

    pub fn client(&self) -> &HttpClient {
        &self.client
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_from_str() {
        assert_eq!("google".parse::<Source>().unwrap(), Source::Google);
        assert_eq!("YouTube".parse::<Source>().unwrap(), Source::YouTube);
        assert_eq!("ddg".parse::<Source>().unwrap(), Source::DuckDuckGo);
        assert_eq!("duckduckgo".parse::<Source>().unwrap(), Source::DuckDuckGo);

        let err = "yahoo".parse::<Source>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown source: yahoo");
    }

    #[test]
    fn test_source_round_trips_through_display() {
        for source in Source::ALL {
            assert_eq!(source.to_string().parse::<Source>().unwrap(), source);
        }
    }

    #[test]
    fn test_effective_delay() {
        assert_eq!(
            SuggestOptions::default().effective_delay(),
            Duration::from_millis(DEFAULT_DELAY_MS)
        );
        assert_eq!(
            SuggestOptions::new().delay(0).effective_delay(),
            Duration::ZERO
        );
        assert_eq!(
            SuggestOptions::new().delay(250).effective_delay(),
            Duration::from_millis(250)
        );
    }

    #[test]
    fn test_command_result() {
        assert_eq!(CommandResult::ok(), CommandResult { success: true, error: None });

        let failed = CommandResult::failed(AutocompleteError::Http(429));
        assert!(!failed.success);
        assert_eq!(failed.error.as_deref(), Some("HTTP error: 429"));
    }

    #[tokio::test]
    async fn test_unknown_source_name_is_error() {
        let suggester = Suggester::from_settings(&Settings::default()).unwrap();
        let err = suggester
            .fetch_suggestions_by_name("q", &SuggestOptions::default(), "altavista")
            .await
            .unwrap_err();
        assert!(matches!(err, AutocompleteError::UnknownSource(ref s) if s == "altavista"));
    }
}
