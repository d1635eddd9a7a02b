//! Autocomplete backend implementations

use super::{Source, SuggestOptions};
use crate::config::EndpointSettings;
use crate::error::{AutocompleteError, Result};
use crate::network::HttpClient;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::warn;
use url::Url;

/// Trait for autocomplete backends
#[async_trait]
pub trait AutocompleteBackend: Send + Sync {
    /// Backend name
    fn name(&self) -> &str;

    /// Build the request URL for a query
    fn request(&self, query: &str, options: &SuggestOptions) -> Result<Url>;

    /// Parse a successful response body into suggestions
    ///
    /// Bodies that decode but have an unexpected shape yield an empty list.
    fn parse(&self, body: &str) -> Result<Vec<String>>;

    /// Fetch suggestions for a query through the client's rate limiter
    async fn suggest(
        &self,
        client: &HttpClient,
        query: &str,
        options: &SuggestOptions,
    ) -> Result<Vec<String>> {
        let url = self.request(query, options)?;
        let response = client.fetch(url, options.effective_delay()).await?;

        if !response.is_success() {
            warn!("{} answered HTTP {}", self.name(), response.status);
            return Err(AutocompleteError::Http(response.status));
        }

        self.parse(&response.text)
    }
}

/// Get the backend serving a source
pub fn get_backend(source: Source, endpoints: &EndpointSettings) -> Box<dyn AutocompleteBackend> {
    match source {
        Source::Google => Box::new(Google::new(&endpoints.google)),
        Source::YouTube => Box::new(Google::youtube(&endpoints.google)),
        Source::Bing => Box::new(Bing::new(&endpoints.bing)),
        Source::Amazon => Box::new(Amazon::new(&endpoints.amazon)),
        Source::DuckDuckGo => Box::new(DuckDuckGo::new(&endpoints.duckduckgo)),
    }
}

/// Suggestions from an OpenSearch-style body: `[query, [suggestions...], ...]`
fn opensearch_suggestions(json: &Value) -> Vec<String> {
    json.as_array()
        .and_then(|arr| arr.get(1))
        .and_then(|v| v.as_array())
        .map(|arr| {
            arr.iter()
                .filter_map(|v| v.as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default()
}

/// Google autocomplete backend, also serving YouTube
pub struct Google {
    base_url: String,
    video: bool,
}

impl Google {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            video: false,
        }
    }

    /// Same endpoint restricted to YouTube suggestions (`ds=yt`)
    pub fn youtube(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            video: true,
        }
    }
}

#[async_trait]
impl AutocompleteBackend for Google {
    fn name(&self) -> &str {
        if self.video {
            "youtube"
        } else {
            "google"
        }
    }

    fn request(&self, query: &str, options: &SuggestOptions) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)?;
        {
            let mut params = url.query_pairs_mut();
            params.append_pair("client", "firefox");
            params.append_pair("q", query);

            if self.video {
                params.append_pair("ds", "yt");
            }
            if let Some(ref lang) = options.lang {
                params.append_pair("hl", lang);
            }
            if let Some(ref country) = options.country {
                params.append_pair("gl", country);
            }
        }
        Ok(url)
    }

    fn parse(&self, body: &str) -> Result<Vec<String>> {
        // Google returns: [query, [suggestions...]]
        let json: Value = serde_json::from_str(body)?;
        Ok(opensearch_suggestions(&json))
    }
}

/// Bing autocomplete backend
pub struct Bing {
    base_url: String,
}

/// Inner text of each `<Text>` element in a Bing QSML document
static TEXT_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<Text>(.*?)</Text>").expect("valid Text tag pattern"));

impl Bing {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Market code: `<lang or en>-<COUNTRY>` when a country is given, else `en-US`
    fn market(options: &SuggestOptions) -> String {
        match options.country {
            Some(ref country) => format!(
                "{}-{}",
                options.lang.as_deref().unwrap_or("en"),
                country.to_uppercase()
            ),
            None => "en-US".to_string(),
        }
    }
}

#[async_trait]
impl AutocompleteBackend for Bing {
    fn name(&self) -> &str {
        "bing"
    }

    fn request(&self, query: &str, options: &SuggestOptions) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)?;
        url.query_pairs_mut()
            .append_pair("Market", &Self::market(options))
            .append_pair("query", query);
        Ok(url)
    }

    fn parse(&self, body: &str) -> Result<Vec<String>> {
        Ok(TEXT_TAG
            .captures_iter(body)
            .map(|caps| caps[1].to_string())
            .collect())
    }
}

/// Amazon autocomplete backend
pub struct Amazon {
    base_url: String,
}

impl Amazon {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl AutocompleteBackend for Amazon {
    fn name(&self) -> &str {
        "amazon"
    }

    fn request(&self, query: &str, _options: &SuggestOptions) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)?;
        url.query_pairs_mut()
            .append_pair("search-alias", "aps")
            .append_pair("client", "amazon-search-ui")
            .append_pair("mkt", "1")
            .append_pair("q", query);
        Ok(url)
    }

    fn parse(&self, body: &str) -> Result<Vec<String>> {
        // Amazon returns: [query, [suggestions...], [...], [...]]
        let json: Value = serde_json::from_str(body)?;
        Ok(opensearch_suggestions(&json))
    }
}

/// DuckDuckGo autocomplete backend
pub struct DuckDuckGo {
    base_url: String,
}

impl DuckDuckGo {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl AutocompleteBackend for DuckDuckGo {
    fn name(&self) -> &str {
        "duckduckgo"
    }

    fn request(&self, query: &str, _options: &SuggestOptions) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)?;
        url.query_pairs_mut().append_pair("q", query);
        Ok(url)
    }

    fn parse(&self, body: &str) -> Result<Vec<String>> {
        // DuckDuckGo returns: [{"phrase": "..."}, ...]
        let json: Value = serde_json::from_str(body)?;

        let suggestions = json
            .as_array()
            .map(|arr| {
                arr.iter()
                    .filter_map(|item| item.get("phrase").and_then(|p| p.as_str()))
                    .filter(|phrase| !phrase.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Ok(suggestions)
    }
}
