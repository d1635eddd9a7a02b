//! Settings structures for autocomplete-cli configuration

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main settings structure matching the optional settings.yml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub outgoing: OutgoingSettings,
    pub endpoints: EndpointSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse settings from a YAML document
    pub fn from_yaml(content: &str) -> Result<Self> {
        let settings: Settings = serde_yaml::from_str(content)?;
        Ok(settings)
    }

    /// Merge with environment variables (AUTOCOMPLETE_* prefix)
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("AUTOCOMPLETE_REQUEST_TIMEOUT") {
            if let Some(secs) = parse_timeout(&val) {
                self.outgoing.request_timeout = Some(secs);
            }
        }
        if let Ok(val) = std::env::var("AUTOCOMPLETE_PROXY") {
            if !val.is_empty() {
                self.outgoing.proxies.all = Some(val);
            }
        }
    }
}

/// Timeout in seconds; negative and non-finite values are rejected
fn parse_timeout(val: &str) -> Option<f64> {
    val.trim()
        .parse::<f64>()
        .ok()
        .filter(|secs| secs.is_finite() && *secs >= 0.0)
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Request timeout in seconds (none = wait for the transport)
    pub request_timeout: Option<f64>,
    /// User agent string sent with every request
    pub user_agent: String,
    /// Verify SSL certificates
    pub verify_ssl: bool,
    /// Proxy settings
    pub proxies: ProxySettings,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: None,
            user_agent: format!("autocomplete-cli/{}", crate::VERSION),
            verify_ssl: true,
            proxies: ProxySettings::default(),
        }
    }
}

/// Proxy settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxySettings {
    pub http: Option<String>,
    pub https: Option<String>,
    pub all: Option<String>,
}

/// Base URLs of the upstream suggestion endpoints
///
/// YouTube shares the Google endpoint and is selected with `ds=yt`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointSettings {
    pub google: String,
    pub bing: String,
    pub amazon: String,
    pub duckduckgo: String,
}

impl Default for EndpointSettings {
    fn default() -> Self {
        Self {
            google: "https://suggestqueries.google.com/complete/search".to_string(),
            bing: "https://api.bing.com/qsml.aspx".to_string(),
            amazon: "https://completion.amazon.com/search/complete".to_string(),
            duckduckgo: "https://duckduckgo.com/ac/".to_string(),
        }
    }
}

impl EndpointSettings {
    /// Point every endpoint at one host, keeping the default paths
    pub fn with_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            google: format!("{}/complete/search", base),
            bing: format!("{}/qsml.aspx", base),
            amazon: format!("{}/search/complete", base),
            duckduckgo: format!("{}/ac/", base),
        }
    }
}
