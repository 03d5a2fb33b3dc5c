//! Client configuration.
//!
//! Plain data with serde support so embedding applications can load it from
//! whatever configuration source they already use. The library itself reads
//! no files and no environment variables.

use serde::{Deserialize, Serialize};

/// Public endpoint of the Pinboard v1 API.
pub const DEFAULT_BASE_URL: &str = "https://api.pinboard.in/v1";

/// Where requests go and how their URLs are shaped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// API root; endpoint paths such as `/posts/all` are appended to it.
    pub base_url: String,
    /// Prefix for every request URL, for relays that forward to the API.
    pub proxy: Option<String>,
    /// Percent-encode the whole API URL before appending it to `proxy`.
    /// Ignored when no proxy is set.
    pub encode_url: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            proxy: None,
            encode_url: false,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_proxy(mut self, proxy: impl Into<String>, encode_url: bool) -> Self {
        self.proxy = Some(proxy.into());
        self.encode_url = encode_url;
        self
    }

    pub(crate) fn normalized(mut self) -> Self {
        let trimmed = self.base_url.trim_end_matches('/').len();
        self.base_url.truncate(trimmed);
        self.proxy = self.proxy.filter(|p| !p.is_empty());
        self
    }
}
