//! Client configuration: where the applications API lives.

/// Environment variable that overrides the API base URL.
pub const BASE_URL_ENV: &str = "INTERNSHIP_API_URL";

/// Base URL used when [`BASE_URL_ENV`] is unset or blank.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Settings a [`crate::Client`] is built from. Resolved once and never
/// revisited, so two clients with different configs can run side by side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ClientConfig {
    /// Creates a config for the given base URL. A trailing slash is dropped
    /// so paths like `/applications` can be appended directly.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Reads [`BASE_URL_ENV`], falling back to [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Self {
        Self::from_override(std::env::var(BASE_URL_ENV).ok().as_deref())
    }

    /// Resolves an optional override the same way [`ClientConfig::from_env`] does.
    pub fn from_override(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(url) if !url.is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
