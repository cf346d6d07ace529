use std::env;

/// Default backend location, matching the deployment this client was
/// written against.
pub const DEFAULT_BASE_URL: &str = "http://turbo:8000";

/// Environment variable consulted by [`ZImageConfig::from_env`].
pub const BASE_URL_ENV: &str = "ZIMAGE_API_URL";

#[derive(Debug, Clone)]
pub struct ZImageConfig {
    pub base_url: Option<String>,
}

impl Default for ZImageConfig {
    fn default() -> Self {
        ZImageConfig { base_url: None }
    }
}

impl ZImageConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let base_url = env::var(BASE_URL_ENV).ok();

        ZImageConfig { base_url }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Resolve the effective base URL, falling back to
    /// [`DEFAULT_BASE_URL`]. Trailing slashes are trimmed so endpoint
    /// paths can always be appended with a single `/`.
    pub fn resolved_base_url(&self) -> String {
        self.base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
            .to_string()
    }
}
