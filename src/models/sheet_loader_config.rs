use std::borrow::Cow;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetLoaderConfig {
    /// Scheme and host of the spreadsheet service, without a trailing slash.
    pub base_url: Cow<'static, str>,
    /// Upper bound on the whole request, including reading the body.
    pub timeout_secs: u64,
    pub user_agent: Cow<'static, str>,
}

impl SheetLoaderConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        self.base_url = Cow::Owned(base_url.trim_end_matches('/').to_string());
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for SheetLoaderConfig {
    fn default() -> Self {
        crate::DEFAULT_SHEET_LOADER_CONFIG.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_public_service() {
        let config = SheetLoaderConfig::default();
        assert_eq!(config.base_url, "https://docs.google.com");
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_with_base_url_strips_trailing_slash() {
        let config = SheetLoaderConfig::default().with_base_url("http://127.0.0.1:8080/");
        assert_eq!(config.base_url, "http://127.0.0.1:8080");
    }
}
