use crate::origin::{DeploymentMode, OriginPolicy, PageLocation};

/// Backend origin resolved once at startup and handed to everything that
/// issues requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
    mode: DeploymentMode,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            mode: DeploymentMode::SameOrigin,
        }
    }

    pub fn detect(location: &PageLocation, policy: &OriginPolicy) -> Self {
        let (mode, base_url) = policy.resolve(location);
        Self { base_url, mode }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn mode(&self) -> DeploymentMode {
        self.mode
    }

    /// Appends `path` as-is; callers own slashes and encoding.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn asset_url(&self, path: &str) -> String {
        if path.starts_with("http") {
            path.to_string()
        } else {
            self.url_for(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for_does_not_normalize() {
        let config = ApiConfig::new("http://localhost:8000/");
        assert_eq!(config.url_for("/chat"), "http://localhost:8000//chat");
        assert_eq!(config.url_for("chat?q=a b"), "http://localhost:8000/chat?q=a b");
    }

    #[test]
    fn test_asset_url_keeps_absolute_paths() {
        let config = ApiConfig::new("https://app.replit.app");
        assert_eq!(config.asset_url("https://cdn.example.com/a.png"), "https://cdn.example.com/a.png");
        assert_eq!(config.asset_url("/static/a.png"), "https://app.replit.app/static/a.png");
    }

    #[test]
    fn test_detect_records_mode() {
        let location = PageLocation::new("http:", "localhost", Some(3000));
        let config = ApiConfig::detect(&location, &OriginPolicy::default());
        assert_eq!(config.mode(), DeploymentMode::LocalDevelopment);
        assert_eq!(config.base_url(), "http://localhost:8000");
    }
}
