use log::warn;
use shared::{ApiConfig, OriginPolicy, PageLocation};
use web_sys::window;

pub fn current_location() -> Option<PageLocation> {
    let location = window()?.location();
    let protocol = location.protocol().ok()?;
    let hostname = location.hostname().ok()?;
    // Empty when the page is on the scheme's default port
    let port = location.port().unwrap_or_default();
    Some(PageLocation::from_parts(&protocol, &hostname, &port))
}

/// Resolves the backend origin for the running page. Call once at startup
/// and pass the result down.
pub fn detect_api_config(policy: &OriginPolicy) -> ApiConfig {
    match current_location() {
        Some(location) => ApiConfig::detect(&location, policy),
        None => {
            // No window (e.g. a worker); assume the local backend
            let fallback = format!("http://{}:{}", policy.loopback_host, policy.backend_port);
            warn!("Page location unavailable, using {fallback}");
            ApiConfig::new(fallback)
        }
    }
}
