use std::env;
use std::path::Path;
use std::time::Duration;

// Default configuration constants
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:9090";
pub const DEFAULT_PROVIDER: &str = "ec2";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Providers the pricing backend knows how to scrape.
pub const SUPPORTED_PROVIDERS: &[&str] = &["ec2", "gce", "azure"];

/// Runtime settings collected from the environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub api_base_url: String,
    pub provider: String,
    pub timeout: Duration,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            api_base_url: get_api_base_url(),
            provider: get_provider(),
            timeout: get_timeout(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            provider: DEFAULT_PROVIDER.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        if let Err(e) = dotenvy::from_path(Path::new(path)) {
            tracing::warn!(%e, path, "Could not load env file");
        }
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_api_base_url() -> String {
    sanitize_base_url(&env::var("PRICING_API_BASE_URL").unwrap_or_default())
}

pub fn get_provider() -> String {
    let raw = env::var("PRICING_PROVIDER").unwrap_or_default();
    let provider = raw.trim().to_lowercase();
    if provider.is_empty() {
        DEFAULT_PROVIDER.to_string()
    } else {
        provider
    }
}

pub fn get_timeout() -> Duration {
    let secs = env::var("PRICING_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|s| *s > 0)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);
    Duration::from_secs(secs)
}

pub fn sanitize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}
