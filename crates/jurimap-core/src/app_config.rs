use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Process-wide configuration, sourced from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Category registry file; built-in defaults apply when absent.
    pub categories_path: PathBuf,
    pub user_agent: String,

    pub geocoder_url: String,
    pub geocoder_timeout_secs: u64,
    /// ISO country codes the geocoder is restricted to (comma-separated).
    pub country_codes: String,

    pub poi_url: String,
    /// Client-side timeout per POI query attempt.
    pub poi_timeout_secs: u64,
    /// Server-side query timeout; must stay below `poi_timeout_secs` so the
    /// upstream interpreter gives up before the client does.
    pub poi_server_timeout_secs: u64,
    /// Upstream response cap per category query.
    pub poi_max_results: u32,
    /// Total attempts per category query (first try included).
    pub poi_max_retries: u32,
    /// Base unit for retry sleeps: 429 waits 2× this, a timeout waits 1×.
    pub poi_backoff_base_secs: u64,

    pub inter_category_delay_ms: u64,
    pub default_radius_km: f64,
    pub max_radius_km: f64,
}
