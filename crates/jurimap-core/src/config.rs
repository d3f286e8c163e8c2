use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid or inconsistent.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid or inconsistent.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_f64 = |var: &str, default: &str| -> Result<f64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<f64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("JURIMAP_ENV", "development"));
    let bind_addr = parse_addr("JURIMAP_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("JURIMAP_LOG_LEVEL", "info");
    let categories_path = PathBuf::from(or_default(
        "JURIMAP_CATEGORIES_PATH",
        "./config/categories.yaml",
    ));
    let user_agent = or_default("JURIMAP_USER_AGENT", "jurimap/0.1 (legal-services-search)");

    let geocoder_url = or_default(
        "JURIMAP_GEOCODER_URL",
        "https://nominatim.openstreetmap.org/search",
    );
    let geocoder_timeout_secs = parse_u64("JURIMAP_GEOCODER_TIMEOUT_SECS", "10")?;
    let country_codes = or_default("JURIMAP_COUNTRY_CODES", "in");

    let poi_url = or_default("JURIMAP_POI_URL", "https://overpass-api.de/api/interpreter");
    let poi_timeout_secs = parse_u64("JURIMAP_POI_TIMEOUT_SECS", "20")?;
    let poi_server_timeout_secs = parse_u64("JURIMAP_POI_SERVER_TIMEOUT_SECS", "15")?;
    let poi_max_results = parse_u32("JURIMAP_POI_MAX_RESULTS", "100")?;
    let poi_max_retries = parse_u32("JURIMAP_POI_MAX_RETRIES", "2")?;
    let poi_backoff_base_secs = parse_u64("JURIMAP_POI_BACKOFF_BASE_SECS", "1")?;

    let inter_category_delay_ms = parse_u64("JURIMAP_INTER_CATEGORY_DELAY_MS", "500")?;
    let default_radius_km = parse_f64("JURIMAP_DEFAULT_RADIUS_KM", "5.0")?;
    let max_radius_km = parse_f64("JURIMAP_MAX_RADIUS_KM", "20.0")?;

    if poi_server_timeout_secs >= poi_timeout_secs {
        return Err(ConfigError::InvalidEnvVar {
            var: "JURIMAP_POI_SERVER_TIMEOUT_SECS".to_string(),
            reason: format!(
                "server-side timeout ({poi_server_timeout_secs}s) must be shorter than the \
                 client timeout ({poi_timeout_secs}s)"
            ),
        });
    }

    if poi_max_retries == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "JURIMAP_POI_MAX_RETRIES".to_string(),
            reason: "at least one query attempt is required".to_string(),
        });
    }

    if !(default_radius_km > 0.0) || default_radius_km > max_radius_km {
        return Err(ConfigError::InvalidEnvVar {
            var: "JURIMAP_DEFAULT_RADIUS_KM".to_string(),
            reason: format!("must be in (0, {max_radius_km}], got {default_radius_km}"),
        });
    }

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        categories_path,
        user_agent,
        geocoder_url,
        geocoder_timeout_secs,
        country_codes,
        poi_url,
        poi_timeout_secs,
        poi_server_timeout_secs,
        poi_max_results,
        poi_max_retries,
        poi_backoff_base_secs,
        inter_category_delay_ms,
        default_radius_km,
        max_radius_km,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}
