use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Loads `.env` files via `dotenvy` before reading the process environment.
///
/// # Errors
///
/// Returns `ConfigError` if a value fails to parse.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files; use it when
/// the caller manages env setup itself.
///
/// # Errors
///
/// Returns `ConfigError` if a value fails to parse.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupling the parsing from the actual environment lets tests drive it
/// with a plain `HashMap` lookup instead of mutating process env vars.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

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

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let bind_addr = parse_addr("PACKSLIP_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("PACKSLIP_LOG_LEVEL", "info");
    let carrier_filter = or_default("PACKSLIP_CARRIER_FILTER", "correos");
    let http_timeout_secs = parse_u64("PACKSLIP_HTTP_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("PACKSLIP_USER_AGENT", "packslip/0.1 (shipment-tracking)");
    let export_image_timeout_ms = parse_u64("PACKSLIP_EXPORT_IMAGE_TIMEOUT_MS", "300")?;

    let shopify_store_domain = lookup("SHOPIFY_STORE_DOMAIN").ok();
    let shopify_access_token = lookup("SHOPIFY_ACCESS_TOKEN").ok();
    let correos_client_id = lookup("CORREOS_CLIENT_ID").ok();
    let correos_secret = lookup("CORREOS_SECRET").ok();

    Ok(AppConfig {
        bind_addr,
        log_level,
        carrier_filter,
        http_timeout_secs,
        user_agent,
        export_image_timeout_ms,
        shopify_store_domain,
        shopify_access_token,
        correos_client_id,
        correos_secret,
    })
}
