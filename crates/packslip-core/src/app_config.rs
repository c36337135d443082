use std::net::SocketAddr;

use crate::ConfigError;

/// Process-wide configuration resolved from environment variables.
///
/// Upstream credentials are optional at load time so the CSV-only CLI path
/// works without a Shopify/Correos account; [`AppConfig::tracking`] enforces
/// their presence where they are actually needed.
#[derive(Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Carrier name matched (case-insensitive substring) against each
    /// fulfillment's tracking company.
    pub carrier_filter: String,
    pub http_timeout_secs: u64,
    pub user_agent: String,
    /// Upper bound, per image URL, for the best-effort preflight performed
    /// before the slip artifact is assembled.
    pub export_image_timeout_ms: u64,
    pub shopify_store_domain: Option<String>,
    pub shopify_access_token: Option<String>,
    pub correos_client_id: Option<String>,
    pub correos_secret: Option<String>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("carrier_filter", &self.carrier_filter)
            .field("http_timeout_secs", &self.http_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("export_image_timeout_ms", &self.export_image_timeout_ms)
            .field("shopify_store_domain", &self.shopify_store_domain)
            .field(
                "shopify_access_token",
                &self.shopify_access_token.as_ref().map(|_| "[redacted]"),
            )
            .field("correos_client_id", &self.correos_client_id)
            .field(
                "correos_secret",
                &self.correos_secret.as_ref().map(|_| "[redacted]"),
            )
            .finish()
    }
}

impl AppConfig {
    /// Extracts the credentials required by the tracking half.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] naming the first absent
    /// credential.
    pub fn tracking(&self) -> Result<TrackingConfig, ConfigError> {
        let require = |value: &Option<String>, var: &str| -> Result<String, ConfigError> {
            value
                .clone()
                .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
        };

        Ok(TrackingConfig {
            store_domain: require(&self.shopify_store_domain, "SHOPIFY_STORE_DOMAIN")?,
            access_token: require(&self.shopify_access_token, "SHOPIFY_ACCESS_TOKEN")?,
            client_id: require(&self.correos_client_id, "CORREOS_CLIENT_ID")?,
            secret: require(&self.correos_secret, "CORREOS_SECRET")?,
        })
    }
}

/// Credentials for the commerce and carrier upstreams, all required.
#[derive(Clone)]
pub struct TrackingConfig {
    /// Shopify store domain, e.g. `my-store.myshopify.com` (no scheme).
    pub store_domain: String,
    pub access_token: String,
    pub client_id: String,
    pub secret: String,
}

impl std::fmt::Debug for TrackingConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrackingConfig")
            .field("store_domain", &self.store_domain)
            .field("access_token", &"[redacted]")
            .field("client_id", &self.client_id)
            .field("secret", &"[redacted]")
            .finish()
    }
}
