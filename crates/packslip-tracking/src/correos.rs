//! HTTP client for the Correos shipment-events API.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::TrackingError;
use crate::types::CorreosShipment;

const DEFAULT_BASE_URL: &str = "https://localizador.correos.es";

/// Status reported when the carrier has no events for a shipment yet.
pub const NO_STATUS: &str = "No status";

/// Client for the Correos shipment tracking endpoint.
///
/// Authenticates with HTTP Basic auth using the API client id and
/// secret. Use [`CorreosClient::with_base_url`] to point at a mock
/// server in tests.
pub struct CorreosClient {
    client: Client,
    client_id: String,
    secret: String,
    base_url: Url,
}

impl CorreosClient {
    /// Creates a client for the production Correos API.
    ///
    /// # Errors
    ///
    /// Returns [`TrackingError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        client_id: &str,
        secret: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, TrackingError> {
        Self::with_base_url(client_id, secret, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`TrackingError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`TrackingError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        client_id: &str,
        secret: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, TrackingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let parsed = Url::parse(base_url).map_err(|e| TrackingError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            client_id: client_id.to_owned(),
            secret: secret.to_owned(),
            base_url: parsed,
        })
    }

    /// Fetches the latest event summary for one tracking number.
    ///
    /// The endpoint is asked for the last event only (`indUltEvento=S`,
    /// Spanish-language summaries). Returns [`NO_STATUS`] when the
    /// carrier answers with an empty event list or an empty summary.
    ///
    /// # Errors
    ///
    /// - [`TrackingError::Http`] on network failure.
    /// - [`TrackingError::UnexpectedStatus`] on a non-2xx response.
    /// - [`TrackingError::Deserialize`] if the body does not match the
    ///   expected shape.
    pub async fn latest_status(&self, tracking: &str) -> Result<String, TrackingError> {
        let url = self.events_url(tracking);
        let response = self
            .client
            .get(url.clone())
            .basic_auth(&self.client_id, Some(&self.secret))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TrackingError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let shipments: Vec<CorreosShipment> =
            serde_json::from_str(&body).map_err(|e| TrackingError::Deserialize {
                context: format!("shipment events for {tracking}"),
                source: e,
            })?;

        Ok(shipments
            .into_iter()
            .next()
            .and_then(|shipment| shipment.resumen_ultimo)
            .filter(|summary| !summary.is_empty())
            .unwrap_or_else(|| NO_STATUS.to_string()))
    }

    fn events_url(&self, tracking: &str) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(&format!("/canonico/eventos_envio_servicio_auth/{tracking}"));
        url.query_pairs_mut()
            .append_pair("codIdioma", "ES")
            .append_pair("indUltEvento", "S");
        url
    }
}
