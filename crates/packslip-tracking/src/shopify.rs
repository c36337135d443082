//! HTTP client for the Shopify Admin REST API.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::TrackingError;
use crate::types::{ShopifyOrder, ShopifyOrdersResponse};

const API_VERSION: &str = "2023-07";
const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// Client for the Shopify Admin orders endpoint.
///
/// Use [`ShopifyClient::new`] against a real store or
/// [`ShopifyClient::with_base_url`] to point at a mock server in tests.
pub struct ShopifyClient {
    client: Client,
    access_token: String,
    base_url: Url,
}

impl ShopifyClient {
    /// Creates a client for the store at `https://{store_domain}`.
    ///
    /// # Errors
    ///
    /// Returns [`TrackingError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`TrackingError::InvalidBaseUrl`] if the
    /// store domain does not form a valid URL.
    pub fn new(
        store_domain: &str,
        access_token: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, TrackingError> {
        Self::with_base_url(
            access_token,
            timeout_secs,
            user_agent,
            &format!("https://{store_domain}"),
        )
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`TrackingError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`TrackingError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        access_token: &str,
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
            access_token: access_token.to_owned(),
            base_url: parsed,
        })
    }

    /// Fetches every fulfilled order, regardless of order status.
    ///
    /// Carrier filtering is a separate, pure step
    /// ([`crate::filter_by_carrier`]); this call returns the list as the
    /// API sends it.
    ///
    /// # Errors
    ///
    /// - [`TrackingError::Http`] on network failure.
    /// - [`TrackingError::UnexpectedStatus`] on a non-2xx response.
    /// - [`TrackingError::Deserialize`] if the body does not match the
    ///   expected shape.
    pub async fn fetch_fulfilled_orders(&self) -> Result<Vec<ShopifyOrder>, TrackingError> {
        let url = self.orders_url();
        let response = self
            .client
            .get(url.clone())
            .header(ACCESS_TOKEN_HEADER, &self.access_token)
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
        let parsed: ShopifyOrdersResponse =
            serde_json::from_str(&body).map_err(|e| TrackingError::Deserialize {
                context: "orders.json".to_string(),
                source: e,
            })?;
        Ok(parsed.orders)
    }

    fn orders_url(&self) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(&format!("/admin/api/{API_VERSION}/orders.json"));
        url.query_pairs_mut()
            .append_pair("status", "any")
            .append_pair("fulfillment_status", "fulfilled");
        url
    }
}
