//! Order enrichment: fulfilled orders joined with carrier status.

use packslip_core::TrackedOrder;

use crate::correos::CorreosClient;
use crate::error::TrackingError;
use crate::shopify::ShopifyClient;
use crate::types::ShopifyOrder;

/// Status reported for an order whose carrier lookup failed.
pub const TRACKING_ERROR_STATUS: &str = "Tracking error";

/// Fetches fulfilled orders and enriches each with its latest carrier
/// status.
pub struct TrackingService {
    shopify: ShopifyClient,
    correos: CorreosClient,
    carrier_filter: String,
}

impl TrackingService {
    #[must_use]
    pub fn new(shopify: ShopifyClient, correos: CorreosClient, carrier_filter: String) -> Self {
        Self {
            shopify,
            correos,
            carrier_filter,
        }
    }

    /// Fetches fulfilled orders, keeps the ones shipped with the
    /// configured carrier, and looks up each one's latest status.
    ///
    /// Lookups run strictly one at a time with no retries. A failed
    /// lookup degrades that record to [`TRACKING_ERROR_STATUS`] and the
    /// batch continues; output order follows the fetched order list.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`TrackingError`] only when the base order
    /// fetch itself fails.
    pub async fn fulfilled_order_statuses(&self) -> Result<Vec<TrackedOrder>, TrackingError> {
        let orders = self.shopify.fetch_fulfilled_orders().await?;
        let fetched = orders.len();
        let matching = filter_by_carrier(orders, &self.carrier_filter);
        tracing::debug!(
            fetched,
            matching = matching.len(),
            carrier = %self.carrier_filter,
            "filtered fulfilled orders"
        );

        let mut tracked = Vec::with_capacity(matching.len());
        for order in matching {
            // Guaranteed non-empty by the carrier filter.
            let tracking = order
                .first_fulfillment()
                .and_then(|f| f.tracking_number.clone())
                .unwrap_or_default();
            let customer = order
                .customer
                .as_ref()
                .and_then(|c| c.first_name.clone())
                .unwrap_or_default();

            let status = match self.correos.latest_status(&tracking).await {
                Ok(status) => status,
                Err(e) => {
                    tracing::warn!(
                        order = %order.name,
                        tracking = %tracking,
                        error = %e,
                        "carrier status lookup failed"
                    );
                    TRACKING_ERROR_STATUS.to_string()
                }
            };

            tracked.push(TrackedOrder {
                order_number: order.name,
                customer,
                tracking,
                status,
            });
        }

        tracing::info!(orders = tracked.len(), "enriched fulfilled orders");
        Ok(tracked)
    }
}

/// Keeps the orders whose first fulfillment has a tracking number and
/// was shipped by a company whose name contains `carrier`,
/// case-insensitively.
///
/// Only the first fulfillment is consulted; an order whose second
/// fulfillment matches is still dropped.
#[must_use]
pub fn filter_by_carrier(orders: Vec<ShopifyOrder>, carrier: &str) -> Vec<ShopifyOrder> {
    let needle = carrier.to_lowercase();
    orders
        .into_iter()
        .filter(|order| {
            order.first_fulfillment().is_some_and(|fulfillment| {
                let has_tracking = fulfillment
                    .tracking_number
                    .as_deref()
                    .is_some_and(|t| !t.is_empty());
                let carrier_matches = fulfillment
                    .tracking_company
                    .as_deref()
                    .is_some_and(|company| company.to_lowercase().contains(&needle));
                has_tracking && carrier_matches
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::types::{ShopifyCustomer, ShopifyFulfillment};

    use super::*;

    fn order(name: &str, fulfillments: Vec<ShopifyFulfillment>) -> ShopifyOrder {
        ShopifyOrder {
            name: name.to_string(),
            customer: Some(ShopifyCustomer {
                first_name: Some("Ana".to_string()),
            }),
            fulfillments,
        }
    }

    fn fulfillment(tracking: Option<&str>, company: Option<&str>) -> ShopifyFulfillment {
        ShopifyFulfillment {
            tracking_number: tracking.map(ToString::to_string),
            tracking_company: company.map(ToString::to_string),
        }
    }

    #[test]
    fn keeps_matching_carrier_case_insensitively() {
        let orders = vec![
            order("#1", vec![fulfillment(Some("PQ1"), Some("CORREOS EXPRESS"))]),
            order("#2", vec![fulfillment(Some("PQ2"), Some("correos"))]),
            order("#3", vec![fulfillment(Some("PQ3"), Some("UPS"))]),
        ];
        let kept = filter_by_carrier(orders, "correos");
        let names: Vec<&str> = kept.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["#1", "#2"]);
    }

    #[test]
    fn drops_orders_without_tracking_number() {
        let orders = vec![
            order("#1", vec![fulfillment(None, Some("Correos"))]),
            order("#2", vec![fulfillment(Some(""), Some("Correos"))]),
        ];
        assert!(filter_by_carrier(orders, "correos").is_empty());
    }

    #[test]
    fn drops_orders_without_fulfillments() {
        let orders = vec![order("#1", vec![])];
        assert!(filter_by_carrier(orders, "correos").is_empty());
    }

    #[test]
    fn drops_orders_with_no_tracking_company() {
        let orders = vec![order("#1", vec![fulfillment(Some("PQ1"), None)])];
        assert!(filter_by_carrier(orders, "correos").is_empty());
    }

    #[test]
    fn only_first_fulfillment_decides() {
        let orders = vec![order(
            "#1",
            vec![
                fulfillment(Some("PQ1"), Some("UPS")),
                fulfillment(Some("PQ2"), Some("Correos")),
            ],
        )];
        assert!(filter_by_carrier(orders, "correos").is_empty());
    }
}
