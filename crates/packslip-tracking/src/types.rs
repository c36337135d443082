//! Raw upstream API shapes.
//!
//! Only the fields this service reads are modeled; everything else in
//! the upstream payloads is ignored. Fields the APIs may omit or null
//! out are `Option` or defaulted.

use serde::Deserialize;

/// Top-level envelope of the Shopify Admin orders endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ShopifyOrdersResponse {
    #[serde(default)]
    pub orders: Vec<ShopifyOrder>,
}

/// One Shopify order, reduced to the fields used for tracking.
#[derive(Debug, Clone, Deserialize)]
pub struct ShopifyOrder {
    /// Human-facing order number, e.g. `"#1001"`.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub customer: Option<ShopifyCustomer>,
    #[serde(default)]
    pub fulfillments: Vec<ShopifyFulfillment>,
}

impl ShopifyOrder {
    /// The first fulfillment, which is the one carrier decisions are
    /// based on.
    #[must_use]
    pub fn first_fulfillment(&self) -> Option<&ShopifyFulfillment> {
        self.fulfillments.first()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShopifyCustomer {
    #[serde(default)]
    pub first_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShopifyFulfillment {
    #[serde(default)]
    pub tracking_number: Option<String>,
    #[serde(default)]
    pub tracking_company: Option<String>,
}

/// One element of the Correos shipment-events payload. The endpoint
/// returns a JSON array; only the first element is consulted.
#[derive(Debug, Clone, Deserialize)]
pub struct CorreosShipment {
    #[serde(default)]
    pub resumen_ultimo: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shopify_order_parses_with_unknown_fields() {
        let raw = r##"{
            "id": 123,
            "name": "#1001",
            "total_price": "10.00",
            "customer": {"first_name": "Ana", "last_name": "Torres"},
            "fulfillments": [
                {"tracking_number": "PQ1", "tracking_company": "Correos Express", "status": "success"}
            ]
        }"##;
        let order: ShopifyOrder = serde_json::from_str(raw).unwrap();
        assert_eq!(order.name, "#1001");
        assert_eq!(
            order.customer.as_ref().and_then(|c| c.first_name.as_deref()),
            Some("Ana")
        );
        let fulfillment = order.first_fulfillment().unwrap();
        assert_eq!(fulfillment.tracking_number.as_deref(), Some("PQ1"));
    }

    #[test]
    fn shopify_order_tolerates_missing_everything() {
        let order: ShopifyOrder = serde_json::from_str("{}").unwrap();
        assert_eq!(order.name, "");
        assert!(order.customer.is_none());
        assert!(order.first_fulfillment().is_none());
    }

    #[test]
    fn shopify_fulfillment_tolerates_null_tracking() {
        let raw = r#"{"tracking_number": null, "tracking_company": null}"#;
        let fulfillment: ShopifyFulfillment = serde_json::from_str(raw).unwrap();
        assert!(fulfillment.tracking_number.is_none());
        assert!(fulfillment.tracking_company.is_none());
    }

    #[test]
    fn correos_shipment_parses_summary() {
        let raw = r#"[{"resumen_ultimo": "Entregado", "fecha": "2024-01-05"}]"#;
        let shipments: Vec<CorreosShipment> = serde_json::from_str(raw).unwrap();
        assert_eq!(shipments[0].resumen_ultimo.as_deref(), Some("Entregado"));
    }
}
