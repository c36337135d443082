use serde::{Deserialize, Serialize};

/// Bucket id for rows whose order-id column is missing or empty.
///
/// Rows without an explicit order id still need a slip; they all group under
/// this literal id rather than being dropped.
pub const UNKNOWN_ORDER_ID: &str = "Unknown";

/// One line item on a packing slip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub name: String,
    /// Marketplace SKU. Empty when the column could not be resolved.
    pub sku: String,
    /// Seller-assigned SKU. Falls back to `sku` when the export has no
    /// seller-sku column, so the slip always shows the most specific code
    /// available.
    pub seller_sku: String,
    /// Always at least 1; unparseable quantity cells default to 1.
    pub quantity: u32,
    /// Id of the order this line belongs to. Matches the parent
    /// [`Order::order_id`].
    pub order_id: String,
    /// Product photo URL from the image index. Empty when no mapping matched;
    /// the renderer substitutes a placeholder.
    pub image_url: String,
}

/// A customer order aggregated from one or more CSV line-item rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,
    /// Order date exactly as exported; no date parsing is attempted.
    pub order_date: String,
    pub customer_name: String,
    /// Comma-joined address columns in header order, empty components
    /// dropped.
    pub customer_address: String,
    pub customer_phone: String,
    /// Number of distinct line items (`items.len()`).
    pub product_quantity: usize,
    /// Sum of all item quantities.
    pub item_quantity: u32,
    /// Line items in input row order.
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Creates an order shell from the first row seen for an order id.
    ///
    /// Quantities start at zero and are finalized once all rows are consumed
    /// (see [`Order::finalize_quantities`]).
    #[must_use]
    pub fn new(
        order_id: String,
        order_date: String,
        customer_name: String,
        customer_address: String,
        customer_phone: String,
    ) -> Self {
        Self {
            order_id,
            order_date,
            customer_name,
            customer_address,
            customer_phone,
            product_quantity: 0,
            item_quantity: 0,
            items: Vec::new(),
        }
    }

    /// Number of distinct line items.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of all line-item quantities.
    #[must_use]
    pub fn total_item_quantity(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Recomputes the derived quantity fields from `items`.
    ///
    /// After this call, `product_quantity == items.len()` and
    /// `item_quantity` equals the sum of item quantities.
    pub fn finalize_quantities(&mut self) {
        self.product_quantity = self.item_count();
        self.item_quantity = self.total_item_quantity();
    }
}

/// A fulfilled order enriched with its latest carrier tracking status.
///
/// This is the record shape served by `GET /api/orders`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedOrder {
    /// Shopify order name, e.g. `"#1042"`.
    pub order_number: String,
    /// Customer first name; empty when Shopify has no customer on the order.
    pub customer: String,
    /// Carrier tracking number from the order's first fulfillment.
    pub tracking: String,
    /// Latest status summary from the carrier, or one of the sentinel
    /// literals `"No status"` / `"Tracking error"`.
    pub status: String,
}
