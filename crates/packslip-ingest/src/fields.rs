//! Keyword-based column detection.
//!
//! Storefront exports never agree on column names ("Order ID", "Buyer
//! Order Number", "orderid", ...), so each logical field is found by
//! scanning the header row for the first header whose lowercased text
//! contains one of a fixed set of keywords. Address-like columns are
//! collected as a group instead of a single winner.

/// Keywords identifying the order id column.
pub const ORDER_ID_KEYWORDS: &[&str] = &["order id", "order number", "orderid"];

/// Keywords identifying the order date column.
pub const ORDER_DATE_KEYWORDS: &[&str] = &["order date", "date", "created at", "created"];

/// Keywords identifying the product name column.
pub const PRODUCT_NAME_KEYWORDS: &[&str] = &["product name", "sku name", "item name"];

/// Keywords identifying the SKU column.
pub const SKU_KEYWORDS: &[&str] = &["sku id", "sku", "product id"];

/// Keywords identifying the seller SKU column.
pub const SELLER_SKU_KEYWORDS: &[&str] = &["seller sku", "seller id", "seller_sku"];

/// Keywords identifying the quantity column.
pub const QUANTITY_KEYWORDS: &[&str] = &["quantity", "qty", "item quantity"];

/// Keywords identifying the customer name column.
pub const CUSTOMER_NAME_KEYWORDS: &[&str] =
    &["recipient name", "buyer name", "customer name", "receiver name"];

/// Keywords identifying the phone column.
pub const PHONE_KEYWORDS: &[&str] = &["phone", "mobile"];

/// Keywords identifying address-like columns.
pub const ADDRESS_KEYWORDS: &[&str] = &[
    "address", "street", "province", "city", "state", "district", "country", "zip", "postal",
];

/// Finds the first header whose lowercased text contains any keyword.
///
/// Headers win in column order, not keyword order: with headers
/// `["Buyer Order Number", "orderid"]` the first column is chosen even
/// though `"orderid"` appears earlier in the keyword list.
#[must_use]
pub fn resolve_field<'a>(headers: &'a [String], keywords: &[&str]) -> Option<&'a str> {
    headers
        .iter()
        .map(String::as_str)
        .find(|header| contains_any(header, keywords))
}

/// Collects every header matching an address keyword, in column order.
#[must_use]
pub fn resolve_address_fields(headers: &[String]) -> Vec<String> {
    headers
        .iter()
        .filter(|header| contains_any(header, ADDRESS_KEYWORDS))
        .cloned()
        .collect()
}

fn contains_any(header: &str, keywords: &[&str]) -> bool {
    let lowered = header.to_lowercase();
    keywords.iter().any(|keyword| lowered.contains(keyword))
}

/// The header names resolved for one orders CSV.
///
/// `None` means no column matched; lookups against that field later
/// yield empty strings rather than failing the run.
#[derive(Debug, Clone, Default)]
pub struct ResolvedFields {
    pub order_id: Option<String>,
    pub order_date: Option<String>,
    pub product_name: Option<String>,
    pub sku: Option<String>,
    pub seller_sku: Option<String>,
    pub quantity: Option<String>,
    pub customer_name: Option<String>,
    pub phone: Option<String>,
    pub address: Vec<String>,
}

impl ResolvedFields {
    /// Resolves every logical field against one header row.
    #[must_use]
    pub fn detect(headers: &[String]) -> Self {
        let field =
            |keywords: &[&str]| resolve_field(headers, keywords).map(ToString::to_string);
        Self {
            order_id: field(ORDER_ID_KEYWORDS),
            order_date: field(ORDER_DATE_KEYWORDS),
            product_name: field(PRODUCT_NAME_KEYWORDS),
            sku: field(SKU_KEYWORDS),
            seller_sku: field(SELLER_SKU_KEYWORDS),
            quantity: field(QUANTITY_KEYWORDS),
            customer_name: field(CUSTOMER_NAME_KEYWORDS),
            phone: field(PHONE_KEYWORDS),
            address: resolve_address_fields(headers),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    // ---- resolve_field ----

    #[test]
    fn matches_case_insensitively() {
        let h = headers(&["ORDER ID", "Product Name"]);
        assert_eq!(resolve_field(&h, ORDER_ID_KEYWORDS), Some("ORDER ID"));
    }

    #[test]
    fn matches_keyword_as_substring() {
        let h = headers(&["Buyer Order Number"]);
        assert_eq!(resolve_field(&h, ORDER_ID_KEYWORDS), Some("Buyer Order Number"));
    }

    #[test]
    fn first_header_wins_over_keyword_order() {
        // "order number" is the second keyword, but column order decides.
        let h = headers(&["Buyer Order Number", "orderid"]);
        assert_eq!(resolve_field(&h, ORDER_ID_KEYWORDS), Some("Buyer Order Number"));
    }

    #[test]
    fn returns_none_without_match() {
        let h = headers(&["Carrier", "Weight"]);
        assert_eq!(resolve_field(&h, ORDER_ID_KEYWORDS), None);
    }

    #[test]
    fn qty_matches_quantity_keywords() {
        let h = headers(&["Qty"]);
        assert_eq!(resolve_field(&h, QUANTITY_KEYWORDS), Some("Qty"));
    }

    #[test]
    fn seller_sku_column_can_shadow_sku() {
        // "Seller SKU" contains the bare "sku" keyword, so when it comes
        // first it also wins the SKU resolution. Inherited ambiguity of
        // substring matching; exports with both columns usually list the
        // plain SKU first.
        let h = headers(&["Seller SKU", "SKU"]);
        assert_eq!(resolve_field(&h, SKU_KEYWORDS), Some("Seller SKU"));
        assert_eq!(resolve_field(&h, SELLER_SKU_KEYWORDS), Some("Seller SKU"));
    }

    // ---- resolve_address_fields ----

    #[test]
    fn collects_address_columns_in_order() {
        let h = headers(&["Street Name", "Qty", "City", "Zip Code"]);
        assert_eq!(resolve_address_fields(&h), vec!["Street Name", "City", "Zip Code"]);
    }

    #[test]
    fn no_address_columns_yields_empty_vec() {
        let h = headers(&["Order ID", "Qty"]);
        assert!(resolve_address_fields(&h).is_empty());
    }

    // ---- ResolvedFields::detect ----

    #[test]
    fn detect_resolves_all_fields() {
        let h = headers(&[
            "Order ID",
            "Created At",
            "Product Name",
            "SKU",
            "Seller SKU",
            "Quantity",
            "Recipient Name",
            "Phone Number",
            "Street",
            "City",
        ]);
        let fields = ResolvedFields::detect(&h);
        assert_eq!(fields.order_id.as_deref(), Some("Order ID"));
        assert_eq!(fields.order_date.as_deref(), Some("Created At"));
        assert_eq!(fields.product_name.as_deref(), Some("Product Name"));
        assert_eq!(fields.sku.as_deref(), Some("SKU"));
        assert_eq!(fields.seller_sku.as_deref(), Some("Seller SKU"));
        assert_eq!(fields.quantity.as_deref(), Some("Quantity"));
        assert_eq!(fields.customer_name.as_deref(), Some("Recipient Name"));
        assert_eq!(fields.phone.as_deref(), Some("Phone Number"));
        assert_eq!(fields.address, vec!["Street", "City"]);
    }

    #[test]
    fn detect_tolerates_missing_columns() {
        let fields = ResolvedFields::detect(&headers(&["Product Name"]));
        assert_eq!(fields.product_name.as_deref(), Some("Product Name"));
        assert_eq!(fields.order_id, None);
        assert_eq!(fields.quantity, None);
        assert!(fields.address.is_empty());
    }
}
