//! Row-to-order aggregation.
//!
//! Each CSV row is one line item. Rows sharing an order id collapse
//! into a single [`Order`] whose header fields (date, customer, address,
//! phone) come from the first row seen for that id.

use std::collections::HashMap;

use packslip_core::{Order, OrderItem, UNKNOWN_ORDER_ID};

use crate::fields::ResolvedFields;
use crate::images::ImageIndex;
use crate::reader::CsvTable;

/// Groups the rows of an orders CSV into orders, first-seen order ids
/// first.
///
/// Rows with an empty order id all land in a shared
/// [`UNKNOWN_ORDER_ID`] order rather than being dropped.
#[must_use]
pub fn aggregate_orders(
    table: &CsvTable,
    fields: &ResolvedFields,
    images: &ImageIndex,
) -> Vec<Order> {
    let mut orders: Vec<Order> = Vec::new();
    let mut slot_by_id: HashMap<String, usize> = HashMap::new();

    for row in &table.rows {
        let raw_id = field_value(row, fields.order_id.as_deref());
        let order_id = if raw_id.is_empty() { UNKNOWN_ORDER_ID } else { raw_id };

        let slot = match slot_by_id.get(order_id) {
            Some(&slot) => slot,
            None => {
                orders.push(Order::new(
                    order_id.to_string(),
                    field_value(row, fields.order_date.as_deref()).to_string(),
                    field_value(row, fields.customer_name.as_deref()).to_string(),
                    join_address(row, &fields.address),
                    field_value(row, fields.phone.as_deref()).to_string(),
                ));
                let slot = orders.len() - 1;
                slot_by_id.insert(order_id.to_string(), slot);
                slot
            }
        };

        let name = field_value(row, fields.product_name.as_deref());
        let sku = field_value(row, fields.sku.as_deref());
        let seller_sku_raw = field_value(row, fields.seller_sku.as_deref());
        let seller_sku = if seller_sku_raw.is_empty() { sku } else { seller_sku_raw };

        let product_key = [seller_sku, sku, name]
            .into_iter()
            .find(|candidate| !candidate.is_empty())
            .unwrap_or("");
        let image_url = images
            .resolve(&[product_key, sku, seller_sku])
            .unwrap_or("")
            .to_string();

        orders[slot].items.push(OrderItem {
            name: name.to_string(),
            sku: sku.to_string(),
            seller_sku: seller_sku.to_string(),
            quantity: parse_quantity(field_value(row, fields.quantity.as_deref())),
            order_id: order_id.to_string(),
            image_url,
        });
    }

    for order in &mut orders {
        order.finalize_quantities();
    }
    orders
}

fn field_value<'a>(row: &'a HashMap<String, String>, field: Option<&str>) -> &'a str {
    field
        .and_then(|name| row.get(name))
        .map(String::as_str)
        .unwrap_or("")
}

/// Joins the row's address column values with `", "`, dropping values
/// that are empty or whitespace-only.
fn join_address(row: &HashMap<String, String>, address_fields: &[String]) -> String {
    address_fields
        .iter()
        .filter_map(|field| row.get(field))
        .map(String::as_str)
        .filter(|value| !value.trim().is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parses a quantity cell. Anything that is not a positive integer,
/// including an absent or blank cell, counts as 1.
fn parse_quantity(raw: &str) -> u32 {
    match raw.trim().parse::<u32>() {
        Ok(quantity) if quantity >= 1 => quantity,
        _ => 1,
    }
}

#[cfg(test)]
#[path = "aggregate_test.rs"]
mod tests;
