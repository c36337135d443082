//! Single packing-slip markup.

use packslip_core::Order;

/// Shown for items whose image URL is empty or failed preflight.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://placehold.co/60x60/f0f0f0/cccccc?text=No+Img";

/// Renders one order as a self-contained packing-slip fragment.
///
/// Layout: a header with the slip title, order number and date next to
/// the customer block (blank customer lines are omitted), a one-line
/// quantity summary, the items table and a footer. Every interpolated
/// value is HTML-escaped.
#[must_use]
pub fn render_slip(order: &Order) -> String {
    let mut html = String::with_capacity(1024);

    html.push_str("<section class=\"packing-slip\">\n");
    html.push_str("  <header class=\"slip-header\">\n");
    html.push_str("    <div>\n");
    html.push_str("      <h1>PACKING SLIP</h1>\n");
    html.push_str(&format!(
        "      <p>Order #: {}</p>\n",
        escape_html(&order.order_id)
    ));
    html.push_str(&format!(
        "      <p>Date: {}</p>\n",
        escape_html(&order.order_date)
    ));
    html.push_str("    </div>\n");
    html.push_str("    <div class=\"customer\">\n");
    if !order.customer_name.is_empty() {
        html.push_str(&format!(
            "      <p><strong>{}</strong></p>\n",
            escape_html(&order.customer_name)
        ));
    }
    if !order.customer_address.is_empty() {
        html.push_str(&format!(
            "      <p>{}</p>\n",
            escape_html(&order.customer_address)
        ));
    }
    if !order.customer_phone.is_empty() {
        html.push_str(&format!(
            "      <p>{}</p>\n",
            escape_html(&order.customer_phone)
        ));
    }
    html.push_str("    </div>\n");
    html.push_str("  </header>\n");

    html.push_str(&format!(
        "  <div class=\"summary\"><span>Order quantity: 1</span><span>Product quantity: {}</span><span>Item quantity: {}</span></div>\n",
        order.product_quantity, order.item_quantity
    ));

    html.push_str("  <table class=\"items\">\n");
    html.push_str("    <thead>\n");
    html.push_str("      <tr><th>No.</th><th>Product Image</th><th>Product Name</th><th>SKU</th><th>Seller SKU</th><th>Qty</th><th>Order ID</th></tr>\n");
    html.push_str("    </thead>\n");
    html.push_str("    <tbody>\n");
    for (position, item) in order.items.iter().enumerate() {
        let image_url = if item.image_url.is_empty() {
            PLACEHOLDER_IMAGE_URL
        } else {
            item.image_url.as_str()
        };
        let alt = if item.name.is_empty() {
            "Product Image"
        } else {
            item.name.as_str()
        };
        html.push_str(&format!(
            "      <tr><td>{no}</td><td><img src=\"{src}\" alt=\"{alt}\"></td><td>{name}</td><td>{sku}</td><td>{seller_sku}</td><td>{qty}</td><td>{order_id}</td></tr>\n",
            no = position + 1,
            src = escape_html(image_url),
            alt = escape_html(alt),
            name = escape_html(&item.name),
            sku = escape_html(&item.sku),
            seller_sku = escape_html(&item.seller_sku),
            qty = item.quantity,
            order_id = escape_html(&item.order_id),
        ));
    }
    html.push_str("    </tbody>\n");
    html.push_str("  </table>\n");
    html.push_str("  <footer>Thank you for your order!</footer>\n");
    html.push_str("</section>\n");

    html
}

/// Escapes the five HTML-significant characters.
#[must_use]
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use packslip_core::OrderItem;

    use super::*;

    fn sample_order() -> Order {
        let mut order = Order::new(
            "A1".to_string(),
            "2024-01-05".to_string(),
            "Ana Torres".to_string(),
            "12 Main St, Springfield".to_string(),
            "600111222".to_string(),
        );
        order.items.push(OrderItem {
            name: "Widget".to_string(),
            sku: "W1".to_string(),
            seller_sku: "SELLER-W1".to_string(),
            quantity: 3,
            order_id: "A1".to_string(),
            image_url: "http://img/w1.png".to_string(),
        });
        order.items.push(OrderItem {
            name: "Gadget".to_string(),
            sku: "G1".to_string(),
            seller_sku: "G1".to_string(),
            quantity: 1,
            order_id: "A1".to_string(),
            image_url: String::new(),
        });
        order.finalize_quantities();
        order
    }

    #[test]
    fn renders_header_and_summary() {
        let html = render_slip(&sample_order());
        assert!(html.contains("PACKING SLIP"));
        assert!(html.contains("Order #: A1"));
        assert!(html.contains("Date: 2024-01-05"));
        assert!(html.contains("<strong>Ana Torres</strong>"));
        assert!(html.contains("Product quantity: 2"));
        assert!(html.contains("Item quantity: 4"));
    }

    #[test]
    fn rows_are_numbered_from_one() {
        let html = render_slip(&sample_order());
        assert!(html.contains("<tr><td>1</td>"));
        assert!(html.contains("<tr><td>2</td>"));
    }

    #[test]
    fn empty_image_url_falls_back_to_placeholder() {
        let html = render_slip(&sample_order());
        assert!(html.contains("src=\"http://img/w1.png\""));
        assert!(html.contains(PLACEHOLDER_IMAGE_URL));
    }

    #[test]
    fn blank_customer_lines_are_omitted() {
        let order = Order::new(
            "A1".to_string(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
        );
        let html = render_slip(&order);
        assert!(!html.contains("<strong>"));
        assert!(html.contains("Order #: A1"));
        assert!(html.contains("Date: </p>"));
    }

    #[test]
    fn interpolated_values_are_escaped() {
        let mut order = sample_order();
        order.customer_name = "Ana <script>".to_string();
        order.items[0].name = "Widget & Co \"Deluxe\"".to_string();
        let html = render_slip(&order);
        assert!(html.contains("Ana &lt;script&gt;"));
        assert!(html.contains("Widget &amp; Co &quot;Deluxe&quot;"));
        assert!(!html.contains("<script>"));
    }

    // ---- escape_html ----

    #[test]
    fn escape_html_covers_all_significant_chars() {
        assert_eq!(escape_html("a&b<c>d\"e'f"), "a&amp;b&lt;c&gt;d&quot;e&#39;f");
    }

    #[test]
    fn escape_html_passes_plain_text_through() {
        assert_eq!(escape_html("plain text 123"), "plain text 123");
    }
}
