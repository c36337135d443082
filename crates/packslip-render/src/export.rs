//! Multi-page export artifact.
//!
//! The artifact is a standalone HTML document, one packing slip per
//! printed page, written under a fixed file name so repeated exports
//! replace the previous one.

use std::io::Write as _;
use std::path::{Path, PathBuf};

use packslip_core::Order;

use crate::error::RenderError;
use crate::slip::render_slip;

/// Fixed artifact file name inside the output directory.
pub const ARTIFACT_FILE_NAME: &str = "packing_slips.html";

const STYLESHEET: &str = "\
body { font-family: Arial, Helvetica, sans-serif; font-size: 12px; color: #111; margin: 0; }
.packing-slip { padding: 24px; }
.slip-header { display: flex; justify-content: space-between; }
.slip-header h1 { font-size: 20px; letter-spacing: 1px; margin: 0 0 8px 0; }
.slip-header p { margin: 2px 0; }
.customer { text-align: right; }
.summary { margin: 12px 0; }
.summary span { margin-right: 16px; }
table.items { width: 100%; border-collapse: collapse; }
table.items th, table.items td { border: 1px solid #999; padding: 4px 6px; text-align: left; vertical-align: middle; }
table.items img { width: 60px; height: 60px; object-fit: contain; }
footer { margin-top: 16px; text-align: center; color: #555; }
.page-break { page-break-after: always; }
@media print { body { -webkit-print-color-adjust: exact; } }";

/// Assembles the full export document from already-preflighted orders.
///
/// Each slip goes on its own printed page; the page break comes after
/// every slip except the last.
///
/// # Errors
///
/// Returns [`RenderError::NoOrders`] when the order list is empty, so
/// an empty artifact is never produced.
pub fn export_document(orders: &[Order]) -> Result<String, RenderError> {
    if orders.is_empty() {
        return Err(RenderError::NoOrders);
    }

    let mut document = String::with_capacity(2048 * orders.len());
    document.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    document.push_str("<meta charset=\"utf-8\">\n<title>Packing Slips</title>\n");
    document.push_str("<style>\n");
    document.push_str(STYLESHEET);
    document.push_str("\n</style>\n</head>\n<body>\n");

    let last = orders.len() - 1;
    for (position, order) in orders.iter().enumerate() {
        if position < last {
            document.push_str("<div class=\"page-break\">\n");
        } else {
            document.push_str("<div>\n");
        }
        document.push_str(&render_slip(order));
        document.push_str("</div>\n");
    }

    document.push_str("</body>\n</html>\n");
    Ok(document)
}

/// Writes the document as [`ARTIFACT_FILE_NAME`] under `out_dir`.
///
/// The document goes to a temporary file first and is persisted onto
/// the final name only once fully written, so a failed export never
/// leaves a partial artifact behind.
///
/// # Errors
///
/// Returns [`RenderError::Write`] if the directory cannot be created or
/// the file cannot be written.
pub fn write_artifact(document: &str, out_dir: &Path) -> Result<PathBuf, RenderError> {
    let write_err = |source: std::io::Error, path: &Path| RenderError::Write {
        path: path.to_path_buf(),
        source,
    };

    std::fs::create_dir_all(out_dir).map_err(|e| write_err(e, out_dir))?;
    let path = out_dir.join(ARTIFACT_FILE_NAME);

    let mut temp = tempfile::NamedTempFile::new_in(out_dir).map_err(|e| write_err(e, &path))?;
    temp.write_all(document.as_bytes())
        .map_err(|e| write_err(e, &path))?;
    temp.persist(&path)
        .map_err(|e| write_err(e.error, &path))?;

    tracing::info!(path = %path.display(), bytes = document.len(), "export artifact written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use packslip_core::OrderItem;

    use super::*;

    fn order(id: &str) -> Order {
        let mut order = Order::new(
            id.to_string(),
            "2024-01-05".to_string(),
            "Ana Torres".to_string(),
            String::new(),
            String::new(),
        );
        order.items.push(OrderItem {
            name: "Widget".to_string(),
            sku: "W1".to_string(),
            seller_sku: "W1".to_string(),
            quantity: 1,
            order_id: id.to_string(),
            image_url: String::new(),
        });
        order.finalize_quantities();
        order
    }

    #[test]
    fn empty_order_list_is_refused() {
        assert!(matches!(export_document(&[]), Err(RenderError::NoOrders)));
    }

    #[test]
    fn one_slip_per_order_with_breaks_between() {
        let orders = vec![order("A1"), order("A2"), order("A3")];
        let document = export_document(&orders).unwrap();
        assert!(document.starts_with("<!DOCTYPE html>"));
        assert_eq!(document.matches("class=\"packing-slip\"").count(), 3);
        assert_eq!(document.matches("<div class=\"page-break\">").count(), 2);
        assert!(document.contains("Order #: A1"));
        assert!(document.contains("Order #: A3"));
    }

    #[test]
    fn single_order_has_no_page_break() {
        let document = export_document(&[order("A1")]).unwrap();
        assert_eq!(document.matches("<div class=\"page-break\">").count(), 0);
    }

    #[test]
    fn writes_artifact_under_fixed_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_artifact("<html></html>", dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), ARTIFACT_FILE_NAME);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<html></html>");
    }

    #[test]
    fn overwrites_previous_artifact() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact("first", dir.path()).unwrap();
        let path = write_artifact("second", dir.path()).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn creates_missing_output_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("out/slips");
        let path = write_artifact("doc", &nested).unwrap();
        assert!(path.starts_with(&nested));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "doc");
    }
}
