//! End-to-end CSV ingestion.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use packslip_core::Order;

use crate::aggregate::aggregate_orders;
use crate::error::IngestError;
use crate::fields::ResolvedFields;
use crate::images::read_image_index;
use crate::reader::read_table;

/// Builds packing-slip orders from an orders CSV and an images CSV.
///
/// The image index is built first so every aggregated item can resolve
/// its image URL in the same pass.
///
/// # Errors
///
/// Returns [`IngestError::Csv`] if either stream fails to parse.
pub fn build_orders<O: Read, I: Read>(
    orders_csv: O,
    images_csv: I,
) -> Result<Vec<Order>, IngestError> {
    let images = read_image_index(images_csv)?;
    tracing::debug!(mappings = images.len(), "image index built");

    let table = read_table(orders_csv, "orders CSV")?;
    let fields = ResolvedFields::detect(&table.headers);
    tracing::debug!(rows = table.rows.len(), ?fields, "orders CSV read");

    let orders = aggregate_orders(&table, &fields, &images);
    tracing::info!(
        orders = orders.len(),
        rows = table.rows.len(),
        "aggregated orders"
    );
    Ok(orders)
}

/// [`build_orders`] over files on disk.
///
/// Both files are opened before any parsing starts, so a missing file
/// is reported without touching the other one.
///
/// # Errors
///
/// Returns [`IngestError::Io`] if either file cannot be opened, or
/// [`IngestError::Csv`] if either fails to parse.
pub fn build_orders_from_paths(
    orders_path: &Path,
    images_path: &Path,
) -> Result<Vec<Order>, IngestError> {
    let orders_file = open(orders_path)?;
    let images_file = open(images_path)?;
    build_orders(BufReader::new(orders_file), BufReader::new(images_file))
}

fn open(path: &Path) -> Result<File, IngestError> {
    File::open(path).map_err(|e| IngestError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    #[test]
    fn builds_orders_from_readers() {
        let orders_csv = "Order ID,Product Name,SKU,Qty\nA1,Widget,W1,2\n";
        let images_csv = "sku,image\nW1,http://img/w1.png\n";
        let orders = build_orders(orders_csv.as_bytes(), images_csv.as_bytes()).unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].items[0].image_url, "http://img/w1.png");
    }

    #[test]
    fn missing_orders_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let images = dir.path().join("images.csv");
        std::fs::write(&images, "sku,image\n").unwrap();

        let err =
            build_orders_from_paths(&dir.path().join("nope.csv"), &images).unwrap_err();
        assert!(matches!(err, IngestError::Io { .. }));
        assert!(err.to_string().contains("nope.csv"));
    }

    #[test]
    fn reads_orders_from_files() {
        let dir = tempfile::tempdir().unwrap();
        let orders_path = dir.path().join("orders.csv");
        let images_path = dir.path().join("images.csv");

        let mut orders_file = File::create(&orders_path).unwrap();
        writeln!(orders_file, "Order ID,Product Name,Qty").unwrap();
        writeln!(orders_file, "A1,Widget,3").unwrap();
        let mut images_file = File::create(&images_path).unwrap();
        writeln!(images_file, "sku,image").unwrap();

        let orders = build_orders_from_paths(&orders_path, &images_path).unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].item_quantity, 3);
    }
}
