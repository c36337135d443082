//! Header-keyed CSV reading.
//!
//! Order exports come from several storefronts with different column
//! layouts, so rows are kept as header-to-value maps and column meaning
//! is decided later by [`crate::fields`].

use std::collections::HashMap;
use std::io::Read;

use csv::ReaderBuilder;

use crate::error::IngestError;

/// A parsed CSV file: trimmed header names plus one map per data row.
#[derive(Debug, Clone, Default)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<HashMap<String, String>>,
}

impl CsvTable {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Reads a headered CSV stream into a [`CsvTable`].
///
/// Rows shorter than the header row simply omit the trailing columns;
/// blank lines are skipped. `context` names the input in error messages
/// (for example `"orders CSV"`).
///
/// # Errors
///
/// Returns [`IngestError::Csv`] if the stream is not parseable as CSV.
pub fn read_table<R: Read>(reader: R, context: &str) -> Result<CsvTable, IngestError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()
        .map_err(|e| IngestError::Csv {
            context: context.to_string(),
            source: e,
        })?
        .iter()
        .map(|header| header.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record.map_err(|e| IngestError::Csv {
            context: context.to_string(),
            source: e,
        })?;
        let mut row = HashMap::with_capacity(headers.len());
        for (position, header) in headers.iter().enumerate() {
            if let Some(value) = record.get(position) {
                row.insert(header.clone(), value.to_string());
            }
        }
        rows.push(row);
    }

    Ok(CsvTable { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_headers_and_rows() {
        let input = "Order ID,Product Name\nA1,Widget\nA2,Gadget\n";
        let table = read_table(input.as_bytes(), "orders CSV").unwrap();
        assert_eq!(table.headers, vec!["Order ID", "Product Name"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0]["Order ID"], "A1");
        assert_eq!(table.rows[1]["Product Name"], "Gadget");
    }

    #[test]
    fn trims_header_whitespace() {
        let input = " Order ID , Qty \nA1,2\n";
        let table = read_table(input.as_bytes(), "orders CSV").unwrap();
        assert_eq!(table.headers, vec!["Order ID", "Qty"]);
        assert_eq!(table.rows[0]["Qty"], "2");
    }

    #[test]
    fn short_rows_omit_missing_columns() {
        let input = "Order ID,Product Name,Qty\nA1,Widget\n";
        let table = read_table(input.as_bytes(), "orders CSV").unwrap();
        assert_eq!(table.rows[0].get("Order ID").map(String::as_str), Some("A1"));
        assert_eq!(table.rows[0].get("Qty"), None);
    }

    #[test]
    fn header_only_input_yields_no_rows() {
        let table = read_table("Order ID,Qty\n".as_bytes(), "orders CSV").unwrap();
        assert!(table.is_empty());
        assert_eq!(table.headers.len(), 2);
    }

    #[test]
    fn quoted_fields_keep_embedded_commas() {
        let input = "Order ID,Address\nA1,\"12 Main St, Springfield\"\n";
        let table = read_table(input.as_bytes(), "orders CSV").unwrap();
        assert_eq!(table.rows[0]["Address"], "12 Main St, Springfield");
    }

    #[test]
    fn invalid_utf8_reports_context() {
        let input: &[u8] = b"Order ID,Name\nA1,\xff\xfe\n";
        let err = read_table(input, "orders CSV").unwrap_err();
        assert!(err.to_string().contains("orders CSV"));
    }
}
