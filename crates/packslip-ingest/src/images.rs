//! The SKU-to-image-URL index.
//!
//! The images CSV is positional: column one is the product key, column
//! two the image URL, and the header row is skipped without inspecting
//! its names. Duplicate keys keep the last URL seen.

use std::collections::HashMap;
use std::io::Read;

use csv::ReaderBuilder;

use crate::error::IngestError;

/// Lookup table from product key (SKU, seller SKU or name) to image URL.
#[derive(Debug, Clone, Default)]
pub struct ImageIndex {
    map: HashMap<String, String>,
}

impl ImageIndex {
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.map.get(key).map(String::as_str)
    }

    /// First non-empty URL among the candidate keys, tried in order.
    ///
    /// A key mapped to an empty URL does not stop the search, so a row
    /// like `W1,` in the images CSV still lets a later candidate match.
    #[must_use]
    pub fn resolve(&self, candidates: &[&str]) -> Option<&str> {
        candidates
            .iter()
            .find_map(|key| self.get(key).filter(|url| !url.is_empty()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    fn insert(&mut self, key: String, url: String) {
        self.map.insert(key, url);
    }
}

/// Reads the images CSV into an [`ImageIndex`].
///
/// Rows with fewer than two columns or an empty key are skipped; keys
/// and URLs are trimmed. An empty stream yields an empty index, which
/// is valid and simply leaves every item without an image.
///
/// # Errors
///
/// Returns [`IngestError::Csv`] if the stream is not parseable as CSV.
pub fn read_image_index<R: Read>(reader: R) -> Result<ImageIndex, IngestError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut index = ImageIndex::default();
    for record in csv_reader.records() {
        let record = record.map_err(|e| IngestError::Csv {
            context: "images CSV".to_string(),
            source: e,
        })?;
        if record.len() < 2 {
            continue;
        }
        let key = record.get(0).unwrap_or("").trim();
        if key.is_empty() {
            continue;
        }
        let url = record.get(1).unwrap_or("").trim();
        index.insert(key.to_string(), url.to_string());
    }

    Ok(index)
}
