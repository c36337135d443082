pub mod aggregate;
pub mod error;
pub mod fields;
pub mod images;
pub mod pipeline;
pub mod reader;

pub use aggregate::aggregate_orders;
pub use error::IngestError;
pub use fields::{resolve_address_fields, resolve_field, ResolvedFields};
pub use images::{read_image_index, ImageIndex};
pub use pipeline::{build_orders, build_orders_from_paths};
pub use reader::{read_table, CsvTable};
