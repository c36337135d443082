pub mod error;
pub mod export;
pub mod preflight;
pub mod slip;

pub use error::RenderError;
pub use export::{export_document, write_artifact, ARTIFACT_FILE_NAME};
pub use preflight::{preflight_images, ImagePreflight, PreflightOptions};
pub use slip::{render_slip, PLACEHOLDER_IMAGE_URL};
