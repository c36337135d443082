mod correos;
mod error;
mod service;
mod shopify;
mod types;

pub use correos::{CorreosClient, NO_STATUS};
pub use error::TrackingError;
pub use service::{filter_by_carrier, TrackingService, TRACKING_ERROR_STATUS};
pub use shopify::ShopifyClient;
pub use types::{
    CorreosShipment, ShopifyCustomer, ShopifyFulfillment, ShopifyOrder, ShopifyOrdersResponse,
};
