//! The `track` command: one enrichment pass, printed.

use packslip_core::AppConfig;
use packslip_tracking::{CorreosClient, ShopifyClient, TrackingService};

pub(crate) async fn run_track(config: &AppConfig, json: bool) -> anyhow::Result<()> {
    let tracking = config.tracking()?;
    let shopify = ShopifyClient::new(
        &tracking.store_domain,
        &tracking.access_token,
        config.http_timeout_secs,
        &config.user_agent,
    )?;
    let correos = CorreosClient::new(
        &tracking.client_id,
        &tracking.secret,
        config.http_timeout_secs,
        &config.user_agent,
    )?;
    let service = TrackingService::new(shopify, correos, config.carrier_filter.clone());

    let tracked = service.fulfilled_order_statuses().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&tracked)?);
    } else if tracked.is_empty() {
        println!("no fulfilled {} orders found", config.carrier_filter);
    } else {
        for order in &tracked {
            println!(
                "{}  {}  {}  {}",
                order.order_number, order.customer, order.tracking, order.status
            );
        }
    }
    Ok(())
}
