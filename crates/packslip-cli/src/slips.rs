//! The `slips` command: CSV files in, packing-slip document out.

use std::path::Path;
use std::time::Duration;

use packslip_core::AppConfig;
use packslip_ingest::build_orders_from_paths;
use packslip_render::{export_document, preflight_images, write_artifact, PreflightOptions};

pub(crate) async fn run_slips(
    config: &AppConfig,
    orders_path: &Path,
    images_path: &Path,
    out_dir: &Path,
    no_image_check: bool,
) -> anyhow::Result<()> {
    let mut orders = build_orders_from_paths(orders_path, images_path)?;

    let mut swapped = 0usize;
    if no_image_check {
        tracing::debug!("image preflight skipped");
    } else {
        let report = preflight_images(
            &mut orders,
            &PreflightOptions {
                timeout: Duration::from_millis(config.export_image_timeout_ms),
                user_agent: config.user_agent.clone(),
            },
        )
        .await?;
        swapped = report.swapped;
    }

    let document = export_document(&orders)?;
    let artifact = write_artifact(&document, out_dir)?;

    let item_count: usize = orders.iter().map(|order| order.items.len()).sum();
    println!("processed {} orders ({item_count} items)", orders.len());
    if swapped > 0 {
        println!("{swapped} item images unreachable; placeholder used");
    }
    println!("wrote {}", artifact.display());
    Ok(())
}
