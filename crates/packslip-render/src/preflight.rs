//! Best-effort image availability probing before export.
//!
//! The export artifact references images by URL, so a dead link would
//! only surface when the document is opened or printed. Each distinct
//! item image URL is probed once with a HEAD request under a short
//! per-request timeout; URLs that fail are blanked so the renderer
//! substitutes the placeholder. This is a bounded best-effort wait, not
//! a completion signal: a host slower than the timeout degrades to the
//! placeholder.

use std::collections::HashSet;
use std::time::Duration;

use packslip_core::Order;

use crate::error::RenderError;

/// Probe settings for [`preflight_images`].
#[derive(Debug, Clone)]
pub struct PreflightOptions {
    /// Per-request timeout for one image probe.
    pub timeout: Duration,
    pub user_agent: String,
}

/// Outcome summary of one preflight pass.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImagePreflight {
    /// Distinct URLs probed.
    pub probed: usize,
    /// Item image URLs blanked because their probe failed.
    pub swapped: usize,
}

/// Probes every distinct item image URL and blanks the ones that are
/// unreachable or answer with a non-success status.
///
/// Probing is sequential; order processing is single-threaded end to
/// end and a slip export is not latency-sensitive.
///
/// # Errors
///
/// Returns [`RenderError::Http`] if the probe client cannot be built.
/// Individual probe failures are not errors; they degrade that URL to
/// the placeholder.
pub async fn preflight_images(
    orders: &mut [Order],
    options: &PreflightOptions,
) -> Result<ImagePreflight, RenderError> {
    let mut distinct: Vec<String> = Vec::new();
    {
        let mut seen: HashSet<&str> = HashSet::new();
        for order in orders.iter() {
            for item in &order.items {
                if !item.image_url.is_empty() && seen.insert(item.image_url.as_str()) {
                    distinct.push(item.image_url.clone());
                }
            }
        }
    }
    if distinct.is_empty() {
        return Ok(ImagePreflight::default());
    }

    let client = reqwest::Client::builder()
        .timeout(options.timeout)
        .user_agent(options.user_agent.clone())
        .build()?;

    let mut unreachable: HashSet<String> = HashSet::new();
    for url in &distinct {
        match client.head(url.as_str()).send().await {
            Ok(response) if response.status().is_success() => {}
            Ok(response) => {
                tracing::warn!(
                    url = %url,
                    status = response.status().as_u16(),
                    "image probe failed"
                );
                unreachable.insert(url.clone());
            }
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "image probe failed");
                unreachable.insert(url.clone());
            }
        }
    }

    let mut swapped = 0usize;
    for order in orders.iter_mut() {
        for item in &mut order.items {
            if unreachable.contains(&item.image_url) {
                item.image_url.clear();
                swapped += 1;
            }
        }
    }

    let report = ImagePreflight {
        probed: distinct.len(),
        swapped,
    };
    tracing::debug!(
        probed = report.probed,
        swapped = report.swapped,
        "image preflight finished"
    );
    Ok(report)
}
