mod slips;
mod track;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "packslip")]
#[command(about = "Packing slips from storefront CSV exports, plus carrier tracking")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Build the packing-slip document from an orders CSV and an images CSV.
    Slips {
        /// Orders CSV export, one row per line item.
        orders: PathBuf,
        /// Two-column product-key,image-URL CSV.
        images: PathBuf,
        /// Directory the artifact is written into.
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
        /// Skip the image reachability preflight (offline use).
        #[arg(long)]
        no_image_check: bool,
    },
    /// Fetch fulfilled orders and print each with its carrier status.
    Track {
        /// Print the JSON array instead of one line per order.
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = packslip_core::load_app_config()?;

    match cli.command {
        Commands::Slips {
            orders,
            images,
            out_dir,
            no_image_check,
        } => slips::run_slips(&config, &orders, &images, &out_dir, no_image_check).await,
        Commands::Track { json } => track::run_track(&config, json).await,
    }
}
