use anyhow::Result;
use clap::Subcommand;
use listing_probe::ItemApi;

use crate::output::{self, OutputFormat};

/// Seller commands
#[derive(Subcommand, Debug)]
pub enum SellerCommands {
    /// List every item of a seller
    Items {
        /// The seller ID (default: the configured seller)
        #[clap(allow_hyphen_values = true)]
        seller_id: Option<i64>,
    },
}

/// Executes a seller command
pub async fn execute(
    api: &ItemApi,
    default_seller_id: i64,
    cmd: SellerCommands,
    format: OutputFormat,
) -> Result<()> {
    match cmd {
        SellerCommands::Items { seller_id } => {
            let response = api
                .get_seller_items(seller_id.unwrap_or(default_seller_id))
                .await?;
            output::print_response(&response, format)
        }
    }
}
