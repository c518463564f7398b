use anyhow::Result;
use clap::Subcommand;
use listing_probe::ItemApi;
use listing_probe::models::NewItem;

use crate::output::{self, OutputFormat};

/// Item commands
#[derive(Subcommand, Debug)]
pub enum ItemCommands {
    /// Create an item
    Create {
        /// The item name
        #[clap(long)]
        name: String,
        /// The item price
        #[clap(long, allow_hyphen_values = true)]
        price: i64,
    },
    /// Get the records stored under an item id
    Get {
        /// The item ID
        id: String,
    },
    /// Get the statistics of an item
    Stats {
        /// The item ID
        id: String,
    },
}

/// Executes an item command
///
/// Responses are printed whatever their status; only transport failures are
/// errors.
pub async fn execute(
    api: &ItemApi,
    seller_id: i64,
    cmd: ItemCommands,
    format: OutputFormat,
) -> Result<()> {
    let response = match cmd {
        ItemCommands::Create { name, price } => {
            api.create_item(&NewItem::new(seller_id, name, price))
                .await?
        }
        ItemCommands::Get { id } => api.get_item_info(&id).await?,
        ItemCommands::Stats { id } => api.get_item_statistics(&id).await?,
    };

    output::print_response(&response, format)
}
