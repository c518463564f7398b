mod commands;
mod output;

use clap::{Parser, Subcommand};
use listing_probe::config::{self, CliArgs};
use listing_probe::ScenarioRunner;
use output::OutputFormat;
use std::process;
use tracing_subscriber::EnvFilter;

/// Functional checks against the item-listing service
#[derive(Parser, Debug)]
#[clap(
    name = "listing-probe",
    about = "Functional checks against the item-listing service"
)]
struct Cli {
    #[command(flatten)]
    settings: CliArgs,

    /// Output format
    #[clap(long, value_enum, default_value_t = OutputFormat::Human, global = true)]
    format: OutputFormat,

    /// Write logs as JSON lines
    #[clap(long, env = "LISTING_PROBE_JSON_LOGS", global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Call the item endpoints directly
    #[command(subcommand)]
    Item(commands::item::ItemCommands),
    /// Call the seller endpoints directly
    #[command(subcommand)]
    Seller(commands::seller::SellerCommands),
    /// List and run scenarios
    #[command(subcommand)]
    Scenario(commands::scenario::ScenarioCommands),
}

/// Sets up the tracing subscriber on stderr
///
/// `RUST_LOG` wins over `--debug` when it is set.
fn init_logging(debug: bool, json: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Formats an error chain for stderr
fn format_error(err: &anyhow::Error) -> String {
    let message = format!("{err:#}");

    if message.contains("error sending request") || message.contains("tcp connect error") {
        return format!("Could not reach the listing service.\n  {message}");
    }

    message
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.settings.debug, cli.json_logs);

    let config = config::get_config(&cli.settings);
    let runner = match ScenarioRunner::from_config(&config) {
        Ok(runner) => runner,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Item(cmd) => {
            commands::item::execute(runner.api(), runner.seller_id(), cmd, cli.format).await
        }
        Commands::Seller(cmd) => {
            commands::seller::execute(runner.api(), runner.seller_id(), cmd, cli.format).await
        }
        Commands::Scenario(cmd) => commands::scenario::execute(&runner, cmd, cli.format).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", format_error(&e));
        process::exit(1);
    }
}
