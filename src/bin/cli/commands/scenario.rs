use anyhow::{Result, bail};
use clap::Subcommand;
use listing_probe::{Scenario, ScenarioRunner, Selection, Summary};

use crate::output::{self, OutputFormat};

/// Scenario commands
#[derive(Subcommand, Debug)]
pub enum ScenarioCommands {
    /// List the scenario catalogue
    List,
    /// Run scenarios against the service
    Run {
        /// Also run scenarios that are disabled
        #[clap(long)]
        include_disabled: bool,
        /// Scenarios to run (default: all of them)
        #[clap(value_parser = clap::value_parser!(Scenario))]
        names: Vec<Scenario>,
    },
}

/// Executes a scenario command
///
/// `run` fails when at least one scenario failed, so the exit status can gate
/// a pipeline.
pub async fn execute(
    runner: &ScenarioRunner,
    cmd: ScenarioCommands,
    format: OutputFormat,
) -> Result<()> {
    match cmd {
        ScenarioCommands::List => output::print_catalogue(format),
        ScenarioCommands::Run {
            include_disabled,
            names,
        } => {
            let selection = Selection {
                only: names,
                include_disabled,
            };
            let reports = runner.run_selection(&selection).await;
            output::print_reports(&reports, format)?;

            let summary = Summary::of(&reports);
            if summary.failed > 0 {
                bail!("{} of {} scenarios failed", summary.failed, reports.len());
            }
            Ok(())
        }
    }
}
