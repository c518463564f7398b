use anyhow::Result;
use clap::ValueEnum;
use listing_probe::{ApiResponse, Outcome, Scenario, ScenarioReport, ScenarioStatus, Summary};
use serde_json::{Value, json};

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

/// A body as JSON when it parses, as a plain string otherwise
fn body_value(response: &ApiResponse) -> Value {
    response
        .json_value()
        .unwrap_or_else(|_| Value::String(response.text().to_string()))
}

/// Prints a raw service response in the specified format
pub fn print_response(response: &ApiResponse, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => {
            println!("HTTP {}", response.status());
            match response.json_value() {
                Ok(body) => println!("{}", serde_json::to_string_pretty(&body)?),
                Err(_) => println!("{}", response.text()),
            }
        }
        OutputFormat::Json => {
            let value = json!({
                "status": response.status().as_u16(),
                "body": body_value(response),
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }
    Ok(())
}

/// Prints every scenario with its status
pub fn print_catalogue(format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => {
            let width = Scenario::ALL
                .iter()
                .map(|s| s.name().len())
                .max()
                .unwrap_or(4);
            println!("{:<width$}  STATUS    DESCRIPTION", "NAME");
            for scenario in Scenario::ALL {
                let status = match scenario.status() {
                    ScenarioStatus::Enabled => "enabled",
                    ScenarioStatus::Disabled { .. } => "disabled",
                };
                println!(
                    "{:<width$}  {:<8}  {}",
                    scenario.name(),
                    status,
                    scenario.description(),
                );
                if let ScenarioStatus::Disabled { reason } = scenario.status() {
                    println!("{:<width$}            ({})", "", reason);
                }
            }
        }
        OutputFormat::Json => {
            let entries: Vec<Value> = Scenario::ALL
                .into_iter()
                .map(|scenario| {
                    let reason = match scenario.status() {
                        ScenarioStatus::Enabled => None,
                        ScenarioStatus::Disabled { reason } => Some(reason),
                    };
                    json!({
                        "name": scenario,
                        "description": scenario.description(),
                        "enabled": scenario.is_enabled(),
                        "disabled_reason": reason,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
    }
    Ok(())
}

/// Prints scenario reports followed by a summary line
pub fn print_reports(reports: &[ScenarioReport], format: OutputFormat) -> Result<()> {
    let summary = Summary::of(reports);

    match format {
        OutputFormat::Human => {
            for report in reports {
                match &report.outcome {
                    Outcome::Passed => println!("PASS  {}", report.scenario),
                    Outcome::Failed(e) => println!("FAIL  {}: {}", report.scenario, e),
                    Outcome::Skipped { reason } => {
                        println!("SKIP  {} ({})", report.scenario, reason)
                    }
                }
            }
            println!(
                "\n{} passed, {} failed, {} skipped",
                summary.passed, summary.failed, summary.skipped
            );
        }
        OutputFormat::Json => {
            let results: Vec<Value> = reports
                .iter()
                .map(|report| match &report.outcome {
                    Outcome::Passed => json!({"name": report.scenario, "outcome": "passed"}),
                    Outcome::Failed(e) => json!({
                        "name": report.scenario,
                        "outcome": "failed",
                        "step": e.step(),
                        "error": e.to_string(),
                    }),
                    Outcome::Skipped { reason } => json!({
                        "name": report.scenario,
                        "outcome": "skipped",
                        "reason": reason,
                    }),
                })
                .collect();
            let value = json!({ "results": results, "summary": summary });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }
    Ok(())
}
