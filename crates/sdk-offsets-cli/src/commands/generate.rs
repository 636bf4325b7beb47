//! Generate command: build the offset file.

use anyhow::{Context, Result, bail};
use owo_colors::OwoColorize;
use sdk_offsets_core::{GenerateReport, OffsetConfig, OffsetGenerator};
use tracing::info;

/// Run the generate command
pub fn run(config: OffsetConfig, strict: bool) -> Result<()> {
    let output = config.output.clone();
    let report = OffsetGenerator::new(config)
        .run()
        .with_context(|| format!("Failed to generate {}", output.display()))?;
    print_report(&report);

    let missing = report.not_found();
    if strict && !missing.is_empty() {
        bail!("{} labels not found: {}", missing.len(), missing.join(", "));
    }

    Ok(())
}

fn print_report(report: &GenerateReport) {
    println!(
        "Wrote {} offsets to {}",
        report.map.len(),
        report.output.display()
    );

    if report.previous_found {
        if report.changes.is_empty() {
            info!("No changes from previous output");
        } else {
            println!();
            println!("Changes from previous output:");
            for (label, change) in &report.changes {
                println!("  {:<40} {}", label, change.to_string().cyan());
            }
        }
    }

    let missing = report.not_found();
    if !missing.is_empty() {
        println!();
        println!("{} labels not found:", missing.len().yellow());
        for label in missing {
            println!("  {}", label.yellow());
        }
    }
}
