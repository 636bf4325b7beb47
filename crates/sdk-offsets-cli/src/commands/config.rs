//! Config and list commands.

use anyhow::Result;
use sdk_offsets_core::{LookupSpec, OffsetConfig, format_hex};

/// Print the effective configuration as TOML
pub fn run_show(config: &OffsetConfig) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}

/// List every label with its lookup
pub fn run_list(config: &OffsetConfig) -> Result<()> {
    for (label, spec) in &config.entries {
        println!("{:<40} {:<8} {}", label, spec.kind(), describe(spec));
    }
    println!();
    println!(
        "{} entries, {} documents in {}",
        config.entries.len(),
        config.documents.len(),
        config.sdk_dir.display()
    );
    Ok(())
}

fn describe(spec: &LookupSpec) -> String {
    match spec {
        LookupSpec::Offset {
            document,
            owner,
            field,
        } => format!("{}: {}.{}", document, owner, field),
        LookupSpec::Size { document, owner } => format!("{}: {}", document, owner),
        LookupSpec::Literal { value } => format!("{} ({})", value, format_hex(*value)),
    }
}
