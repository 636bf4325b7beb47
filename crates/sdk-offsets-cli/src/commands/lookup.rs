//! Single offset/size lookup commands.

use std::path::PathBuf;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use sdk_offsets_core::{OffsetConfig, OffsetValue, lookup_offset, lookup_size};

/// Resolve a config alias, falling back to treating `document` as a path
pub fn resolve_document(config: &OffsetConfig, document: &str) -> PathBuf {
    config
        .document_path(document)
        .unwrap_or_else(|| PathBuf::from(document))
}

/// Run the offset command
pub fn run_offset(config: &OffsetConfig, document: &str, owner: &str, field: &str) -> Result<()> {
    let path = resolve_document(config, document);
    let value = lookup_offset(&path, owner, field)
        .with_context(|| format!("Offset lookup failed for {}.{}", owner, field))?;

    print_value(&format!("{}.{}", owner, field), value);
    Ok(())
}

/// Run the size command
pub fn run_size(config: &OffsetConfig, document: &str, owner: &str) -> Result<()> {
    let path = resolve_document(config, document);
    let value =
        lookup_size(&path, owner).with_context(|| format!("Size lookup failed for {}", owner))?;

    print_value(&format!("sizeof({})", owner), value);
    Ok(())
}

fn print_value(name: &str, value: OffsetValue) {
    match value {
        OffsetValue::Found(_) => println!("{}: {}", name, value.green()),
        OffsetValue::NotFound => println!("{}: {}", name, value.yellow()),
    }
}
