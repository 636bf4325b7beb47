//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod config;
pub mod generate;
pub mod lookup;

use anyhow::{Context, Result};
use sdk_offsets_core::OffsetConfig;
use tracing::debug;

use crate::cli::ConfigArgs;

/// Build the effective configuration: file or builtin table, then overrides
pub fn load_config(args: &ConfigArgs) -> Result<OffsetConfig> {
    let mut config = match &args.config {
        Some(path) => OffsetConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => {
            debug!("Using builtin label table");
            OffsetConfig::builtin()
        }
    };

    if let Some(sdk_dir) = &args.sdk_dir {
        config.sdk_dir = sdk_dir.clone();
    }
    if let Some(output) = &args.output {
        config.output = output.clone();
    }
    if args.cache {
        config.cache_documents = true;
    }

    Ok(config)
}
