//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "sdk-offsets")]
#[command(version, about = "Generate ESP offsets from a JSON SDK dump")]
pub struct Cli {
    #[command(flatten)]
    pub config: ConfigArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Where the label table and documents come from
#[derive(Debug, Clone, Default, Args)]
pub struct ConfigArgs {
    /// TOML label table (defaults to the builtin table)
    #[arg(short, long, global = true, env = "SDK_OFFSETS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory containing the SDK JSON documents
    #[arg(long, global = true, env = "SDK_OFFSETS_SDK_DIR")]
    pub sdk_dir: Option<PathBuf>,

    /// Offset file to write
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Parse each document once per run
    #[arg(long, global = true)]
    pub cache: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate the offset file (default)
    Generate {
        /// Exit with an error if any label was not found
        #[arg(long)]
        strict: bool,
    },

    /// Look up a single field offset
    Offset {
        /// Document alias from the config, or a path to a JSON file
        document: String,
        owner: String,
        field: String,
    },

    /// Look up a single class/struct size
    Size {
        /// Document alias from the config, or a path to a JSON file
        document: String,
        owner: String,
    },

    /// Print the effective configuration as TOML
    Config,

    /// List every label and how it is computed
    List,
}
