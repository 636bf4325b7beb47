//! # sdk-offsets-core
//!
//! Core library for the SDK offset generator.
//!
//! This crate provides:
//! - SDK JSON document parsing and class/struct descriptor lookups
//! - Field offset and class size lookups with an explicit "not found" value
//! - The label table configuration (builtin, builder, or TOML file)
//! - Offset map assembly, JSON output and comparison with the previous output

pub mod config;
pub mod error;
pub mod export;
pub mod generator;
pub mod offset;
pub mod sdk;

pub use config::{DEFAULT_OUTPUT, DEFAULT_SDK_DIR, LookupSpec, OffsetConfig, OffsetConfigBuilder};
pub use error::{Error, Result};
pub use export::{read_offset_map, write_offset_map};
pub use generator::{GenerateReport, OffsetGenerator, assemble, evaluate};
pub use offset::{
    NOT_FOUND, OffsetChange, OffsetMap, OffsetValue, compare_offset_maps, lookup_offset,
    lookup_size,
};
pub use sdk::{
    CachedLoader, ClassDescriptor, DocumentSource, FreshLoader, SdkDocument, format_hex,
    parse_hex,
};
