//! Offset file output.
//!
//! The offset file is a single JSON object with sorted keys and 2-space
//! indentation. It is regenerated from scratch on every run.

mod json;

pub use json::{read_offset_map, write_offset_map};
