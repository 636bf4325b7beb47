//! SDK JSON documents.
//!
//! An SDK document is the JSON dump of a game's reverse-engineered classes
//! or structs: a top-level object keyed by type name, where each value holds
//! a hex `ClassSize` and an ordered `Attributes` list of `{Name, Offset}`
//! field descriptors.

mod descriptor;
mod document;
mod hex;
mod source;

pub use descriptor::{ATTRIBUTES_KEY, CLASS_SIZE_KEY, ClassDescriptor, NAME_KEY, OFFSET_KEY};
pub use document::SdkDocument;
pub use hex::{format_hex, parse_hex};
pub use source::{CachedLoader, DocumentSource, FreshLoader};
