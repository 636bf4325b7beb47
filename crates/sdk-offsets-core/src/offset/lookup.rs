//! One-shot lookups against an SDK document on disk.
//!
//! Each call reads and parses the document again; use a
//! [`DocumentSource`](crate::sdk::DocumentSource) to share parsed documents.

use std::path::Path;

use tracing::debug;

use super::OffsetValue;
use crate::error::Result;
use crate::sdk::SdkDocument;

/// Byte offset of `field` inside `owner`, read from the document at `path`.
///
/// A missing owner or field gives [`OffsetValue::NotFound`]. Unreadable or
/// malformed documents and non-hex offsets are errors.
pub fn lookup_offset<P: AsRef<Path>>(path: P, owner: &str, field: &str) -> Result<OffsetValue> {
    let document = SdkDocument::load(path)?;
    let value = document.offset_of(owner, field)?;
    debug!(
        "{}: {}.{} -> {}",
        document.path().display(),
        owner,
        field,
        value
    );
    Ok(value)
}

/// Total byte size of `owner`, read from the document at `path`
pub fn lookup_size<P: AsRef<Path>>(path: P, owner: &str) -> Result<OffsetValue> {
    let document = SdkDocument::load(path)?;
    let value = document.size_of(owner)?;
    debug!("{}: sizeof({}) -> {}", document.path().display(), owner, value);
    Ok(value)
}
