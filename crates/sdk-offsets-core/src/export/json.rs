//! JSON offset file reading and writing

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::Result;
use crate::offset::OffsetMap;

/// Write the offset map to `path`, replacing any existing file
pub fn write_offset_map<P: AsRef<Path>>(map: &OffsetMap, path: P) -> Result<()> {
    let path = path.as_ref();
    let content = map.to_json_string()?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, content)?;
    info!("Wrote {} offsets to {}", map.len(), path.display());
    Ok(())
}

/// Read a previously written offset file.
///
/// Returns `Ok(None)` when the file does not exist.
pub fn read_offset_map<P: AsRef<Path>>(path: P) -> Result<Option<OffsetMap>> {
    let path = path.as_ref();
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("No previous offset file at {}", path.display());
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    OffsetMap::from_json_str(&content).map(Some)
}
