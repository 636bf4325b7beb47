//! Where assembly gets its parsed documents from.
//!
//! [`FreshLoader`] re-reads a document for every lookup. [`CachedLoader`]
//! keeps each parsed document for the rest of the run; documents are
//! read-only inputs, so both produce the same results.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use tracing::debug;

use super::document::SdkDocument;
use crate::error::Result;

/// Provides parsed SDK documents by path
pub trait DocumentSource {
    fn document(&mut self, path: &Path) -> Result<Rc<SdkDocument>>;

    /// Number of times a document was actually read from disk
    fn loads(&self) -> usize;
}

/// Loads and parses the document on every request
#[derive(Debug, Default)]
pub struct FreshLoader {
    loads: usize,
}

impl FreshLoader {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentSource for FreshLoader {
    fn document(&mut self, path: &Path) -> Result<Rc<SdkDocument>> {
        let document = SdkDocument::load(path)?;
        self.loads += 1;
        Ok(Rc::new(document))
    }

    fn loads(&self) -> usize {
        self.loads
    }
}

/// Parses each document once per run
#[derive(Debug, Default)]
pub struct CachedLoader {
    documents: HashMap<PathBuf, Rc<SdkDocument>>,
    loads: usize,
}

impl CachedLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl DocumentSource for CachedLoader {
    fn document(&mut self, path: &Path) -> Result<Rc<SdkDocument>> {
        if let Some(document) = self.documents.get(path) {
            debug!("Document cache hit: {}", path.display());
            return Ok(Rc::clone(document));
        }

        let document = Rc::new(SdkDocument::load(path)?);
        self.loads += 1;
        self.documents
            .insert(path.to_path_buf(), Rc::clone(&document));
        Ok(document)
    }

    fn loads(&self) -> usize {
        self.loads
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::offset::OffsetValue;
    use std::fs;

    fn write_doc(dir: &Path) -> PathBuf {
        let path = dir.join("Engine_Classes.json");
        fs::write(
            &path,
            r#"{"Actor": {"ClassSize": "0x228", "Attributes": [{"Name": "RootComponent", "Offset": "0x168"}]}}"#,
        )
        .unwrap();
        path
    }

    #[test]
    fn test_fresh_loader_rereads() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_doc(dir.path());

        let mut loader = FreshLoader::new();
        let first = loader.document(&path).unwrap();
        let second = loader.document(&path).unwrap();

        assert!(!Rc::ptr_eq(&first, &second));
        assert_eq!(loader.loads(), 2);
    }

    #[test]
    fn test_fresh_loader_sees_file_changes() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_doc(dir.path());

        let mut loader = FreshLoader::new();
        assert_eq!(
            loader.document(&path).unwrap().size_of("Actor").unwrap(),
            OffsetValue::Found(0x228)
        );

        fs::write(&path, r#"{"Actor": {"ClassSize": "0x230", "Attributes": []}}"#).unwrap();
        assert_eq!(
            loader.document(&path).unwrap().size_of("Actor").unwrap(),
            OffsetValue::Found(0x230)
        );
    }

    #[test]
    fn test_cached_loader_reuses() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_doc(dir.path());

        let mut loader = CachedLoader::new();
        let first = loader.document(&path).unwrap();
        let second = loader.document(&path).unwrap();

        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(loader.loads(), 1);
        assert_eq!(loader.len(), 1);
    }

    #[test]
    fn test_cached_loader_does_not_cache_failures() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Athena_Classes.json");

        let mut loader = CachedLoader::new();
        assert!(loader.document(&path).is_err());
        assert!(loader.is_empty());

        fs::write(&path, "{}").unwrap();
        assert!(loader.document(&path).is_ok());
        assert_eq!(loader.loads(), 1);
    }
}
