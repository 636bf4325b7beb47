use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::debug;

use super::descriptor::ClassDescriptor;
use crate::error::{Error, Result};
use crate::offset::OffsetValue;

/// A parsed SDK JSON document (`class/struct name -> descriptor`)
#[derive(Debug, Clone)]
pub struct SdkDocument {
    path: PathBuf,
    classes: Map<String, Value>,
}

impl SdkDocument {
    /// Read and parse the document at `path`
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| Error::Document {
            path: path.to_path_buf(),
            source,
        })?;

        let document = Self::parse(path, &content)?;
        debug!(
            "Loaded SDK document {} ({} descriptors)",
            path.display(),
            document.len()
        );
        Ok(document)
    }

    /// Parse document text, `path` is only used for diagnostics
    pub fn parse<P: AsRef<Path>>(path: P, content: &str) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        match serde_json::from_str::<Map<String, Value>>(content) {
            Ok(classes) => Ok(Self { path, classes }),
            Err(source) => Err(Error::MalformedDocument { path, source }),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Look up a top-level descriptor by class/struct name.
    ///
    /// Empty descriptors (`null`, `false`, `0`, `""`, `[]`, `{}`) count as absent.
    pub fn class<'a>(&'a self, owner: &'a str) -> Result<Option<ClassDescriptor<'a>>> {
        match self.classes.get(owner) {
            None => Ok(None),
            Some(value) if is_empty_descriptor(value) => Ok(None),
            Some(Value::Object(body)) => Ok(Some(ClassDescriptor::new(owner, body))),
            Some(other) => Err(Error::MalformedDocument {
                path: self.path.clone(),
                source: <serde_json::Error as serde::de::Error>::custom(format!(
                    "descriptor {} is not an object: {}",
                    owner, other
                )),
            }),
        }
    }

    /// Byte offset of `field` inside `owner`
    pub fn offset_of(&self, owner: &str, field: &str) -> Result<OffsetValue> {
        let Some(class) = self.class(owner)? else {
            return Ok(OffsetValue::NotFound);
        };
        Ok(class.field_offset(field)?.into())
    }

    /// Total byte size of `owner`
    pub fn size_of(&self, owner: &str) -> Result<OffsetValue> {
        let Some(class) = self.class(owner)? else {
            return Ok(OffsetValue::NotFound);
        };
        class.class_size().map(OffsetValue::Found)
    }
}

fn is_empty_descriptor(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(body) => body.is_empty(),
    }
}
