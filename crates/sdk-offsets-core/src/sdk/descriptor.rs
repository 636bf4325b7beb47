//! Class/struct descriptors inside an SDK document.
//!
//! Descriptors are read lazily from the parsed JSON: only the keys a lookup
//! needs are checked, so a size lookup never looks at `Attributes` and an
//! offset lookup only reads the `Offset` of the attribute it matched.

use serde_json::{Map, Value};

use super::hex::parse_hex;
use crate::error::{Error, Result};

pub const CLASS_SIZE_KEY: &str = "ClassSize";
pub const ATTRIBUTES_KEY: &str = "Attributes";
pub const NAME_KEY: &str = "Name";
pub const OFFSET_KEY: &str = "Offset";

/// Borrowed view of a single class/struct descriptor
#[derive(Debug, Clone, Copy)]
pub struct ClassDescriptor<'a> {
    name: &'a str,
    body: &'a Map<String, Value>,
}

impl<'a> ClassDescriptor<'a> {
    pub(crate) fn new(name: &'a str, body: &'a Map<String, Value>) -> Self {
        Self { name, body }
    }

    /// Total size of the class/struct (`ClassSize`, base 16)
    pub fn class_size(&self) -> Result<u64> {
        let raw = self.hex_string(CLASS_SIZE_KEY, self.body.get(CLASS_SIZE_KEY))?;
        parse_hex(raw)
    }

    /// Offset of the first attribute named `field`, `None` if there is none
    pub fn field_offset(&self, field: &str) -> Result<Option<u64>> {
        let attributes = match self.body.get(ATTRIBUTES_KEY) {
            Some(Value::Null) | None => return Err(self.missing(ATTRIBUTES_KEY)),
            Some(Value::Array(attributes)) => attributes,
            Some(other) => {
                return Err(Error::Json(<serde_json::Error as serde::de::Error>::custom(
                    format!("{}.{} is not a sequence: {}", self.name, ATTRIBUTES_KEY, other),
                )));
            }
        };

        let matched = attributes
            .iter()
            .find(|attribute| attribute.get(NAME_KEY).and_then(Value::as_str) == Some(field));
        let Some(attribute) = matched else {
            return Ok(None);
        };

        let raw = self.hex_string(OFFSET_KEY, attribute.get(OFFSET_KEY))?;
        parse_hex(raw).map(Some)
    }

    fn hex_string(&self, key: &'static str, value: Option<&'a Value>) -> Result<&'a str> {
        match value {
            Some(Value::String(s)) => Ok(s.as_str()),
            Some(Value::Null) | None => Err(self.missing(key)),
            Some(other) => Err(Error::InvalidHex {
                value: other.to_string(),
            }),
        }
    }

    fn missing(&self, key: &'static str) -> Error {
        Error::MissingKey {
            owner: self.name.to_string(),
            key,
        }
    }
}
