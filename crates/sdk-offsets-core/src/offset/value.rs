use std::fmt;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use crate::sdk::format_hex;

/// Text written to the offset file for a lookup that found nothing
pub const NOT_FOUND: &str = "Not Found";

/// Result of a single offset or size lookup.
///
/// Serialized as a plain JSON integer, or as the string `"Not Found"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OffsetValue {
    Found(u64),
    NotFound,
}

impl OffsetValue {
    pub fn is_found(self) -> bool {
        matches!(self, Self::Found(_))
    }
}

impl From<u64> for OffsetValue {
    fn from(value: u64) -> Self {
        Self::Found(value)
    }
}

impl From<Option<u64>> for OffsetValue {
    fn from(value: Option<u64>) -> Self {
        value.map_or(Self::NotFound, Self::Found)
    }
}

impl fmt::Display for OffsetValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found(value) => write!(f, "{} ({})", value, format_hex(*value)),
            Self::NotFound => f.write_str(NOT_FOUND),
        }
    }
}

impl Serialize for OffsetValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Found(value) => serializer.serialize_u64(*value),
            Self::NotFound => serializer.serialize_str(NOT_FOUND),
        }
    }
}

impl<'de> Deserialize<'de> for OffsetValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(value) => Ok(Self::Found(value)),
            Raw::Text(text) if text == NOT_FOUND => Ok(Self::NotFound),
            Raw::Text(text) => Err(de::Error::custom(format!(
                "expected an integer or {:?}, got {:?}",
                NOT_FOUND, text
            ))),
        }
    }
}
