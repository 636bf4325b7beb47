use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to read SDK document {path}: {source}")]
    Document {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed SDK document {path}: {source}")]
    MalformedDocument {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid hex value: {value:?}")]
    InvalidHex { value: String },

    #[error("Descriptor {owner} has no {key} key")]
    MissingKey { owner: String, key: &'static str },

    #[error("Entry {label} references unknown document {alias}")]
    UnknownDocument { label: String, alias: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Config serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error is a "file not found" error
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Io(e) | Error::Document { source: e, .. } => {
                e.kind() == std::io::ErrorKind::NotFound
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_not_found() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = Error::Io(io_err);
        assert!(err.is_not_found());

        let other_io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err2 = Error::Io(other_io_err);
        assert!(!err2.is_not_found());
    }

    #[test]
    fn test_document_error_is_not_found() {
        let err = Error::Document {
            path: PathBuf::from("SDKs/JSON-SDK/Engine_Classes.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.is_not_found());
        assert!(err.to_string().contains("Engine_Classes.json"));
    }

    #[test]
    fn test_missing_key_message() {
        let err = Error::MissingKey {
            owner: "Actor".to_string(),
            key: "Attributes",
        };
        assert_eq!(err.to_string(), "Descriptor Actor has no Attributes key");
    }
}
