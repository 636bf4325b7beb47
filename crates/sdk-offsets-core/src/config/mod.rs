//! Offset generation configuration.
//!
//! [`OffsetConfig`] names the SDK documents to read and the label table to
//! evaluate. It can be built in code, loaded from a TOML file, or taken from
//! [`OffsetConfig::builtin`].
//!
//! ```toml
//! sdk_dir = "SDKs/JSON-SDK"
//! output = "offsets.json"
//! cache_documents = false
//!
//! [documents]
//! engine = "Engine_Classes.json"
//!
//! [entries."Actor.rootComponent"]
//! kind = "offset"
//! document = "engine"
//! owner = "Actor"
//! field = "RootComponent"
//!
//! [entries."Actor.actorId"]
//! kind = "literal"
//! value = 24
//! ```

mod builtin;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;
use tracing::debug;

use crate::error::{Error, Result};

pub use builtin::{DEFAULT_OUTPUT, DEFAULT_SDK_DIR};

/// How the value for one label is produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, IntoStaticStr)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum LookupSpec {
    /// Offset of `field` inside `owner`
    Offset {
        document: String,
        owner: String,
        field: String,
    },
    /// `ClassSize` of `owner`
    Size { document: String, owner: String },
    /// Fixed value, no lookup
    Literal { value: u64 },
}

impl LookupSpec {
    pub fn offset(document: &str, owner: &str, field: &str) -> Self {
        Self::Offset {
            document: document.to_string(),
            owner: owner.to_string(),
            field: field.to_string(),
        }
    }

    pub fn size(document: &str, owner: &str) -> Self {
        Self::Size {
            document: document.to_string(),
            owner: owner.to_string(),
        }
    }

    pub fn kind(&self) -> &'static str {
        self.into()
    }

    /// Document alias this entry reads, if any
    pub fn document(&self) -> Option<&str> {
        match self {
            Self::Offset { document, .. } | Self::Size { document, .. } => Some(document),
            Self::Literal { .. } => None,
        }
    }
}

/// Configuration for a single offset generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OffsetConfig {
    /// Base directory for relative document paths
    pub sdk_dir: PathBuf,
    /// Output file, overwritten on every run
    pub output: PathBuf,
    /// Parse each document once per run instead of once per lookup
    pub cache_documents: bool,
    /// Document alias -> path
    pub documents: BTreeMap<String, PathBuf>,
    /// Output label -> lookup
    pub entries: BTreeMap<String, LookupSpec>,
}

impl Default for OffsetConfig {
    fn default() -> Self {
        Self {
            sdk_dir: PathBuf::from("."),
            output: PathBuf::from(DEFAULT_OUTPUT),
            cache_documents: false,
            documents: BTreeMap::new(),
            entries: BTreeMap::new(),
        }
    }
}

impl OffsetConfig {
    /// Create a new configuration builder
    pub fn builder() -> OffsetConfigBuilder {
        OffsetConfigBuilder::default()
    }

    /// Load and validate a TOML config file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config: OffsetConfig = toml::from_str(&content)?;
        config.validate()?;
        debug!(
            "Loaded config from {} ({} documents, {} entries)",
            path.display(),
            config.documents.len(),
            config.entries.len()
        );
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check that every entry names a known document
    pub fn validate(&self) -> Result<()> {
        for (label, spec) in &self.entries {
            if let Some(alias) = spec.document() {
                if !self.documents.contains_key(alias) {
                    return Err(Error::UnknownDocument {
                        label: label.clone(),
                        alias: alias.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Resolve a document alias to its path, relative to `sdk_dir`
    pub fn document_path(&self, alias: &str) -> Option<PathBuf> {
        self.documents.get(alias).map(|path| self.sdk_dir.join(path))
    }
}

/// Builder for OffsetConfig
#[derive(Debug, Clone, Default)]
pub struct OffsetConfigBuilder {
    sdk_dir: Option<PathBuf>,
    output: Option<PathBuf>,
    cache_documents: Option<bool>,
    documents: BTreeMap<String, PathBuf>,
    entries: BTreeMap<String, LookupSpec>,
}

impl OffsetConfigBuilder {
    /// Set the base directory for document paths
    pub fn sdk_dir<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.sdk_dir = Some(path.into());
        self
    }

    /// Set the output file path
    pub fn output<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.output = Some(path.into());
        self
    }

    /// Enable or disable the per-run document cache
    pub fn cache_documents(mut self, enabled: bool) -> Self {
        self.cache_documents = Some(enabled);
        self
    }

    /// Register a document under an alias
    pub fn document<A: Into<String>, P: Into<PathBuf>>(mut self, alias: A, path: P) -> Self {
        self.documents.insert(alias.into(), path.into());
        self
    }

    /// Add (or replace) the lookup for a label
    pub fn entry<L: Into<String>>(mut self, label: L, spec: LookupSpec) -> Self {
        self.entries.insert(label.into(), spec);
        self
    }

    pub fn offset<L: Into<String>>(self, label: L, document: &str, owner: &str, field: &str) -> Self {
        self.entry(label, LookupSpec::offset(document, owner, field))
    }

    pub fn size<L: Into<String>>(self, label: L, document: &str, owner: &str) -> Self {
        self.entry(label, LookupSpec::size(document, owner))
    }

    pub fn literal<L: Into<String>>(self, label: L, value: u64) -> Self {
        self.entry(label, LookupSpec::Literal { value })
    }

    /// Build the configuration
    pub fn build(self) -> OffsetConfig {
        let default = OffsetConfig::default();
        OffsetConfig {
            sdk_dir: self.sdk_dir.unwrap_or(default.sdk_dir),
            output: self.output.unwrap_or(default.output),
            cache_documents: self.cache_documents.unwrap_or(default.cache_documents),
            documents: self.documents,
            entries: self.entries,
        }
    }
}
