//! Offset file generation.
//!
//! [`assemble`] evaluates every entry of an [`OffsetConfig`] into an
//! [`OffsetMap`]. [`OffsetGenerator`] wraps a full run: pick a document
//! source, assemble, compare with the previous output and write the new one.
//!
//! ## Example
//!
//! ```ignore
//! use sdk_offsets_core::{OffsetConfig, OffsetGenerator};
//!
//! let report = OffsetGenerator::new(OffsetConfig::builtin()).run()?;
//! println!("{} offsets, {} not found", report.map.len(), report.not_found().len());
//! ```

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::config::{LookupSpec, OffsetConfig};
use crate::error::{Error, Result};
use crate::export::{read_offset_map, write_offset_map};
use crate::offset::{OffsetChange, OffsetMap, OffsetValue, compare_offset_maps};
use crate::sdk::{CachedLoader, DocumentSource, FreshLoader};

/// Evaluate a single entry
pub fn evaluate<S: DocumentSource + ?Sized>(
    label: &str,
    spec: &LookupSpec,
    config: &OffsetConfig,
    source: &mut S,
) -> Result<OffsetValue> {
    let (alias, value) = match spec {
        LookupSpec::Literal { value } => return Ok(OffsetValue::Found(*value)),
        LookupSpec::Offset {
            document,
            owner,
            field,
        } => {
            let path = resolve(label, document, config)?;
            (document, source.document(&path)?.offset_of(owner, field)?)
        }
        LookupSpec::Size { document, owner } => {
            let path = resolve(label, document, config)?;
            (document, source.document(&path)?.size_of(owner)?)
        }
    };

    match (value, spec) {
        (OffsetValue::NotFound, LookupSpec::Offset { owner, field, .. }) => {
            warn!("{}: {}.{} not found in {}", label, owner, field, alias);
        }
        (OffsetValue::NotFound, LookupSpec::Size { owner, .. }) => {
            warn!("{}: {} not found in {}", label, owner, alias);
        }
        _ => debug!("{} = {}", label, value),
    }

    Ok(value)
}

fn resolve(label: &str, alias: &str, config: &OffsetConfig) -> Result<PathBuf> {
    config
        .document_path(alias)
        .ok_or_else(|| Error::UnknownDocument {
            label: label.to_string(),
            alias: alias.to_string(),
        })
}

/// Evaluate every entry of `config`.
///
/// Stops at the first fatal error; missing owners and fields become
/// [`OffsetValue::NotFound`].
pub fn assemble<S: DocumentSource + ?Sized>(
    config: &OffsetConfig,
    source: &mut S,
) -> Result<OffsetMap> {
    config.validate()?;

    let mut map = OffsetMap::new();
    for (label, spec) in &config.entries {
        let value = evaluate(label, spec, config, source)?;
        map.insert(label.as_str(), value);
    }
    Ok(map)
}

/// Result of a generation run
#[derive(Debug, Clone)]
pub struct GenerateReport {
    pub output: PathBuf,
    pub map: OffsetMap,
    /// Differences from the file previously at `output`, empty if there was none
    pub changes: Vec<(String, OffsetChange)>,
    pub previous_found: bool,
    /// Number of document reads from disk
    pub document_loads: usize,
}

impl GenerateReport {
    pub fn not_found(&self) -> Vec<&str> {
        self.map.not_found().collect()
    }
}

/// Runs one offset generation pass
pub struct OffsetGenerator {
    config: OffsetConfig,
}

impl OffsetGenerator {
    pub fn new(config: OffsetConfig) -> Self {
        Self { config }
    }

    /// Assemble the offset map without writing it
    pub fn assemble(&self) -> Result<(OffsetMap, usize)> {
        let mut source: Box<dyn DocumentSource> = if self.config.cache_documents {
            Box::new(CachedLoader::new())
        } else {
            Box::new(FreshLoader::new())
        };

        let map = assemble(&self.config, source.as_mut())?;
        Ok((map, source.loads()))
    }

    /// Assemble and write the offset file.
    ///
    /// Nothing is written if assembly fails.
    pub fn run(&self) -> Result<GenerateReport> {
        let output = self.config.output.clone();
        info!(
            "Generating {} offsets from {}",
            self.config.entries.len(),
            self.config.sdk_dir.display()
        );

        let (map, document_loads) = self.assemble()?;

        let previous = match read_offset_map(&output) {
            Ok(previous) => previous,
            Err(e) => {
                debug!("Ignoring unreadable previous output {}: {}", output.display(), e);
                None
            }
        };
        let changes = previous
            .as_ref()
            .map(|previous| compare_offset_maps(previous, &map))
            .unwrap_or_default();

        write_offset_map(&map, &output)?;

        let report = GenerateReport {
            output,
            previous_found: previous.is_some(),
            changes,
            document_loads,
            map,
        };

        info!(
            "{} resolved, {} not found, {} document reads",
            report.map.found_count(),
            report.not_found().len(),
            report.document_loads
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    const ENGINE: &str = r#"{
        "Actor": {
            "ClassSize": "0x228",
            "Attributes": [{"Name": "RootComponent", "Offset": "0x168"}]
        },
        "World": {
            "ClassSize": "0x7B8",
            "Attributes": [
                {"Name": "PersistentLevel", "Offset": "0x30"},
                {"Name": "OwningGameInstance", "Offset": "0x1C0"}
            ]
        }
    }"#;

    const ATHENA_STRUCTS: &str = r#"{
        "Crew": {
            "ClassSize": "0x98",
            "Attributes": [{"Name": "Players", "Offset": "0x20"}]
        }
    }"#;

    fn fixture_config(dir: &Path) -> OffsetConfig {
        fs::write(dir.join("Engine_Classes.json"), ENGINE).unwrap();
        fs::write(dir.join("Athena_structs.json"), ATHENA_STRUCTS).unwrap();

        OffsetConfig::builder()
            .sdk_dir(dir)
            .output(dir.join("offsets.json"))
            .document("engine", "Engine_Classes.json")
            .document("athena_structs", "Athena_structs.json")
            .literal("Actor.actorId", 24)
            .offset("Actor.rootComponent", "engine", "Actor", "RootComponent")
            .offset("World.PersistentLevel", "engine", "World", "PersistentLevel")
            .offset("World.OwningGameInstance", "engine", "World", "OwningGameInstance")
            .offset("World.Missing", "engine", "World", "Missing")
            .offset("Ghost.Field", "engine", "Ghost", "Field")
            .size("Crew.Size", "athena_structs", "Crew")
            .size("Ship.Size", "athena_structs", "Ship")
            .offset("Crew.Players", "athena_structs", "Crew", "Players")
            .build()
    }

    #[test]
    fn test_assemble() {
        let dir = tempfile::tempdir().unwrap();
        let config = fixture_config(dir.path());

        let map = assemble(&config, &mut FreshLoader::new()).unwrap();

        assert_eq!(map.len(), 9);
        assert_eq!(map.get("Actor.actorId"), Some(OffsetValue::Found(24)));
        assert_eq!(map.get("Actor.rootComponent"), Some(OffsetValue::Found(0x168)));
        assert_eq!(map.get("World.PersistentLevel"), Some(OffsetValue::Found(0x30)));
        assert_eq!(map.get("World.OwningGameInstance"), Some(OffsetValue::Found(0x1C0)));
        assert_eq!(map.get("World.Missing"), Some(OffsetValue::NotFound));
        assert_eq!(map.get("Ghost.Field"), Some(OffsetValue::NotFound));
        assert_eq!(map.get("Crew.Size"), Some(OffsetValue::Found(0x98)));
        assert_eq!(map.get("Ship.Size"), Some(OffsetValue::NotFound));
        assert_eq!(map.get("Crew.Players"), Some(OffsetValue::Found(0x20)));
    }

    #[test]
    fn test_fresh_loader_reads_once_per_lookup() {
        let dir = tempfile::tempdir().unwrap();
        let config = fixture_config(dir.path());

        let mut source = FreshLoader::new();
        assemble(&config, &mut source).unwrap();
        // 8 lookups, the literal reads nothing
        assert_eq!(source.loads(), 8);
    }

    #[test]
    fn test_cached_and_fresh_agree() {
        let dir = tempfile::tempdir().unwrap();
        let config = fixture_config(dir.path());

        let mut cached = CachedLoader::new();
        let fresh = assemble(&config, &mut FreshLoader::new()).unwrap();
        let from_cache = assemble(&config, &mut cached).unwrap();

        assert_eq!(fresh, from_cache);
        assert_eq!(cached.loads(), 2);
    }

    #[test]
    fn test_literal_needs_no_documents() {
        let config = OffsetConfig::builder()
            .sdk_dir("/nonexistent")
            .literal("SceneComponent.ActorCoordinates", 0x12c)
            .build();
        let map = assemble(&config, &mut FreshLoader::new()).unwrap();
        assert_eq!(
            map.get("SceneComponent.ActorCoordinates"),
            Some(OffsetValue::Found(300))
        );
    }

    #[test]
    fn test_unknown_document_fails_before_reading() {
        let config = OffsetConfig::builder()
            .offset("Crew.Players", "athena_structs", "Crew", "Players")
            .build();
        let mut source = FreshLoader::new();
        assert!(matches!(
            assemble(&config, &mut source).unwrap_err(),
            Error::UnknownDocument { .. }
        ));
        assert_eq!(source.loads(), 0);
    }

    #[test]
    fn test_run_writes_output() {
        let dir = tempfile::tempdir().unwrap();
        let config = fixture_config(dir.path());
        let output = config.output.clone();

        let report = OffsetGenerator::new(config).run().unwrap();

        assert!(!report.previous_found);
        assert!(report.changes.is_empty());
        assert_eq!(report.not_found(), vec!["Ghost.Field", "Ship.Size", "World.Missing"]);

        let written = fs::read_to_string(&output).unwrap();
        assert_eq!(OffsetMap::from_json_str(&written).unwrap(), report.map);
        assert!(written.starts_with("{\n  \"Actor.actorId\": 24,\n"));
    }

    #[test]
    fn test_run_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        let config = fixture_config(dir.path());
        let output = config.output.clone();
        let generator = OffsetGenerator::new(config);

        generator.run().unwrap();
        let first = fs::read(&output).unwrap();
        let report = generator.run().unwrap();
        let second = fs::read(&output).unwrap();

        assert_eq!(first, second);
        assert!(report.previous_found);
        assert!(report.changes.is_empty());
    }

    #[test]
    fn test_run_reports_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = fixture_config(dir.path());
        let output = config.output.clone();
        fs::write(&output, r#"{"Actor.rootComponent": 352, "Removed.Label": 1}"#).unwrap();

        let report = OffsetGenerator::new(config).run().unwrap();

        assert!(report.previous_found);
        assert!(report.changes.contains(&(
            "Actor.rootComponent".to_string(),
            OffsetChange::Changed {
                old: OffsetValue::Found(352),
                new: OffsetValue::Found(0x168),
            }
        )));
        assert!(report.changes.contains(&(
            "Removed.Label".to_string(),
            OffsetChange::Removed(OffsetValue::Found(1))
        )));
        assert!(OffsetMap::from_json_str(&fs::read_to_string(&output).unwrap())
            .unwrap()
            .get("Removed.Label")
            .is_none());
    }

    #[test]
    fn test_run_ignores_unparseable_previous_output() {
        let dir = tempfile::tempdir().unwrap();
        let config = fixture_config(dir.path());
        fs::write(&config.output, "garbage").unwrap();

        let report = OffsetGenerator::new(config).run().unwrap();
        assert!(!report.previous_found);
    }

    #[test]
    fn test_run_failure_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = fixture_config(dir.path());
        fs::write(dir.path().join("Athena_structs.json"), "{ broken").unwrap();
        config.cache_documents = true;
        let output = config.output.clone();

        let err = OffsetGenerator::new(config).run().unwrap_err();
        assert!(matches!(err, Error::MalformedDocument { .. }));
        assert!(!output.exists());
    }

    #[test]
    fn test_run_failure_keeps_previous_output() {
        let dir = tempfile::tempdir().unwrap();
        let config = fixture_config(dir.path());
        fs::remove_file(dir.path().join("Engine_Classes.json")).unwrap();
        fs::write(&config.output, "{\"Crew.Size\": 152}").unwrap();
        let output = config.output.clone();

        let err = OffsetGenerator::new(config).run().unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(fs::read_to_string(&output).unwrap(), "{\"Crew.Size\": 152}");
    }

    #[test]
    fn test_cached_run_reads_each_document_once() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = fixture_config(dir.path());
        config.cache_documents = true;

        let report = OffsetGenerator::new(config).run().unwrap();
        assert_eq!(report.document_loads, 2);
    }
}
