use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::{Deserialize, Serialize};

use super::OffsetValue;
use crate::error::Result;

/// Flat `label -> offset/size` mapping, always ordered by label
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OffsetMap {
    entries: BTreeMap<String, OffsetValue>,
}

impl OffsetMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<L: Into<String>>(&mut self, label: L, value: OffsetValue) -> Option<OffsetValue> {
        self.entries.insert(label.into(), value)
    }

    pub fn get(&self, label: &str) -> Option<OffsetValue> {
        self.entries.get(label).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, OffsetValue> {
        self.entries.iter()
    }

    /// Labels whose lookup found nothing
    pub fn not_found(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(_, value)| !value.is_found())
            .map(|(label, _)| label.as_str())
    }

    pub fn found_count(&self) -> usize {
        self.entries.values().filter(|v| v.is_found()).count()
    }

    /// Render as pretty JSON: sorted keys, 2-space indent, no trailing newline
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

impl<'a> IntoIterator for &'a OffsetMap {
    type Item = (&'a String, &'a OffsetValue);
    type IntoIter = btree_map::Iter<'a, String, OffsetValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<L: Into<String>> FromIterator<(L, OffsetValue)> for OffsetMap {
    fn from_iter<I: IntoIterator<Item = (L, OffsetValue)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(label, value)| (label.into(), value))
                .collect(),
        }
    }
}
