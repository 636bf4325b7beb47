//! Comparison of a freshly generated offset map against the previous one

use std::fmt;

use super::{OffsetMap, OffsetValue};

/// How a single label differs from the previous output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OffsetChange {
    Added(OffsetValue),
    Removed(OffsetValue),
    Changed { old: OffsetValue, new: OffsetValue },
}

impl fmt::Display for OffsetChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Added(value) => write!(f, "added: {}", value),
            Self::Removed(value) => write!(f, "removed (was {})", value),
            Self::Changed { old, new } => write!(f, "{} -> {}", old, new),
        }
    }
}

/// Compare `current` with `previous`, ordered by label.
///
/// Unchanged labels are omitted.
pub fn compare_offset_maps(previous: &OffsetMap, current: &OffsetMap) -> Vec<(String, OffsetChange)> {
    let mut changes = Vec::new();

    for (label, &new) in current {
        match previous.get(label) {
            None => changes.push((label.clone(), OffsetChange::Added(new))),
            Some(old) if old != new => {
                changes.push((label.clone(), OffsetChange::Changed { old, new }));
            }
            Some(_) => {}
        }
    }

    for (label, &old) in previous {
        if current.get(label).is_none() {
            changes.push((label.clone(), OffsetChange::Removed(old)));
        }
    }

    changes.sort_by(|a, b| a.0.cmp(&b.0));
    changes
}
