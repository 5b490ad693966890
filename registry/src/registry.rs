//! The override registry - immutable target-to-override lookup.

use std::collections::HashMap;

/// One resolved override: which declaration overrides which target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideRecord {
    /// Qualified name of the override declaration.
    pub override_name: String,
    /// Qualified name of the annotation type it overrides.
    pub target_name: String,
}

/// Immutable mapping from target annotation identity to override declaration
/// identity.
///
/// Built once per session by `OverrideLoader`; read-only afterwards. A target
/// maps to at most one override.
#[derive(Debug, Default)]
pub struct OverrideRegistry {
    /// Override declaration name by target annotation name.
    by_target: HashMap<String, String>,
    /// All records, in load order.
    records: Vec<OverrideRecord>,
}

impl OverrideRegistry {
    pub(crate) fn new(by_target: HashMap<String, String>, records: Vec<OverrideRecord>) -> Self {
        Self { by_target, records }
    }

    /// An empty registry (no overrides in this session).
    pub fn empty() -> Self {
        Self::default()
    }

    /// The override declaration registered for the given annotation type, if
    /// any.
    pub fn override_for(&self, target: &str) -> Option<&str> {
        self.by_target.get(target).map(|s| s.as_str())
    }

    /// All resolved records, in load order.
    pub fn records(&self) -> &[OverrideRecord] {
        &self.records
    }

    /// The number of resolved overrides.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if no overrides are registered.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
