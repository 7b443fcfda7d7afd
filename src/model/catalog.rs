//! Column Kind Catalog
//!
//! Fixed list of column kinds the "add column" affordance offers. Each kind
//! names the view a new column of that kind starts on.

use serde::Deserialize;

use super::types::{Payload, ViewEntry};

/// One column kind: `{kind, label, initial_view}` plus an optional seed payload
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ColumnKindSpec {
    pub kind: String,
    pub label: String,
    pub initial_view: String,
    #[serde(default)]
    pub initial_payload: Option<Payload>,
}

impl ColumnKindSpec {
    pub fn new(kind: impl Into<String>, label: impl Into<String>, initial_view: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            label: label.into(),
            initial_view: initial_view.into(),
            initial_payload: None,
        }
    }

    pub fn with_payload(mut self, payload: Payload) -> Self {
        self.initial_payload = Some(payload);
        self
    }

    /// First history entry for a column of this kind
    pub fn seed_entry(&self) -> ViewEntry {
        ViewEntry::new(self.initial_view.clone(), self.initial_payload.clone())
    }
}

/// Read-only, ordered catalog of column kinds
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ColumnKindCatalog {
    kinds: Vec<ColumnKindSpec>,
}

impl ColumnKindCatalog {
    pub fn new(kinds: Vec<ColumnKindSpec>) -> Self {
        Self { kinds }
    }

    pub fn get(&self, kind: &str) -> Option<&ColumnKindSpec> {
        self.kinds.iter().find(|k| k.kind == kind)
    }

    /// Kind at a display position (toolbar button `n` maps to index `n - 1`)
    pub fn get_index(&self, index: usize) -> Option<&ColumnKindSpec> {
        self.kinds.get(index)
    }

    pub fn label_for(&self, kind: &str) -> Option<&str> {
        self.get(kind).map(|k| k.label.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColumnKindSpec> {
        self.kinds.iter()
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}
