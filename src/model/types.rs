//! Shared model types

use std::fmt;

/// Opaque route parameters handed to a view (never inspected by the core)
pub type Payload = serde_json::Value;

/// Stable column identifier, used as both the sortable key and the
/// routing key for navigate messages
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColumnId(String);

impl ColumnId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Id for the n-th column allocated by a collection (`col-<n>`)
    pub fn from_sequence(n: u64) -> Self {
        Self(format!("col-{}", n))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ColumnId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// One history slot: which view to show and what to give it
#[derive(Debug, Clone, PartialEq)]
pub struct ViewEntry {
    view_name: String,
    payload: Option<Payload>,
}

impl ViewEntry {
    pub fn new(view_name: impl Into<String>, payload: Option<Payload>) -> Self {
        Self {
            view_name: view_name.into(),
            payload,
        }
    }

    /// Entry without a payload
    pub fn named(view_name: impl Into<String>) -> Self {
        Self::new(view_name, None)
    }

    pub fn view_name(&self) -> &str {
        &self.view_name
    }

    pub fn payload(&self) -> Option<&Payload> {
        self.payload.as_ref()
    }
}
