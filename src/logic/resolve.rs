//! Render Resolver
//!
//! Turns the column collection into per-column render output. Each column's
//! current entry is looked up in the registry and rendered with its payload
//! and a navigator bound to that column. A missing view only degrades its
//! own column.

use tracing::debug;

use crate::model::columns::Column;
use crate::model::{ColumnCollection, ColumnId};
use crate::registry::{ContentRegistry, Navigator, ViewOutput};

/// Outcome of looking up a column's current view
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    View(ViewOutput),
    NotFound { view_name: String },
}

impl Resolution {
    /// Output to draw; the placeholder for a missing view
    pub fn output(&self) -> ViewOutput {
        match self {
            Resolution::View(output) => output.clone(),
            Resolution::NotFound { view_name } => ViewOutput::not_found(view_name),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Resolution::NotFound { .. })
    }
}

/// Everything the column widget needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedColumn {
    pub id: ColumnId,
    pub kind: String,
    pub view_name: String,
    pub resolution: Resolution,
    /// History position as (cursor, len)
    pub position: (usize, usize),
    pub can_go_back: bool,
    pub can_go_forward: bool,
}

/// Resolve a single column against the registry
pub fn resolve_column(column: &Column, registry: &ContentRegistry) -> ResolvedColumn {
    let navigation = column.navigation();
    let entry = navigation.current();

    let resolution = match registry.get(entry.view_name()) {
        Some(view) => {
            let nav = Navigator::for_column(column.id().clone());
            Resolution::View(view.render(entry.payload(), &nav))
        }
        None => {
            debug!(
                "View '{}' for column {} is not registered",
                entry.view_name(),
                column.id()
            );
            Resolution::NotFound {
                view_name: entry.view_name().to_string(),
            }
        }
    };

    ResolvedColumn {
        id: column.id().clone(),
        kind: column.kind().to_string(),
        view_name: entry.view_name().to_string(),
        resolution,
        position: (navigation.cursor(), navigation.len()),
        can_go_back: navigation.can_go_back(),
        can_go_forward: navigation.can_go_forward(),
    }
}

/// Resolve every column, in display order
pub fn resolve_columns(collection: &ColumnCollection, registry: &ContentRegistry) -> Vec<ResolvedColumn> {
    collection
        .columns()
        .iter()
        .map(|column| resolve_column(column, registry))
        .collect()
}
