//! Message types for the Elm Architecture pattern
//!
//! Every change to the column collection flows through a `Msg`. Sources:
//! - User input (toolbar buttons, header buttons, hotkeys)
//! - Views (links built through a column's `Navigator`)
//! - The drag layer (drag-end with the active and hovered column)

use crate::model::{ColumnId, ViewEntry};

/// A navigation request against one column's stack
#[derive(Debug, Clone, PartialEq)]
pub enum NavAction {
    Push(ViewEntry),
    Back,
    Forward,
}

/// Drag-end signal from the drag layer
///
/// `over` is `None` when the pointer was released outside every column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragEnd {
    pub active: ColumnId,
    pub over: Option<ColumnId>,
}

/// Unified message type for column collection changes
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Append a column of the given catalog kind
    AddColumn(String),

    /// Remove a column (stale ids are ignored)
    RemoveColumn(ColumnId),

    /// Apply a navigation action to one column
    Navigate { column: ColumnId, action: NavAction },

    /// A drag gesture finished
    DragEnd(DragEnd),
}

impl Msg {
    /// Column this message targets, if any
    pub fn column(&self) -> Option<&ColumnId> {
        match self {
            Msg::AddColumn(_) => None,
            Msg::RemoveColumn(id) | Msg::Navigate { column: id, .. } => Some(id),
            Msg::DragEnd(end) => Some(&end.active),
        }
    }
}
