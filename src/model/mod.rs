//! Pure Application Model - Elm Architecture
//!
//! This module defines the pure, cloneable state for the application.
//! The Model is organized into focused sub-models:
//!
//! - **ColumnCollection**: ordered columns, each owning a NavigationStack
//! - **UiModel**: focus, selection, drag feedback, toasts
//!
//! Key principles:
//! - Clone + Debug: can snapshot and compare state
//! - No services: all I/O lives in the binary's runtime
//! - Column changes go through `Msg` and produce a new collection snapshot

pub mod catalog;
pub mod columns;
pub mod navigation;
pub mod types;
pub mod ui;

pub use catalog::{ColumnKindCatalog, ColumnKindSpec};
pub use columns::{Column, ColumnCollection};
pub use navigation::NavigationStack;
pub use types::*;
pub use ui::UiModel;

use crate::error::ColumnError;
use crate::logic;
use crate::messages::Msg;

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    /// Column order and per-column history
    pub columns: ColumnCollection,

    /// UI preferences and transient state
    pub ui: UiModel,
}

impl Model {
    pub fn new(vim_mode: bool) -> Self {
        Self {
            columns: ColumnCollection::new(),
            ui: UiModel::new(vim_mode),
        }
    }

    /// Apply a message, then keep focus and selections consistent
    ///
    /// On error the model is left exactly as it was.
    pub fn update(&mut self, msg: &Msg, catalog: &ColumnKindCatalog) -> Result<(), ColumnError> {
        let next = logic::update::apply(&self.columns, msg, catalog)?;
        let added = next.len() > self.columns.len();
        self.columns = next;

        match msg {
            Msg::AddColumn(_) if added => {
                self.ui.focused = self.columns.columns().last().map(|c| c.id().clone());
            }
            Msg::Navigate { column, .. } => {
                self.ui.selections.remove(column);
            }
            Msg::DragEnd(end) if self.columns.get(&end.active).is_some() => {
                self.ui.focused = Some(end.active.clone());
            }
            _ => {}
        }

        self.reconcile_focus();
        Ok(())
    }

    /// Index of the focused column in display order
    pub fn focused_index(&self) -> Option<usize> {
        self.ui.focused.as_ref().and_then(|id| self.columns.position(id))
    }

    pub fn focused_column(&self) -> Option<&Column> {
        self.ui.focused.as_ref().and_then(|id| self.columns.get(id))
    }

    /// Move focus off removed columns and drop their selections
    fn reconcile_focus(&mut self) {
        let columns = &self.columns;
        self.ui.selections.retain(|id, _| columns.get(id).is_some());

        if self.focused_index().is_some() {
            return;
        }

        // Focused column is gone; fall back to the leftmost visible one
        let fallback = self.ui.scroll_start.min(self.columns.len().saturating_sub(1));
        self.ui.focused = self.columns.columns().get(fallback).map(|c| c.id().clone());
    }
}
