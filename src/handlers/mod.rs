//! Event Handlers
//!
//! This module contains handlers for terminal input:
//! - keyboard: focus, link selection, history, add/remove, keyboard drag
//! - mouse: toolbar and header clicks, links, pointer drag
//!
//! Handlers take &mut App, turn input into `Msg`s and dispatch them.

pub mod keyboard;
pub mod mouse;

pub use keyboard::handle_key;
pub use mouse::handle_mouse;

use tracing::debug;

use stackdeck::logic::resolve::resolve_column;
use stackdeck::{ColumnId, Msg, NavAction, ViewLink};

use crate::App;

/// Links a column's current view shows, in display order
fn column_links(app: &App, id: &ColumnId) -> Vec<ViewLink> {
    app.model
        .columns
        .get(id)
        .map(|column| resolve_column(column, &app.registry).resolution.output().links)
        .unwrap_or_default()
}

/// Activate link `index` of a column
fn follow_link(app: &mut App, id: &ColumnId, index: usize) {
    if let Some(link) = column_links(app, id).into_iter().nth(index) {
        debug!("Following link '{}' in {}", link.label, id);
        app.dispatch(link.msg);
    }
}

fn navigate(app: &mut App, column: ColumnId, action: NavAction) {
    app.dispatch(Msg::Navigate { column, action });
}
