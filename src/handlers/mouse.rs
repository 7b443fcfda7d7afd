//! Mouse Input Handler
//!
//! Left press on a column header arms a pointer drag. The drag activates
//! once the pointer has travelled the configured activation distance; until
//! then, releasing is a click on whatever was pressed.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use tracing::debug;

use stackdeck::logic::drag::{exceeds_activation_distance, finish_drag};
use stackdeck::model::ui::{DragSource, DragState};
use stackdeck::{Msg, NavAction};

use super::{follow_link, navigate};
use crate::ui::hit_map::HitTarget;
use crate::App;

/// Handle mouse input
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    let (x, y) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => press(app, x, y),
        MouseEventKind::Drag(MouseButton::Left) => drag_to(app, x, y),
        MouseEventKind::Up(MouseButton::Left) => release(app, x, y),
        _ => {}
    }
}

fn keyboard_drag_active(app: &App) -> bool {
    app.model
        .ui
        .drag
        .as_ref()
        .is_some_and(|d| d.source == DragSource::Keyboard)
}

fn press(app: &mut App, x: u16, y: u16) {
    if keyboard_drag_active(app) {
        return;
    }

    let target = app.hit_map.target_at(x, y).cloned();
    if let Some(id) = target.as_ref().filter(|t| t.is_drag_handle()).and_then(HitTarget::column) {
        app.model.ui.drag = Some(DragState::pointer(id.clone(), (x, y)));
    }
    app.pressed = target;
}

fn drag_to(app: &mut App, x: u16, y: u16) {
    let distance = app.config.drag_activation_distance;
    let over = app.hit_map.column_at(x, y).cloned();

    let Some(drag) = app
        .model
        .ui
        .drag
        .as_mut()
        .filter(|d| d.source == DragSource::Pointer)
    else {
        return;
    };

    if !drag.activated && exceeds_activation_distance(drag.origin, (x, y), distance) {
        debug!("Pointer drag activated for {}", drag.active);
        drag.activated = true;
    }
    if drag.activated {
        drag.over = over;
    }
}

fn release(app: &mut App, x: u16, y: u16) {
    if keyboard_drag_active(app) {
        return;
    }

    let pressed = app.pressed.take();
    let over = app.hit_map.column_at(x, y).cloned();

    if let Some(mut drag) = app.model.ui.drag.take() {
        if drag.activated {
            drag.over = over;
        }
        if let Some(end) = finish_drag(&drag) {
            // Released outside every column: cancelled, order untouched
            if end.over.is_none() {
                debug!("Drag of {} released outside any column", end.active);
                return;
            }
            app.dispatch(Msg::DragEnd(end));
            return;
        }
    }

    // Never activated: a click, if released on what was pressed
    let Some(pressed) = pressed else {
        return;
    };
    if app.hit_map.target_at(x, y) == Some(&pressed) {
        click(app, pressed);
    }
}

fn click(app: &mut App, target: HitTarget) {
    match target {
        HitTarget::AddColumn(kind) => app.dispatch(Msg::AddColumn(kind)),
        HitTarget::Column(id) | HitTarget::Header(id) => app.model.ui.focused = Some(id),
        HitTarget::Back(id) => {
            app.model.ui.focused = Some(id.clone());
            navigate(app, id, NavAction::Back);
        }
        HitTarget::Forward(id) => {
            app.model.ui.focused = Some(id.clone());
            navigate(app, id, NavAction::Forward);
        }
        HitTarget::Remove(id) => app.dispatch(Msg::RemoveColumn(id)),
        HitTarget::Link(id, index) => {
            app.model.ui.focused = Some(id.clone());
            follow_link(app, &id, index);
        }
    }
}
