//! Keyboard Input Handler

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

use stackdeck::logic::drag::{finish_drag, step_drop_target};
use stackdeck::logic::navigation::{clamp_selection, next_selection, prev_selection};
use stackdeck::logic::ui::catalog_index_for_key;
use stackdeck::model::ui::{DragSource, DragState};
use stackdeck::{Msg, NavAction};

use super::{column_links, follow_link, navigate};
use crate::App;

/// Map vim motion keys onto arrows when vim mode is on
fn vim_to_arrow(code: KeyCode, vim_mode: bool) -> KeyCode {
    if !vim_mode {
        return code;
    }
    match code {
        KeyCode::Char('h') => KeyCode::Left,
        KeyCode::Char('j') => KeyCode::Down,
        KeyCode::Char('k') => KeyCode::Up,
        KeyCode::Char('l') => KeyCode::Right,
        other => other,
    }
}

/// Handle keyboard input
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.model.ui.should_quit = true;
        return;
    }

    let code = vim_to_arrow(key.code, app.model.ui.vim_mode);

    // A keyboard drag captures input until it is dropped or cancelled
    if app
        .model
        .ui
        .drag
        .as_ref()
        .is_some_and(|d| d.source == DragSource::Keyboard)
    {
        handle_drag_key(app, code);
        return;
    }

    match code {
        KeyCode::Char('q') => app.model.ui.should_quit = true,
        KeyCode::Left => move_focus(app, false),
        KeyCode::Right => move_focus(app, true),
        KeyCode::Up => move_selection(app, false),
        KeyCode::Down => move_selection(app, true),
        KeyCode::Enter => follow_selected_link(app),
        KeyCode::Backspace | KeyCode::Char('[') => navigate_focused(app, NavAction::Back),
        KeyCode::Char(']') => navigate_focused(app, NavAction::Forward),
        KeyCode::Char('x') | KeyCode::Delete => {
            if let Some(id) = app.model.ui.focused.clone() {
                app.dispatch(Msg::RemoveColumn(id));
            }
        }
        KeyCode::Char(' ') => {
            if let Some(id) = app.model.ui.focused.clone() {
                debug!("Keyboard drag picked up {}", id);
                app.model.ui.drag = Some(DragState::keyboard(id));
            }
        }
        KeyCode::Esc => app.model.ui.drag = None,
        KeyCode::Char(c) => {
            let kind = catalog_index_for_key(c)
                .and_then(|i| app.catalog.get_index(i))
                .map(|spec| spec.kind.clone());
            if let Some(kind) = kind {
                app.dispatch(Msg::AddColumn(kind));
            }
        }
        _ => {}
    }
}

fn handle_drag_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Left | KeyCode::Right => {
            let delta = if code == KeyCode::Left { -1 } else { 1 };
            let ids = app.model.columns.ids();
            if let Some(drag) = app.model.ui.drag.as_mut() {
                drag.over = step_drop_target(&ids, &drag.active, drag.over.as_ref(), delta);
            }
        }
        KeyCode::Char(' ') | KeyCode::Enter => {
            if let Some(end) = app.model.ui.drag.take().as_ref().and_then(finish_drag) {
                app.dispatch(Msg::DragEnd(end));
            }
        }
        KeyCode::Esc => {
            app.model.ui.drag = None;
            app.model.ui.show_toast("Move cancelled".to_string());
        }
        _ => {}
    }
}

/// Move focus to the next or previous column, wrapping at the ends
fn move_focus(app: &mut App, forward: bool) {
    let ids = app.model.columns.ids();
    let current = app.model.focused_index();
    let next = if forward {
        next_selection(current, ids.len())
    } else {
        prev_selection(current, ids.len())
    };
    app.model.ui.focused = next.and_then(|i| ids.get(i).cloned());
}

/// Move the link selection inside the focused column
fn move_selection(app: &mut App, forward: bool) {
    let Some(id) = app.model.ui.focused.clone() else {
        return;
    };
    let count = column_links(app, &id).len();
    let current = app.model.ui.selection(&id);
    let next = if forward {
        next_selection(current, count)
    } else {
        prev_selection(current, count)
    };

    match next {
        Some(index) => {
            app.model.ui.selections.insert(id, index);
        }
        None => {
            app.model.ui.selections.remove(&id);
        }
    }
}

fn follow_selected_link(app: &mut App) {
    let Some(id) = app.model.ui.focused.clone() else {
        return;
    };
    let count = column_links(app, &id).len();
    if let Some(index) = clamp_selection(app.model.ui.selection(&id), count) {
        follow_link(app, &id, index);
    }
}

fn navigate_focused(app: &mut App, action: NavAction) {
    if let Some(id) = app.model.ui.focused.clone() {
        navigate(app, id, action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use stackdeck::ColumnId;

    fn app() -> App {
        App::new(Config::default()).unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn order(app: &App) -> Vec<String> {
        app.model.columns.ids().iter().map(|id| id.to_string()).collect()
    }

    fn history(app: &App, id: &str) -> (usize, usize) {
        let nav = app.model.columns.get(&ColumnId::new(id)).unwrap().navigation();
        (nav.cursor(), nav.len())
    }

    #[test]
    fn test_focus_moves_and_wraps() {
        let mut app = app();
        assert_eq!(app.model.ui.focused, Some(ColumnId::new("col-1")));
        press(&mut app, KeyCode::Right);
        assert_eq!(app.model.ui.focused, Some(ColumnId::new("col-2")));
        press(&mut app, KeyCode::Right);
        assert_eq!(app.model.ui.focused, Some(ColumnId::new("col-1")));
        press(&mut app, KeyCode::Left);
        assert_eq!(app.model.ui.focused, Some(ColumnId::new("col-2")));
    }

    #[test]
    fn test_vim_keys_only_in_vim_mode() {
        let mut app = app();
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.model.ui.focused, Some(ColumnId::new("col-1")));

        app.model.ui.vim_mode = true;
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.model.ui.focused, Some(ColumnId::new("col-2")));
    }

    #[test]
    fn test_digit_adds_catalog_kind() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(order(&app), vec!["col-1", "col-2", "col-3"]);
        assert_eq!(app.model.columns.get(&ColumnId::new("col-3")).unwrap().kind(), "search");
        assert_eq!(app.model.ui.focused, Some(ColumnId::new("col-3")));

        // No fourth kind in the demo catalog
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.model.columns.len(), 3);
    }

    #[test]
    fn test_follow_link_then_back_and_forward() {
        let mut app = app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);

        let nav = app.model.columns.get(&ColumnId::new("col-1")).unwrap().navigation();
        assert_eq!(nav.current().view_name(), "PostDetail");
        assert_eq!(nav.current().payload(), Some(&serde_json::json!({ "postId": 2 })));

        press(&mut app, KeyCode::Backspace);
        assert_eq!(history(&app, "col-1"), (0, 2));
        press(&mut app, KeyCode::Char(']'));
        assert_eq!(history(&app, "col-1"), (1, 2));
        // Other column untouched
        assert_eq!(history(&app, "col-2"), (0, 1));
    }

    #[test]
    fn test_enter_without_selection_follows_first_link() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        let nav = app.model.columns.get(&ColumnId::new("col-1")).unwrap().navigation();
        assert_eq!(nav.current().payload(), Some(&serde_json::json!({ "postId": 1 })));
    }

    #[test]
    fn test_remove_focused_column() {
        let mut app = app();
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(order(&app), vec!["col-2"]);
        assert_eq!(app.model.ui.focused, Some(ColumnId::new("col-2")));
    }

    #[test]
    fn test_keyboard_drag_reorders() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.model.ui.focused, Some(ColumnId::new("col-1")));

        press(&mut app, KeyCode::Char(' '));
        assert!(app.model.ui.is_dragging());
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char(' '));

        assert!(app.model.ui.drag.is_none());
        assert_eq!(order(&app), vec!["col-2", "col-3", "col-1"]);
        assert_eq!(app.model.ui.focused, Some(ColumnId::new("col-1")));
    }

    #[test]
    fn test_keyboard_drag_cancel_keeps_order() {
        let mut app = app();
        let before = app.model.columns.clone();
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Esc);

        assert!(app.model.ui.drag.is_none());
        assert!(app.model.columns.same_snapshot(&before));
        assert!(app.model.ui.toast_message.is_some());
    }

    #[test]
    fn test_drop_on_itself_keeps_snapshot() {
        let mut app = app();
        let before = app.model.columns.clone();
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Enter);
        assert!(app.model.columns.same_snapshot(&before));
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.model.ui.should_quit);

        let mut app = self::app();
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.model.ui.should_quit);
    }
}
