use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use stackdeck::logic::layout::calculate_visible_column_range;
use stackdeck::logic::navigation::clamp_selection;
use stackdeck::logic::resolve::resolve_columns;

use super::{
    column::{self, ColumnVisual},
    layout, legend,
    status_bar::{self, StatusInfo},
    toast, toolbar,
};
use crate::App;

/// Main render function - orchestrates all UI rendering
///
/// Also records this frame's clickable regions and the scroll offset the
/// canvas settled on, so input handlers see what is on screen.
pub fn render(f: &mut Frame, app: &mut App) {
    let size = f.area();
    app.hit_map.clear();

    let dragging = app.model.ui.is_dragging();
    let layout_info = layout::calculate_layout(size, app.model.ui.vim_mode, dragging);

    toolbar::render_toolbar(f, layout_info.toolbar_area, &app.catalog, &mut app.hit_map);

    let resolved = resolve_columns(&app.model.columns, &app.registry);
    let column_width = app.config.effective_column_width();
    let range = calculate_visible_column_range(
        layout_info.canvas_area.width,
        column_width,
        resolved.len(),
        app.model.ui.scroll_start,
        app.model.focused_index(),
    );
    app.model.ui.scroll_start = range.start;

    if resolved.is_empty() {
        render_empty_canvas(f, layout_info.canvas_area);
    }

    let areas = layout::column_areas(layout_info.canvas_area, column_width, range.visible);
    let drag = app.model.ui.drag.as_ref().filter(|d| d.activated);

    for (resolved_column, area) in resolved.iter().skip(range.start).zip(areas) {
        let id = &resolved_column.id;
        let link_count = resolved_column.resolution.output().links.len();
        let visual = ColumnVisual {
            focused: app.model.ui.focused.as_ref() == Some(id),
            dragged: drag.is_some_and(|d| &d.active == id),
            drop_target: drag.is_some_and(|d| d.over.as_ref() == Some(id)),
            selected: app
                .model
                .ui
                .selection(id)
                .and_then(|s| clamp_selection(Some(s), link_count)),
        };
        column::render_column(f, area, resolved_column, &visual, &mut app.hit_map);
    }

    legend::render_legend(f, layout_info.legend_area, app.model.ui.vim_mode, dragging);

    let focused = app
        .model
        .ui
        .focused
        .as_ref()
        .and_then(|id| resolved.iter().find(|c| &c.id == id));
    let status = StatusInfo {
        column_count: resolved.len(),
        focused,
        focused_label: focused.and_then(|c| app.catalog.label_for(&c.kind)),
        hidden_left: range.hidden_left,
        hidden_right: range.hidden_right,
        drag,
    };
    status_bar::render_status_bar(f, layout_info.status_area, &status);

    if let Some((message, _timestamp)) = &app.model.ui.toast_message {
        toast::render_toast(f, size, message);
    }
}

fn render_empty_canvas(f: &mut Frame, area: Rect) {
    let hint = Paragraph::new("No columns. Press 1-9 or click a toolbar button to add one.")
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(hint, Rect::new(area.x + 1, area.y + 1, area.width.saturating_sub(2), 1).intersection(area));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::ui::hit_map::HitTarget;
    use ratatui::{backend::TestBackend, Terminal};
    use stackdeck::ColumnId;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_renders_default_columns() {
        let mut app = App::new(Config::default()).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|f| render(f, &mut app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("col-1 · home"));
        assert!(text.contains("col-2 · profile"));
        assert!(text.contains("Demo User"));
        assert!(text.contains("Columns: 2"));
        assert!(app
            .hit_map
            .target_at(1, 1)
            .is_some_and(|t| matches!(t, HitTarget::AddColumn(_))));
    }

    #[test]
    fn test_scrolls_to_focused_column() {
        let mut config = Config::default();
        config.columns = Some(vec!["home".into(), "profile".into(), "search".into(), "home".into()]);
        let mut app = App::new(config).unwrap();
        app.model.ui.focused = Some(ColumnId::new("col-4"));

        let mut terminal = Terminal::new(TestBackend::new(72, 30)).unwrap();
        terminal.draw(|f| render(f, &mut app)).unwrap();

        // 72 cells fit two 34-wide columns
        assert_eq!(app.model.ui.scroll_start, 2);
        let text = screen_text(&terminal);
        assert!(text.contains("col-4 · home"));
        assert!(!text.contains("col-1 · home"));
        assert!(text.contains("◀ 2 │ 0 ▶"));
    }

    #[test]
    fn test_empty_canvas_hint() {
        let mut config = Config::default();
        config.columns = Some(Vec::new());
        let mut app = App::new(config).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal.draw(|f| render(f, &mut app)).unwrap();
        assert!(screen_text(&terminal).contains("No columns."));
    }

    #[test]
    fn test_widest_column_width_renders() {
        let config = Config::from_yaml("column_width: 65535").unwrap();
        let mut app = App::new(config).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|f| render(f, &mut app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("col-1 · home"));
        assert!(text.contains("◀ 0 │ 1 ▶"));
    }
}
