use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use stackdeck::logic::resolve::ResolvedColumn;
use stackdeck::logic::ui::history_label;
use stackdeck::model::ui::DragState;

/// What the status bar reports this frame
pub struct StatusInfo<'a> {
    pub column_count: usize,
    pub focused: Option<&'a ResolvedColumn>,
    /// Catalog label of the focused column's kind
    pub focused_label: Option<&'a str>,
    pub hidden_left: usize,
    pub hidden_right: usize,
    pub drag: Option<&'a DragState>,
}

fn build_status_line(info: &StatusInfo) -> String {
    let mut parts = vec![format!("Columns: {}", info.column_count)];

    if let Some(column) = info.focused {
        let label = info.focused_label.unwrap_or(column.kind.as_str());
        parts.push(format!("Focus: {} ({})", column.id, label));
        parts.push(format!("History: {}", history_label(column.position)));
    }

    if info.hidden_left > 0 || info.hidden_right > 0 {
        parts.push(format!("◀ {} │ {} ▶", info.hidden_left, info.hidden_right));
    }

    if let Some(drag) = info.drag.filter(|d| d.activated) {
        let target = drag
            .over
            .as_ref()
            .map(|id| id.to_string())
            .unwrap_or_else(|| "nowhere".to_string());
        parts.push(format!("Moving {} → {}", drag.active, target));
    }

    parts.join(" │ ")
}

/// Render the bottom status bar
pub fn render_status_bar(f: &mut Frame, area: Rect, info: &StatusInfo) {
    let line = Line::from(Span::raw(build_status_line(info)));
    let status = Paragraph::new(vec![line])
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(Style::default().fg(Color::Gray));

    f.render_widget(status, area);
}
