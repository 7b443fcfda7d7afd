//! Toolbar with one "add column" button per catalog kind

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use stackdeck::ColumnKindCatalog;

use super::hit_map::{HitMap, HitTarget};
use crate::utils::display_width;

const BUTTON_GAP: u16 = 1;

/// Button captions paired with their kind; the first nine get a digit key
fn toolbar_buttons(catalog: &ColumnKindCatalog) -> Vec<(String, String)> {
    catalog
        .iter()
        .enumerate()
        .map(|(i, spec)| {
            let caption = if i < 9 {
                format!("[{}:+ {}]", i + 1, spec.label)
            } else {
                format!("[+ {}]", spec.label)
            };
            (spec.kind.clone(), caption)
        })
        .collect()
}

pub fn render_toolbar(f: &mut Frame, area: Rect, catalog: &ColumnKindCatalog, hits: &mut HitMap) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            " stackdeck ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);

    let mut spans = Vec::new();
    let mut x = inner.x;
    let right = inner.x.saturating_add(inner.width);

    for (kind, caption) in toolbar_buttons(catalog) {
        let width = display_width(&caption);
        if x.saturating_add(width) > right {
            break;
        }
        hits.push(Rect::new(x, inner.y, width, 1), HitTarget::AddColumn(kind));
        spans.push(Span::styled(caption, Style::default().fg(Color::Green)));
        spans.push(Span::raw(" ".repeat(BUTTON_GAP as usize)));
        x = x.saturating_add(width + BUTTON_GAP);
    }

    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
