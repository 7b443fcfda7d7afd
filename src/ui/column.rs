//! Column widget
//!
//! A bordered column: header row with back/forward/close buttons and the
//! current view name, then the view's body text and its links.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use stackdeck::logic::resolve::ResolvedColumn;
use stackdeck::logic::ui::history_label;

use super::hit_map::{HitMap, HitTarget};
use crate::utils::truncate_to_width;

const BACK: &str = "[←]";
const FORWARD: &str = "[→]";
const CLOSE: &str = "[x]";
const BUTTON_WIDTH: u16 = 3;

/// Per-frame presentation state for one column
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnVisual {
    pub focused: bool,
    /// Column is being dragged
    pub dragged: bool,
    /// Column is the current drop target of a drag
    pub drop_target: bool,
    /// Selected link index
    pub selected: Option<usize>,
}

fn border_style(visual: &ColumnVisual) -> Style {
    if visual.drop_target && !visual.dragged {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else if visual.dragged {
        Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
    } else if visual.focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Header button style; disabled buttons stay visible but dimmed
fn button_style(enabled: bool) -> Style {
    if enabled {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn build_header_line(column: &ResolvedColumn, width: u16) -> Line<'static> {
    // "[←] [→] " + name + " [x]"
    let name_width = width.saturating_sub(BUTTON_WIDTH * 3 + 3) as usize;
    let name = truncate_to_width(&column.view_name, name_width);
    let name_style = if column.resolution.is_not_found() {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    Line::from(vec![
        Span::styled(BACK, button_style(column.can_go_back)),
        Span::raw(" "),
        Span::styled(FORWARD, button_style(column.can_go_forward)),
        Span::raw(" "),
        Span::styled(format!("{:<width$}", name, width = name_width), name_style),
        Span::raw(" "),
        Span::styled(CLOSE, Style::default().fg(Color::Red)),
    ])
}

pub fn render_column(
    f: &mut Frame,
    area: Rect,
    column: &ResolvedColumn,
    visual: &ColumnVisual,
    hits: &mut HitMap,
) {
    hits.push(area, HitTarget::Column(column.id.clone()));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(visual))
        .title(format!(" {} · {} ", column.id, column.kind))
        .title_top(Line::from(format!(" {} ", history_label(column.position))).right_aligned());
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.height == 0 || inner.width == 0 {
        return;
    }

    // Header row
    let header = Rect::new(inner.x, inner.y, inner.width, 1);
    f.render_widget(Paragraph::new(build_header_line(column, inner.width)), header);
    hits.push(header, HitTarget::Header(column.id.clone()));
    hits.push(
        Rect::new(inner.x, inner.y, BUTTON_WIDTH.min(inner.width), 1),
        HitTarget::Back(column.id.clone()),
    );
    if inner.width >= BUTTON_WIDTH * 3 + 3 {
        hits.push(
            Rect::new(inner.x + BUTTON_WIDTH + 1, inner.y, BUTTON_WIDTH, 1),
            HitTarget::Forward(column.id.clone()),
        );
        hits.push(
            Rect::new(inner.x + inner.width - BUTTON_WIDTH, inner.y, BUTTON_WIDTH, 1),
            HitTarget::Remove(column.id.clone()),
        );
    }

    if inner.height < 3 {
        return;
    }

    let rule = Rect::new(inner.x, inner.y + 1, inner.width, 1);
    f.render_widget(
        Paragraph::new("─".repeat(inner.width as usize)).style(Style::default().fg(Color::DarkGray)),
        rule,
    );

    let content_top = inner.y + 2;
    let content_bottom = inner.y + inner.height;
    let output = column.resolution.output();

    let body_style = if column.resolution.is_not_found() {
        Style::default().fg(Color::Red)
    } else {
        Style::default()
    };
    let body = Paragraph::new(output.body).style(body_style).wrap(Wrap { trim: false });
    let body_height = (body.line_count(inner.width) as u16).min(content_bottom - content_top);
    f.render_widget(body, Rect::new(inner.x, content_top, inner.width, body_height));

    // One row per link below the body
    let mut y = content_top + body_height;
    for (index, link) in output.links.iter().enumerate() {
        if y >= content_bottom {
            break;
        }
        let selected = visual.focused && visual.selected == Some(index);
        let style = if selected {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default().fg(Color::Cyan)
        };
        let text = truncate_to_width(&format!("› {}", link.label), inner.width as usize);
        let row = Rect::new(inner.x, y, inner.width, 1);
        f.render_widget(Paragraph::new(Span::styled(text, style)), row);
        hits.push(row, HitTarget::Link(column.id.clone(), index));
        y += 1;
    }
}
