use ratatui::layout::{Constraint, Direction, Layout, Rect};

use stackdeck::logic::layout::COLUMN_GAP;

/// Layout information for rendering
pub struct LayoutInfo {
    /// Top toolbar with "add column" buttons
    pub toolbar_area: Rect,
    /// Column canvas
    pub canvas_area: Rect,
    /// Hotkey legend area (full width)
    pub legend_area: Rect,
    /// Bottom status bar area
    pub status_area: Rect,
}

/// Calculate the screen layout for all UI components
pub fn calculate_layout(terminal_size: Rect, vim_mode: bool, dragging: bool) -> LayoutInfo {
    let legend_height = super::legend::calculate_legend_height(terminal_size.width, vim_mode, dragging);

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Toolbar (border + buttons + border)
            Constraint::Min(5),                // Column canvas
            Constraint::Length(legend_height), // Legend (exact fit for wrapped content)
            Constraint::Length(3),             // Status bar
        ])
        .split(terminal_size);

    LayoutInfo {
        toolbar_area: main_chunks[0],
        canvas_area: main_chunks[1],
        legend_area: main_chunks[2],
        status_area: main_chunks[3],
    }
}

/// Fixed-width column slots laid out left to right, separated by a gap
///
/// Slots that would spill past the canvas are clipped to it.
pub fn column_areas(canvas: Rect, column_width: u16, count: usize) -> Vec<Rect> {
    let mut areas = Vec::with_capacity(count);
    let mut x = canvas.x;
    let right = canvas.x.saturating_add(canvas.width);

    for _ in 0..count {
        if x >= right {
            break;
        }
        let width = column_width.min(right - x);
        areas.push(Rect::new(x, canvas.y, width, canvas.height));
        x = x.saturating_add(column_width.saturating_add(COLUMN_GAP));
    }

    areas
}
