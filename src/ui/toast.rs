use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::utils::display_width;

/// Render a toast notification (brief pop-up message)
pub fn render_toast(f: &mut Frame, area: Rect, message: &str) {
    let max_width = area.width.min(80);
    let toast_width = display_width(message).saturating_add(6).min(max_width);
    let toast_height = 4u16.min(area.height);

    let toast_x = (area.width.saturating_sub(toast_width)) / 2;
    let toast_y = 3u16.min(area.height.saturating_sub(toast_height));

    let toast_area = Rect {
        x: area.x + toast_x,
        y: area.y + toast_y,
        width: toast_width,
        height: toast_height,
    };

    // Clear the area first to prevent background bleed-through
    f.render_widget(Clear, toast_area);

    let is_error = message.starts_with("Error:");
    let (icon, color) = if is_error {
        ("✗ ", Color::Red)
    } else {
        ("✓ ", Color::Green)
    };

    let toast_line = Line::from(vec![
        Span::styled(icon, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::styled(message, Style::default()),
    ]);

    let toast_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

    let toast_text = Paragraph::new(vec![toast_line])
        .block(toast_block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    f.render_widget(toast_text, toast_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(message: &str) -> ratatui::buffer::Buffer {
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal.draw(|f| render_toast(f, f.area(), message)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_error_toast_is_red() {
        let buffer = render("Error: unknown column kind 'nope'");
        assert!(buffer_text(&buffer).contains("✗"));
        // Top-left corner of the toast border
        let width = display_width("Error: unknown column kind 'nope'") + 6;
        let x = (60 - width) / 2;
        assert_eq!(buffer[(x, 3)].fg, Color::Red);
    }

    #[test]
    fn test_info_toast_is_green() {
        let buffer = render("Column removed");
        let text = buffer_text(&buffer);
        assert!(text.contains("✓"));
        assert!(text.contains("Column removed"));
    }

    #[test]
    fn test_toast_fits_tiny_area() {
        let mut terminal = Terminal::new(TestBackend::new(10, 2)).unwrap();
        terminal.draw(|f| render_toast(f, f.area(), "Column removed")).unwrap();
    }
}
