use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn key(label: &'static str) -> Span<'static> {
    Span::styled(label, Style::default().fg(Color::Yellow))
}

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(vim_mode: bool, dragging: bool) -> Vec<Span<'static>> {
    let (left_right, up_down) = if vim_mode { ("h/l", "j/k") } else { ("←/→", "↑/↓") };

    // A keyboard drag captures the arrow keys until it is dropped or cancelled
    if dragging {
        return vec![
            key(left_right),
            Span::raw(":Move target  "),
            key("Space/Enter"),
            Span::raw(":Drop  "),
            key("Esc"),
            Span::raw(":Cancel"),
        ];
    }

    vec![
        key(left_right),
        Span::raw(":Column  "),
        key(up_down),
        Span::raw(":Link  "),
        key("Enter"),
        Span::raw(":Open  "),
        key("Bksp/["),
        Span::raw(":Back  "),
        key("]"),
        Span::raw(":Forward  "),
        key("1-9"),
        Span::raw(":Add column  "),
        key("x"),
        Span::raw(":Remove  "),
        key("Space"),
        Span::raw(":Move column  "),
        key("q"),
        Span::raw(":Quit"),
    ]
}

/// Build the legend paragraph (reusable for both rendering and height calculation)
pub fn build_legend_paragraph(vim_mode: bool, dragging: bool) -> Paragraph<'static> {
    let hotkey_line = Line::from(build_hotkey_spans(vim_mode, dragging));

    Paragraph::new(vec![hotkey_line])
        .block(Block::default().borders(Borders::ALL).title("Hotkeys"))
        .style(Style::default().fg(Color::Gray))
        .wrap(ratatui::widgets::Wrap { trim: false })
}

/// Render the hotkey legend
pub fn render_legend(f: &mut Frame, area: Rect, vim_mode: bool, dragging: bool) {
    f.render_widget(build_legend_paragraph(vim_mode, dragging), area);
}

/// Calculate required height for legend based on terminal width and content
pub fn calculate_legend_height(terminal_width: u16, vim_mode: bool, dragging: bool) -> u16 {
    // line_count() miscounts when a block is attached, so count without borders
    let hotkey_line = Line::from(build_hotkey_spans(vim_mode, dragging));
    let paragraph_for_counting =
        Paragraph::new(vec![hotkey_line]).wrap(ratatui::widgets::Wrap { trim: false });

    let available_width = terminal_width.saturating_sub(2);
    let line_count = paragraph_for_counting.line_count(available_width);

    // Add top + bottom borders, ensure minimum of 3
    (line_count as u16).saturating_add(2).max(3)
}
