//! User profile view

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use super::payload_field;
use crate::model::Payload;
use crate::registry::{Navigator, ViewOutput};

/// Profile card for `{ userName }`; links back to the home feed
pub fn user_profile(payload: Option<&Payload>, nav: &Navigator) -> ViewOutput {
    let name = payload_field(payload, "userName");
    let initial = name.chars().next().unwrap_or('?').to_uppercase().to_string();

    let body = vec![
        Line::from(Span::styled(
            format!(" {} ", initial),
            Style::default()
                .fg(Color::White)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(""),
        Line::from(Span::styled(name, Style::default().add_modifier(Modifier::BOLD))).centered(),
        Line::from(Span::styled("Software Engineer", Style::default().fg(Color::DarkGray))).centered(),
        Line::from(""),
    ];

    ViewOutput::new(body).with_link(nav.link("Back to home", "Home", None))
}
