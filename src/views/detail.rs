//! Detail views reached from the feeds

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use serde_json::json;

use super::payload_field;
use crate::model::Payload;
use crate::registry::{Navigator, ViewOutput};

fn detail(id_label: String, heading: &str, nav: &Navigator) -> ViewOutput {
    let body = vec![
        Line::from(Span::styled(
            format!(" ID: {} ", id_label),
            Style::default().fg(Color::Black).bg(Color::Gray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            heading.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("The column header now has an enabled back button."),
        Line::from(""),
    ];

    ViewOutput::new(body).with_link(nav.link(
        "View author profile",
        "UserProfile",
        Some(json!({ "userId": 99, "userName": "Admin" })),
    ))
}

/// Post detail for `{ postId }`
pub fn post_detail(payload: Option<&Payload>, nav: &Navigator) -> ViewOutput {
    detail(payload_field(payload, "postId"), "Post detail", nav)
}

/// Search result detail for `{ searchId }`
pub fn search_detail(payload: Option<&Payload>, nav: &Navigator) -> ViewOutput {
    detail(payload_field(payload, "searchId"), "Result detail", nav)
}
