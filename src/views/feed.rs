//! List views: Home feed and Search

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use serde_json::json;

use crate::model::Payload;
use crate::registry::{Navigator, ViewOutput};

const DEMO_IDS: [u64; 3] = [1, 2, 3];

fn intro(name: &str) -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            Span::styled(format!("Demo {}: ", name), Style::default().fg(Color::Cyan)),
            Span::raw("open an item to push it onto this column."),
        ]),
        Line::from(""),
    ]
}

/// Home feed: each post pushes `PostDetail { postId }`
pub fn home(_payload: Option<&Payload>, nav: &Navigator) -> ViewOutput {
    DEMO_IDS.iter().fold(ViewOutput::new(intro("Home")), |output, id| {
        output.with_link(nav.link(
            format!("Demo post #{}", id),
            "PostDetail",
            Some(json!({ "postId": id })),
        ))
    })
}

/// Search results: each result pushes `SearchDetail { searchId }`
pub fn search(_payload: Option<&Payload>, nav: &Navigator) -> ViewOutput {
    DEMO_IDS.iter().fold(ViewOutput::new(intro("Search")), |output, id| {
        output.with_link(nav.link(
            format!("Search result #{}", id),
            "SearchDetail",
            Some(json!({ "searchId": id })),
        ))
    })
}
