//! Content Registry
//!
//! Immutable mapping from view name to view implementation, built once by
//! the host and handed to the render resolver. Adding a view means one more
//! `register` call; nothing else in the core changes.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use ratatui::text::{Line, Text};

use crate::messages::{Msg, NavAction};
use crate::model::{ColumnId, Payload, ViewEntry};

/// Navigate capability bound to exactly one column
///
/// Views receive one of these at render time. The column id is fixed at
/// construction, so a view can only ever push onto its own column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    column: ColumnId,
}

impl Navigator {
    pub fn for_column(column: ColumnId) -> Self {
        Self { column }
    }

    pub fn column(&self) -> &ColumnId {
        &self.column
    }

    /// Message pushing `view_name` onto this column's stack
    pub fn navigate(&self, view_name: impl Into<String>, payload: Option<Payload>) -> Msg {
        Msg::Navigate {
            column: self.column.clone(),
            action: NavAction::Push(ViewEntry::new(view_name, payload)),
        }
    }

    /// Selectable link that navigates when activated
    pub fn link(&self, label: impl Into<String>, view_name: impl Into<String>, payload: Option<Payload>) -> ViewLink {
        ViewLink {
            label: label.into(),
            msg: self.navigate(view_name, payload),
        }
    }
}

/// A selectable action inside a view
#[derive(Debug, Clone, PartialEq)]
pub struct ViewLink {
    pub label: String,
    pub msg: Msg,
}

/// Renderable output of a view: body text plus its links, in display order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewOutput {
    pub body: Text<'static>,
    pub links: Vec<ViewLink>,
}

impl ViewOutput {
    pub fn new(body: impl Into<Text<'static>>) -> Self {
        Self {
            body: body.into(),
            links: Vec::new(),
        }
    }

    pub fn with_link(mut self, link: ViewLink) -> Self {
        self.links.push(link);
        self
    }

    /// Placeholder shown when a column's view is not registered
    pub fn not_found(view_name: &str) -> Self {
        Self::new(vec![
            Line::from("View not found"),
            Line::from(format!("'{}' is not registered", view_name)),
        ])
    }
}

/// View contract: `(payload, navigate) -> output`
pub trait ContentView: Send + Sync {
    fn render(&self, payload: Option<&Payload>, nav: &Navigator) -> ViewOutput;
}

/// Plain functions can be registered directly
impl<F> ContentView for F
where
    F: Fn(Option<&Payload>, &Navigator) -> ViewOutput + Send + Sync,
{
    fn render(&self, payload: Option<&Payload>, nav: &Navigator) -> ViewOutput {
        self(payload, nav)
    }
}

/// Name to view lookup table
#[derive(Clone, Default)]
pub struct ContentRegistry {
    views: HashMap<String, Arc<dyn ContentView>>,
}

impl fmt::Debug for ContentRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names = self.names();
        names.sort_unstable();
        f.debug_struct("ContentRegistry").field("views", &names).finish()
    }
}

impl ContentRegistry {
    pub fn builder() -> ContentRegistryBuilder {
        ContentRegistryBuilder::default()
    }

    pub fn get(&self, view_name: &str) -> Option<&Arc<dyn ContentView>> {
        self.views.get(view_name)
    }

    pub fn contains(&self, view_name: &str) -> bool {
        self.views.contains_key(view_name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.views.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}

/// Collects views before the registry is frozen
#[derive(Default)]
pub struct ContentRegistryBuilder {
    views: HashMap<String, Arc<dyn ContentView>>,
}

impl ContentRegistryBuilder {
    /// Register a view under `name`; a later registration replaces an earlier one
    pub fn register(mut self, name: impl Into<String>, view: impl ContentView + 'static) -> Self {
        self.views.insert(name.into(), Arc::new(view));
        self
    }

    pub fn build(self) -> ContentRegistry {
        ContentRegistry { views: self.views }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn echo(payload: Option<&Payload>, nav: &Navigator) -> ViewOutput {
        let text = payload.map(|p| p.to_string()).unwrap_or_default();
        ViewOutput::new(text).with_link(nav.link("next", "Echo", None))
    }

    #[test]
    fn test_navigator_targets_its_own_column() {
        let nav = Navigator::for_column(ColumnId::new("col-2"));
        let msg = nav.navigate("PostDetail", Some(json!({"postId": 7})));
        assert_eq!(
            msg,
            Msg::Navigate {
                column: ColumnId::new("col-2"),
                action: NavAction::Push(ViewEntry::new("PostDetail", Some(json!({"postId": 7})))),
            }
        );
    }

    #[test]
    fn test_register_and_lookup() {
        let registry = ContentRegistry::builder().register("Echo", echo).build();
        assert!(registry.contains("Echo"));
        assert!(registry.get("Ghost").is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_registered_function_renders() {
        let registry = ContentRegistry::builder().register("Echo", echo).build();
        let nav = Navigator::for_column(ColumnId::new("col-1"));
        let payload = json!({"a": 1});

        let output = registry.get("Echo").unwrap().render(Some(&payload), &nav);
        assert_eq!(output.body, Text::from(payload.to_string()));
        assert_eq!(output.links.len(), 1);
        assert_eq!(output.links[0].label, "next");
    }

    #[test]
    fn test_not_found_placeholder_is_deterministic() {
        assert_eq!(ViewOutput::not_found("Ghost"), ViewOutput::not_found("Ghost"));
        let rendered: String = ViewOutput::not_found("Ghost")
            .body
            .lines
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.to_string()))
            .collect();
        assert!(rendered.contains("View not found"));
        assert!(rendered.contains("Ghost"));
    }
}
