//! Demo content views
//!
//! The views shipped with the dashboard, the registry that names them, and
//! the column kinds offered by the toolbar. Hosts with their own views build
//! a `ContentRegistry` and `ColumnKindCatalog` the same way.

mod detail;
mod feed;
mod profile;

use crate::model::{ColumnKindCatalog, ColumnKindSpec, Payload};
use crate::registry::ContentRegistry;

pub use detail::{post_detail, search_detail};
pub use feed::{home, search};
pub use profile::user_profile;

/// Registry with every demo view
pub fn demo_registry() -> ContentRegistry {
    ContentRegistry::builder()
        .register("Home", home)
        .register("PostDetail", post_detail)
        .register("UserProfile", user_profile)
        .register("Search", search)
        .register("SearchDetail", search_detail)
        .build()
}

/// Column kinds offered by the "add column" toolbar
///
/// Added columns start without a payload.
pub fn demo_catalog() -> ColumnKindCatalog {
    ColumnKindCatalog::new(vec![
        ColumnKindSpec::new("home", "Home Feed", "Home"),
        ColumnKindSpec::new("profile", "My Profile", "UserProfile"),
        ColumnKindSpec::new("search", "Search", "Search"),
    ])
}

/// Display a payload field, or `?` when missing
fn payload_field(payload: Option<&Payload>, key: &str) -> String {
    match payload.and_then(|p| p.get(key)) {
        Some(Payload::String(s)) => s.clone(),
        Some(Payload::Null) | None => "?".to_string(),
        Some(other) => other.to_string(),
    }
}
