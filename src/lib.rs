//! Stackdeck Library
//!
//! Column/navigation state model for the stackdeck dashboard.
//! Exposes modules for the binary and for testing:
//!
//! - **model**: columns, per-column navigation stacks, kind catalog, UI state
//! - **registry**: view-name to view lookup and the view contract
//! - **logic**: pure operations (reorder controller, render resolver, layout)
//! - **views**: demo content views and the demo catalog

pub mod error;
pub mod logic;
pub mod messages;
pub mod model;
pub mod registry;
pub mod views;

pub use error::ColumnError;
pub use messages::{DragEnd, Msg, NavAction};
pub use model::{ColumnCollection, ColumnId, ColumnKindCatalog, NavigationStack, Payload, ViewEntry};
pub use registry::{ContentRegistry, ContentView, Navigator, ViewLink, ViewOutput};
