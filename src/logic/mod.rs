//! Business Logic
//!
//! This module contains pure functions that can be unit tested:
//! - drag: Pointer activation distance and keyboard drop targets
//! - layout: Horizontal column scrolling
//! - navigation: Focus and selection cycling
//! - reorder: Reorder controller (drag-end to column move)
//! - resolve: Render resolver (column to view output)
//! - ui: Transient UI state helpers
//! - update: Message dispatch onto the column collection

pub mod drag;
pub mod layout;
pub mod navigation;
pub mod reorder;
pub mod resolve;
pub mod ui;
pub mod update;
