//! UI Model
//!
//! This sub-model contains state that only affects presentation: focus,
//! per-column link selection, scrolling, drag feedback, and toasts. None of
//! it is consulted by the column collection.

use std::collections::HashMap;
use std::time::Instant;

use super::types::ColumnId;

/// Which sensor started a drag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragSource {
    Pointer,
    Keyboard,
}

/// In-flight drag gesture (visual feedback only)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragState {
    /// Column being dragged
    pub active: ColumnId,
    /// Column currently under the pointer / keyboard target
    pub over: Option<ColumnId>,
    pub source: DragSource,
    /// Pointer press position (column, row)
    pub origin: (u16, u16),
    /// Pointer drags activate after moving past the activation distance
    pub activated: bool,
}

impl DragState {
    /// Armed pointer drag; becomes active once the pointer moves far enough
    pub fn pointer(active: ColumnId, origin: (u16, u16)) -> Self {
        Self {
            over: Some(active.clone()),
            active,
            source: DragSource::Pointer,
            origin,
            activated: false,
        }
    }

    /// Keyboard drag; picked up immediately, target starts on itself
    pub fn keyboard(active: ColumnId) -> Self {
        Self {
            over: Some(active.clone()),
            active,
            source: DragSource::Keyboard,
            origin: (0, 0),
            activated: true,
        }
    }
}

/// UI preferences and transient state
#[derive(Clone, Debug)]
pub struct UiModel {
    /// Whether vim keybindings are enabled
    pub vim_mode: bool,

    /// Focused column (keyboard target)
    pub focused: Option<ColumnId>,

    /// Selected link index per column
    pub selections: HashMap<ColumnId, usize>,

    /// Index of the first visible column
    pub scroll_start: usize,

    /// Drag in progress
    pub drag: Option<DragState>,

    /// Toast message (text, timestamp)
    pub toast_message: Option<(String, Instant)>,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new(vim_mode: bool) -> Self {
        Self {
            vim_mode,
            focused: None,
            selections: HashMap::new(),
            scroll_start: 0,
            drag: None,
            toast_message: None,
            should_quit: false,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.as_ref().is_some_and(|d| d.activated)
    }

    /// Selected link index for a column
    pub fn selection(&self, id: &ColumnId) -> Option<usize> {
        self.selections.get(id).copied()
    }

    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    /// Check if toast should be dismissed
    pub fn should_dismiss_toast(&self) -> bool {
        if let Some((_, timestamp)) = &self.toast_message {
            crate::logic::ui::should_dismiss_toast(timestamp.elapsed().as_millis())
        } else {
            false
        }
    }

    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }
}
