//! Drag gesture logic
//!
//! Pure helpers for the pointer and keyboard drag sensors. Only
//! `finish_drag` produces something the core consumes (a `DragEnd`); the
//! rest is visual feedback.

use crate::messages::DragEnd;
use crate::model::ui::DragState;
use crate::model::ColumnId;

/// Whether the pointer moved far enough from the press point to start a drag
///
/// Distance is Euclidean in terminal cells, so a press followed by a tiny
/// jitter still counts as a click.
///
/// # Examples
/// ```
/// use stackdeck::logic::drag::exceeds_activation_distance;
///
/// assert!(!exceeds_activation_distance((10, 2), (11, 2), 2));
/// assert!(exceeds_activation_distance((10, 2), (12, 2), 2));
/// assert!(exceeds_activation_distance((10, 2), (9, 4), 2));
/// // Zero distance activates immediately
/// assert!(exceeds_activation_distance((10, 2), (10, 2), 0));
/// ```
pub fn exceeds_activation_distance(origin: (u16, u16), current: (u16, u16), distance: u16) -> bool {
    let dx = (current.0 as i64 - origin.0 as i64).pow(2);
    let dy = (current.1 as i64 - origin.1 as i64).pow(2);
    dx + dy >= (distance as i64).pow(2)
}

/// Drag-end event for a released gesture
///
/// Returns `None` when the gesture never activated (it was a click) and for
/// cancelled gestures, so the reorder controller is never called for them.
pub fn finish_drag(state: &DragState) -> Option<DragEnd> {
    if !state.activated {
        return None;
    }

    Some(DragEnd {
        active: state.active.clone(),
        over: state.over.clone(),
    })
}

/// Move the keyboard drop target one column left (`-1`) or right (`1`)
///
/// Starts from the current target, or from the dragged column when there is
/// none. Stops at either end instead of wrapping.
///
/// # Examples
/// ```
/// use stackdeck::logic::drag::step_drop_target;
/// use stackdeck::ColumnId;
///
/// let ids: Vec<ColumnId> = ["col-1", "col-2", "col-3"].iter().map(|s| ColumnId::new(*s)).collect();
/// let active = ColumnId::new("col-2");
///
/// assert_eq!(step_drop_target(&ids, &active, None, 1), Some(ColumnId::new("col-3")));
/// assert_eq!(step_drop_target(&ids, &active, Some(&ColumnId::new("col-3")), 1), Some(ColumnId::new("col-3")));
/// assert_eq!(step_drop_target(&ids, &active, Some(&ColumnId::new("col-2")), -1), Some(ColumnId::new("col-1")));
/// ```
pub fn step_drop_target(
    ids: &[ColumnId],
    active: &ColumnId,
    over: Option<&ColumnId>,
    delta: isize,
) -> Option<ColumnId> {
    let anchor = over.unwrap_or(active);
    let idx = ids.iter().position(|id| id == anchor)?;
    let target = (idx as isize + delta).clamp(0, ids.len() as isize - 1) as usize;
    ids.get(target).cloned()
}
