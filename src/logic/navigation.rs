//! Focus and selection logic
//!
//! Pure functions for moving focus between columns and selection between
//! links, with wrapping behavior.

/// Calculate the next selection index with wrapping
///
/// Advances the selection to the next item in the list. If at the end,
/// wraps around to the beginning. If no item is selected, selects the first item.
///
/// # Arguments
/// * `current` - Current selection index (None if no selection)
/// * `list_len` - Total number of items in the list
///
/// # Returns
/// * `Some(index)` - The next selection index
/// * `None` - If the list is empty
///
/// # Examples
/// ```
/// use stackdeck::logic::navigation::next_selection;
///
/// // Empty list
/// assert_eq!(next_selection(None, 0), None);
///
/// // Normal progression
/// assert_eq!(next_selection(None, 3), Some(0));
/// assert_eq!(next_selection(Some(0), 3), Some(1));
///
/// // Wrapping at end
/// assert_eq!(next_selection(Some(2), 3), Some(0));
/// ```
pub fn next_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(i) if i >= list_len - 1 => 0,
        Some(i) => i + 1,
        None => 0,
    })
}

/// Calculate the previous selection index with wrapping
///
/// Moves the selection to the previous item in the list. If at the beginning,
/// wraps around to the end. If no item is selected, selects the last item.
///
/// # Examples
/// ```
/// use stackdeck::logic::navigation::prev_selection;
///
/// assert_eq!(prev_selection(None, 0), None);
/// assert_eq!(prev_selection(Some(1), 3), Some(0));
/// assert_eq!(prev_selection(Some(0), 3), Some(2));
/// assert_eq!(prev_selection(None, 3), Some(2));
/// ```
pub fn prev_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(i) if i >= list_len => list_len - 1,
        Some(0) | None => list_len - 1,
        Some(i) => i - 1,
    })
}

/// Clamp a stored selection after the list it points into changed length
///
/// # Examples
/// ```
/// use stackdeck::logic::navigation::clamp_selection;
///
/// assert_eq!(clamp_selection(Some(4), 2), Some(1));
/// assert_eq!(clamp_selection(Some(1), 3), Some(1));
/// assert_eq!(clamp_selection(Some(0), 0), None);
/// assert_eq!(clamp_selection(None, 3), Some(0));
/// ```
pub fn clamp_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }
    Some(current.unwrap_or(0).min(list_len - 1))
}
