//! UI state transition logic
//!
//! Pure functions for transient UI state.

/// How long a toast stays on screen
pub const TOAST_DURATION_MS: u128 = 1500;

/// Check whether a toast shown `elapsed_ms` ago should be dismissed
///
/// # Examples
/// ```
/// use stackdeck::logic::ui::should_dismiss_toast;
///
/// assert!(!should_dismiss_toast(200));
/// assert!(should_dismiss_toast(1500));
/// ```
pub fn should_dismiss_toast(elapsed_ms: u128) -> bool {
    elapsed_ms >= TOAST_DURATION_MS
}

/// Human-readable history position, e.g. `2/3` for cursor 1 of 3 entries
///
/// # Examples
/// ```
/// use stackdeck::logic::ui::history_label;
///
/// assert_eq!(history_label((0, 1)), "1/1");
/// assert_eq!(history_label((1, 3)), "2/3");
/// ```
pub fn history_label(position: (usize, usize)) -> String {
    format!("{}/{}", position.0 + 1, position.1)
}

/// Map a digit key to a catalog index (`'1'` is the first kind)
///
/// # Examples
/// ```
/// use stackdeck::logic::ui::catalog_index_for_key;
///
/// assert_eq!(catalog_index_for_key('1'), Some(0));
/// assert_eq!(catalog_index_for_key('9'), Some(8));
/// assert_eq!(catalog_index_for_key('0'), None);
/// assert_eq!(catalog_index_for_key('a'), None);
/// ```
pub fn catalog_index_for_key(c: char) -> Option<usize> {
    match c.to_digit(10) {
        Some(d) if d >= 1 => Some(d as usize - 1),
        _ => None,
    }
}
