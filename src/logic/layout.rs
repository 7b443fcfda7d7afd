//! Layout calculation logic
//!
//! Pure functions for the horizontally scrolling column canvas.

/// Gap between adjacent columns in terminal cells
pub const COLUMN_GAP: u16 = 1;

/// Narrowest column width accepted from configuration
pub const MIN_COLUMN_WIDTH: u16 = 20;

/// Which slice of the column row is on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleColumnRange {
    /// Index of first visible column
    pub start: usize,
    /// Number of columns drawn
    pub visible: usize,
    /// Columns hidden off the left edge
    pub hidden_left: usize,
    /// Columns hidden off the right edge
    pub hidden_right: usize,
}

/// How many fixed-width columns fit in `content_width` (always at least 1)
///
/// # Examples
/// ```
/// use stackdeck::logic::layout::columns_that_fit;
///
/// // 34-wide columns with a 1-cell gap: 3 * 34 + 2 = 104
/// assert_eq!(columns_that_fit(104, 34), 3);
/// assert_eq!(columns_that_fit(103, 34), 2);
/// assert_eq!(columns_that_fit(10, 34), 1);
/// assert_eq!(columns_that_fit(120, u16::MAX), 1);
/// ```
pub fn columns_that_fit(content_width: u16, column_width: u16) -> usize {
    let column_width = column_width.max(1);
    let fit = content_width.saturating_add(COLUMN_GAP) / column_width.saturating_add(COLUMN_GAP);
    (fit as usize).max(1)
}

/// Adjust a scroll offset so the focused column is on screen
///
/// Scrolls the minimum amount: left when focus is before the window, right
/// when focus is past it. The offset is also pulled back when columns were
/// removed and the window would otherwise show empty space.
///
/// # Examples
/// ```
/// use stackdeck::logic::layout::scroll_to_include;
///
/// // Window of 2 starting at 0, focus moves to column 3
/// assert_eq!(scroll_to_include(0, 2, 5, Some(3)), 2);
/// // Focus moves back to column 1
/// assert_eq!(scroll_to_include(2, 2, 5, Some(1)), 1);
/// // Focus already visible
/// assert_eq!(scroll_to_include(1, 2, 5, Some(2)), 1);
/// ```
pub fn scroll_to_include(start: usize, visible: usize, total: usize, focused: Option<usize>) -> usize {
    let visible = visible.max(1);
    let max_start = total.saturating_sub(visible);
    let mut start = start.min(max_start);

    if let Some(focused) = focused {
        if focused < start {
            start = focused;
        } else if focused >= start + visible {
            start = focused + 1 - visible;
        }
    }

    start.min(max_start)
}

/// Calculate which columns are drawn this frame
///
/// # Arguments
/// * `content_width` - Available horizontal space in terminal cells
/// * `column_width` - Width of one column
/// * `num_columns` - Number of columns in the collection
/// * `current_start` - Scroll offset from the previous frame
/// * `focused` - Index of the focused column, if any
pub fn calculate_visible_column_range(
    content_width: u16,
    column_width: u16,
    num_columns: usize,
    current_start: usize,
    focused: Option<usize>,
) -> VisibleColumnRange {
    let fit = columns_that_fit(content_width, column_width);
    let start = scroll_to_include(current_start, fit, num_columns, focused);
    let visible = num_columns.saturating_sub(start).min(fit);

    VisibleColumnRange {
        start,
        visible,
        hidden_left: start,
        hidden_right: num_columns - start - visible,
    }
}
