//! Reorder Controller
//!
//! Translates drag-end events into column moves. Holds no state: drag-start,
//! drag-over and cancel are visual feedback owned by the input layer and
//! never reach this module.

use tracing::debug;

use crate::messages::DragEnd;
use crate::model::ColumnCollection;

/// Move the element at `from` so that it ends up at index `to`
///
/// Standard array-move: remove at `from`, then insert at `to`. Elements in
/// between shift by one. Out-of-range indices return the input unchanged.
///
/// # Examples
/// ```
/// use stackdeck::logic::reorder::array_move;
///
/// assert_eq!(array_move(vec!['a', 'b', 'c'], 0, 2), vec!['b', 'c', 'a']);
/// assert_eq!(array_move(vec!['a', 'b', 'c'], 2, 0), vec!['c', 'a', 'b']);
/// assert_eq!(array_move(vec!['a', 'b', 'c'], 1, 1), vec!['a', 'b', 'c']);
/// ```
pub fn array_move<T>(mut items: Vec<T>, from: usize, to: usize) -> Vec<T> {
    if from >= items.len() || to >= items.len() || from == to {
        return items;
    }

    let item = items.remove(from);
    items.insert(to, item);
    items
}

/// Apply a drag-end event to the collection
///
/// Drops outside any column and drops onto the dragged column itself are
/// ignored; everything else becomes `reorder(active, over)`.
pub fn on_drag_end(collection: &ColumnCollection, event: &DragEnd) -> ColumnCollection {
    match &event.over {
        Some(over) if over != &event.active => collection.reorder(&event.active, over),
        Some(_) => collection.clone(),
        None => {
            debug!("Drag of {} ended outside any column", event.active);
            collection.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalog::ColumnKindSpec;
    use crate::model::{ColumnId, ColumnKindCatalog};

    fn collection() -> ColumnCollection {
        let catalog = ColumnKindCatalog::new(vec![ColumnKindSpec::new("home", "Home Feed", "Home")]);
        let mut collection = ColumnCollection::new();
        for _ in 0..4 {
            collection = collection.append("home", &catalog).unwrap();
        }
        collection
    }

    fn drag(active: &str, over: Option<&str>) -> DragEnd {
        DragEnd {
            active: ColumnId::new(active),
            over: over.map(ColumnId::new),
        }
    }

    #[test]
    fn test_array_move_forward() {
        assert_eq!(array_move(vec![1, 2, 3, 4], 0, 2), vec![2, 3, 1, 4]);
        assert_eq!(array_move(vec![1, 2, 3, 4], 1, 3), vec![1, 3, 4, 2]);
    }

    #[test]
    fn test_array_move_backward() {
        assert_eq!(array_move(vec![1, 2, 3, 4], 3, 0), vec![4, 1, 2, 3]);
        assert_eq!(array_move(vec![1, 2, 3, 4], 2, 1), vec![1, 3, 2, 4]);
    }

    #[test]
    fn test_array_move_out_of_range() {
        assert_eq!(array_move(vec![1, 2, 3], 5, 0), vec![1, 2, 3]);
        assert_eq!(array_move(vec![1, 2, 3], 0, 5), vec![1, 2, 3]);
        assert_eq!(array_move(Vec::<u8>::new(), 0, 0), Vec::<u8>::new());
    }

    #[test]
    fn test_drag_end_reorders() {
        let collection = collection();
        let after = on_drag_end(&collection, &drag("col-4", Some("col-2")));
        let ids: Vec<String> = after.ids().iter().map(|id| id.to_string()).collect();
        assert_eq!(ids, vec!["col-1", "col-4", "col-2", "col-3"]);
    }

    #[test]
    fn test_drag_end_onto_self_is_ignored() {
        let collection = collection();
        let after = on_drag_end(&collection, &drag("col-2", Some("col-2")));
        assert!(after.same_snapshot(&collection));
    }

    #[test]
    fn test_drag_end_outside_is_ignored() {
        let collection = collection();
        let after = on_drag_end(&collection, &drag("col-2", None));
        assert!(after.same_snapshot(&collection));
    }

    #[test]
    fn test_drag_end_for_removed_column_is_ignored() {
        let collection = collection();
        let after = on_drag_end(&collection, &drag("col-9", Some("col-1")));
        assert!(after.same_snapshot(&collection));
    }
}
