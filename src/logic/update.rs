//! Message dispatch
//!
//! Pure update step: (snapshot, message) -> next snapshot.

use crate::error::ColumnError;
use crate::logic::reorder::on_drag_end;
use crate::messages::Msg;
use crate::model::{ColumnCollection, ColumnKindCatalog};

/// Apply one message to the collection
///
/// Only `AddColumn` can fail; every other message always yields a valid
/// snapshot (possibly the unchanged input).
pub fn apply(
    collection: &ColumnCollection,
    msg: &Msg,
    catalog: &ColumnKindCatalog,
) -> Result<ColumnCollection, ColumnError> {
    match msg {
        Msg::AddColumn(kind) => collection.append(kind, catalog),
        Msg::RemoveColumn(id) => Ok(collection.remove(id)),
        Msg::Navigate { column, action } => Ok(collection.navigate(column, action)),
        Msg::DragEnd(event) => Ok(on_drag_end(collection, event)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::{DragEnd, NavAction};
    use crate::model::catalog::ColumnKindSpec;
    use crate::model::{ColumnId, ViewEntry};

    fn catalog() -> ColumnKindCatalog {
        ColumnKindCatalog::new(vec![ColumnKindSpec::new("home", "Home Feed", "Home")])
    }

    #[test]
    fn test_apply_sequence() {
        let catalog = catalog();
        let mut collection = ColumnCollection::new();

        let msgs = vec![
            Msg::AddColumn("home".to_string()),
            Msg::AddColumn("home".to_string()),
            Msg::Navigate {
                column: ColumnId::new("col-1"),
                action: NavAction::Push(ViewEntry::named("PostDetail")),
            },
            Msg::DragEnd(DragEnd {
                active: ColumnId::new("col-1"),
                over: Some(ColumnId::new("col-2")),
            }),
            Msg::RemoveColumn(ColumnId::new("col-2")),
        ];

        for msg in &msgs {
            collection = apply(&collection, msg, &catalog).unwrap();
        }

        assert_eq!(collection.ids(), vec![ColumnId::new("col-1")]);
        assert_eq!(
            collection.columns()[0].navigation().current().view_name(),
            "PostDetail"
        );
    }

    #[test]
    fn test_apply_invalid_kind() {
        let collection = ColumnCollection::new();
        let result = apply(&collection, &Msg::AddColumn("nope".to_string()), &catalog());
        assert!(matches!(result, Err(ColumnError::InvalidKind { .. })));
    }
}
