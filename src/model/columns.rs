//! Column Model and Column Collection
//!
//! The collection is the only owner of column order. Operations take the
//! current snapshot by reference and return the next one; an operation
//! that changes nothing hands back a clone sharing the same storage, which
//! `same_snapshot` can detect.

use std::sync::Arc;

use tracing::{debug, trace};

use super::catalog::ColumnKindCatalog;
use super::navigation::NavigationStack;
use super::types::{ColumnId, Payload, ViewEntry};
use crate::error::ColumnError;
use crate::logic::reorder::array_move;
use crate::messages::NavAction;

/// One reorderable column with its own history
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    id: ColumnId,
    kind: String,
    navigation: NavigationStack,
}

impl Column {
    pub fn new(id: ColumnId, kind: impl Into<String>, seed: ViewEntry) -> Self {
        Self {
            id,
            kind: kind.into(),
            navigation: NavigationStack::new(seed),
        }
    }

    pub fn id(&self) -> &ColumnId {
        &self.id
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn navigation(&self) -> &NavigationStack {
        &self.navigation
    }

    fn with_navigation(&self, navigation: NavigationStack) -> Self {
        Self {
            id: self.id.clone(),
            kind: self.kind.clone(),
            navigation,
        }
    }
}

/// Ordered columns, left to right
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnCollection {
    order: Arc<Vec<Column>>,
    /// Sequence number of the last allocated id; never decreases
    last_id: u64,
}

impl Default for ColumnCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl ColumnCollection {
    pub fn new() -> Self {
        Self {
            order: Arc::new(Vec::new()),
            last_id: 0,
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn get(&self, id: &ColumnId) -> Option<&Column> {
        self.order.iter().find(|c| &c.id == id)
    }

    pub fn position(&self, id: &ColumnId) -> Option<usize> {
        self.order.iter().position(|c| &c.id == id)
    }

    /// Ids in display order (the sortable keys handed to the drag layer)
    pub fn ids(&self) -> Vec<ColumnId> {
        self.order.iter().map(|c| c.id.clone()).collect()
    }

    /// True when both values share the same underlying column sequence
    pub fn same_snapshot(&self, other: &ColumnCollection) -> bool {
        Arc::ptr_eq(&self.order, &other.order)
    }

    fn with_order(&self, order: Vec<Column>, last_id: u64) -> Self {
        Self {
            order: Arc::new(order),
            last_id,
        }
    }

    /// Append a new column of `kind`, seeded from the catalog
    pub fn append(&self, kind: &str, catalog: &ColumnKindCatalog) -> Result<Self, ColumnError> {
        self.append_seeded(kind, catalog, None)
    }

    /// Append a new column of `kind` whose first entry carries `payload`
    /// instead of the catalog's seed payload
    pub fn append_with_payload(
        &self,
        kind: &str,
        catalog: &ColumnKindCatalog,
        payload: Payload,
    ) -> Result<Self, ColumnError> {
        self.append_seeded(kind, catalog, Some(payload))
    }

    fn append_seeded(
        &self,
        kind: &str,
        catalog: &ColumnKindCatalog,
        payload: Option<Payload>,
    ) -> Result<Self, ColumnError> {
        let spec = catalog.get(kind).ok_or_else(|| ColumnError::InvalidKind {
            kind: kind.to_string(),
        })?;

        let seed = match payload {
            Some(payload) => ViewEntry::new(spec.initial_view.clone(), Some(payload)),
            None => spec.seed_entry(),
        };
        let next_id = self.last_id + 1;
        let column = Column::new(ColumnId::from_sequence(next_id), kind, seed);
        debug!(
            "Appending column {} (kind: {}, view: {})",
            column.id, kind, spec.initial_view
        );

        let mut order = self.order.as_ref().clone();
        order.push(column);
        Ok(self.with_order(order, next_id))
    }

    /// Remove the column with `id`; unknown ids leave the snapshot unchanged
    pub fn remove(&self, id: &ColumnId) -> Self {
        let Some(idx) = self.position(id) else {
            trace!("Ignoring remove for unknown column {}", id);
            return self.clone();
        };

        let mut order = self.order.as_ref().clone();
        order.remove(idx);
        debug!("Removed column {}", id);
        self.with_order(order, self.last_id)
    }

    /// Move `source` to the position currently held by `dest`
    ///
    /// Identical ids or ids not present leave the snapshot unchanged.
    pub fn reorder(&self, source: &ColumnId, dest: &ColumnId) -> Self {
        if source == dest {
            return self.clone();
        }

        let (Some(from), Some(to)) = (self.position(source), self.position(dest)) else {
            trace!("Ignoring stale reorder {} -> {}", source, dest);
            return self.clone();
        };

        let order = array_move(self.order.as_ref().clone(), from, to);
        debug!("Moved column {} from {} to {}", source, from, to);
        self.with_order(order, self.last_id)
    }

    /// Apply a navigation action to the stack of the column with `id`
    pub fn navigate(&self, id: &ColumnId, action: &NavAction) -> Self {
        let Some(idx) = self.position(id) else {
            trace!("Ignoring navigate for unknown column {}", id);
            return self.clone();
        };

        let column = &self.order[idx];
        let navigation = match action {
            NavAction::Push(entry) => column.navigation.push(entry.clone()),
            NavAction::Back => column.navigation.back(),
            NavAction::Forward => column.navigation.forward(),
        };

        let mut order = self.order.as_ref().clone();
        order[idx] = column.with_navigation(navigation);
        self.with_order(order, self.last_id)
    }
}
