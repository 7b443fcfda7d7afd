//! Errors raised by the column model

use thiserror::Error;

/// Errors surfaced to the caller of a column operation.
///
/// Stale ids and stack boundaries are not errors; those operations are
/// defined no-ops.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColumnError {
    /// The requested column kind is not in the catalog
    #[error("unknown column kind '{kind}'")]
    InvalidKind { kind: String },
}
