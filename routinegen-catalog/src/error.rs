use routinegen_ir::RoutineKind;
use thiserror::Error;

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors raised while reading the routine catalog.
///
/// Every variant is fatal for a generation run; nothing is retried.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to connect to the database")]
    Connect {
        #[source]
        source: sqlx::Error,
    },

    #[error("failed to read {kind} names from information_schema.routines")]
    Query {
        kind: RoutineKind,
        #[source]
        source: sqlx::Error,
    },

    #[error("failed to close the database connection")]
    Close {
        #[source]
        source: sqlx::Error,
    },
}
