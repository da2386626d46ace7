//! Catalog reader for routinegen.
//!
//! Reads stored procedure and function names from
//! `information_schema.routines`. [`PgCatalog`] queries a live PostgreSQL
//! connection; [`StaticCatalog`] serves fixed lists and is used by tests and
//! offline runs.

mod error;
mod pg;
mod source;

pub use error::{CatalogError, Result};
pub use pg::{PgCatalog, ROUTINES_QUERY};
pub use source::{RoutineSource, StaticCatalog, read_catalog};
