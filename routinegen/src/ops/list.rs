//! List operation - read the catalog without generating code.

use eyre::Result;
use routinegen_catalog::{RoutineSource, read_catalog};

use crate::reports::ListReport;

/// Read procedures and functions from a source.
pub async fn list<S: RoutineSource>(source: &mut S, schema: &str) -> Result<ListReport> {
    let catalog = read_catalog(source).await?;
    Ok(ListReport {
        schema: schema.to_string(),
        catalog,
    })
}
