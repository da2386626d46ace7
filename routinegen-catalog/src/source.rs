//! The routine source abstraction and catalog reading.

use std::future::Future;

use routinegen_ir::{RoutineCatalog, RoutineKind};

use crate::Result;

/// Something that can list routine names by kind.
pub trait RoutineSource {
    /// Routine names of one kind, in source order.
    fn routine_names(
        &mut self,
        kind: RoutineKind,
    ) -> impl Future<Output = Result<Vec<String>>> + Send;
}

/// Read procedures, then functions, from a source.
///
/// The two reads run sequentially on the same source. The first failure
/// aborts the read.
pub async fn read_catalog<S: RoutineSource>(source: &mut S) -> Result<RoutineCatalog> {
    let procedures = read_kind(source, RoutineKind::Procedure).await?;
    let functions = read_kind(source, RoutineKind::Function).await?;
    Ok(RoutineCatalog::new(procedures, functions))
}

async fn read_kind<S: RoutineSource>(source: &mut S, kind: RoutineKind) -> Result<Vec<String>> {
    let names = source.routine_names(kind).await?;
    tracing::info!(kind = %kind, count = names.len(), "read routines");
    Ok(names)
}

/// In-memory routine source.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    catalog: RoutineCatalog,
}

impl StaticCatalog {
    pub fn new(catalog: RoutineCatalog) -> Self {
        Self { catalog }
    }

    /// Build a source from name lists.
    pub fn from_names<P, F>(procedures: P, functions: F) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
    {
        Self::new(RoutineCatalog::new(
            procedures.into_iter().map(Into::into).collect(),
            functions.into_iter().map(Into::into).collect(),
        ))
    }
}

impl RoutineSource for StaticCatalog {
    async fn routine_names(&mut self, kind: RoutineKind) -> Result<Vec<String>> {
        Ok(self.catalog.names(kind).to_vec())
    }
}
