//! PostgreSQL-backed routine source.

use routinegen_ir::RoutineKind;
use sqlx::{Connection, PgConnection};

use crate::{CatalogError, Result, RoutineSource};

/// Query for routine names of one kind within one schema.
///
/// `routine_name` is a `sql_identifier` domain, cast to `text` so it decodes
/// as `String`. No `ORDER BY`: rows come back in catalog order.
pub const ROUTINES_QUERY: &str = "\
SELECT routine_name::text \
FROM information_schema.routines \
WHERE routine_type = $1 \
AND routine_schema = $2";

/// Routine source over a single PostgreSQL connection.
pub struct PgCatalog {
    conn: PgConnection,
    schema: String,
}

impl PgCatalog {
    /// Open one connection to the database.
    pub async fn connect(url: &str, schema: impl Into<String>) -> Result<Self> {
        let conn = PgConnection::connect(url)
            .await
            .map_err(|source| CatalogError::Connect { source })?;
        let schema = schema.into();
        tracing::debug!(schema = %schema, "connected to catalog");
        Ok(Self::from_connection(conn, schema))
    }

    /// Wrap an already-open connection.
    pub fn from_connection(conn: PgConnection, schema: impl Into<String>) -> Self {
        Self {
            conn,
            schema: schema.into(),
        }
    }

    /// Schema the routines are read from.
    pub fn schema(&self) -> &str {
        &self.schema
    }

    /// Close the connection gracefully.
    pub async fn close(self) -> Result<()> {
        self.conn
            .close()
            .await
            .map_err(|source| CatalogError::Close { source })
    }
}

impl RoutineSource for PgCatalog {
    async fn routine_names(&mut self, kind: RoutineKind) -> Result<Vec<String>> {
        sqlx::query_scalar::<_, String>(ROUTINES_QUERY)
            .bind(kind.routine_type())
            .bind(&self.schema)
            .fetch_all(&mut self.conn)
            .await
            .map_err(|source| CatalogError::Query { kind, source })
    }
}
