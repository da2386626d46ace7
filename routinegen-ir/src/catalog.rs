//! Routine names as read from the database catalog.

use std::fmt;

use serde::Serialize;

/// The two kinds of routine listed in `information_schema.routines`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RoutineKind {
    /// `CREATE PROCEDURE`, invoked with `CALL`.
    Procedure,
    /// `CREATE FUNCTION`, invoked with `SELECT * FROM`.
    Function,
}

impl RoutineKind {
    /// Both kinds, in generation order.
    pub const ALL: [RoutineKind; 2] = [RoutineKind::Procedure, RoutineKind::Function];

    /// The `routine_type` value used by the catalog.
    pub fn routine_type(&self) -> &'static str {
        match self {
            RoutineKind::Procedure => "PROCEDURE",
            RoutineKind::Function => "FUNCTION",
        }
    }

    /// Name of the generated container for this kind.
    pub fn container_name(&self) -> &'static str {
        match self {
            RoutineKind::Procedure => "StoredProcedures",
            RoutineKind::Function => "Functions",
        }
    }
}

impl fmt::Display for RoutineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoutineKind::Procedure => write!(f, "procedure"),
            RoutineKind::Function => write!(f, "function"),
        }
    }
}

/// Routine names of one schema, in catalog return order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RoutineCatalog {
    /// Stored procedure names.
    #[serde(rename = "StoredProcedures")]
    pub procedures: Vec<String>,
    /// Function names.
    #[serde(rename = "Functions")]
    pub functions: Vec<String>,
}

impl RoutineCatalog {
    pub fn new(procedures: Vec<String>, functions: Vec<String>) -> Self {
        Self {
            procedures,
            functions,
        }
    }

    /// Names of the given kind.
    pub fn names(&self, kind: RoutineKind) -> &[String] {
        match kind {
            RoutineKind::Procedure => &self.procedures,
            RoutineKind::Function => &self.functions,
        }
    }

    /// Total number of routines of both kinds.
    pub fn len(&self) -> usize {
        self.procedures.len() + self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.procedures.is_empty() && self.functions.is_empty()
    }
}
