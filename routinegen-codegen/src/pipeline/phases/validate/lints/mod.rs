//! Built-in lints for constants IR validation.

mod duplicate_constant;
mod empty_identifier;
mod escaped_literal;
mod invalid_identifier;

pub use duplicate_constant::DuplicateConstantLint;
pub use empty_identifier::EmptyIdentifierLint;
pub use escaped_literal::EscapedLiteralLint;
pub use invalid_identifier::InvalidIdentifierLint;

#[cfg(test)]
pub(crate) fn lower_functions(functions: &[&str]) -> routinegen_ir::ConstantsIR {
    let catalog = routinegen_ir::RoutineCatalog::new(
        Vec::new(),
        functions.iter().map(|s| s.to_string()).collect(),
    );
    crate::pipeline::phases::lower_catalog(&catalog, "public")
}
