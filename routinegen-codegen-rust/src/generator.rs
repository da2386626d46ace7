//! Rust code generator.

use routinegen_codegen::{builder::CodeBuilder, language::LanguageCodegen};
use routinegen_ir::{CategoryGroup, ConstantSet, ConstantsIR};

use crate::{RUST_NAMING, string_literal};

/// Rust generator producing `StoredProcedures.rs` and `Functions.rs`.
#[derive(Debug, Clone)]
pub struct Generator {
    ir: ConstantsIR,
}

impl Generator {
    pub fn new(ir: ConstantsIR) -> Self {
        Self { ir }
    }

    fn render_category(builder: CodeBuilder, group: &CategoryGroup) -> CodeBuilder {
        let header = format!("pub mod {} {{", RUST_NAMING.category_name(&group.name));
        builder.block_with_close(&header, "}", |b| {
            b.each(&group.entries, |b, entry| {
                b.line(&format!(
                    "pub const {}: &str = {};",
                    RUST_NAMING.constant_name(&entry.identifier),
                    string_literal(&entry.routine)
                ))
            })
        })
    }
}

impl LanguageCodegen for Generator {
    fn language(&self) -> &'static str {
        "rust"
    }

    fn file_extension(&self) -> &'static str {
        "rs"
    }

    fn ir(&self) -> &ConstantsIR {
        &self.ir
    }

    fn render_set(&self, set: &ConstantSet) -> String {
        let module = RUST_NAMING.container_name(set.container_name());

        let builder = CodeBuilder::rust()
            .line(&format!(
                "// @generated by routinegen from schema {}. Do not edit.",
                string_literal(&self.ir.schema)
            ))
            .blank();

        if set.is_empty() {
            return builder.line(&format!("pub mod {} {{}}", module)).build();
        }

        builder
            .block_with_close(&format!("pub mod {} {{", module), "}", |b| {
                b.each(set.categories.iter().enumerate(), |b, (i, group)| {
                    Self::render_category(b.when(i > 0, |b| b.blank()), group)
                })
            })
            .build()
    }
}
