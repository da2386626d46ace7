//! TypeScript code generator.

use routinegen_codegen::{builder::CodeBuilder, language::LanguageCodegen};
use routinegen_ir::{CategoryGroup, ConstantSet, ConstantsIR};

use crate::{TS_NAMING, property_key, string_literal};

/// TypeScript generator producing `StoredProcedures.ts` and `Functions.ts`.
#[derive(Debug, Clone)]
pub struct Generator {
    ir: ConstantsIR,
}

impl Generator {
    pub fn new(ir: ConstantsIR) -> Self {
        Self { ir }
    }

    fn render_category(builder: CodeBuilder, group: &CategoryGroup) -> CodeBuilder {
        let header = format!(
            "{}: {{",
            property_key(&TS_NAMING.category_name(&group.name))
        );
        builder.block_with_close(&header, "},", |b| {
            b.each(&group.entries, |b, entry| {
                b.line(&format!(
                    "{}: {},",
                    property_key(&TS_NAMING.constant_name(&entry.identifier)),
                    string_literal(&entry.routine)
                ))
            })
        })
    }
}

impl LanguageCodegen for Generator {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn file_extension(&self) -> &'static str {
        "ts"
    }

    fn ir(&self) -> &ConstantsIR {
        &self.ir
    }

    fn render_set(&self, set: &ConstantSet) -> String {
        let name = TS_NAMING.container_name(set.container_name());

        let builder = CodeBuilder::typescript()
            .line(&format!(
                "// Generated by routinegen from schema {}. Do not edit.",
                string_literal(&self.ir.schema)
            ))
            .blank();

        if set.is_empty() {
            return builder
                .line(&format!("export const {} = {{}} as const;", name))
                .build();
        }

        builder
            .block_with_close(
                &format!("export const {} = {{", name),
                "} as const;",
                |b| {
                    b.each(set.categories.iter().enumerate(), |b, (i, group)| {
                        Self::render_category(b.when(i > 0, |b| b.blank()), group)
                    })
                },
            )
            .build()
    }
}
