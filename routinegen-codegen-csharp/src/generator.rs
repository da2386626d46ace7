//! C# code generator.

use routinegen_codegen::{builder::CodeBuilder, language::LanguageCodegen};
use routinegen_ir::{CategoryGroup, ConstantSet, ConstantsIR};

use crate::{CSHARP_NAMING, string_literal};

/// C# generator producing `StoredProcedures.cs` and `Functions.cs`.
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
            "public static class {}",
            CSHARP_NAMING.category_name(&group.name)
        );
        builder.braced(&header, |b| {
            b.each(&group.entries, |b, entry| {
                b.line(&format!(
                    "public const string {} = {};",
                    CSHARP_NAMING.constant_name(&entry.identifier),
                    string_literal(&entry.routine)
                ))
            })
        })
    }
}

impl LanguageCodegen for Generator {
    fn language(&self) -> &'static str {
        "csharp"
    }

    fn file_extension(&self) -> &'static str {
        "cs"
    }

    fn ir(&self) -> &ConstantsIR {
        &self.ir
    }

    fn render_set(&self, set: &ConstantSet) -> String {
        let header = format!(
            "public static class {}",
            CSHARP_NAMING.container_name(set.container_name())
        );

        CodeBuilder::csharp()
            .line("// <auto-generated />")
            .line(&format!(
                "// Generated by routinegen from schema {}. Do not edit.",
                string_literal(&self.ir.schema)
            ))
            .blank()
            .braced(&header, |b| {
                b.each(set.categories.iter().enumerate(), |b, (i, group)| {
                    Self::render_category(b.when(i > 0, |b| b.blank()), group)
                })
            })
            .build()
    }
}
