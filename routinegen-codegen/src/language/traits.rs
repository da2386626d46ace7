//! Language-agnostic code generation traits.

use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};
use routinegen_core::{GeneratedFile, WrittenFile};
use routinegen_ir::{ConstantSet, ConstantsIR};

/// Trait for language-specific code generators.
///
/// Implementors render one container per [`ConstantSet`]; previewing and
/// writing are shared.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "csharp", "rust", "typescript")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "cs", "rs", "ts")
    fn file_extension(&self) -> &'static str;

    /// The IR being rendered.
    fn ir(&self) -> &ConstantsIR;

    /// Render the complete file content for one constant set.
    fn render_set(&self, set: &ConstantSet) -> String;

    /// File name for a constant set, relative to the output directory.
    fn file_name(&self, set: &ConstantSet) -> String {
        format!("{}.{}", set.container_name(), self.file_extension())
    }

    /// Render every container file, procedures first.
    fn files(&self) -> Vec<ContainerFile> {
        self.ir()
            .sets()
            .into_iter()
            .map(|set| ContainerFile::new(self.file_name(set), self.render_set(set)))
            .collect()
    }

    /// Preview generated files without writing to disk
    fn preview(&self) -> Vec<PreviewFile> {
        self.files()
            .into_iter()
            .map(|file| PreviewFile {
                path: file.name,
                content: file.content,
            })
            .collect()
    }

    /// Generate all files into the specified output directory.
    ///
    /// The directory is created even when there is nothing to emit. Files
    /// are written in order, so a failure leaves earlier files in place.
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        std::fs::create_dir_all(output_dir).wrap_err_with(|| {
            format!("failed to create output directory {}", output_dir.display())
        })?;

        let mut written = Vec::new();
        for file in self.files() {
            let result = file.write(output_dir)?;
            tracing::info!(
                path = %result.path.display(),
                bytes = result.bytes,
                "wrote constants file"
            );
            written.push(result);
        }

        Ok(GenerateResult { written })
    }
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files written, in write order
    pub written: Vec<WrittenFile>,
}

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}

/// A rendered container file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerFile {
    pub name: String,
    pub content: String,
}

impl ContainerFile {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

impl GeneratedFile for ContainerFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.name)
    }

    fn render(&self) -> String {
        self.content.clone()
    }
}

#[cfg(test)]
mod tests {
    use routinegen_ir::{CategoryGroup, ConstantEntry, RoutineKind};
    use tempfile::TempDir;

    use super::*;

    struct PlainCodegen {
        ir: ConstantsIR,
    }

    impl LanguageCodegen for PlainCodegen {
        fn language(&self) -> &'static str {
            "plain"
        }

        fn file_extension(&self) -> &'static str {
            "txt"
        }

        fn ir(&self) -> &ConstantsIR {
            &self.ir
        }

        fn render_set(&self, set: &ConstantSet) -> String {
            let mut out = format!("{}\n", set.container_name());
            for group in &set.categories {
                for entry in &group.entries {
                    out.push_str(&format!(
                        "{}.{}={}\n",
                        group.name, entry.identifier, entry.routine
                    ));
                }
            }
            out
        }
    }

    fn sample_ir() -> ConstantsIR {
        let mut ir = ConstantsIR::empty("public");
        let mut group = CategoryGroup::new("Products");
        group.entries.push(ConstantEntry::new("GetById", "product_get_by_id"));
        ir.set_mut(RoutineKind::Function).categories.push(group);
        ir
    }

    #[test]
    fn test_preview_lists_procedures_first() {
        let codegen = PlainCodegen { ir: sample_ir() };

        let files = codegen.preview();

        assert_eq!(files.len(), 2);
        assert_eq!(files[0].path, "StoredProcedures.txt");
        assert_eq!(files[0].content, "StoredProcedures\n");
        assert_eq!(files[1].path, "Functions.txt");
        assert_eq!(files[1].content, "Functions\nProducts.GetById=product_get_by_id\n");
    }

    #[test]
    fn test_generate_creates_directory_and_files() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("Constants");
        let codegen = PlainCodegen {
            ir: ConstantsIR::empty("public"),
        };

        let result = codegen.generate(&out).unwrap();

        assert!(out.is_dir());
        assert_eq!(result.written.len(), 2);
        assert_eq!(result.written[0].path, out.join("StoredProcedures.txt"));
        assert_eq!(result.written[1].path, out.join("Functions.txt"));
        assert_eq!(
            std::fs::read_to_string(out.join("Functions.txt")).unwrap(),
            "Functions\n"
        );
    }

    #[test]
    fn test_generate_fails_when_output_is_a_file() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("Constants");
        std::fs::write(&out, "not a directory").unwrap();
        let codegen = PlainCodegen { ir: sample_ir() };

        let err = codegen.generate(&out).unwrap_err();

        assert!(format!("{:#}", err).contains("Constants"));
    }
}
