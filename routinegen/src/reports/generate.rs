//! Generate command report data structures.

use std::path::PathBuf;

use routinegen_codegen::pipeline::Diagnostic;
use routinegen_config::Language;
use routinegen_core::WrittenFile;

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Schema the routines were read from.
    pub schema: String,
    pub language: Language,
    pub procedure_count: usize,
    pub procedure_categories: usize,
    pub function_count: usize,
    pub function_categories: usize,
    /// Warning diagnostics from the pipeline.
    pub warnings: Vec<Diagnostic>,
    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    pub output_dir: PathBuf,
    /// Files in write order.
    pub files: Vec<WrittenFile>,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// Path relative to the output directory.
    pub path: String,
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            match &warning.location {
                Some(location) => out.warning(&format!("{} (at {})", warning.message, location)),
                None => out.warning(&warning.message),
            }
        }

        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_summary(&self, out: &mut dyn Output) {
        out.key_value("Schema", &self.schema);
        out.key_value("Language", self.language.as_str());
        out.key_value(
            "Stored procedures",
            &counted(self.procedure_count, self.procedure_categories),
        );
        out.key_value(
            "Functions",
            &counted(self.function_count, self.function_categories),
        );
    }

    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        self.render_summary(out);
        out.newline();

        out.section(&format!("Generated in {}", written.output_dir.display()));
        for file in &written.files {
            let name = file
                .path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| file.path.display().to_string());
            out.added_item(&format!("{} ({} bytes)", name, file.bytes));
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        self.render_summary(out);
        out.preformatted(&format!(
            "{} files would be generated",
            preview.files.len()
        ));
    }
}

fn counted(routines: usize, categories: usize) -> String {
    format!("{} in {} categories", routines, categories)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::reports::output::RecordingOutput;

    fn report(result: GenerationResult) -> GenerateReport {
        GenerateReport {
            schema: "public".into(),
            language: Language::CSharp,
            procedure_count: 1,
            procedure_categories: 1,
            function_count: 3,
            function_categories: 2,
            warnings: vec![
                Diagnostic::warning("validate", "duplicate constant 'Get'")
                    .at("Functions.Products.Get"),
            ],
            result,
        }
    }

    #[test]
    fn test_render_written() {
        let out_dir = Path::new("/app/Constants");
        let report = report(GenerationResult::Written(WrittenResult {
            output_dir: out_dir.to_path_buf(),
            files: vec![
                WrittenFile {
                    path: out_dir.join("StoredProcedures.cs"),
                    bytes: 120,
                },
                WrittenFile {
                    path: out_dir.join("Functions.cs"),
                    bytes: 340,
                },
            ],
        }));

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "warning: duplicate constant 'Get' (at Functions.Products.Get)",
                "Schema: public",
                "Language: csharp",
                "Stored procedures: 1 in 1 categories",
                "Functions: 3 in 2 categories",
                "",
                "Generated in /app/Constants:",
                "  + StoredProcedures.cs (120 bytes)",
                "  + Functions.cs (340 bytes)",
            ]
        );
    }

    #[test]
    fn test_render_preview() {
        let report = report(GenerationResult::Preview(PreviewResult {
            files: vec![PreviewFile {
                path: "Functions.cs".into(),
                content: "public static class Functions\n{\n}\n".into(),
            }],
        }));

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(out.lines[1], "── Functions.cs ──");
        assert_eq!(out.lines[2], "public static class Functions\n{\n}\n");
        assert_eq!(out.lines[3], "── Summary ──");
        assert_eq!(out.lines.last().unwrap(), "1 files would be generated");
    }
}
