//! Generate operation - catalog to constants files.

use std::path::{Path, PathBuf};

use eyre::{Context, OptionExt, Result};
use routinegen_catalog::{PgCatalog, RoutineSource, read_catalog};
use routinegen_codegen::pipeline::{Pipeline, PipelineOptions, Severity};
use routinegen_config::{Config, Language};
use routinegen_ir::RoutineCatalog;

use crate::{
    language::LanguageSupport,
    reports::{GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult},
};

/// Options for the generate operation.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Directory the files are written to.
    pub output_dir: PathBuf,
    pub language: Language,
    pub pipeline: PipelineOptions,
    /// Render without writing files.
    pub dry_run: bool,
}

impl GenerateOptions {
    /// Options from a config, with a relative output directory resolved
    /// against `base_dir`.
    pub fn from_config(config: &Config, base_dir: &Path) -> Self {
        Self {
            output_dir: base_dir.join(&config.output.dir),
            language: config.output.language,
            pipeline: PipelineOptions {
                schema: config.database.schema.clone(),
                sort: config.output.sort,
                deny_duplicates: config.output.deny_duplicates,
                naming: Some(LanguageSupport::get(config.output.language).naming()),
            },
            dry_run: false,
        }
    }
}

/// Connect, read the catalog and close the connection.
pub async fn fetch_catalog(url: &str, schema: &str) -> Result<RoutineCatalog> {
    let mut catalog = PgCatalog::connect(url, schema).await?;
    let routines = read_catalog(&mut catalog).await?;
    catalog.close().await?;
    Ok(routines)
}

/// Read the catalog from a source and emit the constants files.
pub async fn generate<S: RoutineSource>(
    source: &mut S,
    opts: &GenerateOptions,
) -> Result<GenerateReport> {
    let catalog = read_catalog(source).await?;
    emit(catalog, opts)
}

/// Run the pipeline on a catalog and write (or preview) the files.
///
/// Duplicates are always checked against the target language's names.
pub fn emit(catalog: RoutineCatalog, opts: &GenerateOptions) -> Result<GenerateReport> {
    let procedure_count = catalog.procedures.len();
    let function_count = catalog.functions.len();
    let lang = LanguageSupport::get(opts.language);

    let pipeline = PipelineOptions {
        naming: Some(lang.naming()),
        ..opts.pipeline.clone()
    };
    let mut ctx = Pipeline::new(pipeline)
        .run(catalog)
        .wrap_err("Pipeline failed")?;

    for diagnostic in &ctx.diagnostics {
        let location = diagnostic.location.as_deref().unwrap_or("-");
        match diagnostic.severity {
            Severity::Warning => tracing::warn!(location, "{}", diagnostic.message),
            _ => tracing::debug!(location, "{}", diagnostic.message),
        }
    }

    let warnings = ctx.warnings().cloned().collect();
    let ir = ctx
        .take_ir()
        .ok_or_eyre("pipeline finished without lowering the catalog")?;
    let procedure_categories = ir.procedures.categories.len();
    let function_categories = ir.functions.categories.len();

    let generator = lang.generator(ir);

    let result = if opts.dry_run {
        let files = generator
            .preview()
            .into_iter()
            .map(|f| PreviewFile {
                path: f.path,
                content: f.content,
            })
            .collect();
        GenerationResult::Preview(PreviewResult { files })
    } else {
        let generated = generator
            .generate(&opts.output_dir)
            .wrap_err("Failed to generate code")?;
        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.clone(),
            files: generated.written,
        })
    };

    Ok(GenerateReport {
        schema: opts.pipeline.schema.clone(),
        language: opts.language,
        procedure_count,
        procedure_categories,
        function_count,
        function_categories,
        warnings,
        result,
    })
}

/// Startup hook: regenerate the constants files from the configured database.
///
/// The output directory is resolved against the current working directory.
/// Any failure aborts the whole run.
pub async fn generate_database_objects(config: &Config) -> Result<GenerateReport> {
    let url = config.database.connection_string()?;
    let base_dir = std::env::current_dir().wrap_err("failed to read the working directory")?;
    let opts = GenerateOptions::from_config(config, &base_dir);

    tracing::info!(
        schema = %opts.pipeline.schema,
        output = %opts.output_dir.display(),
        language = %opts.language,
        "generating database objects"
    );

    let catalog = fetch_catalog(&url, &opts.pipeline.schema).await?;
    emit(catalog, &opts)
}
