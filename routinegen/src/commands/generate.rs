use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use routinegen::{
    GenerateOptions, emit, fetch_catalog,
    reports::{Report, TerminalOutput},
};
use routinegen_config::Language;

use super::database::DatabaseArgs;

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub database: DatabaseArgs,

    /// Output directory (defaults to `output.dir`, then ./Constants)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Target language: csharp, rust or typescript
    #[arg(short, long)]
    pub language: Option<Language>,

    /// Sort categories and constants by name
    #[arg(long)]
    pub sort: bool,

    /// Fail when two routines derive the same constant name
    #[arg(long)]
    pub deny_duplicates: bool,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub async fn run(&self) -> Result<()> {
        let mut config = self.database.load_config();
        if let Some(output) = &self.output {
            config.output.dir = output.clone();
        }
        if let Some(language) = self.language {
            config.output.language = language;
        }
        config.output.sort |= self.sort;
        config.output.deny_duplicates |= self.deny_duplicates;

        let url = DatabaseArgs::connection_string(&config);
        let base_dir = std::env::current_dir().wrap_err("failed to read the working directory")?;
        let opts = GenerateOptions {
            dry_run: self.dry_run,
            ..GenerateOptions::from_config(&config, &base_dir)
        };

        let catalog = fetch_catalog(&url, &opts.pipeline.schema)
            .await
            .wrap_err("Failed to read the routine catalog")?;
        let report = emit(catalog, &opts)?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
