mod completions;
mod database;
mod generate;
mod list;

use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use list::ListCommand;

/// Extension trait for exiting on config errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for routinegen_config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "routinegen")]
#[command(version)]
#[command(about = "Generate constants for PostgreSQL stored procedures and functions")]
pub(crate) struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub async fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run().await,
            Commands::List(cmd) => cmd.run().await,
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate constants files from the database catalog
    Generate(GenerateCommand),

    /// List stored procedures and functions in the database catalog
    List(ListCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate_flags() {
        let cli = Cli::parse_from([
            "routinegen",
            "generate",
            "-l",
            "ts",
            "-o",
            "out",
            "--schema",
            "inventory",
            "--sort",
            "--dry-run",
            "-v",
        ]);

        assert!(cli.verbose());
        let Commands::Generate(cmd) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(
            cmd.language,
            Some(routinegen_config::Language::TypeScript)
        );
        assert_eq!(cmd.output.as_deref(), Some(std::path::Path::new("out")));
        assert_eq!(cmd.database.schema.as_deref(), Some("inventory"));
        assert!(cmd.sort);
        assert!(cmd.dry_run);
        assert!(!cmd.deny_duplicates);
    }

    #[test]
    fn test_blank_schema_override_rejected() {
        for schema in ["", "  "] {
            let err = Cli::try_parse_from(["routinegen", "list", "--schema", schema])
                .err()
                .expect("blank schema accepted");

            assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
            assert!(err.to_string().contains("database schema must not be empty"));
        }
    }
}
