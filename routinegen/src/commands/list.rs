use clap::Args;
use eyre::{Context, Result};
use routinegen::{
    ops,
    reports::{Report, TerminalOutput},
};
use routinegen_catalog::PgCatalog;

use super::database::DatabaseArgs;

#[derive(Args)]
pub struct ListCommand {
    #[command(flatten)]
    pub database: DatabaseArgs,

    /// Print `{"StoredProcedures": [...], "Functions": [...]}` instead of a list
    #[arg(long)]
    pub json: bool,
}

impl ListCommand {
    pub async fn run(&self) -> Result<()> {
        let config = self.database.load_config();
        let url = DatabaseArgs::connection_string(&config);
        let schema = &config.database.schema;

        let mut catalog = PgCatalog::connect(&url, schema.as_str())
            .await
            .wrap_err("Failed to connect to the database")?;
        let report = ops::list(&mut catalog, schema).await?;
        catalog.close().await?;

        if self.json {
            println!("{}", report.to_json()?);
        } else {
            report.render(&mut TerminalOutput::new());
        }

        Ok(())
    }
}
