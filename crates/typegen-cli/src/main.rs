mod persist;

use clap::{Parser, Subcommand};
use persist::PersistError;
use std::{path::PathBuf, process::ExitCode};
use thiserror::Error as ThisError;
use tracing_subscriber::EnvFilter;
use typegen_catalog::{error::ErrorTree, node::TypeDef};
use typegen_core::generate::generate;

///
/// Cli
///

#[derive(Parser)]
#[command(name = "typegen", about = "Generate JSON schema documents from a type catalog")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate one schema document per type into the output directory
    Generate {
        /// Directory the documents are written to
        #[arg(long, default_value = "generated")]
        out_dir: PathBuf,

        /// Write compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },

    /// List the types in the catalog
    List,
}

///
/// CliError
///

#[derive(Debug, ThisError)]
enum CliError {
    #[error("catalog validation failed: {0}")]
    Catalog(#[from] ErrorTree),

    #[error(transparent)]
    Persist(#[from] PersistError),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run(&Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "typegen failed");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let catalog = typegen_fixtures::catalog();
    catalog.validate()?;

    match &cli.command {
        Command::Generate { out_dir, compact } => {
            let run = generate(&catalog);

            for diagnostic in &run.diagnostics {
                tracing::warn!("{diagnostic}");
            }

            persist::write_documents(out_dir, &run, *compact)?;
            tracing::info!(count = run.documents.len(), "generation complete");
        }
        Command::List => {
            for def in catalog.types() {
                let kind = match def {
                    TypeDef::Record(_) => "record",
                    TypeDef::Union(_) => "union",
                    TypeDef::Enum(_) => "enum",
                };
                println!("{kind:<7} {}", def.name());
            }
        }
    }

    Ok(())
}
