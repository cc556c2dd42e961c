//! Command-line interface for bookshelf.
//!
//! `list` imports a category once and prints it. `shell` starts an
//! interactive session whose catalog lives until the session ends.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::config::{self, ResolvedConfig};
use crate::importer::{CatalogImporter, SubjectSource};
use crate::store::RecordStore;
use crate::views::ListView;

pub mod shell;

pub use shell::{Flow, Session};

/// bookshelf - in-memory book catalog fed from Open Library
#[derive(Parser, Debug)]
#[command(name = "bookshelf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Import a subject and print its books
    List {
        /// Subject to import (configured default if omitted)
        category: Option<String>,

        /// Print records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Start an interactive catalog session
    Shell {
        /// Subject imported at start (configured default if omitted)
        #[arg(short, long, env = "BOOKSHELF_CATEGORY")]
        category: Option<String>,
    },

    /// Show resolved configuration (debug)
    Config,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::List { category, json } => list_category(category, json).await,
            Commands::Shell { category } => run_shell(category).await,
            Commands::Config => show_config(),
        }
    }
}

/// Import once and print the result
async fn list_category(category: Option<String>, json: bool) -> Result<()> {
    let cfg = config::config()?;
    let importer = CatalogImporter::from_config(cfg);

    let stdout = io::stdout();
    write_category(&importer, category.as_deref(), json, stdout.lock()).await
}

/// Import `category` into a fresh store and write it as a table or JSON.
///
/// A failed import is logged by the importer and prints an empty list.
pub async fn write_category<S: SubjectSource, W: Write>(
    importer: &CatalogImporter<S>,
    category: Option<&str>,
    json: bool,
    mut out: W,
) -> Result<()> {
    let mut store = RecordStore::new();
    let outcome = importer
        .import_category(&mut store, category.unwrap_or_default())
        .await;

    if json {
        let body = serde_json::to_string_pretty(store.records())
            .context("Failed to serialize records")?;
        writeln!(out, "{}", body)?;
    } else {
        writeln!(out, "Subject: {}\n", outcome.category())?;
        write!(out, "{}", ListView::new(&store).render())?;
    }

    Ok(())
}

/// Run an interactive session on stdin/stdout
async fn run_shell(category: Option<String>) -> Result<()> {
    let cfg = config::config()?;
    let mut session = Session::new(CatalogImporter::from_config(cfg));

    let stdin = io::stdin();
    let stdout = io::stdout();
    session
        .run(category.as_deref(), stdin.lock(), stdout.lock())
        .await
}

/// Show the resolved configuration (for debugging)
fn show_config() -> Result<()> {
    let cfg = config::config()?;
    let stdout = io::stdout();
    write_config(cfg, stdout.lock())
}

/// Write a resolved configuration in the `config` command's layout
pub fn write_config<W: Write>(cfg: &ResolvedConfig, mut out: W) -> Result<()> {
    writeln!(out, "bookshelf configuration")?;
    writeln!(out)?;
    writeln!(
        out,
        "Config file: {}",
        cfg.config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none - using defaults)".to_string())
    )?;
    writeln!(out)?;
    writeln!(out, "Subjects API:     {}", cfg.api_base)?;
    writeln!(out, "Covers service:   {}", cfg.covers_base)?;
    writeln!(out, "Default category: {}", cfg.default_category)?;

    Ok(())
}
