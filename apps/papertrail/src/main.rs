//! PaperTrail CLI
//!
//! Save citations from web pages or manual entry and export them as
//! Vancouver, APA, or MLA bibliographies.

mod cli;
mod commands;
mod config;

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use papertrail_domain::CitationRecord;
use papertrail_extract::MetadataExtractor;
use papertrail_store::CitationStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::{Cli, Command};
use commands::Session;
use config::PaperTrailConfig;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// `-v` forces debug; otherwise `PAPERTRAIL_LOG`, then `RUST_LOG`, then warn
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("PAPERTRAIL_LOG")
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = PaperTrailConfig::resolve(cli.config.as_deref())?;
    let db_path = config.database_path(cli.db.as_deref());
    let store = CitationStore::open(&db_path)
        .with_context(|| format!("Failed to open citation database {}", db_path.display()))?;
    let session = Session::new(store, config);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::AddUrl { url } => {
            let extractor = MetadataExtractor::http(session.config.extract.clone())?;
            commands::add::add_url(&session, &extractor, &url, &mut out)
        }
        Command::Add {
            title,
            authors,
            year,
            journal,
            doi,
        } => {
            let record = CitationRecord::manual(&title, &authors, &year, &journal, &doi);
            commands::add::add_manual(&session, record, &mut out)
        }
        Command::List { json } => commands::list::list(&session, json, &mut out),
        Command::Delete { ids } => commands::list::delete(&session, &ids, &mut out),
        Command::Clear { yes } => commands::list::clear(&session, yes, &mut out),
        Command::Preview { style } => commands::bibliography::preview(&session, style, &mut out),
        Command::Export { style, output } => {
            commands::bibliography::export(&session, style, output.as_deref(), &mut out)
        }
    }
}
