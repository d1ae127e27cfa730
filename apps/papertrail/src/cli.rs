//! Command-line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use papertrail_styles::CitationStyle;

#[derive(Parser, Debug)]
#[command(name = "papertrail")]
#[command(version)]
#[command(about = "Collect citations and export formatted bibliographies", long_about = None)]
pub struct Cli {
    /// SQLite database file (overrides the config file)
    #[arg(long, global = true, value_name = "FILE")]
    pub db: Option<PathBuf>,

    /// Config file (default: <config dir>/papertrail/config.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch a web page and save the citation found in it
    AddUrl {
        /// Page to cite (http or https)
        url: String,
    },

    /// Save a manually entered citation
    Add {
        #[arg(long, default_value = "")]
        title: String,

        /// Comma-separated full names, e.g. "Jane Doe, John Smith"
        #[arg(long, default_value = "")]
        authors: String,

        #[arg(long, default_value = "")]
        year: String,

        #[arg(long, default_value = "")]
        journal: String,

        #[arg(long, default_value = "")]
        doi: String,
    },

    /// List saved citations
    List {
        /// Print full records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete citations by id
    Delete {
        #[arg(required = true)]
        ids: Vec<i64>,
    },

    /// Delete every saved citation
    Clear {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },

    /// Print the bibliography
    Preview {
        /// vancouver, apa, or mla (default from config)
        #[arg(short, long)]
        style: Option<CitationStyle>,
    },

    /// Write the bibliography to a text file
    Export {
        /// vancouver, apa, or mla (default from config)
        #[arg(short, long)]
        style: Option<CitationStyle>,

        /// Output file (default: bibliography_<style>.txt)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}
