use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generates an intro-book.toml config file
    Config,
    /// Renders every page according to the contents of the intro-book.toml config file
    Render,
    /// Loads the configuration, pages, and assets without writing anything
    Check,
    /// Prints the document tree of a single page as JSON
    Inspect {
        /// Page source, relative to the configured pages directory
        page: PathBuf,
    },
}

#[derive(Parser, Debug)]
#[clap(author, version, about)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,

    /// Log more detail (repeat for even more)
    #[clap(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[clap(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}
