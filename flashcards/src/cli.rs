// src/cli.rs
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Deck file to import before the session starts
    #[arg(long = "import_from", visible_alias = "import-from", value_name = "FILE")]
    pub import_from: Option<PathBuf>,

    /// Deck file to export to when the session exits
    #[arg(long = "export_to", visible_alias = "export-to", value_name = "FILE")]
    pub export_to: Option<PathBuf>,

    /// Config file to use instead of searching for .flashcards.toml
    #[arg(long, value_name = "FILE", conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// Ignore any .flashcards.toml file
    #[arg(long)]
    pub no_config: bool,
}
