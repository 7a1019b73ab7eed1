pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;

use anyhow::Result;
use std::io::{self, BufRead, Write};

pub use cli::Args;
pub use config::{Config, Settings, load_config};
pub use crate::core::deck::{Deck, MergeSummary};
pub use crate::core::quiz::{Verdict, check_answer, parse_round_count, pick_card};
pub use crate::core::session::{ACTION_PROMPT, Action, Session};
pub use crate::core::storage::{DeckFormat, load_cards, save_cards};
pub use crate::core::transcript::Transcript;
pub use error::DeckError;
pub use models::{Flashcard, HardestCards};

/// Runs an interactive session on the terminal.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or the session ends
/// with a fatal error.
pub fn run(args: Args) -> Result<()> {
    let stdin = io::stdin();
    run_with(&args, stdin.lock(), io::stdout())
}

/// Runs a session reading commands from `reader` and printing to `writer`.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded, the initial import fails,
/// or the session ends with a fatal error.
pub fn run_with<R: BufRead, W: Write>(args: &Args, reader: R, writer: W) -> Result<()> {
    let settings = Settings::resolve(args)?;
    log::debug!("Resolved settings: {settings:?}");

    let mut session = Session::new(reader, writer).with_export_to(settings.export_to);
    if let Some(path) = &settings.import_from {
        session.import_on_start(path)?;
    }
    session.run()
}
