// src/core/session.rs
use crate::core::console::Console;
use crate::core::deck::Deck;
use crate::core::quiz::{Verdict, check_answer, parse_round_count, pick_card};
use crate::core::storage::{load_cards, save_cards};
use crate::core::transcript::Transcript;
use anyhow::{Context as _, Error, Result};
use rand::SeedableRng as _;
use rand::rngs::StdRng;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

pub const ACTION_PROMPT: &str =
    "Input the action (add, remove, import, export, ask, exit, log, hardest card, reset stats):";

/// Commands understood by the interactive loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Remove,
    Import,
    Export,
    Ask,
    Log,
    HardestCard,
    ResetStats,
    Exit,
}

impl Action {
    /// Matches the exact (already trimmed, case-sensitive) command text.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let action = match input {
            "add" => Self::Add,
            "remove" => Self::Remove,
            "import" => Self::Import,
            "export" => Self::Export,
            "ask" => Self::Ask,
            "log" => Self::Log,
            "hardest card" => Self::HardestCard,
            "reset stats" => Self::ResetStats,
            "exit" => Self::Exit,
            _ => return None,
        };
        Some(action)
    }

    const fn failure_context(self) -> &'static str {
        match self {
            Self::Add => "reading flashcard",
            Self::Remove => "removing flashcard",
            Self::Import => "importing flashcards from file",
            Self::Export | Self::Exit => "exporting flashcards to file",
            Self::Ask => "asking for flashcard answers",
            Self::Log => "writing log to file",
            Self::HardestCard => "finding the hardest card",
            Self::ResetStats => "resetting card statistics",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// State of one interactive run: the deck, the console with its transcript and the
/// random source used by the quiz.
pub struct Session<R, W> {
    deck: Deck,
    console: Console<R, W>,
    export_to: Option<PathBuf>,
    rng: StdRng,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            deck: Deck::new(),
            console: Console::new(reader, writer),
            export_to: None,
            rng: StdRng::from_entropy(),
        }
    }

    #[must_use]
    pub fn with_deck(mut self, deck: Deck) -> Self {
        self.deck = deck;
        self
    }

    #[must_use]
    pub fn with_export_to(mut self, path: Option<PathBuf>) -> Self {
        self.export_to = path;
        self
    }

    /// Replaces the entropy-seeded generator, e.g. with a fixed seed.
    #[must_use]
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    #[inline]
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    #[inline]
    #[must_use]
    pub const fn transcript(&self) -> &Transcript {
        self.console.transcript()
    }

    #[inline]
    pub fn into_writer(self) -> W {
        self.console.into_writer()
    }

    /// Runs the command loop until `exit` or a fatal error.
    ///
    /// # Errors
    ///
    /// Any failure to read input or to read/write a file ends the session. The error is
    /// reported to the user (and so recorded in the transcript) before it is returned.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.console.say(ACTION_PROMPT)?;
            let input = match self.console.read_line() {
                Ok(input) => input,
                Err(e) => return Err(self.report_fatal("reading the action", e.into())),
            };

            let Some(action) = Action::parse(&input) else {
                self.console
                    .say(format!("Action {input} is not implemented. Try again."))?;
                continue;
            };

            match self.perform(action) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(()),
                Err(e) => return Err(self.report_fatal(action.failure_context(), e)),
            }
        }
    }

    /// Imports a deck before the loop starts, reporting failures like a loop command.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn import_on_start(&mut self, path: &Path) -> Result<()> {
        self.import_from(path)
            .map_err(|e| self.report_fatal(Action::Import.failure_context(), e))
    }

    fn perform(&mut self, action: Action) -> Result<Flow> {
        match action {
            Action::Add => self.add_card()?,
            Action::Remove => {
                self.remove_card()?;
            }
            Action::Import => {
                let path = self.prompt_path()?;
                self.import_from(&path)?;
            }
            Action::Export => {
                let path = self.prompt_path()?;
                self.export_to_file(&path)?;
            }
            Action::Ask => {
                self.ask()?;
            }
            Action::Log => self.write_log()?,
            Action::HardestCard => self.report_hardest()?,
            Action::ResetStats => self.reset_stats()?,
            Action::Exit => {
                self.console.say("Bye bye!")?;
                if let Some(path) = self.export_to.clone() {
                    self.export_to_file(&path)?;
                }
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    fn report_fatal(&mut self, what: &str, err: Error) -> Error {
        if let Err(say_err) = self.console.say(format!("Error {what}: {err:#}")) {
            log::error!("Failed to report error to the user: {say_err}");
        }
        err.context(format!("Error {what}"))
    }

    fn prompt_path(&mut self) -> Result<PathBuf> {
        self.console.say("File name:")?;
        Ok(PathBuf::from(self.console.read_line()?))
    }

    /// Asks for a new term and definition, re-prompting while either is already taken.
    ///
    /// # Errors
    ///
    /// Returns an error if input ends or output cannot be written.
    pub fn add_card(&mut self) -> Result<()> {
        self.console.say("The card:")?;
        let term = loop {
            let term = self.console.read_line()?;
            if !self.deck.contains_term(&term) {
                break term;
            }
            self.console
                .say(format!("The card \"{term}\" already exists. Try again:"))?;
        };

        self.console.say("The definition of the card:")?;
        let definition = loop {
            let definition = self.console.read_line()?;
            if !self.deck.contains_definition(&definition) {
                break definition;
            }
            self.console.say(format!(
                "The definition \"{definition}\" already exists. Try again:"
            ))?;
        };

        self.deck.add(&term, &definition)?;
        self.console.say(format!(
            "The pair (\"{term}\":\"{definition}\") has been added."
        ))?;
        Ok(())
    }

    /// Asks which card to remove. Returns `false` when there is no such card.
    ///
    /// # Errors
    ///
    /// Returns an error if input ends or output cannot be written.
    pub fn remove_card(&mut self) -> Result<bool> {
        self.console.say("Which card?")?;
        let term = self.console.read_line()?;

        if self.deck.remove(&term).is_some() {
            self.console.say("The card has been removed.")?;
            return Ok(true);
        }

        self.console
            .say(format!("Can't remove \"{term}\": there is no such card."))?;
        Ok(false)
    }

    /// Merges the deck stored at `path` into the session deck. A missing file is
    /// reported to the user and otherwise ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not contain a deck.
    pub fn import_from(&mut self, path: &Path) -> Result<()> {
        let Some(cards) = load_cards(path)
            .with_context(|| format!("Failed to import deck from {}", path.display()))?
        else {
            self.console.say("File not found.")?;
            return Ok(());
        };

        let summary = self.deck.merge(cards);
        log::debug!(
            "Merged {} from {}: {} updated, {} added",
            summary.read,
            path.display(),
            summary.updated,
            summary.added
        );
        self.console
            .say(format!("{} cards have been loaded.", summary.read))?;
        Ok(())
    }

    /// Writes the whole deck to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck cannot be serialized or written.
    pub fn export_to_file(&mut self, path: &Path) -> Result<()> {
        save_cards(path, self.deck.cards())
            .with_context(|| format!("Failed to export deck to {}", path.display()))?;
        self.console
            .say(format!("{} cards have been saved.", self.deck.len()))?;
        Ok(())
    }

    /// Quizzes the user on randomly chosen cards. Returns the number of wrong answers.
    ///
    /// # Errors
    ///
    /// Returns an error if the requested count is not a number or input ends.
    pub fn ask(&mut self) -> Result<usize> {
        self.console.say("How many times to ask?")?;
        let input = self.console.read_line()?;
        let rounds = parse_round_count(&input)?;

        if self.deck.is_empty() {
            self.console
                .say("There are currently no flashcards. First add some and try again.")?;
            return Ok(0);
        }

        let mut wrong: usize = 0;
        for _ in 0..rounds {
            let Some(index) = pick_card(&self.deck, &mut self.rng) else {
                break;
            };
            let Some(term) = self.deck.get(index).map(|card| card.term.clone()) else {
                break;
            };

            self.console
                .say(format!("Print the definition of \"{term}\":"))?;
            let answer = self.console.read_line()?;

            if let Some(verdict) = check_answer(&mut self.deck, index, &answer) {
                if verdict != Verdict::Correct {
                    wrong = wrong.saturating_add(1);
                }
                self.console.say(verdict.to_string())?;
            }
        }

        Ok(wrong)
    }

    /// Saves the transcript so far to a file named by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if input ends or the file cannot be written.
    pub fn write_log(&mut self) -> Result<()> {
        let path = self.prompt_path()?;
        self.console.transcript().save(&path)?;
        self.console.say("The log has been saved.")?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if output cannot be written.
    pub fn report_hardest(&mut self) -> Result<()> {
        let report = self.deck.hardest_cards();
        self.console.say(report.to_string())?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if output cannot be written.
    pub fn reset_stats(&mut self) -> Result<()> {
        self.deck.reset_stats();
        self.console.say("Card statistics have been reset.")?;
        Ok(())
    }
}
