// src/models/flashcard.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single term/definition pair together with how often it was answered wrong.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Flashcard {
    pub term: String,
    pub definition: String,
    pub mistakes: u32,
}

impl Flashcard {
    #[inline]
    #[must_use]
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
            mistakes: 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn with_mistakes(mut self, mistakes: u32) -> Self {
        self.mistakes = mistakes;
        self
    }
}

impl fmt::Display for Flashcard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card:\n{}\nDefinition:\n{}", self.term, self.definition)
    }
}
