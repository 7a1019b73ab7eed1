// src/models/hardest_cards.rs
use std::fmt;

/// Result of scanning a deck for the cards answered wrong most often.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HardestCards {
    None,
    Single { term: String, mistakes: u32 },
    Tied { terms: Vec<String>, mistakes: u32 },
}

impl HardestCards {
    /// Builds the report from the terms that share the highest mistake count,
    /// in deck order.
    #[must_use]
    pub fn from_terms(mut terms: Vec<String>, mistakes: u32) -> Self {
        if mistakes == 0 || terms.is_empty() {
            return Self::None;
        }
        if terms.len() == 1 {
            let term = terms.remove(0);
            return Self::Single { term, mistakes };
        }
        Self::Tied { terms, mistakes }
    }

    #[inline]
    #[must_use]
    pub const fn mistakes(&self) -> u32 {
        match self {
            Self::None => 0,
            Self::Single { mistakes, .. } | Self::Tied { mistakes, .. } => *mistakes,
        }
    }
}

const fn errors_noun(count: u32) -> &'static str {
    if count == 1 { "error" } else { "errors" }
}

impl fmt::Display for HardestCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "There are no cards with errors."),
            Self::Single { term, mistakes } => write!(
                f,
                "The hardest card is \"{term}\". You have {mistakes} {} answering it.",
                errors_noun(*mistakes)
            ),
            Self::Tied { terms, mistakes } => write!(
                f,
                "The hardest cards are \"{}\". You have {mistakes} {} answering them.",
                terms.join("\", \""),
                errors_noun(*mistakes)
            ),
        }
    }
}
