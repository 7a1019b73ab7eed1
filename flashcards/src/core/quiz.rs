// src/core/quiz.rs
use crate::core::deck::Deck;
use crate::error::{DeckError, Result};
use rand::Rng;
use std::fmt;

/// Outcome of checking one answer against a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Wrong {
        expected: String,
        /// Term of another card whose definition matches the given answer.
        correct_for: Option<String>,
    },
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Correct => write!(f, "Correct!"),
            Self::Wrong {
                expected,
                correct_for: Some(term),
            } => write!(
                f,
                "Wrong. The right answer is \"{expected}\", but your definition is correct for \"{term}\"."
            ),
            Self::Wrong {
                expected,
                correct_for: None,
            } => write!(f, "Wrong. The right answer is \"{expected}\"."),
        }
    }
}

/// Parses the number of questions to ask. Zero or negative counts ask nothing.
///
/// # Errors
///
/// Returns `DeckError::InvalidCount` if `input` is not an integer.
pub fn parse_round_count(input: &str) -> Result<usize> {
    let count: i64 = input
        .parse()
        .map_err(|_| DeckError::InvalidCount(input.to_owned()))?;
    Ok(usize::try_from(count).unwrap_or(0))
}

/// Picks a card index uniformly at random, with replacement.
pub fn pick_card<G: Rng>(deck: &Deck, rng: &mut G) -> Option<usize> {
    if deck.is_empty() {
        return None;
    }
    Some(rng.gen_range(0..deck.len()))
}

/// Compares `answer` with the definition of the card at `index` and counts a mistake
/// when they differ.
pub fn check_answer(deck: &mut Deck, index: usize, answer: &str) -> Option<Verdict> {
    let expected = deck.get(index)?.definition.clone();
    if answer == expected {
        return Some(Verdict::Correct);
    }

    deck.record_mistake(index);
    let correct_for = deck
        .find_by_definition(answer)
        .map(|card| card.term.clone());
    Some(Verdict::Wrong {
        expected,
        correct_for,
    })
}
