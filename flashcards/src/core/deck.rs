// src/core/deck.rs
use crate::error::{DeckError, Result};
use crate::models::{Flashcard, HardestCards};

/// Counts produced by merging an imported card list into a deck.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MergeSummary {
    pub read: usize,
    pub updated: usize,
    pub added: usize,
}

/// In-memory flashcard collection kept in insertion order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Flashcard>,
}

impl Deck {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    #[inline]
    #[must_use]
    pub fn cards(&self) -> &[Flashcard] {
        &self.cards
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Flashcard> {
        self.cards.get(index)
    }

    #[must_use]
    pub fn contains_term(&self, term: &str) -> bool {
        self.cards.iter().any(|card| card.term == term)
    }

    #[must_use]
    pub fn contains_definition(&self, definition: &str) -> bool {
        self.cards.iter().any(|card| card.definition == definition)
    }

    /// Returns the first card, in insertion order, whose definition equals `definition`.
    #[must_use]
    pub fn find_by_definition(&self, definition: &str) -> Option<&Flashcard> {
        self.cards.iter().find(|card| card.definition == definition)
    }

    /// Appends a new card with no mistakes.
    ///
    /// # Errors
    ///
    /// * `DeckError::DuplicateTerm` if a card with `term` already exists
    /// * `DeckError::DuplicateDefinition` if a card with `definition` already exists
    pub fn add(&mut self, term: &str, definition: &str) -> Result<&Flashcard> {
        if self.contains_term(term) {
            return Err(DeckError::DuplicateTerm(term.to_owned()));
        }
        if self.contains_definition(definition) {
            return Err(DeckError::DuplicateDefinition(definition.to_owned()));
        }
        self.cards.push(Flashcard::new(term, definition));
        Ok(&self.cards[self.cards.len() - 1])
    }

    /// Removes the card with `term`, keeping the remaining cards in order.
    /// Returns `None` and leaves the deck untouched when no card matches.
    pub fn remove(&mut self, term: &str) -> Option<Flashcard> {
        let index = self.cards.iter().position(|card| card.term == term)?;
        Some(self.cards.remove(index))
    }

    /// Counts one more wrong answer for the card at `index`.
    pub fn record_mistake(&mut self, index: usize) {
        if let Some(card) = self.cards.get_mut(index) {
            card.mistakes = card.mistakes.saturating_add(1);
        }
    }

    /// Merges imported cards into the deck.
    ///
    /// A card whose term is already present only has its definition replaced; its
    /// mistake count stays as it was. Unknown terms are appended as-is, mistakes included.
    /// Definition uniqueness is not checked here.
    pub fn merge(&mut self, incoming: Vec<Flashcard>) -> MergeSummary {
        let mut summary = MergeSummary {
            read: incoming.len(),
            ..MergeSummary::default()
        };

        for card in incoming {
            if let Some(existing) = self.cards.iter_mut().find(|c| c.term == card.term) {
                existing.definition = card.definition;
                summary.updated = summary.updated.saturating_add(1);
            } else {
                self.cards.push(card);
                summary.added = summary.added.saturating_add(1);
            }
        }

        summary
    }

    pub fn reset_stats(&mut self) {
        for card in &mut self.cards {
            card.mistakes = 0;
        }
    }

    /// Finds every card sharing the highest non-zero mistake count, in deck order.
    #[must_use]
    pub fn hardest_cards(&self) -> HardestCards {
        let mut max_mistakes = 0;
        let mut terms: Vec<String> = Vec::new();

        for card in &self.cards {
            if card.mistakes == 0 || card.mistakes < max_mistakes {
                continue;
            }
            if card.mistakes > max_mistakes {
                max_mistakes = card.mistakes;
                terms.clear();
            }
            terms.push(card.term.clone());
        }

        HardestCards::from_terms(terms, max_mistakes)
    }
}

impl From<Vec<Flashcard>> for Deck {
    fn from(cards: Vec<Flashcard>) -> Self {
        Self { cards }
    }
}
