// tests/integration_tests/common.rs
use anyhow::Result;
use flashcards::{Deck, Flashcard, Session, save_cards};
use rand::SeedableRng as _;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};

pub fn capitals() -> Vec<Flashcard> {
    vec![
        Flashcard::new("France", "Paris").with_mistakes(2),
        Flashcard::new("Japan", "Tokyo"),
        Flashcard::new("Kenya", "Nairobi").with_mistakes(5),
    ]
}

pub fn create_deck_file(dir: &Path, name: &str, cards: &[Flashcard]) -> Result<PathBuf> {
    let path = dir.join(name);
    save_cards(&path, cards)?;
    Ok(path)
}

pub fn scripted_session(input: &str, deck: Deck) -> Session<&[u8], Vec<u8>> {
    Session::new(input.as_bytes(), Vec::new())
        .with_deck(deck)
        .with_rng(StdRng::seed_from_u64(2024))
}

pub fn terms(deck: &Deck) -> Vec<&str> {
    deck.cards().iter().map(|c| c.term.as_str()).collect()
}
