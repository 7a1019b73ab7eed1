// src/models.rs
pub mod flashcard;
pub mod hardest_cards;

pub use flashcard::Flashcard;
pub use hardest_cards::HardestCards;
