// src/core/storage.rs
use crate::error::Result;
use crate::models::Flashcard;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// On-disk encoding of a deck, chosen from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckFormat {
    Json,
    Yaml,
}

impl DeckFormat {
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::Yaml
            }
            _ => Self::Json,
        }
    }

    /// # Errors
    ///
    /// Returns an error if the cards cannot be serialized.
    pub fn encode(self, cards: &[Flashcard]) -> Result<String> {
        let content = match self {
            Self::Json => serde_json::to_string_pretty(cards)?,
            Self::Yaml => serde_yaml_ng::to_string(cards)?,
        };
        Ok(content)
    }

    /// # Errors
    ///
    /// Returns an error if `content` is not a list of flashcard records.
    pub fn decode(self, content: &str) -> Result<Vec<Flashcard>> {
        let cards = match self {
            Self::Json => serde_json::from_str(content)?,
            Self::Yaml => serde_yaml_ng::from_str(content)?,
        };
        Ok(cards)
    }
}

/// Writes `cards` to `path`, replacing any existing file.
///
/// # Errors
///
/// This function may return an error if:
/// * The cards cannot be serialized
/// * The file cannot be created or written
pub fn save_cards(path: &Path, cards: &[Flashcard]) -> Result<()> {
    let mut content = DeckFormat::from_path(path).encode(cards)?;
    if !content.ends_with('\n') {
        content.push('\n');
    }
    fs::write(path, content)?;
    log::debug!("Wrote {} cards to {}", cards.len(), path.display());
    Ok(())
}

/// Reads a card list from `path`.
///
/// # Returns
///
/// * `Ok(Some(cards))` when the file was read and parsed
/// * `Ok(None)` when the file does not exist
///
/// # Errors
///
/// This function may return an error if:
/// * The file exists but cannot be read
/// * The content is not a valid list of flashcards
pub fn load_cards(path: &Path) -> Result<Option<Vec<Flashcard>>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::warn!("Deck file not found: {}", path.display());
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    let cards = DeckFormat::from_path(path).decode(&content)?;
    log::debug!("Read {} cards from {}", cards.len(), path.display());
    Ok(Some(cards))
}
