// tests/integration_tests/import_export_test.rs
use super::common::{capitals, create_deck_file, scripted_session};
use anyhow::Result;
use flashcards::{Deck, Flashcard, load_cards};
use pretty_assertions::assert_eq;
use std::fs;

#[test]
fn test_export_then_import_into_empty_deck() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let path = temp_dir.path().join("capitals.json");

    let script = format!("export\n{}\nexit\n", path.display());
    let mut exporter = scripted_session(&script, Deck::from(capitals()));
    exporter.run()?;

    let script = format!("import\n{}\nexit\n", path.display());
    let mut importer = scripted_session(&script, Deck::new());
    importer.run()?;

    assert_eq!(importer.deck().cards(), capitals().as_slice());
    assert!(
        importer
            .transcript()
            .lines()
            .iter()
            .any(|l| l == "3 cards have been loaded.")
    );
    Ok(())
}

#[test]
fn test_yaml_round_trip_through_session() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let path = temp_dir.path().join("capitals.yml");

    let script = format!("export\n{}\nexit\n", path.display());
    scripted_session(&script, Deck::from(capitals())).run()?;

    assert!(fs::read_to_string(&path)?.contains("term: France"));
    assert_eq!(load_cards(&path)?, Some(capitals()));
    Ok(())
}

#[test]
fn test_import_merges_existing_and_new_terms() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let path = create_deck_file(
        temp_dir.path(),
        "update.json",
        &[
            Flashcard::new("France", "Lyon").with_mistakes(40),
            Flashcard::new("Chile", "Santiago").with_mistakes(1),
        ],
    )?;

    let script = format!("import\n{}\nexit\n", path.display());
    let mut session = scripted_session(&script, Deck::from(capitals()));
    session.run()?;

    assert_eq!(
        session.deck().cards(),
        &[
            Flashcard::new("France", "Lyon").with_mistakes(2),
            Flashcard::new("Japan", "Tokyo"),
            Flashcard::new("Kenya", "Nairobi").with_mistakes(5),
            Flashcard::new("Chile", "Santiago").with_mistakes(1),
        ]
    );
    Ok(())
}

#[test]
fn test_import_count_is_records_read() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let path = create_deck_file(temp_dir.path(), "same.json", &capitals())?;

    let script = format!("import\n{}\nexit\n", path.display());
    let mut session = scripted_session(&script, Deck::from(capitals()));
    session.run()?;

    assert_eq!(session.deck().len(), 3);
    assert!(
        session
            .transcript()
            .lines()
            .iter()
            .any(|l| l == "3 cards have been loaded.")
    );
    Ok(())
}

#[test]
fn test_import_missing_file_continues() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let script = format!(
        "import\n{}\nexit\n",
        temp_dir.path().join("nope.json").display()
    );
    let mut session = scripted_session(&script, Deck::new());

    session.run()?;

    let lines = session.transcript().lines();
    assert!(lines.iter().any(|l| l == "File not found."));
    assert_eq!(lines.last().map(String::as_str), Some("Bye bye!"));
    Ok(())
}

#[test]
fn test_export_into_missing_directory_is_fatal() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let script = format!(
        "export\n{}\nexit\n",
        temp_dir.path().join("missing").join("deck.json").display()
    );
    let mut session = scripted_session(&script, Deck::from(capitals()));

    assert!(session.run().is_err());
    let last = session.transcript().lines().last().cloned().unwrap_or_default();
    assert!(last.starts_with("Error exporting flashcards to file:"));
    Ok(())
}
