// tests/integration_tests/reporting_test.rs
use super::common::{capitals, scripted_session};
use anyhow::Result;
use flashcards::{Deck, Flashcard, HardestCards};
use std::fs;

#[test]
fn test_hardest_cards_with_ties() {
    let deck = Deck::from(vec![
        Flashcard::new("A", "1").with_mistakes(3),
        Flashcard::new("B", "2").with_mistakes(1),
        Flashcard::new("C", "3").with_mistakes(3),
        Flashcard::new("D", "4"),
    ]);

    let report = deck.hardest_cards();
    assert_eq!(
        report,
        HardestCards::Tied {
            terms: vec![String::from("A"), String::from("C")],
            mistakes: 3
        }
    );
    assert_eq!(
        report.to_string(),
        "The hardest cards are \"A\", \"C\". You have 3 errors answering them."
    );
}

#[test]
fn test_reset_stats_then_no_hardest_card() -> Result<()> {
    let mut session = scripted_session(
        "hardest card\nreset stats\nhardest card\nexit\n",
        Deck::from(capitals()),
    );
    session.run()?;

    assert!(session.deck().cards().iter().all(|c| c.mistakes == 0));
    let lines = session.transcript().lines();
    assert!(lines.iter().any(|l| l == "The hardest card is \"Kenya\". You have 5 errors answering it."));
    assert!(lines.iter().any(|l| l == "Card statistics have been reset."));
    assert_eq!(
        lines.iter().rev().nth(3).map(String::as_str),
        Some("There are no cards with errors.")
    );
    Ok(())
}

#[test]
fn test_log_contains_prompts_and_inputs() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let log_path = temp_dir.path().join("session.log");
    let script = format!("remove\nJapan\nlog\n{}\nexit\n", log_path.display());

    let mut session = scripted_session(&script, Deck::from(capitals()));
    session.run()?;

    let content = fs::read_to_string(&log_path)?;
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[1], "remove");
    assert_eq!(lines[2], "Which card?");
    assert_eq!(lines[3], "Japan");
    assert_eq!(lines[4], "The card has been removed.");
    assert_eq!(lines.last().copied(), Some(log_path.display().to_string().as_str()));
    assert!(content.ends_with('\n'));
    Ok(())
}

#[test]
fn test_log_to_unwritable_path_is_fatal() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let script = format!(
        "log\n{}\nexit\n",
        temp_dir.path().join("missing").join("session.log").display()
    );

    let mut session = scripted_session(&script, Deck::new());
    assert!(session.run().is_err());
    assert!(
        session
            .transcript()
            .lines()
            .last()
            .is_some_and(|l| l.starts_with("Error writing log to file:"))
    );
    Ok(())
}
