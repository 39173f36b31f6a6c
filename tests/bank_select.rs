use std::collections::HashSet;
use std::path::Path;

use cyberquiz::bank;
use cyberquiz::model::{Bank, Question};

fn sample_bank() -> Bank {
    bank::load_bank(Path::new("fixtures/sample_bank.yaml")).expect("Cannot load fixture bank")
}

fn question(id: u32, correct: usize) -> Question {
    Question {
        id,
        category: "general".to_string(),
        difficulty: None,
        question: format!("Question {}", id),
        options: vec![
            "Alpha".to_string(),
            "Bravo".to_string(),
            "Charlie".to_string(),
            "Delta".to_string(),
        ],
        correct_answer: correct,
    }
}

#[test]
fn test_load_sample_bank() {
    let bank = sample_bank();
    assert_eq!(bank.title.as_deref(), Some("Sample Cyber Awareness Quiz"));
    assert_eq!(bank.questions.len(), 10);

    let q1 = &bank.questions[0];
    assert_eq!(q1.id, 1);
    assert_eq!(q1.category, "phishing");
    assert_eq!(q1.options.len(), 4);
    assert_eq!(q1.correct_answer, 2);
}

#[test]
fn test_select_returns_requested_count() {
    let bank = sample_bank();

    for count in 1..=bank.questions.len() {
        let selected = bank::select_questions(&bank.questions, count);
        assert_eq!(selected.len(), count);

        let ids: HashSet<u32> = selected.iter().map(|q| q.id).collect();
        assert_eq!(ids.len(), count, "selection for count {} repeated an id", count);
    }
}

#[test]
fn test_select_full_bank_no_repeats() {
    let bank = sample_bank();
    let selected = bank::select_questions(&bank.questions, bank.questions.len());

    assert_eq!(selected.len(), 10);
    let ids: HashSet<u32> = selected.iter().map(|q| q.id).collect();
    let all_ids: HashSet<u32> = bank.questions.iter().map(|q| q.id).collect();
    assert_eq!(ids, all_ids);
}

#[test]
fn test_select_clamps_to_bank_size() {
    let bank = sample_bank();
    let selected = bank::select_questions(&bank.questions, 50);
    assert_eq!(selected.len(), bank.questions.len());
}

#[test]
fn test_validate_rejects_empty_bank() {
    let bank = Bank {
        title: None,
        questions: vec![],
    };
    assert!(bank::validate_bank(&bank).is_err());
}

#[test]
fn test_validate_rejects_duplicate_ids() {
    let bank = Bank {
        title: None,
        questions: vec![question(1, 0), question(1, 1)],
    };
    let err = bank::validate_bank(&bank).unwrap_err();
    assert!(err.contains("Duplicate question id"), "got: {}", err);
}

#[test]
fn test_validate_rejects_out_of_range_answer() {
    let mut bad = question(7, 0);
    bad.correct_answer = 4;
    let bank = Bank {
        title: None,
        questions: vec![bad],
    };
    let err = bank::validate_bank(&bank).unwrap_err();
    assert!(err.contains("out of range"), "got: {}", err);
}

#[test]
fn test_validate_rejects_single_option() {
    let mut bad = question(3, 0);
    bad.options.truncate(1);
    let bank = Bank {
        title: None,
        questions: vec![bad],
    };
    let err = bank::validate_bank(&bank).unwrap_err();
    assert!(err.contains("at least two options"), "got: {}", err);
}
