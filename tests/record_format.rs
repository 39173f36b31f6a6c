use std::fs;

use cyberquiz::collector::Collector;
use cyberquiz::model::{Participant, Question};
use cyberquiz::persist;
use cyberquiz::session::{Phase, Session};
use cyberquiz::submit::{self, Persistence};

fn participant() -> Participant {
    Participant {
        name: "Test Student".to_string(),
        roll_no: "235UCS001".to_string(),
        mobile_no: "9876543210".to_string(),
        email: "student@example.edu".to_string(),
    }
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

/// Three questions: one answered right, one wrong, one expired.
fn played_session() -> Session {
    let questions = vec![question(11, 1), question(12, 2), question(13, 0)];
    let mut session = Session::new(participant(), questions, 15).unwrap();

    session.select_option(1); // correct: "Bravo"
    session.advance();
    session.select_option(3); // wrong: "Delta"
    session.advance();
    session.expire_current(); // timeout
    session.advance();

    assert_eq!(session.phase(), Phase::Completed);
    session
}

#[test]
fn test_record_contents() {
    let session = played_session();
    let record = submit::build_record(&session);

    assert_eq!(record.name, "Test Student");
    assert_eq!(record.roll_no, "235UCS001");
    assert_eq!(record.score, 1);
    assert_eq!(record.total_questions, 3);
    assert_eq!(record.percentage, 33);
    assert_eq!(record.answers.len(), 3);

    let a = &record.answers[0];
    assert_eq!(a.question_id, 11);
    assert_eq!(a.selected_option, "Bravo");
    assert!(a.is_correct);
    assert_eq!(a.time_taken, 15);

    let b = &record.answers[1];
    assert_eq!(b.question_id, 12);
    assert_eq!(b.selected_option, "Delta");
    assert!(!b.is_correct);

    // Expired position carries the empty string, not a fabricated option
    let c = &record.answers[2];
    assert_eq!(c.question_id, 13);
    assert_eq!(c.selected_option, "");
    assert!(!c.is_correct);

    assert!(!record.completed_at.is_empty());
}

#[test]
fn test_wire_format_is_camel_case() {
    let record = submit::build_record(&played_session());
    let value = serde_json::to_value(&record).unwrap();

    let obj = value.as_object().expect("record must serialize to an object");
    for key in ["name", "rollNo", "mobileNo", "email", "score", "totalQuestions", "percentage", "answers", "completedAt"] {
        assert!(obj.contains_key(key), "missing key {}", key);
    }

    let first = value["answers"][0]
        .as_object()
        .expect("answers must be objects");
    for key in ["questionId", "selectedOption", "isCorrect", "timeTaken"] {
        assert!(first.contains_key(key), "missing answer key {}", key);
    }
}

#[test]
fn test_collector_failure_falls_back_to_local_save() {
    let record = submit::build_record(&played_session());

    let tmp_dir = std::env::temp_dir().join("cyberquiz_test_fallback");
    let _ = fs::remove_dir_all(&tmp_dir);

    let persistence = submit::resolve_persistence(
        &record,
        Err("NETWORK: connection refused".to_string()),
        &tmp_dir,
    );

    match persistence {
        Persistence::Local { path, reason } => {
            assert!(path.exists());
            assert!(reason.contains("NETWORK"));

            // The record survives the round trip intact
            let restored = persist::load_record(&path).unwrap();
            assert_eq!(restored.score, record.score);
            assert_eq!(restored.percentage, record.percentage);
            assert_eq!(restored.answers.len(), 3);
            assert_eq!(restored.answers[2].selected_option, "");
        }
        other => panic!("expected local fallback, got {:?}", other),
    }

    let _ = fs::remove_dir_all(&tmp_dir);
}

#[test]
fn test_collector_success_reports_result_id() {
    let record = submit::build_record(&played_session());

    let persistence = submit::resolve_persistence(
        &record,
        Ok("66f1a2b3c4d5".to_string()),
        &std::env::temp_dir(),
    );

    assert_eq!(
        persistence,
        Persistence::Saved {
            result_id: "66f1a2b3c4d5".to_string()
        }
    );
    assert!(persistence.is_saved());
}

#[test]
fn test_unreachable_collector_errors() {
    // Port 1 on loopback: connection refused, no network needed
    let collector = Collector::new("http://127.0.0.1:1").unwrap();
    let record = submit::build_record(&played_session());

    let result = collector.submit(&record);
    assert!(result.is_err());
    assert!(result.unwrap_err().starts_with("NETWORK:"));
}
