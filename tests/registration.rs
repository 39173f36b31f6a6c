use cyberquiz::model::Participant;
use cyberquiz::participant::{validate_email, validate_mobile, validate_roll_no};

#[test]
fn test_email_validation() {
    assert!(validate_email("student@example.edu"));
    assert!(validate_email("a.b+c@uni.ac.in"));
    assert!(!validate_email("not-an-email"));
    assert!(!validate_email("missing@domain"));
    assert!(!validate_email("spaces in@mail.com"));
}

#[test]
fn test_mobile_validation() {
    assert!(validate_mobile("9876543210"));
    assert!(validate_mobile("6000000000"));
    assert!(!validate_mobile("1234567890")); // must start 6-9
    assert!(!validate_mobile("987654321")); // too short
    assert!(!validate_mobile("98765432101")); // too long
    assert!(!validate_mobile("98765abc10"));
}

#[test]
fn test_roll_no_validation() {
    assert!(validate_roll_no("235UCS001"));
    assert!(validate_roll_no("  235UCS001  ")); // trimmed
    assert!(!validate_roll_no("235ucs001")); // lowercase
    assert!(!validate_roll_no("23UCS001"));
    assert!(!validate_roll_no("235UCSX01"));
}

#[test]
fn test_participant_validate_reports_first_problem() {
    let mut p = Participant {
        name: "Test Student".to_string(),
        roll_no: "235UCS001".to_string(),
        mobile_no: "9876543210".to_string(),
        email: "student@example.edu".to_string(),
    };
    assert!(p.validate().is_ok());

    p.roll_no = "bad".to_string();
    let err = p.validate().unwrap_err();
    assert!(err.contains("Roll number"), "got: {}", err);

    p.name = "x".to_string();
    let err = p.validate().unwrap_err();
    assert!(err.contains("name"), "got: {}", err);
}
