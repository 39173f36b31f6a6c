use serde::{Deserialize, Serialize};

/// Question bank file: optional title plus the full question list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bank {
    #[serde(default)]
    pub title: Option<String>,
    pub questions: Vec<Question>,
}

/// One bank entry. Options are positionally indexed; their order is fixed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub category: String,
    #[serde(default)]
    pub difficulty: Option<String>,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
}

#[derive(Debug, Clone)]
pub struct Participant {
    pub name: String,
    pub roll_no: String,
    pub mobile_no: String,
    pub email: String,
}

/// Per-question outcome inside a submission. `selected_option` carries the
/// literal option text, or an empty string when the countdown expired first.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerDetail {
    pub question_id: u32,
    pub selected_option: String,
    pub is_correct: bool,
    pub time_taken: u32,
}

/// Finalized summary of a completed session, built exactly once and handed
/// to the results collector. Keys follow the collector's camelCase API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    pub name: String,
    pub roll_no: String,
    pub mobile_no: String,
    pub email: String,
    pub score: u32,
    pub total_questions: u32,
    pub percentage: u32,
    pub answers: Vec<AnswerDetail>,
    pub completed_at: String,
}
