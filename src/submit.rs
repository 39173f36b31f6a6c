use std::path::{Path, PathBuf};

use crate::model::{AnswerDetail, SubmissionRecord};
use crate::persist;
use crate::session::Session;

/// Where a completed record ended up.
#[derive(Debug, Clone, PartialEq)]
pub enum Persistence {
    Saved { result_id: String },
    Local { path: PathBuf, reason: String },
    Unsaved { reason: String },
}

impl Persistence {
    pub fn is_saved(&self) -> bool {
        matches!(self, Persistence::Saved { .. })
    }
}

/// Build the immutable Submission Record from a completed session.
pub fn build_record(session: &Session) -> SubmissionRecord {
    let answers: Vec<AnswerDetail> = session
        .questions()
        .iter()
        .enumerate()
        .map(|(i, q)| {
            let selected = session.selected(i);
            AnswerDetail {
                question_id: q.id,
                selected_option: selected
                    .and_then(|s| q.options.get(s))
                    .cloned()
                    .unwrap_or_default(),
                is_correct: selected == Some(q.correct_answer),
                time_taken: session.seconds_per_question(),
            }
        })
        .collect();

    let participant = session.participant();
    SubmissionRecord {
        name: participant.name.clone(),
        roll_no: participant.roll_no.clone(),
        mobile_no: participant.mobile_no.clone(),
        email: participant.email.clone(),
        score: session.score(),
        total_questions: session.total() as u32,
        percentage: session.percentage(),
        answers,
        completed_at: session
            .completed_at()
            .unwrap_or(session.started_at())
            .to_string(),
    }
}

/// Fold the collector's verdict into a persistence status. On failure the
/// record is written to the local fallback dir; the session result stays
/// displayable either way.
pub fn resolve_persistence(
    record: &SubmissionRecord,
    submitted: Result<String, String>,
    fallback_dir: &Path,
) -> Persistence {
    match submitted {
        Ok(result_id) => Persistence::Saved { result_id },
        Err(reason) => match persist::save_record(record, fallback_dir) {
            Ok(path) => Persistence::Local { path, reason },
            Err(save_err) => Persistence::Unsaved {
                reason: format!("{}; local save failed: {}", reason, save_err),
            },
        },
    }
}
