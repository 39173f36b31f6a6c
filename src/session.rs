use crate::model::{Participant, Question};

pub const DEFAULT_QUESTION_COUNT: usize = 10;
pub const DEFAULT_QUESTION_SECONDS: u32 = 15;

/// Delay between answering (or expiring) a question and advancing, long
/// enough for the UI to reveal correctness.
pub const REVEAL_DELAY_MS: u64 = 500;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    InProgress,
    Completed,
}

/// One quiz attempt, from the first question to submission. The question
/// sequence is fixed at construction; an answer slot, once set, is never
/// overwritten; the transition into `Completed` fires exactly once.
#[derive(Debug, Clone)]
pub struct Session {
    participant: Participant,
    questions: Vec<Question>,
    position: usize,
    answers: Vec<Option<usize>>,
    answered: bool,
    remaining_seconds: u32,
    seconds_per_question: u32,
    phase: Phase,
    started_at: String,
    completed_at: Option<String>,
}

impl Session {
    pub fn new(
        participant: Participant,
        questions: Vec<Question>,
        seconds_per_question: u32,
    ) -> Result<Self, String> {
        if questions.is_empty() {
            return Err("Cannot start a session without questions".to_string());
        }
        if seconds_per_question == 0 {
            return Err("Per-question time must be at least 1 second".to_string());
        }

        let count = questions.len();
        Ok(Self {
            participant,
            questions,
            position: 0,
            answers: vec![None; count],
            answered: false,
            remaining_seconds: seconds_per_question,
            seconds_per_question,
            phase: Phase::InProgress,
            started_at: chrono::Utc::now().to_rfc3339(),
            completed_at: None,
        })
    }

    pub fn participant(&self) -> &Participant {
        &self.participant
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.position)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_answered(&self) -> bool {
        self.answered
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn seconds_per_question(&self) -> u32 {
        self.seconds_per_question
    }

    pub fn selected(&self, position: usize) -> Option<usize> {
        self.answers.get(position).copied().flatten()
    }

    pub fn started_at(&self) -> &str {
        &self.started_at
    }

    pub fn completed_at(&self) -> Option<&str> {
        self.completed_at.as_deref()
    }

    /// Countdown tick for the current position. Ignored once answered: the
    /// timer is disarmed on answering, but a tick may already be queued.
    pub fn tick(&mut self, remaining: u32) {
        if self.phase == Phase::InProgress && !self.answered {
            self.remaining_seconds = remaining;
        }
    }

    /// Record the first selection for the current position. Returns false if
    /// the position is already answered or the index is out of range; the
    /// stored answer is never changed after the first call.
    pub fn select_option(&mut self, option: usize) -> bool {
        if self.phase != Phase::InProgress || self.answered {
            return false;
        }
        let in_range = self
            .current_question()
            .map(|q| option < q.options.len())
            .unwrap_or(false);
        if !in_range {
            return false;
        }

        self.answers[self.position] = Some(option);
        self.answered = true;
        true
    }

    /// Countdown expiry for the current position: the slot stays at the
    /// unset sentinel and further input is locked.
    pub fn expire_current(&mut self) -> bool {
        if self.phase != Phase::InProgress || self.answered {
            return false;
        }
        self.answered = true;
        self.remaining_seconds = 0;
        true
    }

    /// Advance past an answered position: either enter the next position
    /// with a fresh countdown, or complete the session. This is the only
    /// path into `Completed`, and it is idempotent once there.
    pub fn advance(&mut self) {
        if self.phase != Phase::InProgress || !self.answered {
            return;
        }

        if self.position + 1 < self.questions.len() {
            self.position += 1;
            self.answered = false;
            self.remaining_seconds = self.seconds_per_question;
        } else {
            self.phase = Phase::Completed;
            self.completed_at = Some(chrono::Utc::now().to_rfc3339());
        }
    }

    pub fn score(&self) -> u32 {
        self.questions
            .iter()
            .zip(&self.answers)
            .filter(|(q, a)| **a == Some(q.correct_answer))
            .count() as u32
    }

    pub fn percentage(&self) -> u32 {
        let total = self.questions.len();
        if total == 0 {
            return 0;
        }
        (self.score() as f64 * 100.0 / total as f64).round() as u32
    }
}
