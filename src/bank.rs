use std::collections::HashSet;
use std::fs;
use std::path::Path;

use rand::seq::SliceRandom;

use crate::model::{Bank, Question};

pub fn load_bank(path: &Path) -> Result<Bank, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Cannot read bank file {}: {}", path.display(), e))?;

    let bank: Bank =
        serde_yaml::from_str(&content).map_err(|e| format!("Invalid bank file: {}", e))?;

    validate_bank(&bank)?;

    Ok(bank)
}

pub fn validate_bank(bank: &Bank) -> Result<(), String> {
    if bank.questions.is_empty() {
        return Err("Bank contains no questions".to_string());
    }

    let mut seen: HashSet<u32> = HashSet::new();
    for q in &bank.questions {
        if !seen.insert(q.id) {
            return Err(format!("Duplicate question id: {}", q.id));
        }
        if q.question.trim().is_empty() {
            return Err(format!("Question {} has an empty prompt", q.id));
        }
        if q.options.len() < 2 {
            return Err(format!("Question {} needs at least two options", q.id));
        }
        if q.correct_answer >= q.options.len() {
            return Err(format!(
                "Question {}: correct_answer {} is out of range (only {} options)",
                q.id,
                q.correct_answer,
                q.options.len()
            ));
        }
    }

    Ok(())
}

/// Draw `count` distinct questions from the bank, uniformly at random, in
/// random order. A bank smaller than `count` yields everything it has.
pub fn select_questions(questions: &[Question], count: usize) -> Vec<Question> {
    let mut rng = rand::thread_rng();
    let mut picked: Vec<Question> = questions
        .choose_multiple(&mut rng, count.min(questions.len()))
        .cloned()
        .collect();
    picked.shuffle(&mut rng);
    picked
}
