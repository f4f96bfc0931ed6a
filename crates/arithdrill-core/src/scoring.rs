//! Answer checking and practice scores.

use serde::{Deserialize, Serialize};

use crate::model::QuestionSet;

/// Largest difference still accepted for a decimal-mode answer.
pub const DECIMAL_TOLERANCE: f64 = 1e-3;

/// Outcome of checking a full set of responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreCard {
    /// Number of questions in the set.
    pub total: usize,
    /// Number answered correctly.
    pub correct: usize,
    /// Percentage correct, rounded to the nearest whole number.
    pub score: u32,
    /// Every question answered wrongly or left blank.
    pub mistakes: Vec<Mistake>,
}

/// A question the user got wrong.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mistake {
    /// Position of the question in the set, starting at zero.
    pub index: usize,
    pub question: String,
    pub given: Option<f64>,
    pub expected: f64,
}

impl ScoreCard {
    pub fn wrong(&self) -> usize {
        self.total - self.correct
    }
}

/// Whether `given` matches `expected` for a set of the given precision.
pub fn is_correct(given: f64, expected: f64, decimal_places: Option<u32>) -> bool {
    match decimal_places {
        Some(_) => (given - expected).abs() < DECIMAL_TOLERANCE,
        None => given == expected,
    }
}

/// Score `responses` against `set`, matching by position.
///
/// Missing responses, including any past the end of `responses`, count as
/// wrong.
pub fn score(set: &QuestionSet, responses: &[Option<f64>]) -> ScoreCard {
    let mut correct = 0;
    let mut mistakes = Vec::new();

    for (index, question) in set.iter().enumerate() {
        let given = responses.get(index).copied().flatten();
        match given {
            Some(value) if is_correct(value, question.answer, set.decimal_places) => correct += 1,
            _ => mistakes.push(Mistake {
                index,
                question: question.text.clone(),
                given,
                expected: question.answer,
            }),
        }
    }

    let total = set.len();
    ScoreCard {
        total,
        correct,
        score: percentage(correct, total),
        mistakes,
    }
}

/// Parse a typed answer; blank or malformed input yields `None`.
pub fn parse_response(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn percentage(correct: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (correct as f64 / total as f64 * 100.0).round() as u32
}
