//! Batch orchestrator.
//!
//! Turns a [`GenerationSettings`] value into a [`QuestionSet`]: validates
//! the settings, runs each category's generator the requested number of
//! times, discourages duplicate text for the simple operators, and
//! optionally shuffles the result.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::composite::question_for;
use crate::error::ValidationError;
use crate::model::{Category, GenerationSettings, Question, QuestionOrder, QuestionSet};

/// Attempts per question before a duplicate is accepted.
pub const MAX_DEDUP_ATTEMPTS: u32 = 50;

/// Generate a question set using the thread-local random source.
pub fn generate(settings: &GenerationSettings) -> Result<QuestionSet, ValidationError> {
    generate_with(&mut rand::thread_rng(), settings)
}

/// Generate a question set from an explicit random source.
pub fn generate_with<R: Rng + ?Sized>(
    rng: &mut R,
    settings: &GenerationSettings,
) -> Result<QuestionSet, ValidationError> {
    settings.validate()?;

    let mut builder = QuestionSetBuilder::new(settings.precision());
    for category in Category::ALL {
        let count = settings.counts.get(category);
        for _ in 0..count {
            if category.operator().is_some() {
                builder.push_distinct(|| question_for(rng, category, settings));
            } else {
                builder.push(question_for(rng, category, settings));
            }
        }
    }

    if settings.order == QuestionOrder::Random {
        builder.shuffle(rng);
    }

    let set = builder.finish();
    tracing::debug!(
        questions = set.len(),
        duplicates_accepted = set_duplicates(&set),
        "generated question set"
    );
    Ok(set)
}

/// Fisher–Yates shuffle; each question keeps its own answer.
pub fn shuffle_questions<R: Rng + ?Sized>(rng: &mut R, questions: &mut [Question]) {
    questions.shuffle(rng);
}

/// The in-progress question set for one generation call.
#[derive(Debug, Default)]
pub struct QuestionSetBuilder {
    questions: Vec<Question>,
    seen: HashSet<String>,
    decimal_places: Option<u32>,
}

impl QuestionSetBuilder {
    pub fn new(decimal_places: Option<u32>) -> Self {
        Self {
            questions: Vec::new(),
            seen: HashSet::new(),
            decimal_places,
        }
    }

    /// Append a question without any duplicate check.
    pub fn push(&mut self, question: Question) {
        self.questions.push(question);
    }

    /// Draw from `next` until its text is new to this batch, up to
    /// [`MAX_DEDUP_ATTEMPTS`] draws; the last draw is kept either way.
    ///
    /// Returns `true` if the accepted question is distinct.
    pub fn push_distinct<F>(&mut self, mut next: F) -> bool
    where
        F: FnMut() -> Question,
    {
        let mut question = next();
        let mut attempts = 1;
        while self.seen.contains(&question.text) && attempts < MAX_DEDUP_ATTEMPTS {
            question = next();
            attempts += 1;
        }

        let distinct = self.seen.insert(question.text.clone());
        if !distinct {
            tracing::debug!(text = %question.text, attempts, "accepting duplicate question");
        }
        self.questions.push(question);
        distinct
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        shuffle_questions(rng, &mut self.questions);
    }

    pub fn finish(self) -> QuestionSet {
        QuestionSet {
            questions: self.questions,
            decimal_places: self.decimal_places,
        }
    }
}

fn set_duplicates(set: &QuestionSet) -> usize {
    let unique: HashSet<&str> = set.iter().map(|q| q.text.as_str()).collect();
    set.len() - unique.len()
}
