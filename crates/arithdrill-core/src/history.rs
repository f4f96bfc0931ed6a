//! Practice history with JSON persistence.
//!
//! Both lists are bounded; the oldest entries are evicted first.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::scoring::ScoreCard;

/// Practice sessions kept in the history.
pub const MAX_RECORDS: usize = 50;

/// Wrong answers kept for later review.
pub const MAX_WRONG_QUESTIONS: usize = 100;

/// Default history file name.
pub const HISTORY_FILE: &str = "arithdrill-history.json";

/// One finished practice session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PracticeRecord {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub total: usize,
    pub correct: usize,
    pub elapsed_secs: u64,
    pub score: u32,
}

/// A question answered wrongly during practice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WrongQuestion {
    pub question: String,
    pub user_answer: Option<f64>,
    pub correct_answer: f64,
    pub time: DateTime<Utc>,
}

/// Recorded sessions and wrong answers, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    #[serde(default)]
    pub records: Vec<PracticeRecord>,
    #[serde(default)]
    pub wrong_questions: Vec<WrongQuestion>,
}

/// Aggregate numbers over every recorded session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistorySummary {
    pub sessions: usize,
    pub questions: usize,
    pub average_score: f64,
    pub best_score: u32,
    pub total_secs: u64,
}

impl History {
    /// Save the history as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize history")?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write history to {}", path.display()))?;
        Ok(())
    }

    /// Load a history from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read history from {}", path.display()))?;
        let history: History =
            serde_json::from_str(&content).context("failed to parse history JSON")?;
        Ok(history)
    }

    /// Load a history, starting fresh if the file is missing or unusable.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load_json(path) {
            Ok(history) => history,
            Err(e) => {
                tracing::warn!("starting a new history, {} is unusable: {e:#}", path.display());
                Self::default()
            }
        }
    }

    /// Record a finished session scored now.
    pub fn record(&mut self, card: &ScoreCard, elapsed: Duration) -> &PracticeRecord {
        self.record_at(card, elapsed, Utc::now())
    }

    /// Record a finished session with an explicit timestamp.
    pub fn record_at(
        &mut self,
        card: &ScoreCard,
        elapsed: Duration,
        now: DateTime<Utc>,
    ) -> &PracticeRecord {
        self.wrong_questions
            .extend(card.mistakes.iter().map(|m| WrongQuestion {
                question: m.question.clone(),
                user_answer: m.given,
                correct_answer: m.expected,
                time: now,
            }));
        keep_newest(&mut self.wrong_questions, MAX_WRONG_QUESTIONS);

        self.records.push(PracticeRecord {
            id: Uuid::new_v4(),
            date: now,
            total: card.total,
            correct: card.correct,
            elapsed_secs: elapsed.as_secs(),
            score: card.score,
        });
        keep_newest(&mut self.records, MAX_RECORDS);

        tracing::debug!(
            sessions = self.records.len(),
            wrong = self.wrong_questions.len(),
            "recorded practice session"
        );
        &self.records[self.records.len() - 1]
    }

    /// Totals over every recorded session, `None` when nothing is recorded.
    pub fn summary(&self) -> Option<HistorySummary> {
        if self.records.is_empty() {
            return None;
        }
        let sessions = self.records.len();
        Some(HistorySummary {
            sessions,
            questions: self.records.iter().map(|r| r.total).sum(),
            average_score: self.records.iter().map(|r| f64::from(r.score)).sum::<f64>()
                / sessions as f64,
            best_score: self.records.iter().map(|r| r.score).max().unwrap_or(0),
            total_secs: self.records.iter().map(|r| r.elapsed_secs).sum(),
        })
    }
}

/// History file that belongs next to a settings file.
pub fn history_path_for(settings_path: Option<&Path>) -> PathBuf {
    match settings_path.and_then(Path::parent) {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join(HISTORY_FILE),
        _ => PathBuf::from(HISTORY_FILE),
    }
}

/// Format whole seconds as `mm:ss`.
pub fn format_elapsed(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

fn keep_newest<T>(items: &mut Vec<T>, cap: usize) {
    if items.len() > cap {
        let excess = items.len() - cap;
        items.drain(..excess);
    }
}
