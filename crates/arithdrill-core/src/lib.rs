//! Arithmetic practice generation, scoring and persistence.
//!
//! This crate holds the constrained-random question generators, the batch
//! orchestrator that turns settings into a question set, answer scoring,
//! and the settings and history stores the CLI builds on.

pub mod composite;
pub mod config;
pub mod engine;
pub mod error;
pub mod generators;
pub mod history;
pub mod model;
pub mod random;
pub mod scoring;

pub use engine::{generate, generate_with};
pub use error::ValidationError;
pub use model::{Category, GenerationSettings, Question, QuestionOrder, QuestionSet};
