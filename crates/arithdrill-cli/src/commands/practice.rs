//! The `arithdrill practice` command.
//!
//! Questions are printed one at a time and answers read line by line from
//! stdin. Running out of input leaves the remaining questions unanswered.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};

use arithdrill_core::generate_with;
use arithdrill_core::history::{format_elapsed, History};
use arithdrill_core::model::{Layout, QuestionOrder};
use arithdrill_core::scoring::{parse_response, score};

use crate::render::{answer_text, prompt};
use crate::GenerationOverrides;

pub fn execute(
    settings_path: Option<PathBuf>,
    overrides: GenerationOverrides,
    history_path: Option<PathBuf>,
) -> Result<()> {
    let mut preferences = super::load(settings_path.as_deref()).preferences;
    overrides.apply(&mut preferences.generation)?;
    preferences.generation.order = QuestionOrder::Random;

    let mut rng = overrides.rng();
    let set = generate_with(&mut rng, &preferences.generation)?;

    println!(
        "{} questions. Type each answer and press Enter.\n",
        set.len()
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = io::stdout();
    let mut responses = Vec::with_capacity(set.len());
    let started = Instant::now();

    for (i, question) in set.iter().enumerate() {
        match &question.layout {
            Layout::Vertical {
                top,
                operator,
                bottom,
            } => {
                let width = top.len().max(bottom.len()) + 2;
                println!("{:>2}. {top:>width$}", i + 1);
                println!("    {operator}{bottom:>w$}", w = width - 1);
                print!("    = ");
            }
            Layout::Inline => print!("{:>2}. {}  ", i + 1, prompt(question)),
        }
        stdout.flush().context("failed to write question")?;

        let response = match lines.next() {
            Some(line) => parse_response(&line.context("failed to read answer")?),
            None => {
                println!();
                None
            }
        };
        responses.push(response);
    }
    let elapsed = started.elapsed();

    let card = score(&set, &responses);
    println!(
        "\nScore: {}% ({} of {} correct, {} wrong) in {}",
        card.score,
        card.correct,
        card.total,
        card.wrong(),
        format_elapsed(elapsed.as_secs())
    );

    if !card.mistakes.is_empty() {
        println!("\nMistakes:");
        for mistake in &card.mistakes {
            let given = mistake
                .given
                .map(|g| g.to_string())
                .unwrap_or_else(|| "-".to_string());
            println!(
                "  {:>2}. {}  your answer: {given}  correct: {}",
                mistake.index + 1,
                mistake.question.trim_end(),
                answer_text(&set, mistake.expected)
            );
        }
    }

    let path = super::history_target(history_path, settings_path.as_deref());
    let mut history = History::load_or_default(&path);
    history.record(&card, elapsed);
    history.save_json(&path)?;
    tracing::info!("recorded session in {}", path.display());

    Ok(())
}
