//! The `arithdrill history` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use arithdrill_core::history::{format_elapsed, History};

pub fn execute(
    settings_path: Option<PathBuf>,
    history_path: Option<PathBuf>,
    wrong: bool,
    limit: usize,
) -> Result<()> {
    let path = super::history_target(history_path, settings_path.as_deref());
    let history = History::load_or_default(&path);

    if wrong {
        print_wrong_questions(&history, limit);
    } else {
        print_sessions(&history, limit);
    }
    Ok(())
}

fn print_sessions(history: &History, limit: usize) {
    let Some(summary) = history.summary() else {
        println!("No practice sessions recorded yet.");
        return;
    };

    let mut table = Table::new();
    table.set_header(vec!["Date", "Questions", "Correct", "Score", "Time"]);
    let skip = history.records.len().saturating_sub(limit);
    for record in history.records.iter().skip(skip) {
        table.add_row(vec![
            Cell::new(record.date.format("%Y-%m-%d %H:%M")),
            Cell::new(record.total),
            Cell::new(record.correct),
            Cell::new(format!("{}%", record.score)),
            Cell::new(format_elapsed(record.elapsed_secs)),
        ]);
    }
    println!("{table}");

    println!(
        "\n{} session(s), {} question(s), average {:.1}%, best {}%, total time {}",
        summary.sessions,
        summary.questions,
        summary.average_score,
        summary.best_score,
        format_elapsed(summary.total_secs)
    );
}

fn print_wrong_questions(history: &History, limit: usize) {
    if history.wrong_questions.is_empty() {
        println!("No wrong answers recorded.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["When", "Question", "Your answer", "Correct"]);
    let skip = history.wrong_questions.len().saturating_sub(limit);
    for wrong in history.wrong_questions.iter().skip(skip) {
        let given = wrong
            .user_answer
            .map(|a| a.to_string())
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            Cell::new(wrong.time.format("%Y-%m-%d %H:%M")),
            Cell::new(wrong.question.trim_end()),
            Cell::new(given),
            Cell::new(wrong.correct_answer),
        ]);
    }
    println!("{table}");
}
