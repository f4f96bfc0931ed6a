//! Plain-text worksheet layout.

use arithdrill_core::composite::BLANK;
use arithdrill_core::config::SheetOptions;
use arithdrill_core::model::{Layout, Question, QuestionSet};
use arithdrill_core::random::format_number;

const COLUMN_GAP: usize = 4;
const ANSWERS_PER_LINE: usize = 5;

/// The printed lines of one numbered question.
pub fn question_lines(number: usize, question: &Question) -> Vec<String> {
    let prefix = format!("{number:>2}. ");
    match &question.layout {
        Layout::Inline => vec![format!("{prefix}{}", prompt(question))],
        Layout::Vertical {
            top,
            operator,
            bottom,
        } => {
            let width = top.len().max(bottom.len()) + 2;
            let indent = " ".repeat(prefix.chars().count());
            vec![
                format!("{prefix}{top:>width$}"),
                format!("{indent}{operator}{bottom:>w$}", w = width - 1),
                format!("{indent}{}", "-".repeat(width)),
            ]
        }
    }
}

/// Question text with a writing blank where the answer goes.
pub fn prompt(question: &Question) -> String {
    if question.text.ends_with("= ") {
        format!("{}{BLANK}", question.text)
    } else {
        question.text.clone()
    }
}

/// Format an answer at the set's precision.
pub fn answer_text(set: &QuestionSet, answer: f64) -> String {
    format_number(answer, set.decimal_places.unwrap_or(0))
}

/// Lay out a whole sheet: title, questions in columns, optional answer key.
pub fn render_sheet(set: &QuestionSet, options: &SheetOptions, show_answers: bool) -> String {
    let mut out = String::new();
    out.push_str(&options.title);
    out.push('\n');
    out.push_str(&"=".repeat(options.title.chars().count()));
    out.push_str("\n\n");

    let cells: Vec<Vec<String>> = set
        .iter()
        .enumerate()
        .map(|(i, q)| question_lines(i + 1, q))
        .collect();
    let width = cells
        .iter()
        .flatten()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0)
        + COLUMN_GAP;

    for (row_index, row) in cells.chunks(options.column_count()).enumerate() {
        if row_index > 0 {
            out.push('\n');
        }
        let height = row.iter().map(Vec::len).max().unwrap_or(0);
        for line in 0..height {
            let joined: String = row
                .iter()
                .map(|cell| {
                    let text = cell.get(line).map(String::as_str).unwrap_or("");
                    format!("{text:<width$}")
                })
                .collect();
            out.push_str(joined.trim_end());
            out.push('\n');
        }
    }

    if show_answers && !set.is_empty() {
        out.push_str("\nAnswers\n-------\n");
        let entries: Vec<String> = set
            .iter()
            .enumerate()
            .map(|(i, q)| format!("{:>2}. {}", i + 1, answer_text(set, q.answer)))
            .collect();
        let key_width = entries.iter().map(|e| e.chars().count()).max().unwrap_or(0) + 2;
        for chunk in entries.chunks(ANSWERS_PER_LINE) {
            let joined: String = chunk.iter().map(|e| format!("{e:<key_width$}")).collect();
            out.push_str(joined.trim_end());
            out.push('\n');
        }
    }

    out
}
