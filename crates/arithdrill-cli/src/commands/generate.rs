//! The `arithdrill generate` command.

use std::path::PathBuf;

use anyhow::{bail, Result};
use serde::Serialize;

use arithdrill_core::config::save_settings;
use arithdrill_core::model::Question;
use arithdrill_core::generate_with;

use crate::render::render_sheet;
use crate::GenerationOverrides;

#[derive(Serialize)]
struct SheetOutput<'a> {
    title: &'a str,
    decimal_places: Option<u32>,
    questions: &'a [Question],
}

pub fn execute(
    settings_path: Option<PathBuf>,
    overrides: GenerationOverrides,
    format: String,
    title: Option<String>,
    columns: Option<usize>,
    no_answers: bool,
    save: bool,
) -> Result<()> {
    let mut preferences = super::load(settings_path.as_deref()).preferences;
    overrides.apply(&mut preferences.generation)?;
    if let Some(title) = title {
        preferences.sheet.title = title;
    }
    if let Some(columns) = columns {
        preferences.sheet.columns = columns;
    }

    let mut rng = overrides.rng();
    let set = generate_with(&mut rng, &preferences.generation)?;
    tracing::debug!(questions = set.len(), "generated worksheet");

    match format.as_str() {
        "json" => {
            let output = SheetOutput {
                title: &preferences.sheet.title,
                decimal_places: set.decimal_places,
                questions: &set.questions,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        "text" => {
            let show_answers = preferences.sheet.show_answers && !no_answers;
            print!("{}", render_sheet(&set, &preferences.sheet, show_answers));
        }
        other => bail!("unknown format: {other} (expected text or json)"),
    }

    if save {
        let target = super::settings_target(settings_path.as_deref());
        save_settings(&target, &preferences)?;
        eprintln!("Saved settings to {}", target.display());
    }

    Ok(())
}
