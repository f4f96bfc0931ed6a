//! The `arithdrill settings` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

pub fn execute(settings_path: Option<PathBuf>) -> Result<()> {
    let loaded = super::load(settings_path.as_deref());

    println!("# Settings: {}", loaded.origin);
    if let Err(e) = loaded.preferences.generation.validate() {
        println!("# Warning: these settings cannot generate a sheet: {e}");
        if e.is_range_error() {
            println!("# Adjust min_num and max_num, or pass --min and --max when generating.");
        }
    }
    let rendered =
        toml::to_string_pretty(&loaded.preferences).context("failed to serialize settings")?;
    print!("{rendered}");
    Ok(())
}
