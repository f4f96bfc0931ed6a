//! The `arithdrill init` command.

use std::path::Path;

use anyhow::Result;

use arithdrill_core::config::LOCAL_SETTINGS_FILE;

pub fn execute() -> Result<()> {
    if Path::new(LOCAL_SETTINGS_FILE).exists() {
        println!("{LOCAL_SETTINGS_FILE} already exists, skipping.");
    } else {
        std::fs::write(LOCAL_SETTINGS_FILE, SAMPLE_SETTINGS)?;
        println!("Created {LOCAL_SETTINGS_FILE}");
    }

    println!("\nNext steps:");
    println!("  1. Edit {LOCAL_SETTINGS_FILE} to choose question counts and ranges");
    println!("  2. Run: arithdrill generate");
    println!("  3. Run: arithdrill practice");

    Ok(())
}

const SAMPLE_SETTINGS: &str = r#"# arithdrill settings

[generation]
min_num = 1
max_num = 20
# Keep subtraction results at or above zero
no_negative = true
# Keep division exact
no_remainder = true
# Decimal operands with 1 or 2 places
enable_decimal = false
decimal_places = 1
# "random" or "sequential"
order = "random"

[generation.counts]
add = 3
subtract = 3
multiply = 2
divide = 2
mixed = 0
bracketed = 0
fill_blank = 0
vertical = 0

[sheet]
title = "Arithmetic Practice"
columns = 2
show_answers = true
"#;
