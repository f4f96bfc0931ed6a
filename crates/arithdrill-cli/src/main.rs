//! The `arithdrill` command-line interface: printable worksheets and practice sessions.

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

mod commands;
mod render;

#[derive(Parser)]
#[command(
    name = "arithdrill",
    version,
    about = "Arithmetic worksheet and practice generator"
)]
struct Cli {
    /// Settings file (default: ./arithdrill.toml, then ~/.config/arithdrill/settings.toml)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Per-run overrides of the saved generation settings.
#[derive(Args, Debug, Default, Clone)]
pub struct GenerationOverrides {
    /// Number of addition questions
    #[arg(long)]
    add: Option<u32>,

    /// Number of subtraction questions
    #[arg(long)]
    subtract: Option<u32>,

    /// Number of multiplication questions
    #[arg(long)]
    multiply: Option<u32>,

    /// Number of division questions
    #[arg(long)]
    divide: Option<u32>,

    /// Number of mixed chains (A ± B ± C)
    #[arg(long)]
    mixed: Option<u32>,

    /// Number of bracketed expressions ((A ± B) × C)
    #[arg(long)]
    bracketed: Option<u32>,

    /// Number of fill-in-the-blank questions
    #[arg(long)]
    fill_blank: Option<u32>,

    /// Number of vertical (column) questions
    #[arg(long)]
    vertical: Option<u32>,

    /// Smallest operand
    #[arg(long)]
    min: Option<i64>,

    /// Largest operand
    #[arg(long)]
    max: Option<i64>,

    /// Allow negative subtraction results
    #[arg(long)]
    allow_negative: bool,

    /// Allow division with a remainder (the answer is the whole quotient)
    #[arg(long)]
    allow_remainder: bool,

    /// Use decimal operands with this many places (1 or 2)
    #[arg(long, value_name = "PLACES")]
    decimal: Option<u32>,

    /// Question order: sequential or random
    #[arg(long)]
    order: Option<String>,

    /// Seed for a reproducible set
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a worksheet
    Generate {
        #[command(flatten)]
        overrides: GenerationOverrides,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,

        /// Worksheet heading
        #[arg(long)]
        title: Option<String>,

        /// Question columns (1-4)
        #[arg(long)]
        columns: Option<usize>,

        /// Leave out the answer key
        #[arg(long)]
        no_answers: bool,

        /// Save the effective settings for next time
        #[arg(long)]
        save: bool,
    },

    /// Answer a set of questions interactively and record the score
    Practice {
        #[command(flatten)]
        overrides: GenerationOverrides,

        /// History file (default: next to the settings file)
        #[arg(long)]
        history: Option<PathBuf>,
    },

    /// Show recorded practice sessions
    History {
        /// History file (default: next to the settings file)
        #[arg(long)]
        history: Option<PathBuf>,

        /// List wrongly answered questions instead of sessions
        #[arg(long)]
        wrong: bool,

        /// Show at most this many entries, newest last
        #[arg(long, default_value = "20")]
        limit: usize,
    },

    /// Show the effective settings and where they came from
    Settings,

    /// Create a starter settings file
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("arithdrill=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let settings = cli.settings;

    let result = match cli.command {
        Commands::Generate {
            overrides,
            format,
            title,
            columns,
            no_answers,
            save,
        } => commands::generate::execute(
            settings, overrides, format, title, columns, no_answers, save,
        ),
        Commands::Practice { overrides, history } => {
            commands::practice::execute(settings, overrides, history)
        }
        Commands::History {
            history,
            wrong,
            limit,
        } => commands::history::execute(settings, history, wrong, limit),
        Commands::Settings => commands::settings::execute(settings),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
