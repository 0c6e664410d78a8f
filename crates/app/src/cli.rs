use std::path::PathBuf;

use clap::{Parser, Subcommand};
use services::{CatalogSource, ScoringConfig, ScoringMode};

/// Constructive feedback self-assessment
#[derive(Debug, Parser)]
#[command(name = "app", version)]
#[command(after_help = r#"Examples:
  app                                  # desktop window with the built-in questionnaire
  app console --scoring weighted       # answer in the terminal
  app ui --catalog ./my_catalog.json --seed 7
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Question catalog JSON file (defaults to the built-in catalog)
    #[arg(long, global = true, value_name = "PATH", env = "ASSESS_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// How results are scored
    #[arg(
        long,
        global = true,
        value_name = "MODE",
        env = "ASSESS_SCORING",
        default_value_t = ScoringMode::Placeholder
    )]
    pub scoring: ScoringMode,

    /// Seed for placeholder scoring, for repeatable results
    #[arg(long, global = true, value_name = "SEED", env = "ASSESS_SEED")]
    pub seed: Option<u64>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Open the desktop window (default)
    Ui,
    /// Run the questionnaire over stdin/stdout
    Console,
}

/// Settings resolved from flags and environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub command: Command,
    pub catalog: CatalogSource,
    pub scoring: ScoringConfig,
}

impl From<Cli> for AppConfig {
    fn from(cli: Cli) -> Self {
        Self {
            command: cli.command.unwrap_or(Command::Ui),
            catalog: CatalogSource::from_path(cli.catalog),
            scoring: ScoringConfig {
                mode: cli.scoring,
                seed: cli.seed,
            },
        }
    }
}
