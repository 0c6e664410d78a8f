//! Composition root: parse flags, initialise logging, load the catalog, then
//! launch the desktop window or the console runner.

mod cli;
mod console;

use std::io;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AssessmentLoopService, Clock};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

use crate::cli::{AppConfig, Cli, Command};

struct DesktopApp {
    assessment_loop: Arc<AssessmentLoopService>,
}

impl UiApp for DesktopApp {
    fn assessment_loop(&self) -> Arc<AssessmentLoopService> {
        Arc::clone(&self.assessment_loop)
    }
}

fn init_logging(verbose: u8) {
    // RUST_LOG wins over -v when set.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = AppConfig::from(cli);
    info!(?config, "starting feedback assessment");

    let catalog = config
        .catalog
        .load()
        .context("could not load the question catalog")?;
    let assessment_loop = AssessmentLoopService::new(Clock::default(), Arc::new(catalog))
        .with_scoring(config.scoring);
    let assessment_loop = Arc::new(assessment_loop);

    match config.command {
        Command::Ui => {
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp { assessment_loop });
            let context = build_app_context(&app);

            // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
            let window = WindowBuilder::new()
                .with_title("Feedback Assessment")
                .with_always_on_top(false);
            let desktop_cfg = DesktopConfig::new().with_window(window);

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Console => {
            let stdin = io::stdin();
            console::run_console(&assessment_loop, stdin.lock(), io::stdout().lock())?;
            Ok(())
        }
    }
}
