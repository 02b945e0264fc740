use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context as _, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use setwise::cli::args::{Cli, Commands};
use setwise::cli::commands::{self, Context};
use setwise::config::{Config, Paths};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Where log output goes.
enum LogTarget {
    Stderr,
    /// The runner owns the terminal, so logs go to a file or nowhere.
    File(PathBuf),
}

/// Set up tracing. `RUST_LOG` wins over `--verbose`.
///
/// With a file target that cannot be opened, logging is switched off and
/// the open error is returned for the caller to report.
fn init_logging(verbose: bool, target: LogTarget) -> Option<(PathBuf, std::io::Error)> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    let (stderr_layer, file_layer, failure) = match target {
        LogTarget::Stderr => (
            Some(fmt::layer().with_target(false).with_writer(std::io::stderr)),
            None,
            None,
        ),
        LogTarget::File(path) => match OpenOptions::new().create(true).append(true).open(&path) {
            Ok(file) => (
                None,
                Some(
                    fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                ),
                None,
            ),
            Err(e) => (None, None, Some((path, e))),
        },
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    failure
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let paths = Paths::default();

    let target = if matches!(cli.command, Commands::Run(_)) {
        // A failure here surfaces as an open error on the log file below.
        paths.ensure_dirs().ok();
        LogTarget::File(paths.log_file.clone())
    } else {
        LogTarget::Stderr
    };
    if let Some((path, e)) = init_logging(cli.verbose, target) {
        eprintln!(
            "{}: cannot open log file {}: {e}; logging disabled",
            "warning".yellow().bold(),
            path.display()
        );
    }

    let config = Config::load_from_path(&paths.config_file).context("loading configuration")?;
    config.general.color.apply();

    let ctx = Context::new(config, cli.output, cli.workouts);

    let output = match cli.command {
        Commands::List => commands::list(&ctx)?,
        Commands::Plan(arg) => commands::plan(&ctx, arg.workout.as_deref())?,
        Commands::Run(arg) => commands::run(&ctx, arg.workout.as_deref())?,
        Commands::Config(args) => commands::config(args.command, &ctx.config, ctx.format)?,
        Commands::Completions { shell } => commands::completions(shell),
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
