use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "setwise")]
#[command(about = "A terminal workout runner with timed sets, rep sets and rest intervals")]
#[command(long_about = "setwise - A terminal workout runner

Pick a workout, review its plan, then run through it set by set.
Timed sets and rest intervals count down on their own; rep sets wait
for you to mark them done.

QUICK START:
  setwise list               Show available workouts
  setwise plan full-body     Review a workout before starting
  setwise run full-body      Run it

WORKOUT FILES:
  A library of workouts ships with setwise. Point --workouts (or
  SETWISE_WORKOUTS, or workouts.file in ~/.setwise/config.yaml)
  at your own JSON file to use different ones.

For more information on a specific command, run:
  setwise <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (the default unless
    /// config says otherwise), or 'json' for machine-readable output.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Workout library file (JSON)
    #[arg(short, long, env = "SETWISE_WORKOUTS", global = true)]
    pub workouts: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List available workouts
    ///
    /// Shows every workout in the library with its section count,
    /// exercise count and estimated duration.
    ///
    /// # Examples
    ///
    ///   setwise list
    ///   setwise ls -o json
    #[command(alias = "ls")]
    List,

    /// Show a workout's plan
    ///
    /// Lists every section and exercise with sets, work per set (seconds
    /// or reps), rest, and tips.
    ///
    /// # Examples
    ///
    ///   setwise plan full-body
    ///   setwise plan "Quick Core"
    ///   setwise plan full-body -o json
    Plan(WorkoutArg),

    /// Run a workout interactively
    ///
    /// Opens the runner. Keys:
    ///   space/enter  start, finish the set, or skip the rest
    ///   s            skip the rest
    ///   p            pause or resume the countdown
    ///   r            restart the workout
    ///   q/esc        quit
    ///
    /// # Examples
    ///
    ///   setwise run full-body
    ///   setwise run --workouts ./my-workouts.json legs
    Run(WorkoutArg),

    /// Manage configuration
    ///
    /// # Examples
    ///
    ///   setwise config show
    ///   setwise config path
    ///   setwise config init
    Config(ConfigArgs),

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   setwise completions zsh > ~/.zfunc/_setwise
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// A workout selector.
#[derive(Args)]
pub struct WorkoutArg {
    /// Workout id or name (defaults to workouts.default from config)
    pub workout: Option<String>,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Print the config file location
    Path,
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_plan() {
        let cli = Cli::try_parse_from(["setwise", "plan", "full-body", "-o", "json"]).unwrap();

        assert_eq!(cli.output, Some(OutputFormat::Json));
        match cli.command {
            Commands::Plan(arg) => assert_eq!(arg.workout.as_deref(), Some("full-body")),
            _ => panic!("expected plan"),
        }
    }

    #[test]
    fn test_parse_list_alias() {
        let cli = Cli::try_parse_from(["setwise", "ls"]).unwrap();
        assert!(matches!(cli.command, Commands::List));
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_parse_config_init() {
        let cli = Cli::try_parse_from(["setwise", "config", "init", "--force"]).unwrap();
        match cli.command {
            Commands::Config(args) => {
                assert!(matches!(args.command, ConfigCommands::Init { force: true }));
            }
            _ => panic!("expected config"),
        }
    }
}
