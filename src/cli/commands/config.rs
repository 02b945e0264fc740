//! Config command implementation.

use colored::Colorize;

use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::{Config, Paths};
use crate::error::SetwiseError;
use crate::output::to_json;

/// Execute config subcommands.
pub fn config(
    cmd: ConfigCommands,
    current: &Config,
    format: OutputFormat,
) -> Result<String, SetwiseError> {
    let paths = Paths::new()?;

    match cmd {
        ConfigCommands::Show => match format {
            OutputFormat::Json => to_json(current),
            OutputFormat::Pretty => current.to_yaml(),
        },
        ConfigCommands::Path => Ok(paths.config_file.display().to_string()),
        ConfigCommands::Init { force } => init(&paths, force),
    }
}

/// Write a default config file.
fn init(paths: &Paths, force: bool) -> Result<String, SetwiseError> {
    if paths.config_file.exists() && !force {
        return Err(SetwiseError::Config(format!(
            "{} already exists. Use --force to overwrite.",
            paths.config_file.display()
        )));
    }

    paths.ensure_dirs()?;
    Config::default().save_to_path(&paths.config_file)?;
    tracing::info!(path = %paths.config_file.display(), "wrote default config");

    Ok(format!(
        "{} {}",
        "Wrote".green(),
        paths.config_file.display()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_refuses_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().join(".setwise"));

        init(&paths, false).unwrap();
        assert!(paths.config_file.exists());

        assert!(matches!(init(&paths, false), Err(SetwiseError::Config(_))));
        init(&paths, true).unwrap();

        let loaded = Config::load_from_path(&paths.config_file).unwrap();
        assert!(loaded.runner.auto_advance);
    }
}
