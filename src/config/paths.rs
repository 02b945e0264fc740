//! Path resolution for setwise configuration and data files.
//!
//! All setwise data is stored in `~/.setwise/`:
//! - `config.yaml` - Main configuration file
//! - `setwise.log` - Log output while the runner owns the terminal

use std::path::PathBuf;

use crate::error::SetwiseError;

/// Paths to setwise configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.setwise/`
    pub root: PathBuf,
    /// Config file: `~/.setwise/config.yaml`
    pub config_file: PathBuf,
    /// Log file: `~/.setwise/setwise.log`
    pub log_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, SetwiseError> {
        let home = std::env::var("HOME").map_err(|_| {
            SetwiseError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".setwise")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            log_file: root.join("setwise.log"),
            root,
        }
    }

    /// Ensure the root directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), SetwiseError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                SetwiseError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.root.display()
                ))
            })?;
        }

        Ok(())
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if home cannot be determined
            Self::with_root(PathBuf::from(".setwise"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_with_root() {
        let root = PathBuf::from("/tmp/test-setwise");
        let paths = Paths::with_root(root.clone());

        assert_eq!(paths.root, root);
        assert_eq!(paths.config_file, root.join("config.yaml"));
        assert_eq!(paths.log_file, root.join("setwise.log"));
    }

    #[test]
    fn test_ensure_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().join("nested").join(".setwise"));

        paths.ensure_dirs().unwrap();
        assert!(paths.root.exists());

        // Idempotent
        paths.ensure_dirs().unwrap();
    }
}
