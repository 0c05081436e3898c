//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use crate::config::FashConfig;
use crate::output::Output;

/// File names searched for when no config path is given.
pub const CONFIG_NAMES: [&str; 3] = ["fash.toml", ".fash.toml", "fash.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: FashConfig,
    /// Where the configuration came from, if not the built-in defaults.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        Self::load_from(&cwd, config_path, output)
    }

    /// Load context as if started in `cwd`.
    pub fn load_from(cwd: &Path, config_path: Option<&str>, output: Output) -> Result<Self> {
        let config_path = match config_path {
            Some(path) => Some(resolve_path(cwd, path)),
            None => find_config(cwd),
        };

        let config = match &config_path {
            Some(path) => {
                let path_str = path
                    .to_str()
                    .with_context(|| format!("Config path is not valid UTF-8: {}", path.display()))?;
                output.debug(&format!("Using config {}", path_str));
                FashConfig::load(path_str)?
            }
            None => {
                output.debug("No config file found, using defaults");
                FashConfig::default()
            }
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd: cwd.to_path_buf(),
        })
    }

    /// Context with built-in defaults, ignoring any config file on disk.
    ///
    /// Used by `config init`, which must work even when the existing file
    /// no longer parses.
    pub fn without_config(output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        Ok(Self::defaults_at(&cwd, output))
    }

    /// Defaults-only context rooted at `cwd`.
    pub fn defaults_at(cwd: &Path, output: Output) -> Self {
        Self {
            config: FashConfig::default(),
            config_path: None,
            output,
            cwd: cwd.to_path_buf(),
        }
    }

    /// Path new config files are written to.
    pub fn default_config_path(&self) -> PathBuf {
        self.cwd.join(CONFIG_NAMES[0])
    }
}

/// Find config file in directory tree.
fn find_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_NAMES {
            let candidate = current.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Resolve a path relative to the working directory.
fn resolve_path(cwd: &Path, path: &str) -> PathBuf {
    if Path::new(path).is_absolute() {
        PathBuf::from(path)
    } else {
        cwd.join(path)
    }
}
