//! Runtime configuration I/O operations.
//!
//! System directory detection and config file discovery. These need the
//! `dirs` crate and are kept apart from config.rs so the interpreter core
//! builds without the runtime feature.

use crate::config::Config;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "innohacks";

impl Config {
    /// Config file name, both in the working directory and the config dir
    pub const FILENAME: &'static str = "config.json";

    /// Existing config files in search order: the working directory first,
    /// then the user's config dir.
    fn config_search_paths(working_dir: &Path, dirs: &DirectoryContext) -> Vec<PathBuf> {
        [working_dir.join(Self::FILENAME), dirs.config_path()]
            .into_iter()
            .filter(|path| path.exists())
            .collect()
    }

    /// Load the first config file that parses, or defaults if none does
    pub fn load_for_working_dir(working_dir: &Path, dirs: &DirectoryContext) -> Self {
        for path in Self::config_search_paths(working_dir, dirs) {
            match Self::load_from_file(&path) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    return config;
                }
                Err(e) => {
                    tracing::warn!(
                        "Failed to load config from {}: {}, trying next option",
                        path.display(),
                        e
                    );
                }
            }
        }
        tracing::debug!("No config file found, using defaults");
        Self::default()
    }
}

/// Directories the app reads from
///
/// Only `main` builds this from the system; everything else receives it, so
/// tests can point it at a temp dir.
#[derive(Debug, Clone)]
pub struct DirectoryContext {
    /// e.g. ~/.config/innohacks on Linux
    pub config_dir: PathBuf,
}

impl DirectoryContext {
    /// Create from the system directories. Only called from main().
    pub fn from_system() -> std::io::Result<Self> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| {
                std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "Could not determine config directory",
                )
            })?
            .join(APP_DIR);

        Ok(Self { config_dir })
    }

    pub fn for_testing(temp_dir: &Path) -> Self {
        Self {
            config_dir: temp_dir.join("config"),
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join(Config::FILENAME)
    }
}
