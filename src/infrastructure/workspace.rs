//! File system workspace holding a profile's config and snapshot

use crate::error::{FitlogError, Result};
use crate::infrastructure::config::{Config, FITLOG_DIR};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that pins the workspace root
pub const ROOT_ENV: &str = "FITLOG_ROOT";

/// Abstract access to a workspace's metadata
pub trait Workspace {
    /// Get the root directory of this workspace
    fn root(&self) -> &Path;

    /// Load configuration from .fitlog/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .fitlog/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .fitlog directory exists
    fn is_initialized(&self) -> bool;

    /// Create .fitlog directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of Workspace
#[derive(Debug, Clone)]
pub struct FileSystemWorkspace {
    pub root: PathBuf,
}

impl FileSystemWorkspace {
    pub fn new(root: PathBuf) -> Self {
        FileSystemWorkspace { root }
    }

    /// Find the workspace root.
    /// Checks FITLOG_ROOT first, then walks up from the current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var(ROOT_ENV) {
            let path = PathBuf::from(root_path);
            if Self::has_fitlog_dir(&path) {
                return Ok(FileSystemWorkspace::new(path));
            } else {
                return Err(FitlogError::Config(format!(
                    "{} is set to '{}' but no {} directory found. \
                    Run 'fitlog init' in that directory or unset {}.",
                    ROOT_ENV,
                    path.display(),
                    FITLOG_DIR,
                    ROOT_ENV
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Walk up from `start` to the first directory containing .fitlog
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_fitlog_dir(&current) {
                return Ok(FileSystemWorkspace::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(FitlogError::NotWorkspace(start.to_path_buf())),
            }
        }
    }

    fn has_fitlog_dir(path: &Path) -> bool {
        path.join(FITLOG_DIR).is_dir()
    }
}

impl Workspace for FileSystemWorkspace {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_fitlog_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let fitlog_dir = self.root.join(FITLOG_DIR);

        if fitlog_dir.exists() {
            return Err(FitlogError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir_all(&fitlog_dir)?;
        Ok(())
    }
}
