//! Configuration management

use crate::domain::Profile;
use crate::error::{FitlogError, Result};
use crate::infrastructure::store::DEFAULT_SNAPSHOT;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the per-workspace metadata directory
pub const FITLOG_DIR: &str = ".fitlog";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Snapshot file, relative to the workspace root unless absolute
    #[serde(default = "default_snapshot")]
    pub snapshot: PathBuf,
    pub created: DateTime<Utc>,
    pub profile: Profile,
}

fn default_snapshot() -> PathBuf {
    PathBuf::from(DEFAULT_SNAPSHOT)
}

impl Config {
    /// Create a new config for a profile with the default snapshot location
    pub fn new(profile: Profile) -> Self {
        Config {
            snapshot: default_snapshot(),
            created: Utc::now(),
            profile,
        }
    }

    pub fn with_snapshot(mut self, snapshot: PathBuf) -> Self {
        self.snapshot = snapshot;
        self
    }

    /// Resolve the snapshot path against a workspace root
    pub fn snapshot_path(&self, root: &Path) -> PathBuf {
        root.join(&self.snapshot)
    }

    /// Load config from .fitlog/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(FITLOG_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                FitlogError::NotWorkspace(path.to_path_buf())
            } else {
                FitlogError::Io(e)
            }
        })?;

        Ok(toml::from_str(&contents)?)
    }

    /// Save config to .fitlog/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let fitlog_dir = path.join(FITLOG_DIR);
        let config_path = fitlog_dir.join("config.toml");

        if !fitlog_dir.exists() {
            fs::create_dir(&fitlog_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn ada() -> Profile {
        Profile::new("Ada", 36, 61.5)
    }

    #[test]
    fn test_new_config_uses_default_snapshot() {
        let config = Config::new(ada());
        assert_eq!(config.snapshot, PathBuf::from("workouts.json"));
        assert_eq!(
            config.snapshot_path(Path::new("/data")),
            PathBuf::from("/data/workouts.json")
        );
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let config = Config::new(ada()).with_snapshot(PathBuf::from("log/mine.json"));

        config.save_to_dir(temp.path()).unwrap();
        assert!(temp.path().join(".fitlog/config.toml").exists());

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.profile, config.profile);
        assert_eq!(loaded.snapshot, config.snapshot);
        assert_eq!(loaded.created, config.created);
    }

    #[test]
    fn test_snapshot_defaults_when_absent() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".fitlog")).unwrap();
        fs::write(
            temp.path().join(".fitlog/config.toml"),
            "created = \"2024-01-01T00:00:00Z\"\n\n[profile]\nname = \"Ada\"\nage = 36\nweight_kg = 61.5\n",
        )
        .unwrap();

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.snapshot, PathBuf::from("workouts.json"));
        assert_eq!(loaded.profile, ada());
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();

        let result = Config::load_from_dir(temp.path());

        match result.unwrap_err() {
            FitlogError::NotWorkspace(_) => {}
            other => panic!("Expected NotWorkspace error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_garbled_config() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".fitlog")).unwrap();
        fs::write(temp.path().join(".fitlog/config.toml"), "profile = 3").unwrap();

        let result = Config::load_from_dir(temp.path());

        assert!(matches!(result, Err(FitlogError::TomlDeserialize(_))));
    }
}
