//! Initialize workspace use case

use crate::application::session::{LoadOutcome, ProfileSession};
use crate::domain::{Profile, ProfileForm};
use crate::error::{FitlogError, Result};
use crate::infrastructure::{Config, FileSystemWorkspace, Workspace, DEFAULT_SNAPSHOT};
use std::fs;
use std::path::{Path, PathBuf};

/// Create a workspace at `path` for the profile described by `form`.
///
/// An existing snapshot at the configured location is restored, so
/// re-initializing a directory that already holds workouts keeps them.
/// Nothing is written until the profile is valid and the snapshot has been
/// read, so a failed init can be retried.
pub fn init(
    path: &Path,
    form: &ProfileForm,
    snapshot: Option<PathBuf>,
) -> Result<(Profile, LoadOutcome)> {
    let workspace = FileSystemWorkspace::new(path.to_path_buf());
    if workspace.is_initialized() {
        return Err(FitlogError::Config(format!(
            "Directory already initialized: {}",
            path.display()
        )));
    }

    let snapshot = snapshot.unwrap_or_else(|| PathBuf::from(DEFAULT_SNAPSHOT));
    let mut session = ProfileSession::new(workspace.root().join(&snapshot));
    let outcome = session.create_from_form(form)?;
    let profile = session.profile().cloned().ok_or(FitlogError::NoProfile)?;

    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    workspace.initialize()?;

    let config = Config::new(profile.clone()).with_snapshot(snapshot);
    workspace.save_config(&config)?;

    Ok((profile, outcome))
}
