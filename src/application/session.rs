//! Profile session: one user's profile and its record store

use crate::domain::{Profile, ProfileForm, WorkoutForm, WorkoutRecord};
use crate::error::{FitlogError, Result};
use crate::infrastructure::RecordStore;
use std::path::{Path, PathBuf};

/// What happened to the snapshot when a profile was created
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// No snapshot existed; the log starts empty
    Fresh,
    /// Records were restored from the snapshot
    Restored(usize),
    /// The snapshot was malformed and ignored; the log starts empty
    Discarded(String),
}

#[derive(Debug)]
enum SessionState {
    Uninitialized,
    Active { profile: Profile, store: RecordStore },
}

/// Session wrapping a single profile.
///
/// Starts uninitialized, where every record operation fails with
/// `NoProfile`. `create` moves it to active; there is no way back.
#[derive(Debug)]
pub struct ProfileSession {
    snapshot: PathBuf,
    state: SessionState,
}

impl ProfileSession {
    /// New uninitialized session whose records will live at `snapshot`
    pub fn new(snapshot: PathBuf) -> Self {
        ProfileSession {
            snapshot,
            state: SessionState::Uninitialized,
        }
    }

    pub fn snapshot_path(&self) -> &Path {
        &self.snapshot
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, SessionState::Active { .. })
    }

    pub fn profile(&self) -> Option<&Profile> {
        match &self.state {
            SessionState::Active { profile, .. } => Some(profile),
            SessionState::Uninitialized => None,
        }
    }

    /// Activate the session for `profile`, restoring records from the snapshot.
    ///
    /// A malformed snapshot is logged and ignored. Any other failure to read
    /// it leaves the session uninitialized.
    pub fn create(&mut self, profile: Profile) -> Result<LoadOutcome> {
        if self.is_active() {
            return Err(FitlogError::ProfileExists);
        }

        let existed = self.snapshot.exists();
        let mut store = RecordStore::new(self.snapshot.clone());

        let outcome = match store.load(&self.snapshot) {
            Ok(()) if existed => LoadOutcome::Restored(store.len()),
            Ok(()) => LoadOutcome::Fresh,
            Err(FitlogError::Format(reason)) => {
                tracing::warn!(%reason, "ignoring malformed workout snapshot");
                LoadOutcome::Discarded(reason)
            }
            Err(e) => return Err(e),
        };

        tracing::info!(name = %profile.name, ?outcome, "profile created");
        self.state = SessionState::Active { profile, store };
        Ok(outcome)
    }

    /// Validate raw profile input, then `create`
    pub fn create_from_form(&mut self, form: &ProfileForm) -> Result<LoadOutcome> {
        let profile = form.validate()?;
        self.create(profile)
    }

    fn store(&self) -> Result<&RecordStore> {
        match &self.state {
            SessionState::Active { store, .. } => Ok(store),
            SessionState::Uninitialized => Err(FitlogError::NoProfile),
        }
    }

    fn store_mut(&mut self) -> Result<&mut RecordStore> {
        match &mut self.state {
            SessionState::Active { store, .. } => Ok(store),
            SessionState::Uninitialized => Err(FitlogError::NoProfile),
        }
    }

    pub fn records(&self) -> Result<&[WorkoutRecord]> {
        Ok(self.store()?.records())
    }

    /// Append a workout; returns its position
    pub fn add_workout(&mut self, record: WorkoutRecord) -> Result<usize> {
        self.store_mut()?.append(record)
    }

    /// Replace the workout at `position`
    pub fn edit_workout(&mut self, position: usize, record: WorkoutRecord) -> Result<()> {
        self.store_mut()?.edit(position, record)
    }

    /// Validate a workout form and append it, or replace `position` when given
    pub fn submit_workout(
        &mut self,
        form: &WorkoutForm,
        position: Option<usize>,
    ) -> Result<WorkoutRecord> {
        // Reject before validating so an inactive session reports NoProfile
        self.store()?;
        let record = form.validate()?;

        match position {
            Some(position) => self.edit_workout(position, record.clone())?,
            None => {
                self.add_workout(record.clone())?;
            }
        }

        Ok(record)
    }

    /// Human-readable summaries, one per record, in log order.
    ///
    /// The iterator borrows the session and can be cloned to walk the list again.
    pub fn list_workouts(&self) -> Result<impl Iterator<Item = String> + Clone + '_> {
        Ok(self.store()?.records().iter().map(WorkoutRecord::to_string))
    }

    /// Save the whole log to the snapshot
    pub fn save(&self) -> Result<()> {
        self.store()?.persist()
    }
}
