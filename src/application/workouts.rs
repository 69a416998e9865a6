//! Workout log use cases over a discovered workspace

use crate::application::session::{LoadOutcome, ProfileSession};
use crate::domain::form::WorkoutSlot;
use crate::domain::{Profile, WorkoutForm, WorkoutRecord};
use crate::error::{FitlogError, Result};
use crate::infrastructure::{FileSystemWorkspace, Workspace};

/// Service for reading and changing a workspace's workout log
pub struct WorkoutService {
    session: ProfileSession,
    outcome: LoadOutcome,
}

impl WorkoutService {
    /// Load the workspace config and activate its profile
    pub fn open(workspace: &FileSystemWorkspace) -> Result<Self> {
        let config = workspace.load_config()?;

        let mut session = ProfileSession::new(config.snapshot_path(workspace.root()));
        let outcome = session.create(config.profile)?;

        Ok(WorkoutService { session, outcome })
    }

    /// How the snapshot was restored when the service was opened
    pub fn load_outcome(&self) -> &LoadOutcome {
        &self.outcome
    }

    pub fn profile(&self) -> Result<&Profile> {
        self.session.profile().ok_or(FitlogError::NoProfile)
    }

    /// Append a workout from form input; returns its position
    pub fn add(&mut self, form: &WorkoutForm) -> Result<usize> {
        self.session.submit_workout(form, None)?;
        Ok(self.session.records()?.len() - 1)
    }

    /// Edit the workout at `position`, changing only the given fields
    pub fn edit(
        &mut self,
        position: usize,
        changes: &[(WorkoutSlot, String)],
    ) -> Result<WorkoutRecord> {
        let records = self.session.records()?;
        let current = records.get(position).ok_or(FitlogError::OutOfRange {
            position,
            len: records.len(),
        })?;

        let mut form = WorkoutForm::from_record(current);
        for (slot, value) in changes {
            form.set(*slot, value.clone());
        }

        self.session.submit_workout(&form, Some(position))
    }

    pub fn list(&self) -> Result<Vec<String>> {
        Ok(self.session.list_workouts()?.collect())
    }

    pub fn save(&self) -> Result<()> {
        self.session.save()
    }
}
