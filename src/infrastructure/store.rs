//! Workout record store with whole-file JSON snapshots

use crate::domain::WorkoutRecord;
use crate::error::{FitlogError, Result};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Default snapshot file name, relative to the workspace root
pub const DEFAULT_SNAPSHOT: &str = "workouts.json";

/// Ordered list of workout records for one profile.
///
/// The in-memory list is the source of truth. Every mutation is followed by a
/// full overwrite of the snapshot file; if that save fails the mutation is
/// undone so memory never runs ahead of what was reported as saved.
#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Vec<WorkoutRecord>,
    snapshot: PathBuf,
}

impl RecordStore {
    /// Create an empty store that saves to `snapshot`
    pub fn new(snapshot: PathBuf) -> Self {
        RecordStore {
            records: Vec::new(),
            snapshot,
        }
    }

    /// Create a store and restore it from its snapshot, if one exists
    pub fn open(snapshot: PathBuf) -> Result<Self> {
        let mut store = RecordStore::new(snapshot);
        let path = store.snapshot.clone();
        store.load(&path)?;
        Ok(store)
    }

    pub fn snapshot_path(&self) -> &Path {
        &self.snapshot
    }

    pub fn records(&self) -> &[WorkoutRecord] {
        &self.records
    }

    pub fn get(&self, position: usize) -> Option<&WorkoutRecord> {
        self.records.get(position)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append a record and save. Returns the new record's position.
    pub fn append(&mut self, record: WorkoutRecord) -> Result<usize> {
        let position = self.records.len();
        tracing::debug!(position, %record, "appending workout");
        self.records.push(record);

        if let Err(e) = self.persist() {
            self.records.pop();
            return Err(e);
        }

        Ok(position)
    }

    /// Replace the record at `position` and save.
    pub fn edit(&mut self, position: usize, record: WorkoutRecord) -> Result<()> {
        let len = self.records.len();
        let slot = self
            .records
            .get_mut(position)
            .ok_or(FitlogError::OutOfRange { position, len })?;

        tracing::debug!(position, %record, "editing workout");
        let previous = std::mem::replace(slot, record);

        if let Err(e) = self.persist() {
            self.records[position] = previous;
            return Err(e);
        }

        Ok(())
    }

    /// Save the whole list to the store's own snapshot path
    pub fn persist(&self) -> Result<()> {
        self.save(&self.snapshot)
    }

    /// Overwrite `destination` with the whole list.
    ///
    /// The data is written to a temporary file next to the destination and
    /// renamed over it, so a failed write leaves any previous snapshot intact.
    pub fn save(&self, destination: &Path) -> Result<()> {
        let dir = match destination.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }

        let mut tmp = NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut tmp, &self.records).map_err(io::Error::from)?;
        tmp.write_all(b"\n")?;
        tmp.flush()?;
        tmp.persist(destination).map_err(|e| FitlogError::Io(e.error))?;

        tracing::info!(
            path = %destination.display(),
            count = self.records.len(),
            "saved workout snapshot"
        );
        Ok(())
    }

    /// Replace the list with the contents of `source`.
    ///
    /// A missing file leaves the store empty. A malformed file is a
    /// `Format` error and leaves the store unchanged.
    pub fn load(&mut self, source: &Path) -> Result<()> {
        let bytes = match fs::read(source) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!(path = %source.display(), "no workout snapshot, starting empty");
                self.records.clear();
                return Ok(());
            }
            Err(e) => return Err(FitlogError::Io(e)),
        };

        let records: Vec<WorkoutRecord> = serde_json::from_slice(&bytes).map_err(|e| {
            FitlogError::Format(format!("{}: {}", source.display(), e))
        })?;

        tracing::info!(
            path = %source.display(),
            count = records.len(),
            "loaded workout snapshot"
        );
        self.records = records;
        Ok(())
    }
}
