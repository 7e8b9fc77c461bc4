//! JSON file-backed store with file locking.
//!
//! The whole [`Database`] lives in one JSON document. Every operation takes a
//! lock on a sidecar `.lock` file, loads the document, applies the change and
//! atomically replaces the file. A failed operation never reaches disk, so the
//! composite calls (create with schedule, abort) are transactional here.

use crate::store::{Database, TrainingStore};
use crate::types::*;
use crate::{Error, Result};
use chrono::NaiveDate;
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use uuid::Uuid;

/// A [`TrainingStore`] persisted as a single JSON file
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store for the given path. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("lock")
    }

    fn open_lock(&self) -> Result<File> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(self.lock_path())?;
        Ok(file)
    }

    /// Run a read-only closure against the current contents under a shared lock
    pub fn read<T>(&self, f: impl FnOnce(&Database) -> Result<T>) -> Result<T> {
        let lock = self.open_lock()?;
        lock.lock_shared()?;
        let result = self.load_unlocked().and_then(|db| f(&db));
        lock.unlock()?;
        result
    }

    /// Load, modify and save under an exclusive lock.
    ///
    /// Nothing is written when the closure fails.
    pub fn update<T>(&self, f: impl FnOnce(&mut Database) -> Result<T>) -> Result<T> {
        let lock = self.open_lock()?;
        lock.lock_exclusive()?;
        let result = self.load_unlocked().and_then(|mut db| {
            let value = f(&mut db)?;
            self.save_unlocked(&db)?;
            Ok(value)
        });
        lock.unlock()?;
        result
    }

    /// Snapshot of the whole database
    pub fn load(&self) -> Result<Database> {
        self.read(|db| Ok(db.clone()))
    }

    fn load_unlocked(&self) -> Result<Database> {
        if !self.path.exists() {
            tracing::debug!("No store file at {:?}, starting empty", self.path);
            return Ok(Database::default());
        }

        let mut contents = String::new();
        std::io::BufReader::new(File::open(&self.path)?).read_to_string(&mut contents)?;

        // Never fall back to defaults here: the next save would overwrite the history
        serde_json::from_str(&contents).map_err(|e| {
            tracing::error!("Store file {:?} is corrupted: {}", self.path, e);
            Error::Json(e)
        })
    }

    /// Atomically writes the database by:
    /// 1. Writing to a temp file
    /// 2. Syncing to disk
    /// 3. Renaming over the original
    fn save_unlocked(&self, db: &Database) -> Result<()> {
        let parent = self.path.parent().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::Other, "store path missing parent")
        })?;
        std::fs::create_dir_all(parent)?;

        let temp = NamedTempFile::new_in(parent)?;
        {
            let mut writer = std::io::BufWriter::new(temp.as_file());
            let contents = serde_json::to_string(db)?;
            writer.write_all(contents.as_bytes())?;
            writer.flush()?;
        }
        temp.as_file().sync_all()?;
        temp.persist(&self.path).map_err(|e| Error::Io(e.error))?;

        tracing::debug!("Saved store to {:?}", self.path);
        Ok(())
    }
}

impl TrainingStore for JsonFileStore {
    fn insert_program(&mut self, user: &UserContext, program: &TrainingProgram) -> Result<TrainingProgram> {
        self.update(|db| db.insert_program(user, program))
    }

    fn upsert_schedule_entries(
        &mut self,
        user: &UserContext,
        entries: &[ScheduleEntry],
    ) -> Result<Vec<ScheduleEntry>> {
        self.update(|db| db.upsert_schedule_entries(user, entries))
    }

    fn get_program(&self, user: &UserContext, program_id: Uuid) -> Result<Option<TrainingProgram>> {
        self.read(|db| db.get_program(user, program_id))
    }

    fn get_active_program(&self, user: &UserContext, today: NaiveDate) -> Result<Option<TrainingProgram>> {
        self.read(|db| db.get_active_program(user, today))
    }

    fn update_program_status(
        &mut self,
        user: &UserContext,
        program_id: Uuid,
        status: ProgramStatus,
    ) -> Result<()> {
        self.update(|db| db.update_program_status(user, program_id, status))
    }

    fn delete_schedule_entries(
        &mut self,
        user: &UserContext,
        program_id: Uuid,
        today: NaiveDate,
    ) -> Result<usize> {
        self.update(|db| db.delete_schedule_entries(user, program_id, today))
    }

    fn get_schedule_entry(
        &self,
        user: &UserContext,
        program_id: Uuid,
        date: NaiveDate,
    ) -> Result<Option<ScheduleEntry>> {
        self.read(|db| db.get_schedule_entry(user, program_id, date))
    }

    fn get_full_schedule(&self, user: &UserContext) -> Result<Vec<ScheduleEntry>> {
        self.read(|db| db.get_full_schedule(user))
    }

    fn link_schedule_entry(
        &mut self,
        user: &UserContext,
        entry_id: Uuid,
        workout_id: Uuid,
    ) -> Result<LinkOutcome> {
        self.update(|db| db.link_schedule_entry(user, entry_id, workout_id))
    }

    fn create_workout(&mut self, user: &UserContext, workout: &NewWorkout) -> Result<Workout> {
        self.update(|db| db.create_workout(user, workout))
    }

    fn create_exercise(&mut self, user: &UserContext, workout_id: Uuid, name: &str) -> Result<Exercise> {
        self.update(|db| db.create_exercise(user, workout_id, name))
    }

    fn list_exercises(&self, user: &UserContext, workout_id: Uuid) -> Result<Vec<Exercise>> {
        self.read(|db| db.list_exercises(user, workout_id))
    }

    fn create_set(&mut self, user: &UserContext, exercise_id: Uuid, reps: u32, weight: f64) -> Result<SetRecord> {
        self.update(|db| db.create_set(user, exercise_id, reps, weight))
    }

    fn create_program_with_schedule(
        &mut self,
        user: &UserContext,
        program: &TrainingProgram,
        entries: &[ScheduleEntry],
    ) -> Result<(TrainingProgram, Vec<ScheduleEntry>)> {
        self.update(|db| db.create_program_with_schedule(user, program, entries))
    }

    fn abort_program(&mut self, user: &UserContext, program_id: Uuid, today: NaiveDate) -> Result<usize> {
        self.update(|db| db.abort_program(user, program_id, today))
    }
}
