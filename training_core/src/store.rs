//! Persistence contract for programs, schedule rows and logged workouts.
//!
//! [`TrainingStore`] is the seam between the scheduler and whatever actually
//! stores rows. [`Database`] is the in-memory implementation; the JSON file
//! store in `file_store` persists the same struct to disk.
//!
//! Every call takes the session's [`UserContext`] and fails with
//! `Error::Unauthenticated` when nobody is signed in. Rows belonging to other
//! users are invisible.

use crate::types::*;
use crate::{Error, Result};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Storage operations consumed by the lifecycle manager and today resolver
pub trait TrainingStore {
    /// Insert a program.
    ///
    /// A row with the same id is returned unchanged, so status only ever moves
    /// through `update_program_status`.
    fn insert_program(&mut self, user: &UserContext, program: &TrainingProgram) -> Result<TrainingProgram>;

    /// Insert entries keyed by `(program_id, workout_date)`.
    ///
    /// An existing row for the same key is kept, including its `workout_id`.
    /// Only active programs accept new entries.
    fn upsert_schedule_entries(
        &mut self,
        user: &UserContext,
        entries: &[ScheduleEntry],
    ) -> Result<Vec<ScheduleEntry>>;

    fn get_program(&self, user: &UserContext, program_id: Uuid) -> Result<Option<TrainingProgram>>;

    /// The active program covering `today`, most recently created first
    fn get_active_program(&self, user: &UserContext, today: NaiveDate) -> Result<Option<TrainingProgram>>;

    fn update_program_status(
        &mut self,
        user: &UserContext,
        program_id: Uuid,
        status: ProgramStatus,
    ) -> Result<()>;

    /// Delete the program's unlinked entries dated on or after `today`
    fn delete_schedule_entries(
        &mut self,
        user: &UserContext,
        program_id: Uuid,
        today: NaiveDate,
    ) -> Result<usize>;

    fn get_schedule_entry(
        &self,
        user: &UserContext,
        program_id: Uuid,
        date: NaiveDate,
    ) -> Result<Option<ScheduleEntry>>;

    /// All entries ordered by date, excluding those of aborted programs
    fn get_full_schedule(&self, user: &UserContext) -> Result<Vec<ScheduleEntry>>;

    /// Set `workout_id` on an entry if it is still null
    fn link_schedule_entry(
        &mut self,
        user: &UserContext,
        entry_id: Uuid,
        workout_id: Uuid,
    ) -> Result<LinkOutcome>;

    fn create_workout(&mut self, user: &UserContext, workout: &NewWorkout) -> Result<Workout>;

    fn create_exercise(&mut self, user: &UserContext, workout_id: Uuid, name: &str) -> Result<Exercise>;

    /// Exercises of a workout in creation order
    fn list_exercises(&self, user: &UserContext, workout_id: Uuid) -> Result<Vec<Exercise>>;

    fn create_set(&mut self, user: &UserContext, exercise_id: Uuid, reps: u32, weight: f64) -> Result<SetRecord>;

    /// Persist a program and its entries.
    ///
    /// The default issues two writes; stores that can should override this
    /// with a single transaction.
    fn create_program_with_schedule(
        &mut self,
        user: &UserContext,
        program: &TrainingProgram,
        entries: &[ScheduleEntry],
    ) -> Result<(TrainingProgram, Vec<ScheduleEntry>)> {
        let program = self.insert_program(user, program)?;
        let entries = self.upsert_schedule_entries(user, entries)?;
        Ok((program, entries))
    }

    /// Mark a program aborted and drop its future unlinked entries.
    ///
    /// Returns the number of deleted entries. Same transaction caveat as
    /// [`TrainingStore::create_program_with_schedule`].
    fn abort_program(&mut self, user: &UserContext, program_id: Uuid, today: NaiveDate) -> Result<usize> {
        self.update_program_status(user, program_id, ProgramStatus::Aborted)?;
        self.delete_schedule_entries(user, program_id, today)
    }
}

// ============================================================================
// In-memory Database
// ============================================================================

/// All tables in one serializable struct
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Database {
    #[serde(default)]
    pub programs: Vec<TrainingProgram>,
    #[serde(default)]
    pub schedule: Vec<ScheduleEntry>,
    #[serde(default)]
    pub workouts: Vec<Workout>,
    #[serde(default)]
    pub exercises: Vec<Exercise>,
    #[serde(default)]
    pub sets: Vec<SetRecord>,
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }

    fn owned_workout(&self, user_id: &str, workout_id: Uuid) -> Result<&Workout> {
        self.workouts
            .iter()
            .find(|w| w.id == workout_id && w.user_id == user_id)
            .ok_or_else(|| Error::NotFound(format!("workout {}", workout_id)))
    }

    fn owned_exercise(&self, user_id: &str, exercise_id: Uuid) -> Result<&Exercise> {
        let exercise = self
            .exercises
            .iter()
            .find(|e| e.id == exercise_id)
            .ok_or_else(|| Error::NotFound(format!("exercise {}", exercise_id)))?;
        self.owned_workout(user_id, exercise.workout_id)?;
        Ok(exercise)
    }

    fn program_status(&self, program_id: Uuid) -> Option<ProgramStatus> {
        self.programs
            .iter()
            .find(|p| p.id == program_id)
            .map(|p| p.status)
    }
}

impl TrainingStore for Database {
    fn insert_program(&mut self, user: &UserContext, program: &TrainingProgram) -> Result<TrainingProgram> {
        let user_id = user.require_user()?;
        if program.user_id != user_id {
            return Err(Error::Store(format!(
                "program {} belongs to another user",
                program.id
            )));
        }

        // First write wins: a retry never touches status or created_at
        if let Some(existing) = self.programs.iter().find(|p| p.id == program.id) {
            if existing.user_id != user_id {
                return Err(Error::Store(format!(
                    "program {} belongs to another user",
                    program.id
                )));
            }
            return Ok(existing.clone());
        }
        self.programs.push(program.clone());
        Ok(program.clone())
    }

    fn upsert_schedule_entries(
        &mut self,
        user: &UserContext,
        entries: &[ScheduleEntry],
    ) -> Result<Vec<ScheduleEntry>> {
        let user_id = user.require_user()?;
        let mut persisted = Vec::with_capacity(entries.len());

        for entry in entries {
            if entry.user_id != user_id {
                return Err(Error::Store(format!(
                    "schedule entry {} belongs to another user",
                    entry.id
                )));
            }
            match self.program_status(entry.program_id) {
                None => return Err(Error::NotFound(format!("program {}", entry.program_id))),
                Some(ProgramStatus::Active) => {}
                Some(status) => {
                    return Err(Error::State(format!(
                        "program {} is {}, its schedule is closed",
                        entry.program_id, status
                    )))
                }
            }

            let existing = self.schedule.iter().find(|e| {
                e.program_id == entry.program_id && e.workout_date == entry.workout_date
            });
            match existing {
                Some(row) => persisted.push(row.clone()),
                None => {
                    self.schedule.push(entry.clone());
                    persisted.push(entry.clone());
                }
            }
        }
        Ok(persisted)
    }

    fn get_program(&self, user: &UserContext, program_id: Uuid) -> Result<Option<TrainingProgram>> {
        let user_id = user.require_user()?;
        Ok(self
            .programs
            .iter()
            .find(|p| p.id == program_id && p.user_id == user_id)
            .cloned())
    }

    fn get_active_program(&self, user: &UserContext, today: NaiveDate) -> Result<Option<TrainingProgram>> {
        let user_id = user.require_user()?;
        Ok(self
            .programs
            .iter()
            .filter(|p| p.user_id == user_id)
            .filter(|p| p.status == ProgramStatus::Active && p.covers(today))
            .max_by_key(|p| p.created_at)
            .cloned())
    }

    fn update_program_status(
        &mut self,
        user: &UserContext,
        program_id: Uuid,
        status: ProgramStatus,
    ) -> Result<()> {
        let user_id = user.require_user()?;
        let program = self
            .programs
            .iter_mut()
            .find(|p| p.id == program_id && p.user_id == user_id)
            .ok_or_else(|| Error::NotFound(format!("program {}", program_id)))?;
        if program.status != ProgramStatus::Active && program.status != status {
            return Err(Error::State(format!(
                "program {} is {} and cannot become {}",
                program_id, program.status, status
            )));
        }
        program.status = status;
        Ok(())
    }

    fn delete_schedule_entries(
        &mut self,
        user: &UserContext,
        program_id: Uuid,
        today: NaiveDate,
    ) -> Result<usize> {
        let user_id = user.require_user()?;
        let before = self.schedule.len();
        self.schedule.retain(|e| {
            !(e.user_id == user_id
                && e.program_id == program_id
                && e.workout_id.is_none()
                && e.workout_date >= today)
        });
        Ok(before - self.schedule.len())
    }

    fn get_schedule_entry(
        &self,
        user: &UserContext,
        program_id: Uuid,
        date: NaiveDate,
    ) -> Result<Option<ScheduleEntry>> {
        let user_id = user.require_user()?;
        Ok(self
            .schedule
            .iter()
            .find(|e| e.user_id == user_id && e.program_id == program_id && e.workout_date == date)
            .cloned())
    }

    fn get_full_schedule(&self, user: &UserContext) -> Result<Vec<ScheduleEntry>> {
        let user_id = user.require_user()?;
        let mut entries: Vec<ScheduleEntry> = self
            .schedule
            .iter()
            .filter(|e| e.user_id == user_id)
            .filter(|e| {
                matches!(
                    self.program_status(e.program_id),
                    Some(ProgramStatus::Active | ProgramStatus::Completed)
                )
            })
            .cloned()
            .collect();
        entries.sort_by_key(|e| e.workout_date);
        Ok(entries)
    }

    fn link_schedule_entry(
        &mut self,
        user: &UserContext,
        entry_id: Uuid,
        workout_id: Uuid,
    ) -> Result<LinkOutcome> {
        let user_id = user.require_user()?.to_string();
        self.owned_workout(&user_id, workout_id)?;

        let entry = self
            .schedule
            .iter_mut()
            .find(|e| e.id == entry_id && e.user_id == user_id)
            .ok_or_else(|| Error::NotFound(format!("schedule entry {}", entry_id)))?;

        if entry.is_rest() {
            return Err(Error::State(format!(
                "cannot link a workout to rest day {}",
                entry.workout_date
            )));
        }
        if let Some(existing) = entry.workout_id {
            return Ok(LinkOutcome::AlreadyLinked(existing));
        }
        entry.workout_id = Some(workout_id);
        Ok(LinkOutcome::Linked)
    }

    fn create_workout(&mut self, user: &UserContext, workout: &NewWorkout) -> Result<Workout> {
        let user_id = user.require_user()?;
        let row = Workout {
            id: Uuid::new_v4(),
            user_id: user_id.to_string(),
            title: workout.title.clone(),
            note: workout.note.clone(),
            workout_date: workout.workout_date,
            created_at: Utc::now(),
        };
        self.workouts.push(row.clone());
        Ok(row)
    }

    fn create_exercise(&mut self, user: &UserContext, workout_id: Uuid, name: &str) -> Result<Exercise> {
        let user_id = user.require_user()?;
        self.owned_workout(user_id, workout_id)?;
        let row = Exercise {
            id: Uuid::new_v4(),
            workout_id,
            name: name.to_string(),
            created_at: Utc::now(),
        };
        self.exercises.push(row.clone());
        Ok(row)
    }

    fn list_exercises(&self, user: &UserContext, workout_id: Uuid) -> Result<Vec<Exercise>> {
        let user_id = user.require_user()?;
        self.owned_workout(user_id, workout_id)?;
        Ok(self
            .exercises
            .iter()
            .filter(|e| e.workout_id == workout_id)
            .cloned()
            .collect())
    }

    fn create_set(&mut self, user: &UserContext, exercise_id: Uuid, reps: u32, weight: f64) -> Result<SetRecord> {
        let user_id = user.require_user()?;
        self.owned_exercise(user_id, exercise_id)?;
        let row = SetRecord {
            id: Uuid::new_v4(),
            exercise_id,
            reps,
            weight,
            created_at: Utc::now(),
        };
        self.sets.push(row.clone());
        Ok(row)
    }

    fn create_program_with_schedule(
        &mut self,
        user: &UserContext,
        program: &TrainingProgram,
        entries: &[ScheduleEntry],
    ) -> Result<(TrainingProgram, Vec<ScheduleEntry>)> {
        let snapshot = self.clone();
        let result = self
            .insert_program(user, program)
            .and_then(|program| Ok((program, self.upsert_schedule_entries(user, entries)?)));
        if result.is_err() {
            *self = snapshot;
        }
        result
    }

    fn abort_program(&mut self, user: &UserContext, program_id: Uuid, today: NaiveDate) -> Result<usize> {
        let snapshot = self.clone();
        let result = self
            .update_program_status(user, program_id, ProgramStatus::Aborted)
            .and_then(|_| self.delete_schedule_entries(user, program_id, today));
        if result.is_err() {
            *self = snapshot;
        }
        result
    }
}
