//! Program lifecycle: create, look up and abort training programs.
//!
//! Status only moves forward: `active -> aborted` (user action) or
//! `active -> completed` (handled outside this crate). Aborting deletes the
//! program's future, unlogged days and leaves past or logged days alone.

use crate::catalog::get_default_catalog;
use crate::error::OpContext;
use crate::store::TrainingStore;
use crate::types::*;
use crate::{Error, Result};
use chrono::{NaiveDate, Utc};
use uuid::Uuid;

/// What an abort did
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AbortReport {
    pub program_id: Uuid,
    /// Future unlinked entries removed by this call
    pub deleted: usize,
    /// The program was already aborted; nothing changed
    pub already_aborted: bool,
}

/// Lifecycle operations over a [`TrainingStore`]
pub struct ProgramManager<'a, S: TrainingStore> {
    store: &'a mut S,
}

impl<'a, S: TrainingStore> ProgramManager<'a, S> {
    pub fn new(store: &'a mut S) -> Self {
        Self { store }
    }

    /// Persist a program and its generated schedule.
    ///
    /// The program id comes from the draft and entries are keyed by
    /// `(program_id, date)`, so retrying the same draft after a failure
    /// converges on one program with one row per day. A draft whose program
    /// has since been aborted or completed is rejected with `Error::State`.
    pub fn create_program(&mut self, user: &UserContext, draft: &ProgramDraft) -> Result<TrainingProgram> {
        let user_id = user.require_user()?.to_string();

        if let Some(existing) = self.store.get_program(user, draft.id).op("create program")? {
            if existing.status != ProgramStatus::Active {
                return Err(Error::State(format!(
                    "program {} is {} and cannot be re-created",
                    draft.id, existing.status
                )));
            }
        }
        let now = Utc::now();

        let program = TrainingProgram {
            id: draft.id,
            user_id: user_id.clone(),
            name: draft.name.clone(),
            split_type: draft.split_type.clone(),
            start_date: draft.start_date,
            end_date: draft.end_date,
            rest_days_per_week: draft.rest_days_per_week,
            weekly_pattern: draft.weekly_pattern.clone(),
            official_program_id: draft.official_program_id.clone(),
            status: ProgramStatus::Active,
            created_at: now,
        };

        let entries: Vec<ScheduleEntry> = draft
            .days
            .iter()
            .map(|day| ScheduleEntry {
                id: Uuid::new_v4(),
                program_id: draft.id,
                user_id: user_id.clone(),
                workout_date: day.date,
                workout_type: day.workout_type.clone(),
                focus_type: day.focus_type.clone(),
                official_program_id: day.official_program_id.clone(),
                official_workout_id: day.official_workout_id.clone(),
                workout_id: None,
                created_at: now,
            })
            .collect();

        let (program, entries) = self
            .store
            .create_program_with_schedule(user, &program, &entries)
            .op("create program")?;

        tracing::info!(
            "Created program '{}' ({}) with {} schedule entries, {} to {}",
            program.name,
            program.id,
            entries.len(),
            program.start_date,
            program.end_date
        );
        Ok(program)
    }

    /// The active program whose date range contains `today`
    pub fn get_active_program(&self, user: &UserContext, today: NaiveDate) -> Result<Option<TrainingProgram>> {
        self.store
            .get_active_program(user, today)
            .op("fetch active program")
    }

    /// Abort a program and drop its future unlogged days.
    ///
    /// Aborting an already-aborted program succeeds without touching anything.
    /// A missing program is an error, as is aborting a completed one.
    pub fn abort_program(&mut self, user: &UserContext, program_id: Uuid, today: NaiveDate) -> Result<AbortReport> {
        let program = self
            .store
            .get_program(user, program_id)
            .op("abort program")?
            .ok_or_else(|| Error::NotFound(format!("program {}", program_id)))?;

        match program.status {
            ProgramStatus::Aborted => {
                tracing::info!("Program {} already aborted, nothing to do", program_id);
                return Ok(AbortReport {
                    program_id,
                    deleted: 0,
                    already_aborted: true,
                });
            }
            ProgramStatus::Completed => {
                return Err(Error::State(format!(
                    "program {} is completed and cannot be aborted",
                    program_id
                )));
            }
            ProgramStatus::Active => {}
        }

        let deleted = self
            .store
            .abort_program(user, program_id, today)
            .op("abort program")?;

        tracing::info!(
            "Aborted program '{}' ({}), removed {} future entries",
            program.name,
            program_id,
            deleted
        );
        Ok(AbortReport {
            program_id,
            deleted,
            already_aborted: false,
        })
    }
}

/// Catalog program a training program was generated from.
///
/// Uses the stored `official_program_id`. Rows written before that column
/// existed have no id; for those the name is matched against the catalog
/// (exact, then substring) and a warning is logged so they can be backfilled.
pub fn official_program_for(program: &TrainingProgram) -> Option<&'static OfficialProgram> {
    let catalog = get_default_catalog();

    if let Some(id) = &program.official_program_id {
        return catalog.official_program(id);
    }
    if !program.split_type.starts_with("official_") {
        return None;
    }

    let matched = catalog
        .official_programs
        .iter()
        .find(|p| p.name == program.name)
        .or_else(|| {
            catalog
                .official_programs
                .iter()
                .find(|p| program.name.contains(&p.name))
        });

    if let Some(found) = matched {
        tracing::warn!(
            "Program {} has no official_program_id; matched '{}' by name",
            program.id,
            found.id
        );
    }
    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::ProgramPlan;
    use crate::store::Database;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn user() -> UserContext {
        UserContext::authenticated("athlete")
    }

    fn ppl_draft(start: NaiveDate) -> ProgramDraft {
        ProgramPlan::Split {
            preset_id: "ppl".into(),
            total_days: 14,
            rest_days_per_week: 2,
        }
        .draft(start)
        .unwrap()
    }

    #[test]
    fn test_create_persists_program_and_schedule() {
        let mut db = Database::new();
        let draft = ppl_draft(date(2024, 1, 1));
        let program = ProgramManager::new(&mut db)
            .create_program(&user(), &draft)
            .unwrap();

        assert_eq!(program.status, ProgramStatus::Active);
        assert_eq!(program.user_id, "athlete");
        assert_eq!(db.schedule.len(), 14);
        assert!(db.schedule.iter().all(|e| e.program_id == program.id));
    }

    #[test]
    fn test_create_retry_is_idempotent() {
        let mut db = Database::new();
        let draft = ppl_draft(date(2024, 1, 1));
        let mut manager = ProgramManager::new(&mut db);
        manager.create_program(&user(), &draft).unwrap();
        manager.create_program(&user(), &draft).unwrap();

        assert_eq!(db.programs.len(), 1);
        assert_eq!(db.schedule.len(), 14);
    }

    #[test]
    fn test_create_requires_user() {
        let mut db = Database::new();
        let draft = ppl_draft(date(2024, 1, 1));
        let result = ProgramManager::new(&mut db).create_program(&UserContext::anonymous(), &draft);
        assert!(matches!(result, Err(Error::Unauthenticated)));
        assert!(db.programs.is_empty());
    }

    #[test]
    fn test_get_active_program() {
        let mut db = Database::new();
        let draft = ppl_draft(date(2024, 1, 1));
        let mut manager = ProgramManager::new(&mut db);
        let created = manager.create_program(&user(), &draft).unwrap();

        let active = manager.get_active_program(&user(), date(2024, 1, 8)).unwrap();
        assert_eq!(active.map(|p| p.id), Some(created.id));
        assert!(manager
            .get_active_program(&user(), date(2023, 12, 31))
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_abort_removes_only_future_unlinked_entries() {
        let mut db = Database::new();
        let draft = ppl_draft(date(2024, 1, 1));
        let program = ProgramManager::new(&mut db)
            .create_program(&user(), &draft)
            .unwrap();

        // Log a workout against a future training day
        let linked_day = date(2024, 1, 10);
        let linked_entry = db
            .get_schedule_entry(&user(), program.id, linked_day)
            .unwrap()
            .unwrap();
        let workout = db
            .create_workout(
                &user(),
                &NewWorkout {
                    title: "Pull".into(),
                    workout_date: linked_day,
                    note: None,
                },
            )
            .unwrap();
        db.link_schedule_entry(&user(), linked_entry.id, workout.id)
            .unwrap();

        let today = date(2024, 1, 8);
        let report = ProgramManager::new(&mut db)
            .abort_program(&user(), program.id, today)
            .unwrap();

        // 14 days from Jan 1: Jan 8..=14 are 7 future days, one of them linked
        assert_eq!(report.deleted, 6);
        assert!(!report.already_aborted);

        assert!(db
            .schedule
            .iter()
            .all(|e| e.workout_date < today || e.workout_id.is_some()));
        assert_eq!(db.schedule.len(), 8);
        assert_eq!(
            db.get_program(&user(), program.id).unwrap().unwrap().status,
            ProgramStatus::Aborted
        );
    }

    #[test]
    fn test_double_abort_is_noop() {
        let mut db = Database::new();
        let draft = ppl_draft(date(2024, 1, 1));
        let mut manager = ProgramManager::new(&mut db);
        let program = manager.create_program(&user(), &draft).unwrap();

        let first = manager
            .abort_program(&user(), program.id, date(2024, 1, 5))
            .unwrap();
        assert_eq!(first.deleted, 10);

        let second = manager
            .abort_program(&user(), program.id, date(2024, 1, 2))
            .unwrap();
        assert_eq!(second.deleted, 0);
        assert!(second.already_aborted);
        assert_eq!(db.schedule.len(), 4);
    }

    #[test]
    fn test_create_retry_after_abort_stays_aborted() {
        let mut db = Database::new();
        let draft = ppl_draft(date(2024, 1, 1));
        let mut manager = ProgramManager::new(&mut db);
        let program = manager.create_program(&user(), &draft).unwrap();

        let report = manager
            .abort_program(&user(), program.id, date(2024, 1, 5))
            .unwrap();
        assert_eq!(report.deleted, 10);

        let retry = manager.create_program(&user(), &draft);
        assert!(matches!(retry, Err(Error::State(_))));

        assert_eq!(
            db.get_program(&user(), program.id).unwrap().unwrap().status,
            ProgramStatus::Aborted
        );
        assert_eq!(db.schedule.len(), 4);
        assert!(db
            .schedule
            .iter()
            .all(|e| e.workout_date < date(2024, 1, 5)));
    }

    #[test]
    fn test_create_retry_keeps_created_at() {
        let mut db = Database::new();
        let draft = ppl_draft(date(2024, 1, 1));
        let mut manager = ProgramManager::new(&mut db);
        let first = manager.create_program(&user(), &draft).unwrap();
        let second = manager.create_program(&user(), &draft).unwrap();

        assert_eq!(second.created_at, first.created_at);
        assert_eq!(second.status, ProgramStatus::Active);
    }

    #[test]
    fn test_abort_unknown_program_fails() {
        let mut db = Database::new();
        let result = ProgramManager::new(&mut db).abort_program(&user(), Uuid::new_v4(), date(2024, 1, 1));
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[test]
    fn test_abort_completed_program_fails() {
        let mut db = Database::new();
        let draft = ppl_draft(date(2024, 1, 1));
        let program = ProgramManager::new(&mut db)
            .create_program(&user(), &draft)
            .unwrap();
        db.update_program_status(&user(), program.id, ProgramStatus::Completed)
            .unwrap();

        let result = ProgramManager::new(&mut db).abort_program(&user(), program.id, date(2024, 1, 20));
        assert!(matches!(result, Err(Error::State(_))));
        assert_eq!(db.schedule.len(), 14);
    }

    #[test]
    fn test_official_program_for_uses_foreign_key() {
        let draft = ProgramPlan::Official {
            program_id: "science_ppl".into(),
        }
        .draft(date(2024, 1, 1))
        .unwrap();
        let mut db = Database::new();
        let program = ProgramManager::new(&mut db)
            .create_program(&user(), &draft)
            .unwrap();

        assert_eq!(official_program_for(&program).unwrap().id, "science_ppl");
    }

    #[test]
    fn test_official_program_for_legacy_name_match() {
        let mut db = Database::new();
        let mut draft = ProgramPlan::Official {
            program_id: "science_upper_lower".into(),
        }
        .draft(date(2024, 1, 1))
        .unwrap();
        draft.official_program_id = None;
        draft.name = "My Science-Based Upper/Lower".into();
        let legacy = ProgramManager::new(&mut db)
            .create_program(&user(), &draft)
            .unwrap();
        assert_eq!(
            official_program_for(&legacy).unwrap().id,
            "science_upper_lower"
        );

        let custom = ppl_draft(date(2024, 1, 1));
        let custom = ProgramManager::new(&mut db)
            .create_program(&user(), &custom)
            .unwrap();
        assert!(official_program_for(&custom).is_none());
    }
}
