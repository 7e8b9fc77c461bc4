//! Today resolver: decides what "start today's workout" means and does it.
//!
//! ## Decision
//!
//! 1. **No active program**: nothing to start.
//! 2. **Rest day** (or no entry for today): look ahead to the earliest
//!    upcoming training day that has not been logged, and offer to log it
//!    now. The future entry stays unlinked.
//! 3. **Already linked**: continue the existing workout.
//! 4. **Scheduled**: create a workout for the entry, link it, and fill in
//!    its exercises.
//!
//! [`resolve_today`] is pure. [`TodayResolver`] runs the decision against a
//! [`TrainingStore`].

use crate::catalog::{get_default_catalog, leading_number};
use crate::error::OpContext;
use crate::rotation::resolve_exercises;
use crate::schedule::type_label;
use crate::store::TrainingStore;
use crate::types::*;
use crate::{Error, Result};
use chrono::NaiveDate;
use std::collections::HashSet;
use uuid::Uuid;

/// Reps used when a prescribed range has no leading number
pub const DEFAULT_STARTING_REPS: u32 = 10;

/// Title used when a rest-day log has nothing to look ahead to
pub const MANUAL_WORKOUT_TITLE: &str = "Manual Workout";

/// What starting today's workout should do
#[derive(Clone, Debug, PartialEq)]
pub enum TodayAction {
    NoProgram,
    /// Rest day; `target` is the next unlogged training day, if any
    RestToday { target: Option<ScheduleEntry> },
    ContinueExisting { workout_id: Uuid },
    StartScheduled { entry: ScheduleEntry },
}

/// Choose the action for `today`.
///
/// `full_schedule` is only consulted for the rest-day lookahead.
pub fn resolve_today(
    today: NaiveDate,
    active: Option<&TrainingProgram>,
    today_entry: Option<&ScheduleEntry>,
    full_schedule: &[ScheduleEntry],
) -> TodayAction {
    if active.is_none() {
        return TodayAction::NoProgram;
    }

    match today_entry {
        Some(entry) if !entry.is_rest() => match entry.workout_id {
            Some(workout_id) => TodayAction::ContinueExisting { workout_id },
            None => TodayAction::StartScheduled {
                entry: entry.clone(),
            },
        },
        _ => TodayAction::RestToday {
            target: next_training_day(today, full_schedule).cloned(),
        },
    }
}

/// Earliest non-rest, unlinked entry on or after `today`
fn next_training_day(today: NaiveDate, schedule: &[ScheduleEntry]) -> Option<&ScheduleEntry> {
    schedule
        .iter()
        .filter(|e| !e.is_rest() && !e.is_linked() && e.workout_date >= today)
        .min_by_key(|e| e.workout_date)
}

/// Display title for a scheduled day.
///
/// Official workout name first, then the template name with an optional
/// focus suffix, then the bare type label.
pub fn resolve_title(entry: &ScheduleEntry) -> String {
    let catalog = get_default_catalog();

    if let (Some(program_id), Some(workout_id)) =
        (&entry.official_program_id, &entry.official_workout_id)
    {
        if let Some(workout) = catalog.official_workout(program_id, workout_id) {
            return workout.name.clone();
        }
    }

    if let Some(template) = catalog.template(&entry.workout_type) {
        return match &entry.focus_type {
            Some(focus) => format!("{} - {}", template.name, type_label(focus)),
            None => template.name.clone(),
        };
    }

    type_label(&entry.workout_type)
}

/// Starting reps for a prescribed range such as `"6-8"`
pub fn starting_reps(range: &str) -> u32 {
    leading_number(range).unwrap_or(DEFAULT_STARTING_REPS)
}

/// Where a workout's exercises come from
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExerciseSource {
    Official {
        program_id: String,
        workout_id: String,
    },
    Template {
        template_id: String,
        focus: Option<String>,
    },
}

impl ExerciseSource {
    /// Source for a schedule entry; rest days have none
    pub fn for_entry(entry: &ScheduleEntry) -> Option<Self> {
        if entry.is_rest() {
            return None;
        }
        match (&entry.official_program_id, &entry.official_workout_id) {
            (Some(program_id), Some(workout_id)) => Some(ExerciseSource::Official {
                program_id: program_id.clone(),
                workout_id: workout_id.clone(),
            }),
            _ => Some(ExerciseSource::Template {
                template_id: entry.workout_type.clone(),
                focus: entry.focus_type.clone(),
            }),
        }
    }

    /// Exercise names with the sets to create for each, as `(reps, weight)`
    fn planned_exercises(&self) -> Vec<(String, Vec<(u32, f64)>)> {
        match self {
            ExerciseSource::Official {
                program_id,
                workout_id,
            } => {
                let Some(workout) = get_default_catalog().official_workout(program_id, workout_id)
                else {
                    tracing::warn!(
                        "Official workout '{}/{}' not in catalog, nothing to add",
                        program_id,
                        workout_id
                    );
                    return Vec::new();
                };
                workout
                    .exercises
                    .iter()
                    .map(|e| {
                        let reps = starting_reps(&e.reps);
                        (e.name.clone(), vec![(reps, 0.0); e.sets as usize])
                    })
                    .collect()
            }
            ExerciseSource::Template { template_id, focus } => {
                resolve_exercises(template_id, focus.as_deref())
                    .into_iter()
                    .map(|e| {
                        let sets: Vec<(u32, f64)> = e
                            .default_sets
                            .unwrap_or_default()
                            .iter()
                            .map(|s| (s.reps, s.weight.unwrap_or(0.0)))
                            .collect();
                        (e.name, sets)
                    })
                    .collect()
            }
        }
    }
}

/// What materialisation added to a workout
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MaterializeReport {
    /// Exercises created by this call
    pub created: usize,
    /// Exercises skipped because the workout already had them
    pub skipped: usize,
}

/// Result of starting today's workout
#[derive(Clone, Debug, PartialEq)]
pub enum TodayOutcome {
    NoProgram,
    /// A rest-day workout was logged today, drawn from `target` when present
    RestDayLogged {
        workout: Workout,
        target: Option<ScheduleEntry>,
        report: MaterializeReport,
    },
    ContinueExisting { workout_id: Uuid },
    Started {
        workout: Workout,
        entry: ScheduleEntry,
        report: MaterializeReport,
    },
}

impl TodayOutcome {
    /// Id of the workout the user should land on, if any
    pub fn workout_id(&self) -> Option<Uuid> {
        match self {
            TodayOutcome::NoProgram => None,
            TodayOutcome::RestDayLogged { workout, .. } | TodayOutcome::Started { workout, .. } => {
                Some(workout.id)
            }
            TodayOutcome::ContinueExisting { workout_id } => Some(*workout_id),
        }
    }
}

/// Runs the today decision against a store
pub struct TodayResolver<'a, S: TrainingStore> {
    store: &'a mut S,
}

impl<'a, S: TrainingStore> TodayResolver<'a, S> {
    pub fn new(store: &'a mut S) -> Self {
        Self { store }
    }

    /// Read everything the decision needs and pick an action
    pub fn plan_today(&self, user: &UserContext, today: NaiveDate) -> Result<TodayAction> {
        user.require_user()?;

        let Some(program) = self
            .store
            .get_active_program(user, today)
            .op("fetch active program")?
        else {
            return Ok(TodayAction::NoProgram);
        };

        let today_entry = self
            .store
            .get_schedule_entry(user, program.id, today)
            .op("fetch today's schedule")?;

        let full_schedule = match &today_entry {
            Some(entry) if !entry.is_rest() => Vec::new(),
            _ => self
                .store
                .get_full_schedule(user)
                .op("fetch full schedule")?,
        };

        Ok(resolve_today(
            today,
            Some(&program),
            today_entry.as_ref(),
            &full_schedule,
        ))
    }

    /// Start (or continue) today's workout.
    ///
    /// Calling this twice on a scheduled day yields one workout: the second
    /// call sees the link written by the first and continues it.
    pub fn start_today(&mut self, user: &UserContext, today: NaiveDate) -> Result<TodayOutcome> {
        match self.plan_today(user, today)? {
            TodayAction::NoProgram => {
                tracing::info!("No active program on {}", today);
                Ok(TodayOutcome::NoProgram)
            }
            TodayAction::ContinueExisting { workout_id } => {
                tracing::info!("Continuing workout {} for {}", workout_id, today);
                Ok(TodayOutcome::ContinueExisting { workout_id })
            }
            TodayAction::RestToday { target } => self.log_rest_day(user, today, target),
            TodayAction::StartScheduled { entry } => self.start_scheduled(user, entry),
        }
    }

    fn log_rest_day(
        &mut self,
        user: &UserContext,
        today: NaiveDate,
        target: Option<ScheduleEntry>,
    ) -> Result<TodayOutcome> {
        let title = target
            .as_ref()
            .map(resolve_title)
            .unwrap_or_else(|| MANUAL_WORKOUT_TITLE.to_string());

        let workout = self
            .store
            .create_workout(
                user,
                &NewWorkout {
                    title: title.clone(),
                    workout_date: today,
                    note: Some(format!("Direct log - {}", title)),
                },
            )
            .op("create workout")?;

        tracing::info!(
            "Rest day {}: logging '{}' ahead of {:?}",
            today,
            title,
            target.as_ref().map(|t| t.workout_date)
        );

        let report = match target.as_ref().and_then(ExerciseSource::for_entry) {
            Some(source) => self.materialize_workout(user, workout.id, &source)?,
            None => MaterializeReport::default(),
        };

        Ok(TodayOutcome::RestDayLogged {
            workout,
            target,
            report,
        })
    }

    fn start_scheduled(&mut self, user: &UserContext, entry: ScheduleEntry) -> Result<TodayOutcome> {
        // Another session may have started this day since the decision was made
        let entry = self
            .store
            .get_schedule_entry(user, entry.program_id, entry.workout_date)
            .op("fetch today's schedule")?
            .ok_or_else(|| Error::NotFound(format!("schedule entry {}", entry.id)))?;

        if let Some(workout_id) = entry.workout_id {
            return Ok(TodayOutcome::ContinueExisting { workout_id });
        }

        let title = resolve_title(&entry);
        let workout = self
            .store
            .create_workout(
                user,
                &NewWorkout {
                    title: title.clone(),
                    workout_date: entry.workout_date,
                    note: None,
                },
            )
            .op("create workout")?;

        match self
            .store
            .link_schedule_entry(user, entry.id, workout.id)
            .op("link workout")?
        {
            LinkOutcome::Linked => {}
            LinkOutcome::AlreadyLinked(existing) => {
                tracing::warn!(
                    "Entry {} was linked to {} concurrently; workout {} left unlinked",
                    entry.id,
                    existing,
                    workout.id
                );
                return Ok(TodayOutcome::ContinueExisting {
                    workout_id: existing,
                });
            }
        }

        tracing::info!("Started '{}' for {}", title, entry.workout_date);

        let report = match ExerciseSource::for_entry(&entry) {
            Some(source) => self.materialize_workout(user, workout.id, &source)?,
            None => MaterializeReport::default(),
        };

        let entry = ScheduleEntry {
            workout_id: Some(workout.id),
            ..entry
        };
        Ok(TodayOutcome::Started {
            workout,
            entry,
            report,
        })
    }

    /// Add the source's exercises and sets to a workout.
    ///
    /// Exercises whose name the workout already has are skipped, so a
    /// partially materialised workout can be retried.
    pub fn materialize_workout(
        &mut self,
        user: &UserContext,
        workout_id: Uuid,
        source: &ExerciseSource,
    ) -> Result<MaterializeReport> {
        let mut existing: HashSet<String> = self
            .store
            .list_exercises(user, workout_id)
            .op("materialize workout")?
            .into_iter()
            .map(|e| e.name)
            .collect();

        let mut report = MaterializeReport::default();
        for (name, sets) in source.planned_exercises() {
            if !existing.insert(name.clone()) {
                report.skipped += 1;
                continue;
            }

            let exercise = self
                .store
                .create_exercise(user, workout_id, &name)
                .op("materialize workout")?;
            for (reps, weight) in sets {
                self.store
                    .create_set(user, exercise.id, reps, weight)
                    .op("materialize workout")?;
            }
            report.created += 1;
        }

        tracing::debug!(
            "Materialized workout {}: {} created, {} skipped",
            workout_id,
            report.created,
            report.skipped
        );
        Ok(report)
    }

    /// Finish materialising a workout started from the schedule.
    ///
    /// Looks up the scheduled day linked to `workout_id` and adds whatever
    /// exercises an interrupted start left out.
    pub fn resume_workout(&mut self, user: &UserContext, workout_id: Uuid) -> Result<MaterializeReport> {
        let entry = self
            .store
            .get_full_schedule(user)
            .op("resume workout")?
            .into_iter()
            .find(|e| e.workout_id == Some(workout_id))
            .ok_or_else(|| Error::NotFound(format!("scheduled day for workout {}", workout_id)))?;

        match ExerciseSource::for_entry(&entry) {
            Some(source) => self.materialize_workout(user, workout_id, &source),
            None => Ok(MaterializeReport::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::program::ProgramManager;
    use crate::schedule::ProgramPlan;
    use crate::store::Database;
    use chrono::Utc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn user() -> UserContext {
        UserContext::authenticated("athlete")
    }

    fn entry(day: NaiveDate, workout_type: &str, focus: Option<&str>) -> ScheduleEntry {
        ScheduleEntry {
            id: Uuid::new_v4(),
            program_id: Uuid::nil(),
            user_id: "athlete".into(),
            workout_date: day,
            workout_type: workout_type.into(),
            focus_type: focus.map(String::from),
            official_program_id: None,
            official_workout_id: None,
            workout_id: None,
            created_at: Utc::now(),
        }
    }

    fn program() -> TrainingProgram {
        TrainingProgram {
            id: Uuid::nil(),
            user_id: "athlete".into(),
            name: "Test".into(),
            split_type: "custom".into(),
            start_date: date(2024, 1, 1),
            end_date: date(2024, 1, 29),
            rest_days_per_week: 2,
            weekly_pattern: None,
            official_program_id: None,
            status: ProgramStatus::Active,
            created_at: Utc::now(),
        }
    }

    /// Monday-first pattern: push, pull, legs, rest, push, pull, rest
    fn weekly_program(db: &mut Database, start: NaiveDate) -> TrainingProgram {
        let pattern = ["push", "pull", "legs", "rest", "push", "pull", "rest"].map(String::from);
        let draft = ProgramPlan::Weekly { pattern, weeks: 2 }.draft(start).unwrap();
        ProgramManager::new(db).create_program(&user(), &draft).unwrap()
    }

    #[test]
    fn test_resolve_no_program() {
        let today = date(2024, 1, 1);
        let e = entry(today, "push", None);
        assert_eq!(
            resolve_today(today, None, Some(&e), &[e.clone()]),
            TodayAction::NoProgram
        );
    }

    #[test]
    fn test_resolve_rest_picks_earliest_unlinked_training_day() {
        let today = date(2024, 1, 4);
        let rest = entry(today, REST, None);
        let mut linked = entry(date(2024, 1, 5), "push", None);
        linked.workout_id = Some(Uuid::new_v4());
        let past = entry(date(2024, 1, 3), "legs", None);
        let later = entry(date(2024, 1, 8), "push", None);
        let next = entry(date(2024, 1, 6), "pull", None);
        let schedule = vec![past, rest.clone(), linked, later, next.clone()];

        let action = resolve_today(today, Some(&program()), Some(&rest), &schedule);
        assert_eq!(action, TodayAction::RestToday { target: Some(next) });
    }

    #[test]
    fn test_resolve_missing_entry_is_rest() {
        let today = date(2024, 1, 4);
        let action = resolve_today(today, Some(&program()), None, &[]);
        assert_eq!(action, TodayAction::RestToday { target: None });
    }

    #[test]
    fn test_resolve_linked_and_unlinked() {
        let today = date(2024, 1, 1);
        let mut e = entry(today, "push", None);
        assert_eq!(
            resolve_today(today, Some(&program()), Some(&e), &[]),
            TodayAction::StartScheduled { entry: e.clone() }
        );

        let workout_id = Uuid::new_v4();
        e.workout_id = Some(workout_id);
        assert_eq!(
            resolve_today(today, Some(&program()), Some(&e), &[]),
            TodayAction::ContinueExisting { workout_id }
        );
    }

    #[test]
    fn test_title_precedence() {
        let day = date(2024, 1, 1);

        let mut official = entry(day, "Push A", None);
        official.official_program_id = Some("science_ppl".into());
        official.official_workout_id = Some("push_1".into());
        let expected = get_default_catalog()
            .official_workout("science_ppl", "push_1")
            .unwrap()
            .name
            .clone();
        assert_eq!(resolve_title(&official), expected);

        let push = get_default_catalog().template("push").unwrap().name.clone();
        assert_eq!(
            resolve_title(&entry(day, "push", Some("chest_focus"))),
            format!("{} - CHEST FOCUS", push)
        );
        assert_eq!(resolve_title(&entry(day, "push", None)), push);
        assert_eq!(resolve_title(&entry(day, "full_body", None)), "FULL BODY");
    }

    #[test]
    fn test_starting_reps() {
        assert_eq!(starting_reps("6-8"), 6);
        assert_eq!(starting_reps("12"), 12);
        assert_eq!(starting_reps("AMRAP"), DEFAULT_STARTING_REPS);
    }

    #[test]
    fn test_start_today_without_program() {
        let mut db = Database::new();
        let outcome = TodayResolver::new(&mut db)
            .start_today(&user(), date(2024, 1, 1))
            .unwrap();
        assert_eq!(outcome, TodayOutcome::NoProgram);
    }

    #[test]
    fn test_start_today_requires_user() {
        let mut db = Database::new();
        let result = TodayResolver::new(&mut db).start_today(&UserContext::anonymous(), date(2024, 1, 1));
        assert!(matches!(result, Err(Error::Unauthenticated)));
    }

    #[test]
    fn test_start_scheduled_links_and_materializes() {
        let mut db = Database::new();
        let monday = date(2024, 1, 1);
        let program = weekly_program(&mut db, monday);

        let outcome = TodayResolver::new(&mut db)
            .start_today(&user(), monday)
            .unwrap();
        let TodayOutcome::Started {
            workout,
            entry,
            report,
        } = outcome
        else {
            panic!("expected Started");
        };

        assert_eq!(workout.workout_date, monday);
        assert!(workout.title.ends_with(" - CHEST FOCUS"));
        assert_eq!(entry.workout_id, Some(workout.id));
        assert_eq!(
            report.created,
            resolve_exercises("push", Some("chest_focus")).len()
        );

        let stored = db
            .get_schedule_entry(&user(), program.id, monday)
            .unwrap()
            .unwrap();
        assert_eq!(stored.workout_id, Some(workout.id));
    }

    #[test]
    fn test_start_today_twice_creates_one_workout() {
        let mut db = Database::new();
        let monday = date(2024, 1, 1);
        weekly_program(&mut db, monday);

        let first = TodayResolver::new(&mut db)
            .start_today(&user(), monday)
            .unwrap();
        let second = TodayResolver::new(&mut db)
            .start_today(&user(), monday)
            .unwrap();

        assert_eq!(db.workouts.len(), 1);
        assert_eq!(
            second,
            TodayOutcome::ContinueExisting {
                workout_id: first.workout_id().unwrap()
            }
        );
    }

    #[test]
    fn test_rest_day_logs_next_workout_without_linking() {
        let mut db = Database::new();
        let monday = date(2024, 1, 1);
        let program = weekly_program(&mut db, monday);
        let thursday = date(2024, 1, 4);

        let outcome = TodayResolver::new(&mut db)
            .start_today(&user(), thursday)
            .unwrap();
        let TodayOutcome::RestDayLogged {
            workout,
            target,
            report,
        } = outcome
        else {
            panic!("expected RestDayLogged");
        };

        let target = target.unwrap();
        assert_eq!(target.workout_date, date(2024, 1, 5));
        assert_eq!(target.workout_type, "push");
        // Second push of the week gets the secondary focus
        assert_eq!(target.focus_type.as_deref(), Some("shoulder_focus"));

        assert_eq!(workout.workout_date, thursday);
        assert_eq!(
            workout.note.as_deref(),
            Some(format!("Direct log - {}", workout.title).as_str())
        );
        assert!(report.created > 0);

        let friday = db
            .get_schedule_entry(&user(), program.id, date(2024, 1, 5))
            .unwrap()
            .unwrap();
        assert!(friday.workout_id.is_none());
    }

    #[test]
    fn test_rest_day_without_target_is_manual_workout() {
        let mut db = Database::new();
        let start = date(2024, 1, 1);
        let pattern = ["rest", "rest", "rest", "rest", "rest", "rest", "rest"].map(String::from);
        let draft = ProgramPlan::Weekly { pattern, weeks: 1 }.draft(start).unwrap();
        ProgramManager::new(&mut db)
            .create_program(&user(), &draft)
            .unwrap();

        let outcome = TodayResolver::new(&mut db)
            .start_today(&user(), date(2024, 1, 3))
            .unwrap();
        let TodayOutcome::RestDayLogged {
            workout, report, ..
        } = outcome
        else {
            panic!("expected RestDayLogged");
        };
        assert_eq!(workout.title, MANUAL_WORKOUT_TITLE);
        assert_eq!(workout.note.as_deref(), Some("Direct log - Manual Workout"));
        assert_eq!(report, MaterializeReport::default());
    }

    #[test]
    fn test_official_materialization_uses_prescription() {
        let mut db = Database::new();
        let workout = db
            .create_workout(
                &user(),
                &NewWorkout {
                    title: "Official".into(),
                    workout_date: date(2024, 1, 1),
                    note: None,
                },
            )
            .unwrap();
        let source = ExerciseSource::Official {
            program_id: "science_ppl".into(),
            workout_id: "push_1".into(),
        };
        let prescribed = get_default_catalog()
            .official_workout("science_ppl", "push_1")
            .unwrap()
            .clone();

        let report = TodayResolver::new(&mut db)
            .materialize_workout(&user(), workout.id, &source)
            .unwrap();

        assert_eq!(report.created, prescribed.exercises.len());
        let expected_sets: u32 = prescribed.exercises.iter().map(|e| e.sets).sum();
        assert_eq!(db.sets.len(), expected_sets as usize);
        assert!(db.sets.iter().all(|s| s.weight == 0.0));
        let first = &prescribed.exercises[0];
        let first_id = db
            .exercises
            .iter()
            .find(|e| e.name == first.name)
            .unwrap()
            .id;
        assert!(db
            .sets
            .iter()
            .filter(|s| s.exercise_id == first_id)
            .all(|s| s.reps == starting_reps(&first.reps)));
    }

    #[test]
    fn test_materialize_skips_existing_exercises() {
        let mut db = Database::new();
        let workout = db
            .create_workout(
                &user(),
                &NewWorkout {
                    title: "Legs".into(),
                    workout_date: date(2024, 1, 1),
                    note: None,
                },
            )
            .unwrap();
        let source = ExerciseSource::Template {
            template_id: "legs".into(),
            focus: Some("quad_focus".into()),
        };

        let first = TodayResolver::new(&mut db)
            .materialize_workout(&user(), workout.id, &source)
            .unwrap();
        let exercise_count = db.exercises.len();
        let set_count = db.sets.len();

        let second = TodayResolver::new(&mut db)
            .materialize_workout(&user(), workout.id, &source)
            .unwrap();

        assert!(first.created > 0);
        assert_eq!(second.created, 0);
        assert_eq!(second.skipped, first.created);
        assert_eq!(db.exercises.len(), exercise_count);
        assert_eq!(db.sets.len(), set_count);
    }

    #[test]
    fn test_resume_fills_in_missing_exercises() {
        let mut db = Database::new();
        let monday = date(2024, 1, 1);
        weekly_program(&mut db, monday);

        let started = TodayResolver::new(&mut db)
            .start_today(&user(), monday)
            .unwrap();
        let workout_id = started.workout_id().unwrap();
        let full_count = db.exercises.len();

        // Drop the last exercise as if the start died halfway through
        let dropped = db.exercises.pop().unwrap();
        db.sets.retain(|s| s.exercise_id != dropped.id);

        let report = TodayResolver::new(&mut db)
            .resume_workout(&user(), workout_id)
            .unwrap();

        assert_eq!(report.created, 1);
        assert_eq!(report.skipped, full_count - 1);
        assert_eq!(db.exercises.len(), full_count);
        assert!(db.exercises.iter().any(|e| e.name == dropped.name));
    }

    #[test]
    fn test_resume_unknown_workout_fails() {
        let mut db = Database::new();
        weekly_program(&mut db, date(2024, 1, 1));

        let result = TodayResolver::new(&mut db).resume_workout(&user(), Uuid::new_v4());
        assert!(matches!(result, Err(Error::NotFound(_))));
    }
}
