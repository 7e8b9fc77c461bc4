//! Schedule generation.
//!
//! Turns an official program, a weekly pattern or a round-robin split into a
//! dated list of [`PlannedDay`]s. Everything here is pure: no I/O, no clock
//! reads, no failure modes. Zero-length durations produce empty schedules.
//!
//! Two custom sub-variants exist:
//! - **Weekly pattern**: the user picked a workout type for each weekday.
//! - **Split cycling**: a preset split (e.g. Push/Pull/Legs) is consumed
//!   round-robin on training days, with `rest_days_per_week` trailing rest days
//!   in every seven-day block.

use crate::calendar::{add_days, monday_index};
use crate::types::{DaySlot, Focus, OfficialProgram, PlannedDay, ProgramDraft, REST};
use chrono::NaiveDate;
use std::collections::HashMap;
use uuid::Uuid;

/// Focus for the `count`-th occurrence (0-based) of a workout type.
///
/// Lower-body days alternate quad/ham, push alternates chest/shoulder and
/// pull alternates vertical/horizontal. Other types carry no focus.
pub fn focus_for(workout_type: &str, count: usize) -> Option<Focus> {
    let first = count % 2 == 0;
    match workout_type {
        "legs" | "lower" => Some(if first { Focus::QuadFocus } else { Focus::HamFocus }),
        "push" => Some(if first { Focus::ChestFocus } else { Focus::ShoulderFocus }),
        "pull" => Some(if first { Focus::VerticalFocus } else { Focus::HorizontalFocus }),
        _ => None,
    }
}

/// Human label for a raw type id: underscores become spaces, upper-cased
pub fn type_label(workout_type: &str) -> String {
    workout_type.replace('_', " ").to_uppercase()
}

/// Expand an official program from `start` for its full duration.
///
/// Each date is looked up in the Monday-first schedule by its own weekday, so a
/// program started mid-week still trains on the authored days.
pub fn generate_official(program: &OfficialProgram, start: NaiveDate) -> Vec<PlannedDay> {
    let total_days = u64::from(program.duration_weeks) * 7;
    let days: Vec<PlannedDay> = (0..total_days)
        .map(|offset| {
            let date = add_days(start, offset);
            match &program.schedule[monday_index(date) as usize] {
                DaySlot::Rest => PlannedDay::rest(date),
                DaySlot::Workout(id) => {
                    let workout = program.workouts.get(id);
                    if workout.is_none() {
                        tracing::warn!(
                            "Program '{}' schedules unknown workout '{}'",
                            program.id,
                            id
                        );
                    }
                    PlannedDay {
                        date,
                        workout_type: workout
                            .map(|w| w.name.clone())
                            .unwrap_or_else(|| type_label(id)),
                        focus_type: workout.map(|w| w.focus.clone()),
                        official_program_id: Some(program.id.clone()),
                        official_workout_id: Some(id.clone()),
                    }
                }
            }
        })
        .collect();

    tracing::debug!(
        "Generated {} days for official program '{}' from {}",
        days.len(),
        program.id,
        start
    );
    days
}

/// Expand a hand-built weekly pattern for `total_days` days.
///
/// The first occurrence of a type within each seven-day block gets the primary
/// focus; any later occurrence in the same block gets the secondary one.
pub fn generate_weekly(pattern: &[String; 7], start: NaiveDate, total_days: u64) -> Vec<PlannedDay> {
    let mut days: Vec<PlannedDay> = Vec::with_capacity(total_days as usize);

    for offset in 0..total_days {
        let date = add_days(start, offset);
        let workout_type = &pattern[monday_index(date) as usize];

        if workout_type == REST {
            days.push(PlannedDay::rest(date));
            continue;
        }

        let block_start = (offset / 7 * 7) as usize;
        let seen = days[block_start..]
            .iter()
            .filter(|d| &d.workout_type == workout_type)
            .count();

        // Only the first occurrence in the block keeps the primary focus
        let focus = focus_for(workout_type, seen.min(1));
        days.push(custom_day(date, workout_type, focus));
    }

    tracing::debug!("Generated {} days from weekly pattern", days.len());
    days
}

/// Cycle a split pattern over `total_days` days.
///
/// Within each seven-day block the first `7 - rest_days_per_week` days train and
/// the rest are rest days. The pattern cursor only advances on training days and
/// wraps, so short patterns never run out. An empty pattern yields all rest.
pub fn generate_split_cycle(
    pattern: &[String],
    start: NaiveDate,
    total_days: u64,
    rest_days_per_week: u32,
) -> Vec<PlannedDay> {
    let training_days = 7u64.saturating_sub(u64::from(rest_days_per_week));
    let mut cursor = 0usize;
    let mut counts: HashMap<&str, usize> = HashMap::new();

    let days: Vec<PlannedDay> = (0..total_days)
        .map(|offset| {
            let date = add_days(start, offset);
            if pattern.is_empty() || offset % 7 >= training_days {
                return PlannedDay::rest(date);
            }

            let workout_type = pattern[cursor % pattern.len()].as_str();
            cursor += 1;

            if workout_type == REST {
                return PlannedDay::rest(date);
            }

            let count = counts.entry(workout_type).or_insert(0);
            let focus = focus_for(workout_type, *count);
            *count += 1;
            custom_day(date, workout_type, focus)
        })
        .collect();

    tracing::debug!(
        "Generated {} days cycling {:?} with {} rest days/week",
        days.len(),
        pattern,
        rest_days_per_week
    );
    days
}

fn custom_day(date: NaiveDate, workout_type: &str, focus: Option<Focus>) -> PlannedDay {
    PlannedDay {
        date,
        workout_type: workout_type.to_string(),
        focus_type: focus.map(|f| f.as_str().to_string()),
        official_program_id: None,
        official_workout_id: None,
    }
}

// ============================================================================
// Program Plans
// ============================================================================

/// What the user asked the builder for
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProgramPlan {
    /// An official program from the catalog
    Official { program_id: String },
    /// A catalog split preset cycled over a number of days
    Split {
        preset_id: String,
        total_days: u32,
        rest_days_per_week: u32,
    },
    /// A hand-built Monday-first weekly pattern repeated for some weeks
    Weekly { pattern: [String; 7], weeks: u32 },
}

/// Display label for a split program length
fn duration_label(total_days: u32) -> String {
    match total_days {
        7 => "Weekly".into(),
        30 => "Monthly".into(),
        90 => "3 Months".into(),
        n => format!("{}-Day", n),
    }
}

impl ProgramPlan {
    /// Build the program fields and generated days for a start date.
    ///
    /// Returns `None` when the plan references an unknown catalog id. The
    /// program's `end_date` is `start + total days`, matching the builder.
    pub fn draft(&self, start: NaiveDate) -> Option<ProgramDraft> {
        let catalog = crate::catalog::get_default_catalog();

        let draft = match self {
            ProgramPlan::Official { program_id } => {
                let program = catalog.official_program(program_id)?;
                ProgramDraft {
                    id: Uuid::new_v4(),
                    name: program.name.clone(),
                    split_type: format!("official_{}", program.id),
                    start_date: start,
                    end_date: add_days(start, u64::from(program.duration_weeks) * 7),
                    rest_days_per_week: program.rest_days_per_week(),
                    weekly_pattern: None,
                    official_program_id: Some(program.id.clone()),
                    days: generate_official(program, start),
                }
            }
            ProgramPlan::Split {
                preset_id,
                total_days,
                rest_days_per_week,
            } => {
                let preset = catalog.split_preset(preset_id)?;
                let rest = (*rest_days_per_week).min(7);
                ProgramDraft {
                    id: Uuid::new_v4(),
                    name: format!("{} {} Plan", preset.label, duration_label(*total_days)),
                    split_type: preset.id.clone(),
                    start_date: start,
                    end_date: add_days(start, u64::from(*total_days)),
                    rest_days_per_week: rest,
                    weekly_pattern: None,
                    official_program_id: None,
                    days: generate_split_cycle(&preset.pattern, start, u64::from(*total_days), rest),
                }
            }
            ProgramPlan::Weekly { pattern, weeks } => {
                let total_days = u64::from(*weeks) * 7;
                ProgramDraft {
                    id: Uuid::new_v4(),
                    name: format!("Custom {}-Week Plan", weeks),
                    split_type: "custom".into(),
                    start_date: start,
                    end_date: add_days(start, total_days),
                    rest_days_per_week: pattern.iter().filter(|t| *t == REST).count() as u32,
                    weekly_pattern: Some(pattern.clone()),
                    official_program_id: None,
                    days: generate_weekly(pattern, start, total_days),
                }
            }
        };

        Some(draft)
    }
}
