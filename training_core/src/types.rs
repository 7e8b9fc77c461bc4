//! Core domain types for the training scheduler.
//!
//! This module defines the fundamental types used throughout the system:
//! - Official programs and template splits (catalog data)
//! - Training programs and their dated schedule entries
//! - Logged workouts, exercises and sets
//! - The explicit user context threaded through every store call

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Workout type label used for rest days.
pub const REST: &str = "rest";

// ============================================================================
// Catalog Types
// ============================================================================

/// One slot in an official program's Monday-first week
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DaySlot {
    Rest,
    Workout(String),
}

impl DaySlot {
    pub fn is_rest(&self) -> bool {
        matches!(self, DaySlot::Rest)
    }
}

/// A prescribed exercise inside an official workout
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct OfficialExercise {
    pub name: String,
    pub sets: u32,
    /// Rep range as authored, e.g. "6-8" or "10"
    pub reps: String,
}

/// A named workout of an official program
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct OfficialWorkout {
    pub id: String,
    pub name: String,
    pub focus: String,
    pub exercises: Vec<OfficialExercise>,
}

/// An expert-designed multi-week program
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OfficialProgram {
    pub id: String,
    pub name: String,
    pub description: String,
    pub duration_weeks: u32,
    /// Index 0 is Monday, 6 is Sunday
    pub schedule: [DaySlot; 7],
    pub workouts: BTreeMap<String, OfficialWorkout>,
}

impl OfficialProgram {
    /// Number of rest slots in the weekly schedule
    pub fn rest_days_per_week(&self) -> u32 {
        self.schedule.iter().filter(|s| s.is_rest()).count() as u32
    }
}

/// A default set prescription on a template exercise
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DefaultSet {
    pub reps: u32,
    pub weight: Option<f64>,
}

/// An exercise inside a template split
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TemplateExercise {
    pub name: String,
    pub muscle_tag: Option<String>,
    pub default_sets: Option<Vec<DefaultSet>>,
}

impl TemplateExercise {
    /// True when the muscle tag contains `needle`. Untagged exercises never match.
    pub fn tag_contains(&self, needle: &str) -> bool {
        self.muscle_tag
            .as_deref()
            .is_some_and(|tag| tag.contains(needle))
    }
}

/// A named workout type with muscle tags and default prescriptions
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TemplateSplit {
    pub id: String,
    pub name: String,
    pub muscles: Vec<String>,
    pub exercises: Vec<TemplateExercise>,
}

/// A round-robin split offered by the program builder (e.g. Push/Pull/Legs)
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SplitPreset {
    pub id: String,
    pub label: String,
    pub pattern: Vec<String>,
}

/// The complete read-only catalog
#[derive(Clone, Debug)]
pub struct Catalog {
    pub official_programs: Vec<OfficialProgram>,
    pub templates: Vec<TemplateSplit>,
    pub split_presets: Vec<SplitPreset>,
}

// ============================================================================
// Focus Tags
// ============================================================================

/// Muscle-focus emphasis assigned to repeated workout types
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Focus {
    QuadFocus,
    HamFocus,
    ChestFocus,
    ShoulderFocus,
    VerticalFocus,
    HorizontalFocus,
}

impl Focus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Focus::QuadFocus => "quad_focus",
            Focus::HamFocus => "ham_focus",
            Focus::ChestFocus => "chest_focus",
            Focus::ShoulderFocus => "shoulder_focus",
            Focus::VerticalFocus => "vertical_focus",
            Focus::HorizontalFocus => "horizontal_focus",
        }
    }
}

impl fmt::Display for Focus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Focus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "quad_focus" => Ok(Focus::QuadFocus),
            "ham_focus" => Ok(Focus::HamFocus),
            "chest_focus" => Ok(Focus::ChestFocus),
            "shoulder_focus" => Ok(Focus::ShoulderFocus),
            "vertical_focus" => Ok(Focus::VerticalFocus),
            "horizontal_focus" => Ok(Focus::HorizontalFocus),
            other => Err(format!("unknown focus tag '{}'", other)),
        }
    }
}

// ============================================================================
// Program and Schedule Types
// ============================================================================

/// Lifecycle state of a training program
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProgramStatus {
    Active,
    Completed,
    Aborted,
}

impl fmt::Display for ProgramStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProgramStatus::Active => "active",
            ProgramStatus::Completed => "completed",
            ProgramStatus::Aborted => "aborted",
        };
        f.write_str(s)
    }
}

/// A persisted training program
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TrainingProgram {
    pub id: Uuid,
    pub user_id: String,
    pub name: String,
    /// Free-form classifier: `official_<id>`, `ppl`, `custom`, ...
    pub split_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub rest_days_per_week: u32,
    /// Only set for hand-built weekly programs
    pub weekly_pattern: Option<[String; 7]>,
    /// Catalog program this was generated from
    #[serde(default)]
    pub official_program_id: Option<String>,
    pub status: ProgramStatus,
    pub created_at: DateTime<Utc>,
}

impl TrainingProgram {
    /// Whether `date` falls inside `[start_date, end_date]`
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

/// A generated day before it is attached to a program
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PlannedDay {
    pub date: NaiveDate,
    pub workout_type: String,
    pub focus_type: Option<String>,
    pub official_program_id: Option<String>,
    pub official_workout_id: Option<String>,
}

impl PlannedDay {
    pub fn rest(date: NaiveDate) -> Self {
        Self {
            date,
            workout_type: REST.into(),
            focus_type: None,
            official_program_id: None,
            official_workout_id: None,
        }
    }

    pub fn is_rest(&self) -> bool {
        self.workout_type == REST
    }
}

/// Fields for a new program, ready to be persisted with its days
#[derive(Clone, Debug)]
pub struct ProgramDraft {
    pub id: Uuid,
    pub name: String,
    pub split_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub rest_days_per_week: u32,
    pub weekly_pattern: Option<[String; 7]>,
    pub official_program_id: Option<String>,
    pub days: Vec<PlannedDay>,
}

/// A persisted, dated schedule row owned by a program
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ScheduleEntry {
    pub id: Uuid,
    pub program_id: Uuid,
    pub user_id: String,
    pub workout_date: NaiveDate,
    pub workout_type: String,
    pub focus_type: Option<String>,
    pub official_program_id: Option<String>,
    pub official_workout_id: Option<String>,
    /// Set at most once, when a concrete workout is linked
    pub workout_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl ScheduleEntry {
    pub fn is_rest(&self) -> bool {
        self.workout_type == REST
    }

    pub fn is_linked(&self) -> bool {
        self.workout_id.is_some()
    }
}

/// Result of a set-once link write
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkOutcome {
    Linked,
    /// The entry already pointed at a workout; nothing was written
    AlreadyLinked(Uuid),
}

// ============================================================================
// Logged Workout Types
// ============================================================================

/// A concrete logged workout
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Workout {
    pub id: Uuid,
    pub user_id: String,
    pub title: String,
    pub note: Option<String>,
    pub workout_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Fields for a workout about to be created
#[derive(Clone, Debug)]
pub struct NewWorkout {
    pub title: String,
    pub workout_date: NaiveDate,
    pub note: Option<String>,
}

/// An exercise attached to a workout
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Exercise {
    pub id: Uuid,
    pub workout_id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// A single set of an exercise
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SetRecord {
    pub id: Uuid,
    pub exercise_id: Uuid,
    pub reps: u32,
    pub weight: f64,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// User Context
// ============================================================================

/// The authenticated user for the current session.
///
/// Passed explicitly into every lifecycle and resolver entry point.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserContext {
    pub user_id: Option<String>,
}

impl UserContext {
    pub fn authenticated(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    /// The signed-in user id, or `Error::Unauthenticated`
    pub fn require_user(&self) -> crate::Result<&str> {
        self.user_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .ok_or(crate::Error::Unauthenticated)
    }
}
