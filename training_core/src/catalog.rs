//! Built-in catalog of official programs, template splits and split presets.
//!
//! The catalog is static data: read-only lookups with no behavior beyond
//! validation. Unknown ids resolve to `None`; callers fall back to generic names.

use crate::types::*;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

/// Cached default catalog - built once and reused across all operations
static DEFAULT_CATALOG: Lazy<Catalog> = Lazy::new(build_default_catalog_internal);

/// Get a reference to the cached default catalog
pub fn get_default_catalog() -> &'static Catalog {
    &DEFAULT_CATALOG
}

/// Builds the default catalog
///
/// **Note**: For production use, prefer `get_default_catalog()` which returns a
/// cached reference. This function is retained for testing and custom catalogs.
pub fn build_default_catalog() -> Catalog {
    build_default_catalog_internal()
}

/// Look up an official program in the default catalog
pub fn get_official_program(id: &str) -> Option<&'static OfficialProgram> {
    get_default_catalog().official_program(id)
}

/// Look up a template split in the default catalog
pub fn get_template(id: &str) -> Option<&'static TemplateSplit> {
    get_default_catalog().template(id)
}

/// Look up a split preset in the default catalog
pub fn get_split_preset(id: &str) -> Option<&'static SplitPreset> {
    get_default_catalog().split_preset(id)
}

/// All official programs in the default catalog
pub fn list_official_programs() -> &'static [OfficialProgram] {
    &get_default_catalog().official_programs
}

/// All template splits in the default catalog
pub fn list_templates() -> &'static [TemplateSplit] {
    &get_default_catalog().templates
}

/// All split presets in the default catalog
pub fn list_split_presets() -> &'static [SplitPreset] {
    &get_default_catalog().split_presets
}

fn official(name: &str, sets: u32, reps: &str) -> OfficialExercise {
    OfficialExercise {
        name: name.into(),
        sets,
        reps: reps.into(),
    }
}

fn official_workout(id: &str, name: &str, focus: &str, exercises: Vec<OfficialExercise>) -> OfficialWorkout {
    OfficialWorkout {
        id: id.into(),
        name: name.into(),
        focus: focus.into(),
        exercises,
    }
}

/// Template exercise with bodyweight/unspecified-weight default sets
fn tagged(name: &str, tag: &str, reps: &[u32]) -> TemplateExercise {
    TemplateExercise {
        name: name.into(),
        muscle_tag: Some(tag.into()),
        default_sets: Some(
            reps.iter()
                .map(|&reps| DefaultSet { reps, weight: None })
                .collect(),
        ),
    }
}

fn template(id: &str, name: &str, muscles: &[&str], exercises: Vec<TemplateExercise>) -> TemplateSplit {
    TemplateSplit {
        id: id.into(),
        name: name.into(),
        muscles: muscles.iter().map(|m| m.to_string()).collect(),
        exercises,
    }
}

fn slot(id: &str) -> DaySlot {
    DaySlot::Workout(id.into())
}

fn workouts(list: Vec<OfficialWorkout>) -> BTreeMap<String, OfficialWorkout> {
    list.into_iter().map(|w| (w.id.clone(), w)).collect()
}

/// Internal function that actually builds the catalog
fn build_default_catalog_internal() -> Catalog {
    // ========================================================================
    // Official Programs
    // ========================================================================

    let upper_lower = OfficialProgram {
        id: "science_upper_lower".into(),
        name: "Science-Based Upper/Lower".into(),
        description: "4 Days per week, focused on balanced muscle growth with specific focus rotations.".into(),
        duration_weeks: 4,
        schedule: [
            slot("upper_1"),
            slot("lower_1"),
            DaySlot::Rest,
            slot("upper_2"),
            slot("lower_2"),
            DaySlot::Rest,
            DaySlot::Rest,
        ],
        workouts: workouts(vec![
            official_workout(
                "upper_1",
                "Upper 1",
                "back_focus",
                vec![
                    official("Weighted Pull-ups / Lat Pulldown", 4, "6-8"),
                    official("Barbell or Chest-Supported Row", 3, "8-10"),
                    official("Incline DB Press", 3, "8-10"),
                    official("Cable Row (different grip)", 3, "10-12"),
                    official("Lateral Raises", 3, "12-15"),
                    official("Barbell Curl", 3, "8-12"),
                    official("Rope Pushdown", 2, "10-12"),
                ],
            ),
            official_workout(
                "lower_1",
                "Lower 1",
                "quad_focus",
                vec![
                    official("Back Squat / Hack Squat", 4, "5-8"),
                    official("Leg Press", 3, "8-10"),
                    official("Romanian Deadlift (moderate)", 3, "8-10"),
                    official("Leg Extension", 3, "12-15"),
                    official("Standing Calf Raise", 3, "10-15"),
                    official("Abs", 3, "10-15"),
                ],
            ),
            official_workout(
                "upper_2",
                "Upper 2",
                "chest_focus",
                vec![
                    official("Barbell Bench Press", 4, "5-8"),
                    official("Incline Machine / DB Press", 3, "8-10"),
                    official("Chest-Supported Row", 3, "8-10"),
                    official("Lat Pulldown (different grip)", 3, "10-12"),
                    official("Lateral Raise (variation)", 3, "12-15"),
                    official("Overhead Tricep Extension", 3, "10-12"),
                    official("Hammer Curl", 2, "10-12"),
                ],
            ),
            official_workout(
                "lower_2",
                "Lower 2",
                "glute_ham_focus",
                vec![
                    official("Romanian Deadlift (heavy)", 4, "6-8"),
                    official("Bulgarian Split Squat", 3, "8-10"),
                    official("Lying/Seated Leg Curl", 3, "10-12"),
                    official("Hip Thrust", 3, "8-10"),
                    official("Seated Calf Raise", 3, "12-15"),
                    official("Abs", 3, "10-15"),
                ],
            ),
        ]),
    };

    let ppl = OfficialProgram {
        id: "science_ppl".into(),
        name: "Science-Based PPL".into(),
        description: "6 Days per week, high volume strategy for maximum hypertrophy.".into(),
        duration_weeks: 4,
        schedule: [
            slot("push_1"),
            slot("pull_1"),
            slot("legs_1"),
            slot("push_2"),
            slot("pull_2"),
            slot("legs_2"),
            DaySlot::Rest,
        ],
        workouts: workouts(vec![
            official_workout(
                "push_1",
                "Push 1",
                "chest_focus",
                vec![
                    official("Barbell Bench Press", 4, "5-8"),
                    official("Incline DB Press", 3, "8-10"),
                    official("Machine Chest Press / Dips", 3, "8-12"),
                    official("Lateral Raises", 3, "12-15"),
                    official("Tricep Pushdown", 3, "10-12"),
                    official("Overhead Tricep Extension", 2, "10-12"),
                ],
            ),
            official_workout(
                "pull_1",
                "Pull 1",
                "back_width_focus",
                vec![
                    official("Weighted Pull-ups / Lat Pulldown", 4, "6-8"),
                    official("Single Arm Lat Pulldown", 3, "8-12"),
                    official("Chest Supported Row", 3, "8-10"),
                    official("Face Pulls", 3, "12-15"),
                    official("Barbell or DB Curl", 3, "8-12"),
                    official("Hammer Curl", 2, "10-12"),
                ],
            ),
            official_workout(
                "legs_1",
                "Legs 1",
                "quad_focus",
                vec![
                    official("Back Squat / Hack Squat", 4, "5-8"),
                    official("Leg Press", 3, "8-10"),
                    official("Walking Lunges", 3, "10"),
                    official("Leg Extension", 3, "12-15"),
                    official("Standing Calf Raise", 3, "10-15"),
                    official("Abs", 3, "10-15"),
                ],
            ),
            official_workout(
                "push_2",
                "Push 2",
                "shoulder_focus",
                vec![
                    official("Overhead Barbell / DB Press", 4, "6-8"),
                    official("Incline DB Press", 3, "8-10"),
                    official("Lateral Raises (slow controlled)", 4, "12-15"),
                    official("Machine Chest Press", 2, "10-12"),
                    official("Skull Crushers", 3, "8-12"),
                    official("Rope Pushdown", 2, "10-12"),
                ],
            ),
            official_workout(
                "pull_2",
                "Pull 2",
                "back_thickness_focus",
                vec![
                    official("Barbell Row", 4, "6-8"),
                    official("Seated Cable Row", 3, "8-10"),
                    official("Lat Pulldown (different grip)", 3, "10-12"),
                    official("Rear Delt Fly", 3, "12-15"),
                    official("Preacher Curl", 3, "8-12"),
                    official("Cable Curl", 2, "12"),
                ],
            ),
            official_workout(
                "legs_2",
                "Legs 2",
                "glute_ham_focus",
                vec![
                    official("Romanian Deadlift", 4, "6-8"),
                    official("Bulgarian Split Squat", 3, "8-10"),
                    official("Lying Leg Curl", 3, "10-12"),
                    official("Hip Thrust", 3, "8-10"),
                    official("Seated Calf Raise", 3, "12-15"),
                    official("Abs", 3, "10-15"),
                ],
            ),
        ]),
    };

    // ========================================================================
    // Template Splits
    // ========================================================================

    let templates = vec![
        template(
            "push",
            "Push",
            &["chest", "shoulders", "triceps"],
            vec![
                tagged("Barbell Bench Press", "Chest - Compound", &[8, 8, 8]),
                tagged("Incline Dumbbell Press", "Chest - Upper", &[10, 10, 10]),
                tagged("Cable Fly", "Chest - Isolation", &[12, 12]),
                tagged("Overhead Press", "Shoulders - Compound", &[8, 8, 8]),
                tagged("Lateral Raises", "Shoulders - Medial", &[12, 12]),
                tagged("Face Pulls", "Shoulders - Rear", &[15, 15]),
                tagged("Tricep Dips", "Triceps - Compound", &[10, 10]),
                tagged("Tricep Pushdown", "Triceps - Isolation", &[12, 12]),
            ],
        ),
        template(
            "pull",
            "Pull",
            &["back", "biceps"],
            vec![
                tagged("Pull-ups", "Back - Lats", &[8, 8, 8]),
                tagged("Barbell Row", "Back - Mid", &[8, 8, 8]),
                tagged("Face Pulls", "Back - Rear Delts", &[15, 15]),
                tagged("Lat Pulldown", "Back - Lats", &[10, 10]),
                tagged("Seated Cable Row", "Back - Mid", &[10, 10]),
                tagged("Barbell Curl", "Biceps - Compound", &[10, 10]),
                tagged("Hammer Curl", "Biceps - Brachialis", &[12, 12]),
            ],
        ),
        template(
            "legs",
            "Legs",
            &["quads", "hamstrings", "glutes", "calves"],
            vec![
                tagged("Barbell Squat", "Quads - Compound", &[8, 8, 8]),
                tagged("Romanian Deadlift", "Hamstrings - Compound", &[10, 10]),
                tagged("Hip Thrust", "Glutes - Compound", &[10, 10]),
                tagged("Standing Calf Raise", "Calves - Isolation", &[15, 15]),
            ],
        ),
        template(
            "upper",
            "Upper Body",
            &["chest", "back", "shoulders", "arms"],
            vec![
                tagged("Barbell Bench Press", "Chest - Compound", &[8, 8]),
                tagged("Pull-ups", "Back - Lats", &[8, 8]),
                tagged("Overhead Press", "Shoulders - Compound", &[8, 8]),
                tagged("Barbell Row", "Back - Mid", &[10, 10]),
                tagged("Incline Dumbbell Press", "Chest - Upper", &[10, 10]),
                tagged("Barbell Curl", "Biceps", &[10, 10]),
                tagged("Tricep Pushdown", "Triceps", &[12, 12]),
            ],
        ),
        template(
            "lower",
            "Lower Body",
            &["quads", "hamstrings", "glutes", "calves"],
            vec![
                tagged("Barbell Squat", "Quads - Compound", &[8, 8, 8]),
                tagged("Romanian Deadlift", "Hamstrings - Compound", &[10, 10]),
                tagged("Hip Thrust", "Glutes - Compound", &[10, 10]),
                tagged("Leg Press", "Quads - Secondary", &[12, 12]),
                tagged("Leg Curl", "Hamstrings - Isolation", &[12, 12]),
                tagged("Standing Calf Raise", "Calves - Isolation", &[15, 15]),
            ],
        ),
        template(
            "chest",
            "Chest",
            &["chest"],
            vec![
                tagged("Barbell Bench Press", "Compound - Sternal", &[8, 8, 8]),
                tagged("Incline Dumbbell Press", "Compound - Upper", &[10, 10]),
                tagged("Cable Fly", "Isolation", &[12, 12]),
            ],
        ),
        template(
            "back",
            "Back",
            &["back"],
            vec![
                tagged("Pull-ups", "Compound - Lats", &[8, 8, 8]),
                tagged("Barbell Row", "Compound - Mid Back", &[8, 8]),
                tagged("Face Pulls", "Isolation - Rear Delts", &[15, 15]),
            ],
        ),
        template(
            "shoulders",
            "Shoulders",
            &["shoulders"],
            vec![
                tagged("Overhead Press", "Compound", &[8, 8, 8]),
                tagged("Lateral Raises", "Medial Delts", &[12, 12]),
                tagged("Face Pulls", "Rear Delts", &[15, 15]),
            ],
        ),
        template(
            "arms",
            "Arms",
            &["biceps", "triceps"],
            vec![
                tagged("Barbell Curl", "Biceps - Compound", &[10, 10]),
                tagged("Hammer Curl", "Biceps - Brachialis", &[12, 12]),
                tagged("Tricep Dips", "Triceps - Compound", &[10, 10]),
                tagged("Tricep Pushdown", "Triceps - Isolation", &[12, 12]),
            ],
        ),
    ];

    // ========================================================================
    // Split Presets
    // ========================================================================

    let split_presets = vec![
        SplitPreset {
            id: "ppl".into(),
            label: "Push Pull Legs".into(),
            pattern: vec!["push".into(), "pull".into(), "legs".into()],
        },
        SplitPreset {
            id: "upper_lower".into(),
            label: "Upper / Lower".into(),
            pattern: vec!["upper".into(), "lower".into()],
        },
        SplitPreset {
            id: "full_body".into(),
            label: "Full Body".into(),
            pattern: vec!["full".into()],
        },
    ];

    Catalog {
        official_programs: vec![upper_lower, ppl],
        templates,
        split_presets,
    }
}

impl Catalog {
    pub fn official_program(&self, id: &str) -> Option<&OfficialProgram> {
        self.official_programs.iter().find(|p| p.id == id)
    }

    pub fn template(&self, id: &str) -> Option<&TemplateSplit> {
        self.templates.iter().find(|t| t.id == id)
    }

    pub fn split_preset(&self, id: &str) -> Option<&SplitPreset> {
        self.split_presets.iter().find(|s| s.id == id)
    }

    /// Official workout definition, if both ids resolve
    pub fn official_workout(&self, program_id: &str, workout_id: &str) -> Option<&OfficialWorkout> {
        self.official_program(program_id)
            .and_then(|p| p.workouts.get(workout_id))
    }

    /// Validate the catalog for consistency and completeness
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for program in &self.official_programs {
            if program.id.is_empty() || program.name.is_empty() {
                errors.push("Official program has empty id or name".to_string());
            }
            if program.duration_weeks == 0 {
                errors.push(format!("Program '{}' has zero duration", program.id));
            }
            if program.schedule.iter().all(DaySlot::is_rest) {
                errors.push(format!("Program '{}' has no training days", program.id));
            }

            // Check that all scheduled workouts exist
            for day in &program.schedule {
                if let DaySlot::Workout(id) = day {
                    if !program.workouts.contains_key(id) {
                        errors.push(format!(
                            "Program '{}' schedules non-existent workout '{}'",
                            program.id, id
                        ));
                    }
                }
            }

            for (key, workout) in &program.workouts {
                if key != &workout.id {
                    errors.push(format!(
                        "Workout key '{}' doesn't match workout.id '{}'",
                        key, workout.id
                    ));
                }
                if workout.exercises.is_empty() {
                    errors.push(format!(
                        "Workout '{}' in '{}' has no exercises",
                        key, program.id
                    ));
                }
                for exercise in &workout.exercises {
                    if exercise.sets == 0 {
                        errors.push(format!(
                            "Exercise '{}' in '{}' has zero sets",
                            exercise.name, key
                        ));
                    }
                    if leading_number(&exercise.reps).is_none() {
                        errors.push(format!(
                            "Exercise '{}' in '{}' has unparseable reps '{}'",
                            exercise.name, key, exercise.reps
                        ));
                    }
                }
            }
        }

        for template in &self.templates {
            if template.id.is_empty() || template.name.is_empty() {
                errors.push("Template has empty id or name".to_string());
            }
            if template.exercises.is_empty() {
                errors.push(format!("Template '{}' has no exercises", template.id));
            }
        }

        for preset in &self.split_presets {
            if preset.pattern.is_empty() {
                errors.push(format!("Split preset '{}' has empty pattern", preset.id));
            }
        }

        errors
    }
}

/// First unsigned integer at the start of a rep-range string ("8-12" -> 8)
pub(crate) fn leading_number(reps: &str) -> Option<u32> {
    reps.split('-').next()?.trim().parse().ok()
}
