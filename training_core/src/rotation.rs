//! Focus rotation: narrows a template's exercise list to a muscle emphasis.
//!
//! The second occurrence of a workout type in a week gets a different focus
//! (see `schedule::focus_for`); this module turns that focus into exercises.

use crate::catalog::get_default_catalog;
use crate::types::{Catalog, Focus, TemplateExercise};

/// Exercises for `template_id` under an optional focus tag, using the default catalog.
///
/// - Unknown template: empty
/// - No focus or unrecognised focus: the template's full list
/// - Known focus: stable filter on muscle tag keywords, capped
pub fn resolve_exercises(template_id: &str, focus: Option<&str>) -> Vec<TemplateExercise> {
    resolve_exercises_in(get_default_catalog(), template_id, focus)
}

/// Same as [`resolve_exercises`] against an explicit catalog
pub fn resolve_exercises_in(
    catalog: &Catalog,
    template_id: &str,
    focus: Option<&str>,
) -> Vec<TemplateExercise> {
    let Some(template) = catalog.template(template_id) else {
        tracing::debug!("No template '{}' in catalog", template_id);
        return Vec::new();
    };

    let Some(focus) = focus.and_then(|f| f.parse::<Focus>().ok()) else {
        return template.exercises.clone();
    };

    template
        .exercises
        .iter()
        .filter(|e| matches_focus(e, focus))
        .take(focus_cap(focus))
        .cloned()
        .collect()
}

/// Maximum number of exercises kept for a focus
pub fn focus_cap(focus: Focus) -> usize {
    match focus {
        Focus::QuadFocus | Focus::HamFocus => 4,
        Focus::ChestFocus
        | Focus::ShoulderFocus
        | Focus::VerticalFocus
        | Focus::HorizontalFocus => 5,
    }
}

fn matches_focus(exercise: &TemplateExercise, focus: Focus) -> bool {
    let has = |needle: &str| exercise.tag_contains(needle);
    match focus {
        Focus::QuadFocus => has("Quads") || has("Glutes") || has("Calves"),
        Focus::HamFocus => has("Hamstrings") || has("Glutes") || has("Calves"),
        Focus::ChestFocus => (has("Chest") && !has("Upper")) || has("Shoulders") || has("Triceps"),
        Focus::ShoulderFocus => has("Shoulders") || (has("Chest") && has("Upper")) || has("Triceps"),
        Focus::VerticalFocus => has("Lats") || has("Rear Delts") || has("Biceps"),
        Focus::HorizontalFocus => has("Mid") || has("Rear Delts") || has("Biceps"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(exercises: &[TemplateExercise]) -> Vec<&str> {
        exercises.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_no_focus_returns_full_template() {
        assert_eq!(resolve_exercises("push", None).len(), 8);
    }

    #[test]
    fn test_unknown_template_is_empty() {
        assert!(resolve_exercises("full", Some("quad_focus")).is_empty());
        assert!(resolve_exercises("full", None).is_empty());
    }

    #[test]
    fn test_unknown_focus_is_unfiltered() {
        assert_eq!(resolve_exercises("lower", Some("glute_ham_focus")).len(), 6);
    }

    #[test]
    fn test_quad_focus_on_lower() {
        let result = resolve_exercises("lower", Some("quad_focus"));
        assert_eq!(
            names(&result),
            vec![
                "Barbell Squat",
                "Hip Thrust",
                "Leg Press",
                "Standing Calf Raise"
            ]
        );
    }

    #[test]
    fn test_ham_focus_on_legs() {
        let result = resolve_exercises("legs", Some("ham_focus"));
        assert_eq!(
            names(&result),
            vec!["Romanian Deadlift", "Hip Thrust", "Standing Calf Raise"]
        );
    }

    #[test]
    fn test_chest_focus_excludes_upper_chest() {
        let result = resolve_exercises("push", Some("chest_focus"));
        assert_eq!(
            names(&result),
            vec![
                "Barbell Bench Press",
                "Cable Fly",
                "Overhead Press",
                "Lateral Raises",
                "Face Pulls"
            ]
        );
    }

    #[test]
    fn test_shoulder_focus_includes_upper_chest() {
        let result = resolve_exercises("push", Some("shoulder_focus"));
        assert_eq!(
            names(&result),
            vec![
                "Incline Dumbbell Press",
                "Overhead Press",
                "Lateral Raises",
                "Face Pulls",
                "Tricep Dips"
            ]
        );
    }

    #[test]
    fn test_vertical_and_horizontal_pull() {
        let vertical = resolve_exercises("pull", Some("vertical_focus"));
        assert_eq!(
            names(&vertical),
            vec![
                "Pull-ups",
                "Face Pulls",
                "Lat Pulldown",
                "Barbell Curl",
                "Hammer Curl"
            ]
        );

        let horizontal = resolve_exercises("pull", Some("horizontal_focus"));
        assert_eq!(
            names(&horizontal),
            vec![
                "Barbell Row",
                "Face Pulls",
                "Seated Cable Row",
                "Barbell Curl",
                "Hammer Curl"
            ]
        );
    }

    #[test]
    fn test_caps_hold_for_every_template() {
        for template in crate::catalog::list_templates() {
            for focus in [
                Focus::QuadFocus,
                Focus::HamFocus,
                Focus::ChestFocus,
                Focus::ShoulderFocus,
                Focus::VerticalFocus,
                Focus::HorizontalFocus,
            ] {
                let result = resolve_exercises(&template.id, Some(focus.as_str()));
                assert!(
                    result.len() <= focus_cap(focus),
                    "{} / {} returned {}",
                    template.id,
                    focus,
                    result.len()
                );
            }
        }
    }

    #[test]
    fn test_resolution_is_deterministic() {
        for template in crate::catalog::list_templates() {
            let first = resolve_exercises(&template.id, Some("shoulder_focus"));
            let second = resolve_exercises(&template.id, Some("shoulder_focus"));
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_result_is_ordered_subsequence() {
        let full = resolve_exercises("upper", None);
        let filtered = resolve_exercises("upper", Some("vertical_focus"));
        let mut cursor = full.iter();
        for exercise in &filtered {
            assert!(cursor.any(|e| e == exercise));
        }
    }
}
