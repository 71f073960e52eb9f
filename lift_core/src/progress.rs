//! Progress aggregation across workouts.
//!
//! Groups every exercise in a workout collection by normalized name, keeps
//! the best set of each session as one history point, and reports the change
//! in weight from the earliest to the most recent session.

use crate::{Exercise, HistoryItem, ProgressData, Workout, WorkoutSet};
use std::collections::BTreeMap;

/// Grouping key for an exercise name: trimmed and uppercased
///
/// Uppercasing is Unicode aware, so "extensión" and "EXTENSIÓN" merge.
pub fn normalize_exercise_name(name: &str) -> String {
    name.trim().to_uppercase()
}

/// The set that represents an exercise's peak for one session
///
/// Heaviest weight wins. On equal weight the later set replaces the earlier
/// one, whatever its reps. Returns None when the exercise has no sets.
pub fn best_set(exercise: &Exercise) -> Option<&WorkoutSet> {
    exercise.sets.iter().fold(None::<&WorkoutSet>, |best, set| match best {
        Some(current) if set.weight < current.weight => Some(current),
        _ => Some(set),
    })
}

/// Signed percentage change from `start` to `current`
///
/// A zero start weight yields 0 instead of NaN or infinity.
pub fn percentage_change(start: f64, current: f64) -> f64 {
    if start == 0.0 {
        return 0.0;
    }
    (current - start) / start * 100.0
}

/// Build one progress summary per normalized exercise name
///
/// Output is ordered by exercise name. Each history is sorted by workout
/// date regardless of the order workouts are supplied in; equal dates keep
/// their encounter order.
pub fn calculate_progress(workouts: &[Workout]) -> Vec<ProgressData> {
    let mut by_exercise: BTreeMap<String, Vec<HistoryItem>> = BTreeMap::new();

    for workout in workouts {
        for exercise in &workout.exercises {
            let Some(best) = best_set(exercise) else {
                tracing::debug!(
                    "Skipping {} in workout {}: no sets",
                    exercise.name,
                    workout.id
                );
                continue;
            };

            by_exercise
                .entry(normalize_exercise_name(&exercise.name))
                .or_default()
                .push(HistoryItem {
                    date: workout.date,
                    weight: best.weight,
                    reps: best.reps.clone(),
                });
        }
    }

    let progress: Vec<ProgressData> = by_exercise
        .into_iter()
        .filter_map(|(exercise_name, mut history)| {
            // Stable, so same-day entries keep encounter order
            history.sort_by(|a, b| a.date.cmp(&b.date));

            let start_weight = history.first()?.weight;
            let current_weight = history.last()?.weight;

            Some(ProgressData {
                exercise_name,
                start_weight,
                current_weight,
                percentage_change: percentage_change(start_weight, current_weight),
                history,
            })
        })
        .collect();

    tracing::debug!(
        "Calculated progress for {} exercises from {} workouts",
        progress.len(),
        workouts.len()
    );

    progress
}

/// Look up the progress entry for an exercise, by any spelling of its name
pub fn find_progress<'a>(progress: &'a [ProgressData], name: &str) -> Option<&'a ProgressData> {
    let key = normalize_exercise_name(name);
    progress.iter().find(|p| p.exercise_name == key)
}
