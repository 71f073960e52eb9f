//! Dashboard summary over the stored workouts and their progress.

use crate::{CheckIn, ProgressData, Workout};

/// Headline numbers for a client's training history
#[derive(Clone, Debug)]
pub struct DashboardSummary<'a> {
    pub total_workouts: usize,
    /// Mean of every exercise's percentage change
    pub average_change: f64,
    /// Exercise with the largest percentage change
    pub top_gain: Option<&'a ProgressData>,
    /// Newest first
    pub recent_workouts: Vec<&'a Workout>,
}

impl<'a> DashboardSummary<'a> {
    pub fn build(
        workouts: &'a [Workout],
        progress: &'a [ProgressData],
        recent_limit: usize,
    ) -> Self {
        let average_change = if progress.is_empty() {
            0.0
        } else {
            progress.iter().map(|p| p.percentage_change).sum::<f64>() / progress.len() as f64
        };

        // Later entries win ties
        let top_gain = progress.iter().fold(None::<&ProgressData>, |top, p| match top {
            Some(current) if current.percentage_change > p.percentage_change => Some(current),
            _ => Some(p),
        });

        let mut recent_workouts: Vec<&Workout> = workouts.iter().collect();
        recent_workouts.sort_by(|a, b| b.date.cmp(&a.date));
        recent_workouts.truncate(recent_limit);

        Self {
            total_workouts: workouts.len(),
            average_change,
            top_gain,
            recent_workouts,
        }
    }
}

/// Sort check-ins newest first, in place
pub fn sort_check_ins_newest_first(check_ins: &mut [CheckIn]) {
    check_ins.sort_by(|a, b| b.date.cmp(&a.date));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use uuid::Uuid;

    fn day(n: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, 1, 10, 0, 0).unwrap() + Duration::days(n)
    }

    fn workout(routine: &str, date: DateTime<Utc>) -> Workout {
        Workout {
            id: Uuid::new_v4(),
            client_name: "Ana".into(),
            date,
            routine_name: routine.into(),
            rating: 4,
            feedback: None,
            exercises: vec![],
            raw_text: String::new(),
        }
    }

    fn progress(name: &str, change: f64) -> ProgressData {
        ProgressData {
            exercise_name: name.into(),
            start_weight: 40.0,
            current_weight: 40.0,
            percentage_change: change,
            history: vec![],
        }
    }

    #[test]
    fn test_summary_numbers() {
        let workouts = vec![
            workout("A", day(0)),
            workout("B", day(14)),
            workout("C", day(7)),
            workout("D", day(21)),
        ];
        let progress = vec![progress("PRESS BANCA", 12.5), progress("REMO", 7.5)];

        let summary = DashboardSummary::build(&workouts, &progress, 3);

        assert_eq!(summary.total_workouts, 4);
        assert_eq!(summary.average_change, 10.0);
        assert_eq!(summary.top_gain.unwrap().exercise_name, "PRESS BANCA");

        let routines: Vec<_> = summary
            .recent_workouts
            .iter()
            .map(|w| w.routine_name.as_str())
            .collect();
        assert_eq!(routines, vec!["D", "B", "C"]);
    }

    #[test]
    fn test_top_gain_tie_goes_to_later_entry() {
        let progress = vec![progress("PRESS BANCA", 10.0), progress("REMO", 10.0)];
        let summary = DashboardSummary::build(&[], &progress, 3);

        assert_eq!(summary.top_gain.unwrap().exercise_name, "REMO");
    }

    #[test]
    fn test_empty_summary() {
        let summary = DashboardSummary::build(&[], &[], 3);

        assert_eq!(summary.total_workouts, 0);
        assert_eq!(summary.average_change, 0.0);
        assert!(summary.top_gain.is_none());
        assert!(summary.recent_workouts.is_empty());
    }

    #[test]
    fn test_sort_check_ins() {
        let mut check_ins: Vec<CheckIn> = [0, 10, 5]
            .into_iter()
            .map(|n| CheckIn {
                id: Uuid::new_v4(),
                date: day(n),
                notes: format!("day {}", n),
                photos: vec![],
            })
            .collect();

        sort_check_ins_newest_first(&mut check_ins);

        let notes: Vec<_> = check_ins.iter().map(|c| c.notes.as_str()).collect();
        assert_eq!(notes, vec!["day 10", "day 5", "day 0"]);
    }
}
