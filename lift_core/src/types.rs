//! Core domain types for workout tracking.
//!
//! This module defines the records produced by the report parser and
//! consumed by the progress aggregator:
//! - Sets, exercises and whole workout sessions
//! - Per-exercise history points and progress summaries
//! - Client check-ins (stored, never analysed)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Workout Types
// ============================================================================

/// One logical set within an exercise
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WorkoutSet {
    /// Rep target as written, e.g. "10-12" or "8"
    pub reps: String,
    pub weight: f64,
    /// Unit as written ("kg", "lb"), never converted
    pub unit: String,
}

/// A single exercise block from a workout report
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Exercise {
    pub name: String,
    /// Sets in order of appearance
    pub sets: Vec<WorkoutSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Exercise {
    /// Start an exercise block with no sets
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sets: Vec::new(),
            notes: None,
        }
    }

    /// True when no sets were recorded for this exercise
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

/// One training session, as parsed from a pasted report
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Workout {
    pub id: Uuid,
    pub client_name: String,
    pub date: DateTime<Utc>,
    pub routine_name: String,
    /// 0-5 stars
    pub rating: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
    pub exercises: Vec<Exercise>,
    /// Original report text, kept for reference
    #[serde(default)]
    pub raw_text: String,
}

impl Workout {
    /// Check whether the parser found anything usable
    pub fn has_exercises(&self) -> bool {
        !self.exercises.is_empty()
    }
}

// ============================================================================
// Progress Types
// ============================================================================

/// One point in an exercise's weight history
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HistoryItem {
    pub date: DateTime<Utc>,
    pub weight: f64,
    pub reps: String,
}

/// Progress summary for one normalized exercise name
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ProgressData {
    pub exercise_name: String,
    pub start_weight: f64,
    pub current_weight: f64,
    /// Signed change from start to current, in percent
    pub percentage_change: f64,
    /// Ascending by date
    pub history: Vec<HistoryItem>,
}

// ============================================================================
// Check-in Types
// ============================================================================

/// A periodic client check-in (notes plus photo references)
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CheckIn {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub notes: String,
    #[serde(default)]
    pub photos: Vec<String>,
}
