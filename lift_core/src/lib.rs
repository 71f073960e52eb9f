#![forbid(unsafe_code)]

//! Core domain model and business logic for liftlog.
//!
//! This crate provides:
//! - Domain types (sets, exercises, workouts, progress, check-ins)
//! - Workout report parser
//! - Progress aggregation and dashboard summary
//! - Persistence (JSONL store, CSV export)

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod stamp;
pub mod parser;
pub mod progress;
pub mod summary;
pub mod store;
pub mod export;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use stamp::{FixedStamp, Stamp, SystemStamp};
pub use parser::{import_report, parse_report, parse_report_with};
pub use progress::{calculate_progress, find_progress, normalize_exercise_name};
pub use summary::DashboardSummary;
pub use store::{read_check_ins, read_workouts, CheckInSink, JsonlSink, WorkoutSink};
pub use export::export_progress_csv;
