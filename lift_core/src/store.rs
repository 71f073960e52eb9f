//! JSON Lines store for workouts and check-ins.
//!
//! Records are appended one per line with an exclusive file lock, and read
//! back under a shared lock. Unreadable lines are skipped with a warning.

use crate::{CheckIn, Result, Workout};
use fs2::FileExt;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

/// Destination for newly imported workouts
pub trait WorkoutSink {
    fn append_workout(&mut self, workout: &Workout) -> Result<()>;
}

/// Destination for client check-ins
pub trait CheckInSink {
    fn append_check_in(&mut self, check_in: &CheckIn) -> Result<()>;
}

/// JSONL-based sink with file locking
pub struct JsonlSink {
    path: PathBuf,
}

impl JsonlSink {
    /// Create a new JSONL sink for the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Ensure the parent directory exists
    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    fn append_record<T: Serialize>(&self, record: &T) -> Result<()> {
        self.ensure_parent_dir()?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        file.lock_exclusive()?;

        let mut writer = std::io::BufWriter::new(&file);
        let line = serde_json::to_string(record)?;
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        drop(writer);

        file.unlock()?;
        Ok(())
    }
}

impl WorkoutSink for JsonlSink {
    fn append_workout(&mut self, workout: &Workout) -> Result<()> {
        self.append_record(workout)?;
        tracing::debug!("Appended workout {} to {:?}", workout.id, self.path);
        Ok(())
    }
}

impl CheckInSink for JsonlSink {
    fn append_check_in(&mut self, check_in: &CheckIn) -> Result<()> {
        self.append_record(check_in)?;
        tracing::debug!("Appended check-in {} to {:?}", check_in.id, self.path);
        Ok(())
    }
}

/// Read all workouts from a JSONL file
pub fn read_workouts(path: &Path) -> Result<Vec<Workout>> {
    read_records(path, "workout")
}

/// Read all check-ins from a JSONL file
pub fn read_check_ins(path: &Path) -> Result<Vec<CheckIn>> {
    read_records(path, "check-in")
}

fn read_records<T: DeserializeOwned>(path: &Path, kind: &str) -> Result<Vec<T>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path)?;
    file.lock_shared()?;

    let reader = BufReader::new(&file);
    let mut records = Vec::new();

    for (line_num, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<T>(&line) {
            Ok(record) => records.push(record),
            Err(e) => {
                tracing::warn!("Failed to parse {} at line {}: {}", kind, line_num + 1, e);
            }
        }
    }

    file.unlock()?;
    tracing::debug!("Read {} {} records from {:?}", records.len(), kind, path);
    Ok(records)
}
