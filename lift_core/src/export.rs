//! CSV export of exercise progress.
//!
//! Writes one row per history point so the file can be charted in a
//! spreadsheet. The export is written to a temp file next to the target,
//! synced, and renamed over the target.

use crate::{Error, ProgressData, Result};
use std::path::Path;
use tempfile::NamedTempFile;

/// A row in the CSV output
#[derive(Debug, serde::Serialize)]
struct CsvRow<'a> {
    exercise: &'a str,
    date: String,
    weight: f64,
    reps: &'a str,
    start_weight: f64,
    current_weight: f64,
    percentage_change: f64,
}

/// Export progress history to CSV, replacing any existing file
///
/// Returns the number of rows written.
pub fn export_progress_csv(progress: &[ProgressData], path: &Path) -> Result<usize> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let temp = NamedTempFile::new_in(dir)?;
    let mut writer = csv::Writer::from_writer(temp.as_file());

    let mut rows = 0;
    for data in progress {
        for item in &data.history {
            writer.serialize(CsvRow {
                exercise: &data.exercise_name,
                date: item.date.to_rfc3339(),
                weight: item.weight,
                reps: &item.reps,
                start_weight: data.start_weight,
                current_weight: data.current_weight,
                percentage_change: data.percentage_change,
            })?;
            rows += 1;
        }
    }

    writer.flush()?;
    drop(writer);
    temp.as_file().sync_all()?;

    temp.persist(path).map_err(|e| Error::Io(e.error))?;

    tracing::info!("Exported {} progress rows to {:?}", rows, path);
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HistoryItem;
    use chrono::{Duration, TimeZone, Utc};

    fn bench_progress() -> ProgressData {
        let start = Utc.with_ymd_and_hms(2024, 2, 1, 10, 0, 0).unwrap();
        ProgressData {
            exercise_name: "PRESS BANCA".into(),
            start_weight: 40.0,
            current_weight: 45.0,
            percentage_change: 12.5,
            history: vec![
                HistoryItem {
                    date: start,
                    weight: 40.0,
                    reps: "10-12".into(),
                },
                HistoryItem {
                    date: start + Duration::days(7),
                    weight: 45.0,
                    reps: "8-10".into(),
                },
            ],
        }
    }

    #[test]
    fn test_export_writes_one_row_per_history_point() {
        let temp_dir = tempfile::tempdir().unwrap();
        let csv_path = temp_dir.path().join("progress.csv");

        let rows = export_progress_csv(&[bench_progress()], &csv_path).unwrap();
        assert_eq!(rows, 2);

        let mut reader = csv::Reader::from_path(&csv_path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(&headers[0], "exercise");
        assert_eq!(&headers[3], "reps");

        let records: Vec<_> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 2);
        assert_eq!(&records[1][0], "PRESS BANCA");
        assert_eq!(&records[1][3], "8-10");
    }

    #[test]
    fn test_export_replaces_existing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let csv_path = temp_dir.path().join("progress.csv");
        std::fs::write(&csv_path, "stale contents\n").unwrap();

        export_progress_csv(&[bench_progress()], &csv_path).unwrap();

        let contents = std::fs::read_to_string(&csv_path).unwrap();
        assert!(!contents.contains("stale"));

        // No stray temp files left behind
        let entries = std::fs::read_dir(temp_dir.path()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[test]
    fn test_export_empty_progress() {
        let temp_dir = tempfile::tempdir().unwrap();
        let csv_path = temp_dir.path().join("progress.csv");

        let rows = export_progress_csv(&[], &csv_path).unwrap();
        assert_eq!(rows, 0);
        assert!(csv_path.exists());
    }
}
