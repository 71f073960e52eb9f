//! Workout report parser.
//!
//! Turns the text of a trainer's emailed report into a [`Workout`]. The
//! report is line oriented with fixed Spanish labels:
//!
//! ```text
//! Cliente: Ana
//! Rutina/Día: PRIME - Día 1
//! Puntuación: ⭐⭐⭐⭐
//! - PRESS BANCA:
//! Serie 1: 10-12 reps @ 40kg
//! Serie 2: 8-10 reps @ 42kg
//! Notas: subir peso la próxima
//! ```
//!
//! Each trimmed line is classified by the first recognizer that matches.
//! Lines that match nothing are skipped; parsing never fails.

use crate::stamp::{Stamp, SystemStamp};
use crate::{Error, Exercise, Result, Workout, WorkoutSet};
use once_cell::sync::Lazy;
use regex::Regex;

const UNKNOWN: &str = "Unknown";
const STAR: char = '⭐';
const MAX_RATING: u8 = 5;

static CLIENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Cliente:\s*(.*)$").expect("valid client regex"));
static ROUTINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Rutina/Día:\s*(.*)$").expect("valid routine regex"));
static RATING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Puntuación:\s*(.*)$").expect("valid rating regex"));
static EXERCISE_HEADER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^-\s*([A-ZÁÉÍÓÚÑ\s0-9°]+):$").expect("valid exercise header regex")
});
static SET_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)Serie\s*[0-9]+:\s*([0-9-]+)\s*reps\s*@\s*([0-9]+)(kg|lb)")
        .expect("valid set regex")
});
static NOTES_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Notas:\s*(.*)$").expect("valid notes regex"));

/// What a single report line was recognized as
#[derive(Clone, Debug, PartialEq)]
pub enum ReportLine {
    Client(String),
    Routine(String),
    Rating(u8),
    ExerciseHeader(String),
    Set(WorkoutSet),
    Notes(String),
    Unrecognized,
}

/// Classify one line of report text
///
/// The line is trimmed first. Recognizers are tried in a fixed order
/// (client, routine, rating, exercise header, set, notes) and the first
/// match wins. Labels may appear after a quote marker or bullet; only the
/// exercise header must span the whole line.
pub fn classify_line(line: &str) -> ReportLine {
    let line = line.trim();

    if let Some(caps) = CLIENT_RE.captures(line) {
        return ReportLine::Client(caps[1].trim().to_string());
    }

    if let Some(caps) = ROUTINE_RE.captures(line) {
        return ReportLine::Routine(caps[1].trim().to_string());
    }

    if let Some(caps) = RATING_RE.captures(line) {
        return ReportLine::Rating(parse_rating(line, &caps[1]));
    }

    if let Some(caps) = EXERCISE_HEADER_RE.captures(line) {
        return ReportLine::ExerciseHeader(caps[1].trim().to_string());
    }

    if let Some(caps) = SET_RE.captures(line) {
        // An oversized literal parses to infinity, which JSON cannot store
        return match caps[2].parse::<f64>() {
            Ok(weight) if weight.is_finite() => ReportLine::Set(WorkoutSet {
                reps: caps[1].to_string(),
                weight,
                unit: caps[3].to_string(),
            }),
            _ => ReportLine::Unrecognized,
        };
    }

    if let Some(caps) = NOTES_RE.captures(line) {
        return ReportLine::Notes(caps[1].trim().to_string());
    }

    ReportLine::Unrecognized
}

/// Rating from a `Puntuación:` line
///
/// Counts star glyphs in the value; no stars means 5. The phrase
/// "5 estrellas" anywhere in the line always means 5.
fn parse_rating(line: &str, value: &str) -> u8 {
    let stars = value.chars().filter(|c| *c == STAR).count();
    let mut rating = if stars > 0 {
        stars.min(MAX_RATING as usize) as u8
    } else {
        MAX_RATING
    };

    if line.to_lowercase().contains("5 estrellas") {
        rating = MAX_RATING;
    }

    rating
}

/// Accumulator carried across the lines of one report
#[derive(Debug, Default)]
struct ReportFold {
    client_name: Option<String>,
    routine_name: Option<String>,
    rating: u8,
    exercises: Vec<Exercise>,
    current: Option<Exercise>,
}

impl ReportFold {
    fn apply(mut self, line_num: usize, line: ReportLine) -> Self {
        match line {
            ReportLine::Client(name) => self.client_name = Some(name),
            ReportLine::Routine(name) => self.routine_name = Some(name),
            ReportLine::Rating(rating) => self.rating = rating,
            ReportLine::ExerciseHeader(name) => {
                self.close_exercise();
                self.current = Some(Exercise::new(name));
            }
            ReportLine::Set(set) => match self.current.as_mut() {
                Some(exercise) => exercise.sets.push(set),
                None => tracing::debug!("Line {}: set outside an exercise block, dropped", line_num),
            },
            ReportLine::Notes(notes) => match self.current.as_mut() {
                Some(exercise) => exercise.notes = Some(notes),
                None => {
                    tracing::debug!("Line {}: notes outside an exercise block, dropped", line_num)
                }
            },
            ReportLine::Unrecognized => {}
        }
        self
    }

    fn close_exercise(&mut self) {
        if let Some(exercise) = self.current.take() {
            self.exercises.push(exercise);
        }
    }

    fn finish(mut self) -> Self {
        self.close_exercise();
        self
    }
}

/// Parse a workout report using the system clock and random ids
pub fn parse_report(text: &str) -> Workout {
    parse_report_with(text, &SystemStamp)
}

/// Parse a workout report, taking id and date from `stamp`
///
/// Never fails. Unrecognized lines are skipped and missing metadata falls
/// back to defaults; an empty exercise list means nothing usable was found.
/// The report text carries no date, so the workout is dated `stamp.now()`.
pub fn parse_report_with(text: &str, stamp: &impl Stamp) -> Workout {
    if text.trim().is_empty() {
        tracing::warn!("No content to parse");
    }

    let fold = text
        .split('\n')
        .enumerate()
        .map(|(idx, line)| (idx + 1, classify_line(line)))
        .fold(ReportFold::default(), |fold, (line_num, line)| {
            fold.apply(line_num, line)
        })
        .finish();

    let workout = Workout {
        id: stamp.new_id(),
        client_name: fold.client_name.unwrap_or_else(|| UNKNOWN.to_string()),
        date: stamp.now(),
        routine_name: fold.routine_name.unwrap_or_else(|| UNKNOWN.to_string()),
        rating: fold.rating,
        feedback: None,
        exercises: fold.exercises,
        raw_text: text.to_string(),
    };

    tracing::info!(
        "Parsed report for {}: {} exercises, rating {}",
        workout.client_name,
        workout.exercises.len(),
        workout.rating
    );

    workout
}

/// Parse a report and reject it if nothing usable was found
pub fn import_report(text: &str) -> Result<Workout> {
    import_report_with(text, &SystemStamp)
}

/// Like [`import_report`], with an explicit id/clock source
pub fn import_report_with(text: &str, stamp: &impl Stamp) -> Result<Workout> {
    if text.trim().is_empty() {
        return Err(Error::EmptyReport);
    }

    let workout = parse_report_with(text, stamp);
    if !workout.has_exercises() {
        return Err(Error::NoExercises);
    }

    Ok(workout)
}
