use clap::{Parser, Subcommand};
use lift_core::summary::sort_check_ins_newest_first;
use lift_core::*;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "liftlog")]
#[command(about = "Strength progress tracker for personal training reports", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Import a workout report (reads stdin when no file is given)
    Import {
        /// Report file, or '-' for stdin
        file: Option<PathBuf>,

        /// Dry run - show the parsed workout without saving it
        #[arg(long)]
        dry_run: bool,
    },

    /// Show weight progress per exercise
    Progress {
        /// Only show this exercise (any casing)
        #[arg(long)]
        exercise: Option<String>,

        /// Also export the progress history to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Show the dashboard summary (default)
    Summary,

    /// Record a check-in with notes and photo references
    Checkin {
        /// Improvements or notable changes
        #[arg(long, default_value = "")]
        notes: String,

        /// Photo file or URL (repeatable)
        #[arg(long = "photo")]
        photos: Vec<String>,
    },

    /// List check-ins, newest first
    Checkins,
}

fn main() -> Result<()> {
    lift_core::logging::init();

    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(data_dir) = cli.data_dir {
        config.data.data_dir = data_dir;
    }
    tracing::debug!("Using data directory {:?}", config.data.data_dir);

    match cli.command {
        Some(Commands::Import { file, dry_run }) => cmd_import(file, dry_run, &config),
        Some(Commands::Progress { exercise, csv }) => cmd_progress(exercise, csv, &config),
        Some(Commands::Summary) | None => cmd_summary(&config),
        Some(Commands::Checkin { notes, photos }) => cmd_checkin(notes, photos, &config),
        Some(Commands::Checkins) => cmd_checkins(&config),
    }
}

fn read_report(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn cmd_import(file: Option<PathBuf>, dry_run: bool, config: &Config) -> Result<()> {
    let text = read_report(file.as_deref())?;

    let workout = match import_report(&text) {
        Ok(workout) => workout,
        Err(e) => {
            if e.is_validation() {
                eprintln!("✗ {}. Check the report format.", e);
            }
            return Err(e);
        }
    };

    display_workout(&workout);

    if dry_run {
        println!("\n[Dry run - not saving workout]");
        return Ok(());
    }

    let mut sink = JsonlSink::new(config.data.workouts_path());
    sink.append_workout(&workout)?;

    println!("\n✓ Workout imported!");
    println!("  Store: {}", sink.path().display());
    Ok(())
}

fn cmd_progress(exercise: Option<String>, csv: Option<PathBuf>, config: &Config) -> Result<()> {
    let workouts = read_workouts(&config.data.workouts_path())?;
    let progress = calculate_progress(&workouts);

    let selected: Vec<ProgressData> = match exercise {
        Some(ref name) => match find_progress(&progress, name) {
            Some(data) => vec![data.clone()],
            None => {
                println!("No progress recorded for {}.", normalize_exercise_name(name));
                return Ok(());
            }
        },
        None => progress,
    };

    if selected.is_empty() {
        println!("No progress data yet. Import at least two workouts to see trends.");
    }

    for data in &selected {
        display_progress(data, config.report.decimals);
    }

    if let Some(csv_path) = csv {
        let rows = export_progress_csv(&selected, &csv_path)?;
        println!("✓ Exported {} rows to {}", rows, csv_path.display());
    }

    Ok(())
}

fn cmd_summary(config: &Config) -> Result<()> {
    let workouts = read_workouts(&config.data.workouts_path())?;
    let progress = calculate_progress(&workouts);
    let summary = DashboardSummary::build(&workouts, &progress, config.report.recent_workouts);
    let decimals = config.report.decimals;

    println!("\n╭─────────────────────────────────────────╮");
    println!("│  TRAINING SUMMARY");
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  Workouts:        {}", summary.total_workouts);
    println!(
        "  Average change:  {}",
        format_change(summary.average_change, decimals)
    );
    if let Some(top) = summary.top_gain {
        println!(
            "  Top gain:        {} ({})",
            top.exercise_name,
            format_change(top.percentage_change, decimals)
        );
    }

    println!();
    if summary.recent_workouts.is_empty() {
        println!("  No workouts imported yet.");
    } else {
        println!("  Recent workouts:");
        for workout in &summary.recent_workouts {
            println!(
                "  → {}  {}  {} exercises  {} ⭐",
                workout.date.format("%Y-%m-%d"),
                workout.routine_name,
                workout.exercises.len(),
                workout.rating
            );
        }
    }
    println!();

    Ok(())
}

fn cmd_checkin(notes: String, photos: Vec<String>, config: &Config) -> Result<()> {
    let notes = notes.trim().to_string();
    if notes.is_empty() && photos.is_empty() {
        eprintln!("✗ Nothing to record: add --notes or at least one --photo");
        return Err(Error::Other("empty check-in".into()));
    }

    let stamp = SystemStamp;
    let check_in = CheckIn {
        id: stamp.new_id(),
        date: stamp.now(),
        notes,
        photos,
    };

    let mut sink = JsonlSink::new(config.data.check_ins_path());
    sink.append_check_in(&check_in)?;

    println!("✓ Check-in recorded!");
    Ok(())
}

fn cmd_checkins(config: &Config) -> Result<()> {
    let mut check_ins = read_check_ins(&config.data.check_ins_path())?;
    if check_ins.is_empty() {
        println!("No check-ins recorded yet.");
        return Ok(());
    }

    sort_check_ins_newest_first(&mut check_ins);

    for check_in in &check_ins {
        println!("{}", check_in.date.format("%Y-%m-%d %H:%M"));
        if !check_in.notes.is_empty() {
            println!("  {}", check_in.notes);
        }
        for photo in &check_in.photos {
            println!("  📷 {}", photo);
        }
    }

    Ok(())
}

fn display_workout(workout: &Workout) {
    println!();
    println!("  Client:  {}", workout.client_name);
    println!("  Routine: {}", workout.routine_name);
    println!("  Rating:  {} ⭐", workout.rating);
    println!();

    for exercise in &workout.exercises {
        println!("  {}", exercise.name);
        for (idx, set) in exercise.sets.iter().enumerate() {
            println!(
                "    Set {}: {} reps @ {}{}",
                idx + 1,
                set.reps,
                set.weight,
                set.unit
            );
        }
        if let Some(ref notes) = exercise.notes {
            println!("    Notes: {}", notes);
        }
    }
}

fn display_progress(data: &ProgressData, decimals: usize) {
    println!();
    println!(
        "  {}  {} → {}  {}",
        data.exercise_name,
        data.start_weight,
        data.current_weight,
        format_change(data.percentage_change, decimals)
    );
    for item in &data.history {
        println!(
            "    {}  {} ({} reps)",
            item.date.format("%Y-%m-%d"),
            item.weight,
            item.reps
        );
    }
}

fn format_change(change: f64, decimals: usize) -> String {
    if change > 0.0 {
        format!("+{:.*}%", decimals, change)
    } else {
        format!("{:.*}%", decimals, change)
    }
}
