use clap::{Parser, Subcommand};
use std::path::PathBuf;
use training_core::calendar::{today_local, weekday_name};
use training_core::catalog;
use training_core::schedule::type_label;
use training_core::today::resolve_title;
use training_core::*;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "fitreps")]
#[command(about = "Training program scheduler", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Act as this user (overrides [user] id in the config file)
    #[arg(long, global = true)]
    user: Option<String>,

    /// Read configuration from this file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List official programs, templates and split presets
    Catalog,

    /// Create a training program and its schedule
    Create {
        #[command(subcommand)]
        plan: PlanCommand,
    },

    /// Show the full schedule
    Schedule,

    /// Start (or continue) today's workout (default)
    Today {
        /// Pretend today is this date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<chrono::NaiveDate>,
    },

    /// Add exercises missing from a workout started with `today`
    Resume {
        /// Workout id printed by `fitreps today`
        workout: Uuid,
    },

    /// Abort the active program and drop its future days
    Abort {
        /// Program to abort (defaults to the active one)
        #[arg(long)]
        program: Option<Uuid>,

        /// Pretend today is this date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<chrono::NaiveDate>,
    },

    /// Export the full schedule to CSV
    Export {
        /// Output CSV path
        path: PathBuf,
    },
}

#[derive(Subcommand)]
enum PlanCommand {
    /// Follow an official program from the catalog
    Official {
        /// Program id (see `fitreps catalog`)
        id: String,

        /// First day of the program (YYYY-MM-DD, default today)
        #[arg(long)]
        start: Option<chrono::NaiveDate>,
    },

    /// Cycle a split preset over a number of days
    Split {
        /// Preset id (defaults to the configured split)
        preset: Option<String>,

        /// Program length in days
        #[arg(long)]
        days: Option<u32>,

        /// Rest days at the end of every seven-day block
        #[arg(long)]
        rest_days: Option<u32>,

        /// First day of the program (YYYY-MM-DD, default today)
        #[arg(long)]
        start: Option<chrono::NaiveDate>,
    },

    /// Repeat a Monday-first weekly pattern
    Weekly {
        /// Seven comma-separated workout types, e.g. push,pull,legs,rest,upper,lower,rest
        #[arg(long, required = true, value_delimiter = ',', num_args = 1..)]
        pattern: Vec<String>,

        /// Number of weeks
        #[arg(long)]
        weeks: Option<u32>,

        /// First day of the program (YYYY-MM-DD, default today)
        #[arg(long)]
        start: Option<chrono::NaiveDate>,
    },
}

fn main() -> Result<()> {
    training_core::logging::init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(data_dir) = cli.data_dir.clone() {
        config.data.data_dir = data_dir;
    }
    let user = match cli.user.clone().or_else(|| config.user.id.clone()) {
        Some(id) => UserContext::authenticated(id),
        None => UserContext::anonymous(),
    };
    let mut store = JsonFileStore::new(config.data.store_path());
    tracing::debug!("Using store at {:?}", store.path());

    match cli.command {
        Some(Commands::Catalog) => cmd_catalog(),
        Some(Commands::Create { plan }) => cmd_create(&mut store, &user, plan, &config),
        Some(Commands::Schedule) => cmd_schedule(&store, &user),
        Some(Commands::Today { date }) => cmd_today(&mut store, &user, date),
        Some(Commands::Resume { workout }) => cmd_resume(&mut store, &user, workout),
        Some(Commands::Abort { program, date }) => cmd_abort(&mut store, &user, program, date),
        Some(Commands::Export { path }) => cmd_export(&store, &user, &path),
        None => cmd_today(&mut store, &user, None),
    }
}

fn cmd_catalog() -> Result<()> {
    let errors = get_default_catalog().validate();
    if !errors.is_empty() {
        eprintln!("Catalog validation errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::CatalogValidation("Invalid catalog".into()));
    }

    println!("Official programs:");
    for program in catalog::list_official_programs() {
        println!(
            "  {:<22} {} ({} weeks)",
            program.id, program.name, program.duration_weeks
        );
        println!("  {:<22} {}", "", program.description);
    }

    println!();
    println!("Templates:");
    for template in catalog::list_templates() {
        println!(
            "  {:<22} {} ({} exercises)",
            template.id,
            template.name,
            template.exercises.len()
        );
    }

    println!();
    println!("Split presets:");
    for preset in catalog::list_split_presets() {
        println!(
            "  {:<22} {} [{}]",
            preset.id,
            preset.label,
            preset.pattern.join(", ")
        );
    }

    Ok(())
}

fn cmd_create(
    store: &mut JsonFileStore,
    user: &UserContext,
    plan: PlanCommand,
    config: &Config,
) -> Result<()> {
    let (plan, start) = match plan {
        PlanCommand::Official { id, start } => (ProgramPlan::Official { program_id: id }, start),
        PlanCommand::Split {
            preset,
            days,
            rest_days,
            start,
        } => {
            let rest_days = rest_days.unwrap_or(config.builder.rest_days_per_week);
            if rest_days > 7 {
                return Err(Error::Config(format!(
                    "--rest-days must be at most 7, got {}",
                    rest_days
                )));
            }
            (
                ProgramPlan::Split {
                    preset_id: preset.unwrap_or_else(|| config.builder.default_split.clone()),
                    total_days: days.unwrap_or(config.builder.default_days),
                    rest_days_per_week: rest_days,
                },
                start,
            )
        }
        PlanCommand::Weekly {
            pattern,
            weeks,
            start,
        } => {
            let pattern: Vec<String> = pattern.iter().map(|t| t.trim().to_lowercase()).collect();
            let pattern: [String; 7] = pattern.try_into().map_err(|p: Vec<String>| {
                Error::Config(format!(
                    "weekly pattern needs 7 entries (Monday to Sunday), got {}",
                    p.len()
                ))
            })?;
            if pattern.iter().any(|t| t.is_empty()) {
                return Err(Error::Config("weekly pattern has an empty entry".into()));
            }
            (
                ProgramPlan::Weekly {
                    pattern,
                    weeks: weeks.unwrap_or(config.builder.weekly_weeks),
                },
                start,
            )
        }
    };

    let start = start.unwrap_or_else(today_local);
    let draft = plan
        .draft(start)
        .ok_or_else(|| Error::NotFound(format!("catalog entry for {:?}", plan)))?;

    let program = ProgramManager::new(store).create_program(user, &draft)?;
    let training_days = draft.days.iter().filter(|d| !d.is_rest()).count();

    println!("✓ Created {}", program.name);
    println!("  Id: {}", program.id);
    println!("  {} to {}", program.start_date, program.end_date);
    println!(
        "  {} days scheduled, {} training days",
        draft.days.len(),
        training_days
    );
    Ok(())
}

fn cmd_schedule(store: &JsonFileStore, user: &UserContext) -> Result<()> {
    let entries = store.get_full_schedule(user)?;
    if entries.is_empty() {
        println!("No scheduled days.");
        return Ok(());
    }

    for entry in &entries {
        let label = if entry.is_rest() {
            "Rest".to_string()
        } else {
            resolve_title(entry)
        };
        let status = if entry.is_linked() { "  [logged]" } else { "" };
        println!(
            "{} {}  {}{}",
            entry.workout_date,
            weekday_name(entry.workout_date),
            label,
            status
        );
    }
    Ok(())
}

fn cmd_today(
    store: &mut JsonFileStore,
    user: &UserContext,
    date: Option<chrono::NaiveDate>,
) -> Result<()> {
    let today = date.unwrap_or_else(today_local);
    let outcome = TodayResolver::new(store).start_today(user, today)?;

    match &outcome {
        TodayOutcome::NoProgram => {
            println!("No active program for {}.", today);
            println!("Create one with `fitreps create`.");
            return Ok(());
        }
        TodayOutcome::ContinueExisting { workout_id } => {
            println!("Continuing today's workout");
            println!("  Workout: {}", workout_id);
        }
        TodayOutcome::Started {
            workout, report, ..
        } => {
            println!("✓ Started {}", workout.title);
            println!("  Workout: {}", workout.id);
            println!("  Exercises added: {}", report.created);
        }
        TodayOutcome::RestDayLogged {
            workout,
            target,
            report,
        } => {
            println!("Rest day. Logging {} now", workout.title);
            if let Some(target) = target {
                let focus = target
                    .focus_type
                    .as_deref()
                    .map(|f| format!(" ({})", type_label(f)))
                    .unwrap_or_default();
                println!("  Next scheduled: {}{}", target.workout_date, focus);
            }
            println!("  Workout: {}", workout.id);
            println!("  Exercises added: {}", report.created);
        }
    }

    if let Some(workout_id) = outcome.workout_id() {
        for exercise in store.list_exercises(user, workout_id)? {
            println!("  - {}", exercise.name);
        }
    }
    Ok(())
}

fn cmd_resume(store: &mut JsonFileStore, user: &UserContext, workout_id: Uuid) -> Result<()> {
    let report = TodayResolver::new(store).resume_workout(user, workout_id)?;

    println!("✓ Resumed workout {}", workout_id);
    println!(
        "  Exercises added: {} ({} already present)",
        report.created, report.skipped
    );
    Ok(())
}

fn cmd_abort(
    store: &mut JsonFileStore,
    user: &UserContext,
    program: Option<Uuid>,
    date: Option<chrono::NaiveDate>,
) -> Result<()> {
    let today = date.unwrap_or_else(today_local);
    let mut manager = ProgramManager::new(store);

    let program_id = match program {
        Some(id) => id,
        None => match manager.get_active_program(user, today)? {
            Some(active) => active.id,
            None => {
                println!("No active program to abort.");
                return Ok(());
            }
        },
    };

    let report = manager.abort_program(user, program_id, today)?;
    if report.already_aborted {
        println!("Program {} was already aborted.", program_id);
    } else {
        println!("✓ Aborted program {}", program_id);
        println!("  Removed {} upcoming days", report.deleted);
    }
    Ok(())
}

fn cmd_export(store: &JsonFileStore, user: &UserContext, path: &std::path::Path) -> Result<()> {
    let entries = store.get_full_schedule(user)?;
    let count = write_schedule_csv(&entries, path)?;

    println!("✓ Exported {} days", count);
    println!("  CSV: {}", path.display());
    Ok(())
}
