use clap::Parser;
use fitlog::application::{init::init, LoadOutcome, WorkoutService};
use fitlog::cli::{format_load_outcome, format_workout_list, Cli, Commands};
use fitlog::domain::form::WorkoutSlot;
use fitlog::domain::{ProfileForm, WorkoutForm};
use fitlog::error::FitlogError;
use fitlog::infrastructure::FileSystemWorkspace;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), FitlogError> {
    match cli.command {
        Some(Commands::Init {
            path,
            name,
            age,
            weight,
            snapshot,
        }) => {
            let form = ProfileForm::new(name, age, weight);
            let (profile, outcome) = init(&path, &form, snapshot)?;

            println!("Created profile {} at {}", profile, path.display());
            report_outcome(&outcome);
            Ok(())
        }
        Some(Commands::Add {
            date,
            exercise_type,
            duration,
            calories,
        }) => {
            let mut service = open_service()?;
            let form = WorkoutForm::new(date, exercise_type, duration, calories);
            let position = service.add(&form)?;

            println!("Added workout {}", position + 1);
            Ok(())
        }
        Some(Commands::Edit {
            position,
            date,
            exercise_type,
            duration,
            calories,
        }) => {
            let mut service = open_service()?;

            let index = position.checked_sub(1).ok_or_else(|| {
                FitlogError::Validation("Position must be 1 or greater".to_string())
            })?;

            let changes: Vec<(WorkoutSlot, String)> = [
                (WorkoutSlot::Date, date),
                (WorkoutSlot::ExerciseType, exercise_type),
                (WorkoutSlot::Duration, duration),
                (WorkoutSlot::Calories, calories),
            ]
            .into_iter()
            .filter_map(|(slot, value)| value.map(|v| (slot, v)))
            .collect();

            // Report positions the way 'list' numbers them
            let record = service.edit(index, &changes).map_err(|e| match e {
                FitlogError::OutOfRange { len, .. } => FitlogError::OutOfRange { position, len },
                other => other,
            })?;

            println!("Updated workout {}: {}", position, record);
            Ok(())
        }
        Some(Commands::List) => {
            let service = open_service()?;
            let summaries = service.list()?;

            print!("{}", format_workout_list(&summaries));
            if summaries.is_empty() {
                println!();
            }
            Ok(())
        }
        Some(Commands::Save) => {
            let service = open_service()?;
            service.save()?;

            println!("Workouts saved successfully");
            Ok(())
        }
        Some(Commands::Profile) => {
            let service = open_service()?;
            let profile = service.profile()?;

            println!("name = {}", profile.name);
            println!("age = {}", profile.age);
            println!("weight_kg = {}", profile.weight_kg);
            Ok(())
        }
        None => {
            println!("fitlog - Personal workout log");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

fn open_service() -> Result<WorkoutService, FitlogError> {
    let workspace = FileSystemWorkspace::discover()?;
    let service = WorkoutService::open(&workspace)?;

    if let LoadOutcome::Discarded(_) = service.load_outcome() {
        report_outcome(service.load_outcome());
    }

    Ok(service)
}

fn report_outcome(outcome: &LoadOutcome) {
    if let Some(message) = format_load_outcome(outcome) {
        match outcome {
            LoadOutcome::Discarded(_) => eprintln!("{}", message),
            _ => println!("{}", message),
        }
    }
}
