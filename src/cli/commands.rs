//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fitlog")]
#[command(about = "Personal workout log", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a profile and its workout log
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        #[arg(long)]
        name: String,

        /// Age in years
        #[arg(long)]
        age: String,

        /// Weight in kilograms
        #[arg(long)]
        weight: String,

        /// Snapshot file, relative to the directory (default: workouts.json)
        #[arg(long)]
        snapshot: Option<PathBuf>,
    },

    /// Record a workout
    Add {
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,

        /// Exercise type (e.g., Running)
        #[arg(long = "type", value_name = "TYPE")]
        exercise_type: String,

        /// Duration in minutes
        #[arg(long)]
        duration: String,

        /// Calories burned
        #[arg(long)]
        calories: String,
    },

    /// Change a recorded workout; omitted fields keep their value
    Edit {
        /// Position as shown by 'fitlog list' (starting at 1)
        position: usize,

        #[arg(long)]
        date: Option<String>,

        #[arg(long = "type", value_name = "TYPE")]
        exercise_type: Option<String>,

        #[arg(long)]
        duration: Option<String>,

        #[arg(long)]
        calories: Option<String>,
    },

    /// List recorded workouts
    List,

    /// Write the full workout log to disk
    Save,

    /// Show the active profile
    Profile,
}
