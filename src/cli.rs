use clap::{Parser, Subcommand};

use crate::planner::constants::{DEFAULT_DAYS_PER_WEEK, DEFAULT_PLAN_SEED};
use crate::state::PROFILE_FILE;

/// DesiFit: calorie targets plus weekly meal, workout and grocery plans.
#[derive(Parser, Debug)]
#[command(name = "desifit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the session profile JSON file.
    #[arg(short, long, default_value = PROFILE_FILE)]
    pub profile: String,

    /// Directory the meal, workout and grocery files are written to.
    #[arg(short, long, default_value = ".")]
    pub out_dir: String,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Enter profile details interactively and save them.
    Onboard,

    /// Generate and save the weekly meal, workout and grocery plans.
    Plan {
        /// Random seed for recipe selection.
        #[arg(long, default_value_t = DEFAULT_PLAN_SEED)]
        seed: u64,

        /// Workout sessions per week.
        #[arg(long, default_value_t = DEFAULT_DAYS_PER_WEEK)]
        days_per_week: u32,

        /// Workout equipment: gym or home. Anything else gets home exercises.
        #[arg(long, default_value = "gym")]
        equipment: String,

        /// Week number carried in the workout plan (0-based).
        #[arg(long, default_value_t = 0)]
        week_index: u32,
    },

    /// Rebuild the grocery list from the saved meal plan.
    Groceries {
        /// Also export the list as CSV to this path.
        #[arg(long)]
        csv: Option<String>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan {
            seed: DEFAULT_PLAN_SEED,
            days_per_week: DEFAULT_DAYS_PER_WEEK,
            equipment: "gym".to_string(),
            week_index: 0,
        }
    }
}
