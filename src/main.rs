use clap::Parser;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use desifit_rs::cli::{Cli, Command};
use desifit_rs::error::Result;
use desifit_rs::interface::{
    collect_profile, display_grocery_list, display_meal_plan, display_summary, display_workout,
    prompt_yes_no,
};
use desifit_rs::models::Equipment;
use desifit_rs::planner::{RecipeCatalog, StubAnalyzer};
use desifit_rs::session::{grocery_from_file, run_plan, PlanOptions};
use desifit_rs::state::{export_grocery_csv, save_grocery_list, save_profile, PlanPaths};

fn main() {
    // Logs go to stderr so stdout only carries the summary.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("desifit_rs=info")
        }))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();
    let paths = PlanPaths::in_dir(&cli.out_dir);

    match command {
        Command::Onboard => cmd_onboard(&cli.profile),
        Command::Plan {
            seed,
            days_per_week,
            equipment,
            week_index,
        } => {
            let options = PlanOptions {
                seed,
                days_per_week,
                equipment: Equipment::from_label(&equipment),
                week_index,
            };
            cmd_plan(&cli.profile, &paths, &options)
        }
        Command::Groceries { csv } => cmd_groceries(&paths, csv.as_deref()),
    }
}

/// Collect a profile interactively and save it.
fn cmd_onboard(profile_path: &str) -> Result<()> {
    let path = Path::new(profile_path);

    if path.exists() {
        let overwrite = prompt_yes_no(
            &format!("{} already exists. Overwrite it?", profile_path),
            false,
        )?;
        if !overwrite {
            println!("Keeping existing profile.");
            return Ok(());
        }
    }

    let profile = collect_profile()?;
    save_profile(path, &profile)?;
    println!("Profile saved to {}", profile_path);

    Ok(())
}

/// Generate every plan from the saved profile and print a summary.
fn cmd_plan(profile_path: &str, paths: &PlanPaths, options: &PlanOptions) -> Result<()> {
    let outcome = run_plan(
        profile_path,
        paths,
        options,
        RecipeCatalog::builtin(),
        &StubAnalyzer,
    )?;

    display_summary(&outcome.profile, &outcome.summary);
    display_meal_plan(&outcome.meal_plan);
    println!("Saved {}", paths.meal_plan.display());
    println!();

    display_workout(&outcome.workout);
    println!("Saved {}", paths.workout_plan.display());
    println!();

    display_grocery_list(&outcome.grocery);
    println!("Saved {}", paths.grocery_list.display());

    Ok(())
}

/// Rebuild the grocery list from the saved meal plan.
fn cmd_groceries(paths: &PlanPaths, csv_path: Option<&str>) -> Result<()> {
    let grocery = grocery_from_file(&paths.meal_plan)?;
    save_grocery_list(&paths.grocery_list, &grocery)?;

    display_grocery_list(&grocery);
    println!("Saved {}", paths.grocery_list.display());

    if let Some(csv_path) = csv_path {
        export_grocery_csv(csv_path, &grocery)?;
        println!("Exported {}", csv_path);
    }

    Ok(())
}
