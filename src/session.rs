use std::path::Path;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::{PlanError, Result};
use crate::models::{Equipment, UserProfile, WeekPlan, WeekWorkout};
use crate::planner::{
    generate_week_plan, generate_weekly_workout, summarize_profile, EnergySummary, GroceryList,
    NutritionAnalyzer, RecipeCatalog, DEFAULT_DAYS_PER_WEEK, DEFAULT_PLAN_SEED,
};
use crate::state::{
    load_meal_plan, load_profile, save_grocery_list, save_meal_plan, save_workout_plan, PlanPaths,
};

/// Knobs for a planning run.
#[derive(Debug, Clone)]
pub struct PlanOptions {
    pub seed: u64,
    pub days_per_week: u32,
    pub equipment: Equipment,
    pub week_index: u32,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            seed: DEFAULT_PLAN_SEED,
            days_per_week: DEFAULT_DAYS_PER_WEEK,
            equipment: Equipment::Gym,
            week_index: 0,
        }
    }
}

/// Everything a planning run produced.
#[derive(Debug, Clone)]
pub struct PlanOutcome {
    pub profile: UserProfile,
    pub summary: EnergySummary,
    pub meal_plan: WeekPlan,
    pub workout: WeekWorkout,
    pub grocery: GroceryList,
}

/// Load the profile, or fail: nothing downstream is computable without it.
pub fn require_profile<P: AsRef<Path>>(path: P) -> Result<UserProfile> {
    load_profile(path.as_ref())?
        .ok_or_else(|| PlanError::ProfileNotFound(path.as_ref().display().to_string()))
}

/// Compute targets, then generate and save the meal, workout and grocery plans.
pub fn run_plan<P: AsRef<Path>>(
    profile_path: P,
    paths: &PlanPaths,
    options: &PlanOptions,
    catalog: &RecipeCatalog,
    analyzer: &dyn NutritionAnalyzer,
) -> Result<PlanOutcome> {
    let profile = require_profile(profile_path)?;
    let summary = summarize_profile(&profile);

    let mut rng = StdRng::seed_from_u64(options.seed);
    let meal_plan = generate_week_plan(
        &profile,
        summary.calorie_target,
        catalog,
        analyzer,
        &mut rng,
    )?;
    save_meal_plan(&paths.meal_plan, &meal_plan)?;

    let workout = generate_weekly_workout(
        profile.goal,
        options.days_per_week,
        options.equipment,
        options.week_index,
    );
    save_workout_plan(&paths.workout_plan, &workout)?;

    let grocery = grocery_from_file(&paths.meal_plan)?;
    save_grocery_list(&paths.grocery_list, &grocery)?;

    Ok(PlanOutcome {
        profile,
        summary,
        meal_plan,
        workout,
        grocery,
    })
}

/// Derive a grocery list from a saved meal plan.
pub fn grocery_from_file<P: AsRef<Path>>(meal_plan_path: P) -> Result<GroceryList> {
    let plan = load_meal_plan(meal_plan_path.as_ref())?.ok_or_else(|| {
        PlanError::MealPlanNotFound(meal_plan_path.as_ref().display().to_string())
    })?;
    Ok(GroceryList::from_plan(&plan))
}
