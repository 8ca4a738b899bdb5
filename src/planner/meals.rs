use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::error::Result;
use crate::models::{DayPlan, DietPreference, MealEntry, MealSlot, PlanUser, Recipe, UserProfile, WeekPlan};
use crate::planner::calculations::round_to;
use crate::planner::catalog::{placeholder_recipe, RecipeCatalog};
use crate::planner::constants::*;
use crate::planner::nutrition::NutritionAnalyzer;

/// Calories budgeted for each meal of a day.
///
/// Each share is rounded on its own, so the five values need not add up to
/// the daily target exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotBudgets {
    pub breakfast: i64,
    pub lunch: i64,
    pub dinner: i64,
    pub snack_each: i64,
}

impl SlotBudgets {
    pub fn from_target(calorie_target: f64) -> Self {
        let snacks_total = round_to(calorie_target * SNACK_TOTAL_SHARE, 0);
        Self {
            breakfast: round_to(calorie_target * BREAKFAST_SHARE, 0) as i64,
            lunch: round_to(calorie_target * LUNCH_SHARE, 0) as i64,
            dinner: round_to(calorie_target * DINNER_SHARE, 0) as i64,
            snack_each: round_to(snacks_total / 2.0, 0) as i64,
        }
    }

    pub fn for_slot(&self, slot: MealSlot) -> i64 {
        match slot {
            MealSlot::Breakfast => self.breakfast,
            MealSlot::Lunch => self.lunch,
            MealSlot::Dinner => self.dinner,
            MealSlot::Snack1 | MealSlot::Snack2 => self.snack_each,
        }
    }

    pub fn total(&self) -> i64 {
        self.breakfast + self.lunch + self.dinner + 2 * self.snack_each
    }
}

/// Keep only recipes carrying the tag the preference requires.
pub fn filter_by_preference(recipes: &[Recipe], preference: DietPreference) -> Vec<&Recipe> {
    match preference.required_tag() {
        Some(tag) => recipes.iter().filter(|r| r.has_tag(tag)).collect(),
        None => recipes.iter().collect(),
    }
}

/// Pick a recipe for a slot uniformly at random.
///
/// Falls back to the unfiltered course when the preference removes every
/// option, and to the placeholder meal when the course is empty.
pub fn pick_recipe_for<R: Rng + ?Sized>(
    catalog: &RecipeCatalog,
    slot: MealSlot,
    preference: DietPreference,
    rng: &mut R,
) -> Recipe {
    let choices = catalog.recipes_for(slot.course());
    let filtered = filter_by_preference(choices, preference);

    let final_choices: Vec<&Recipe> = if filtered.is_empty() {
        if !choices.is_empty() {
            tracing::debug!(%slot, ?preference, "no recipe matches preference, using full course");
        }
        choices.iter().collect()
    } else {
        filtered
    };

    match final_choices.choose(rng) {
        Some(recipe) => (*recipe).clone(),
        None => {
            tracing::warn!(%slot, "catalog has no recipes for slot, using placeholder meal");
            placeholder_recipe()
        }
    }
}

/// Generate one day's meals. `day_index` is 0-based; the plan stores it 1-based.
pub fn generate_day_plan<R: Rng + ?Sized>(
    calorie_target: f64,
    day_index: u32,
    preference: DietPreference,
    catalog: &RecipeCatalog,
    analyzer: &dyn NutritionAnalyzer,
    rng: &mut R,
) -> Result<DayPlan> {
    let budgets = SlotBudgets::from_target(calorie_target);
    let mut meals = Vec::with_capacity(MealSlot::ALL.len());

    for slot in MealSlot::ALL {
        let recipe = pick_recipe_for(catalog, slot, preference, &mut *rng);
        let nutrition = analyzer
            .analyze(&recipe.ingredients, 1)?
            .with_target(budgets.for_slot(slot));

        meals.push(MealEntry {
            slot,
            recipe,
            nutrition,
        });
    }

    Ok(DayPlan {
        day: day_index + 1,
        meals,
    })
}

/// Generate a 7-day meal plan, drawing every choice from `rng`.
pub fn generate_week_plan<R: Rng + ?Sized>(
    profile: &UserProfile,
    calorie_target: f64,
    catalog: &RecipeCatalog,
    analyzer: &dyn NutritionAnalyzer,
    rng: &mut R,
) -> Result<WeekPlan> {
    let preference = DietPreference::from_text(profile.dietary_preferences.as_deref());

    let mut days = Vec::with_capacity(WeekPlan::DAYS);
    for i in 0..WeekPlan::DAYS as u32 {
        days.push(generate_day_plan(
            calorie_target,
            i,
            preference,
            catalog,
            analyzer,
            &mut *rng,
        )?);
    }

    tracing::info!(
        user = %profile.name,
        calorie_target,
        ?preference,
        "generated weekly meal plan"
    );

    Ok(WeekPlan {
        user: PlanUser {
            name: profile.name.clone(),
            age: profile.age,
            dietary_preferences: profile.dietary_preferences.clone(),
        },
        calorie_target,
        days,
    })
}

/// Generate a weekly plan from a fixed seed. Same seed and inputs, same plan.
pub fn generate_week_plan_seeded(
    profile: &UserProfile,
    calorie_target: f64,
    catalog: &RecipeCatalog,
    analyzer: &dyn NutritionAnalyzer,
    seed: u64,
) -> Result<WeekPlan> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_week_plan(profile, calorie_target, catalog, analyzer, &mut rng)
}

/// Seeded generation with the built-in catalog and default seed.
pub fn generate_default_week_plan(
    profile: &UserProfile,
    calorie_target: f64,
    analyzer: &dyn NutritionAnalyzer,
) -> Result<WeekPlan> {
    generate_week_plan_seeded(
        profile,
        calorie_target,
        RecipeCatalog::builtin(),
        analyzer,
        DEFAULT_PLAN_SEED,
    )
}
