use crate::models::{UserProfile, WeekPlan, WeekWorkout};
use crate::planner::{EnergySummary, GroceryList};

/// Display the profile and its energy numbers.
pub fn display_summary(profile: &UserProfile, summary: &EnergySummary) {
    println!("=== DesiFit Summary ===");
    println!("Name: {}", profile.name);
    println!("Age: {}", profile.age);
    println!("Goal: {}", profile.goal);
    println!(
        "Dietary preferences: {}",
        profile.dietary_preferences.as_deref().unwrap_or("none")
    );
    println!();
    println!("BMR: {} kcal/day", summary.bmr);
    println!("TDEE: {} kcal/day", summary.tdee);
    println!("Daily calorie target: {} kcal/day", summary.calorie_target);

    let m = &summary.macros;
    println!("Macros (daily):");
    println!("  protein: {:.1} g ({:.1} kcal)", m.protein_g, m.protein_cal);
    println!("  fat:     {:.1} g ({:.1} kcal)", m.fat_g, m.fat_cal);
    println!("  carbs:   {:.1} g ({:.1} kcal)", m.carbs_g, m.carbs_cal);
    println!();
}

/// Display the weekly meal plan, one line per meal.
pub fn display_meal_plan(plan: &WeekPlan) {
    println!("=== Weekly Meal Plan ({} days) ===", plan.days.len());

    let max_slot_len = plan
        .days
        .iter()
        .flat_map(|d| &d.meals)
        .map(|m| m.slot.as_str().len())
        .max()
        .unwrap_or(9);

    for day in &plan.days {
        println!();
        println!("Day {} ({} kcal targeted)", day.day, day.targeted_calories());
        for meal in &day.meals {
            println!(
                "  {:<width$}  {:>4} kcal  {}",
                meal.slot.as_str(),
                meal.nutrition.calories_targeted,
                meal.recipe.name,
                width = max_slot_len
            );
        }
    }
    println!();
}

/// Display the weekly workout plan.
pub fn display_workout(workout: &WeekWorkout) {
    println!(
        "=== Workout Plan (Week {}) ===",
        workout.week_index + 1
    );
    println!(
        "Workouts per week: {} | Equipment: {}",
        workout.days_per_week, workout.equipment
    );

    for day in &workout.days {
        println!();
        println!("Session {}: {}", day.day_index + 1, day.focus);
        for exercise in &day.exercises {
            println!("  - {} ({})", exercise.name, exercise.scheme);
        }
    }
    println!();
}

/// Display the grocery list sorted by ingredient.
pub fn display_grocery_list(grocery: &GroceryList) {
    if grocery.is_empty() {
        println!("Grocery list: (none)");
        return;
    }

    println!(
        "=== Grocery List ({} ingredients, {} portions) ===",
        grocery.len(),
        grocery.total_items()
    );

    let max_name_len = grocery.iter().map(|(name, _)| name.len()).max().unwrap_or(10);
    for (ingredient, count) in grocery.iter() {
        println!("  {:<width$}  x{}", ingredient, count, width = max_name_len);
    }
    println!();
}
