pub mod calculations;
pub mod catalog;
pub mod constants;
pub mod grocery;
pub mod meals;
pub mod nutrition;
pub mod workout;

pub use calculations::{
    bmr, calorie_target, macro_split, round_to, summarize_profile, tdee, EnergySummary,
    MacroConfig, Macros,
};
pub use catalog::{placeholder_recipe, RecipeCatalog};
pub use constants::*;
pub use grocery::GroceryList;
pub use meals::{
    filter_by_preference, generate_day_plan, generate_default_week_plan, generate_week_plan,
    generate_week_plan_seeded, pick_recipe_for, SlotBudgets,
};
pub use nutrition::{NutritionAnalyzer, StubAnalyzer};
pub use workout::{
    exercise_catalog, focus_for_day, generate_weekly_workout, generate_workout_day,
    sets_reps_scheme, ExerciseCatalog, SetsRepsScheme,
};
