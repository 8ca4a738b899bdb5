pub mod plan;
pub mod profile;
pub mod recipe;
pub mod workout;

pub use plan::{DayPlan, MealEntry, MealSlot, NutritionAnalysis, NutritionEstimate, PlanUser, WeekPlan};
pub use profile::{ActivityLevel, Goal, Sex, UserProfile};
pub use recipe::{Course, DietPreference, DietTag, Recipe};
pub use workout::{Equipment, Exercise, Focus, WeekWorkout, WorkoutDay};
