mod paths;
mod persistence;

pub use paths::{
    PlanPaths, GROCERY_LIST_FILE, MEAL_PLAN_FILE, PROFILE_FILE, WORKOUT_PLAN_FILE,
};
pub use persistence::{
    export_grocery_csv, load_meal_plan, load_profile, read_record, save_grocery_list,
    save_meal_plan, save_profile, save_workout_plan, write_record,
};
