use std::path::{Path, PathBuf};

pub const PROFILE_FILE: &str = "session_profile.json";
pub const MEAL_PLAN_FILE: &str = "meal_plan.json";
pub const WORKOUT_PLAN_FILE: &str = "workout_plan.json";
pub const GROCERY_LIST_FILE: &str = "grocery_list.json";

/// Where the generated plan files are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanPaths {
    pub meal_plan: PathBuf,
    pub workout_plan: PathBuf,
    pub grocery_list: PathBuf,
}

impl PlanPaths {
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self {
            meal_plan: dir.join(MEAL_PLAN_FILE),
            workout_plan: dir.join(WORKOUT_PLAN_FILE),
            grocery_list: dir.join(GROCERY_LIST_FILE),
        }
    }
}

impl Default for PlanPaths {
    fn default() -> Self {
        Self::in_dir(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_dir_joins_file_names() {
        let paths = PlanPaths::in_dir("/tmp/plans");
        assert_eq!(paths.meal_plan, PathBuf::from("/tmp/plans/meal_plan.json"));
        assert_eq!(paths.workout_plan, PathBuf::from("/tmp/plans/workout_plan.json"));
        assert_eq!(paths.grocery_list, PathBuf::from("/tmp/plans/grocery_list.json"));
    }
}
