use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::models::{UserProfile, WeekPlan, WeekWorkout};
use crate::planner::GroceryList;

/// Read and decode a JSON record. A missing file is `Ok(None)`.
pub fn read_record<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<Option<T>> {
    let content = match fs::read_to_string(path.as_ref()) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.as_ref().display(), "record not found");
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };
    Ok(Some(serde_json::from_str(&content)?))
}

/// Serialize a record as pretty-printed JSON, replacing the file.
pub fn write_record<T: Serialize, P: AsRef<Path>>(path: P, record: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(record)?;
    fs::write(path.as_ref(), json)?;
    tracing::info!(path = %path.as_ref().display(), "saved record");
    Ok(())
}

pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<Option<UserProfile>> {
    read_record(path)
}

pub fn save_profile<P: AsRef<Path>>(path: P, profile: &UserProfile) -> Result<()> {
    write_record(path, profile)
}

/// Load a meal plan and check its 7-day / 5-slot shape.
pub fn load_meal_plan<P: AsRef<Path>>(path: P) -> Result<Option<WeekPlan>> {
    let plan: Option<WeekPlan> = read_record(path)?;
    if let Some(plan) = &plan {
        plan.validate()?;
    }
    Ok(plan)
}

pub fn save_meal_plan<P: AsRef<Path>>(path: P, plan: &WeekPlan) -> Result<()> {
    write_record(path, plan)
}

pub fn save_workout_plan<P: AsRef<Path>>(path: P, workout: &WeekWorkout) -> Result<()> {
    write_record(path, workout)
}

pub fn save_grocery_list<P: AsRef<Path>>(path: P, grocery: &GroceryList) -> Result<()> {
    write_record(path, grocery)
}

/// Write the grocery list as `ingredient,count` rows sorted by name.
pub fn export_grocery_csv<P: AsRef<Path>>(path: P, grocery: &GroceryList) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path.as_ref())?;
    wtr.write_record(["ingredient", "count"])?;
    for (ingredient, count) in grocery.iter() {
        wtr.write_record([ingredient, count.to_string().as_str()])?;
    }
    wtr.flush()?;
    tracing::info!(path = %path.as_ref().display(), items = grocery.len(), "exported grocery csv");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlanError;
    use crate::models::{ActivityLevel, Goal, Sex};
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn sample_profile() -> UserProfile {
        UserProfile {
            name: "Test".to_string(),
            age: 30,
            sex: Sex::Female,
            height_cm: 160.0,
            weight_kg: 60.0,
            activity_level: ActivityLevel::Light,
            goal: Goal::LoseWeight,
            target_rate_kg_per_week: Some(0.5),
            dietary_preferences: Some("vegetarian".to_string()),
        }
    }

    #[test]
    fn test_profile_roundtrip() {
        let file = NamedTempFile::new().unwrap();
        save_profile(file.path(), &sample_profile()).unwrap();

        let loaded = load_profile(file.path()).unwrap();
        assert_eq!(loaded, Some(sample_profile()));
    }

    #[test]
    fn test_missing_profile_is_none() {
        let dir = TempDir::new().unwrap();
        let loaded = load_profile(dir.path().join("session_profile.json")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_malformed_profile_is_decode_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"name": "Test", "age": "thirty"}"#).unwrap();

        let err = load_profile(file.path()).unwrap_err();
        assert!(matches!(err, PlanError::Json(_)));
    }

    #[test]
    fn test_profile_field_names_are_stable() {
        let file = NamedTempFile::new().unwrap();
        save_profile(file.path(), &sample_profile()).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(file.path()).unwrap()).unwrap();
        for key in [
            "name",
            "age",
            "sex",
            "height_cm",
            "weight_kg",
            "activity_level",
            "goal",
            "target_rate_kg_per_week",
            "dietary_preferences",
        ] {
            assert!(raw.get(key).is_some(), "missing field {}", key);
        }
        assert_eq!(raw["activity_level"], "light");
        assert_eq!(raw["goal"], "lose_weight");
    }

    #[test]
    fn test_meal_plan_with_wrong_shape_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"user": {"name": "T", "age": 1}, "calorie_target": 1800.0, "days": []}"#)
            .unwrap();

        let err = load_meal_plan(file.path()).unwrap_err();
        assert!(matches!(err, PlanError::InvalidRecord(_)));
    }

    #[test]
    fn test_grocery_csv_export() {
        let mut grocery = GroceryList::new();
        grocery.add("wheat", 3);
        grocery.add("curd", 2);

        let file = NamedTempFile::new().unwrap();
        export_grocery_csv(file.path(), &grocery).unwrap();

        let content = fs::read_to_string(file.path()).unwrap();
        assert_eq!(content, "ingredient,count\ncurd,2\nwheat,3\n");
    }
}
