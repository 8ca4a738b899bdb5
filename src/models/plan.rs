use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};
use crate::models::recipe::{Course, Recipe};

/// One of the five meal occasions in a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    #[serde(rename = "snack_1")]
    Snack1,
    #[serde(rename = "snack_2")]
    Snack2,
}

impl MealSlot {
    /// Slots in the order they appear in a day.
    pub const ALL: [MealSlot; 5] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Dinner,
        MealSlot::Snack1,
        MealSlot::Snack2,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Dinner => "dinner",
            MealSlot::Snack1 => "snack_1",
            MealSlot::Snack2 => "snack_2",
        }
    }

    pub fn course(&self) -> Course {
        match self {
            MealSlot::Breakfast => Course::Breakfast,
            MealSlot::Lunch => Course::Lunch,
            MealSlot::Dinner => Course::Dinner,
            MealSlot::Snack1 | MealSlot::Snack2 => Course::Snack,
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-serving estimate returned by a nutrition analyzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionAnalysis {
    pub title: String,
    pub calories_per_serving: f64,
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbs_g: f64,
}

impl NutritionAnalysis {
    /// Annotate the analysis with the calories budgeted for its slot.
    pub fn with_target(self, calories_targeted: i64) -> NutritionEstimate {
        NutritionEstimate {
            title: self.title,
            calories_per_serving: self.calories_per_serving,
            protein_g: self.protein_g,
            fat_g: self.fat_g,
            carbs_g: self.carbs_g,
            calories_targeted,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionEstimate {
    pub title: String,
    pub calories_per_serving: f64,
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbs_g: f64,
    pub calories_targeted: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealEntry {
    #[serde(rename = "type")]
    pub slot: MealSlot,
    pub recipe: Recipe,
    pub nutrition: NutritionEstimate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    /// 1-based day number.
    pub day: u32,
    pub meals: Vec<MealEntry>,
}

impl DayPlan {
    /// Sum of the calories budgeted across the day's meals.
    pub fn targeted_calories(&self) -> i64 {
        self.meals.iter().map(|m| m.nutrition.calories_targeted).sum()
    }
}

/// Snapshot of the user fields carried in a meal plan record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanUser {
    pub name: String,
    pub age: u32,
    #[serde(default)]
    pub dietary_preferences: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekPlan {
    pub user: PlanUser,
    pub calorie_target: f64,
    pub days: Vec<DayPlan>,
}

impl WeekPlan {
    pub const DAYS: usize = 7;

    /// Check the 7-day / 5-slot shape of a plan decoded from disk.
    pub fn validate(&self) -> Result<()> {
        if self.days.len() != Self::DAYS {
            return Err(PlanError::InvalidRecord(format!(
                "meal plan has {} days, expected {}",
                self.days.len(),
                Self::DAYS
            )));
        }

        for day in &self.days {
            let slots: Vec<MealSlot> = day.meals.iter().map(|m| m.slot).collect();
            if slots != MealSlot::ALL {
                return Err(PlanError::InvalidRecord(format!(
                    "day {} has meal slots {:?}, expected one of each of {:?}",
                    day.day,
                    slots,
                    MealSlot::ALL
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(slot: MealSlot) -> MealEntry {
        MealEntry {
            slot,
            recipe: Recipe::new("Simple meal", &["rice", "veg"], &[]),
            nutrition: NutritionAnalysis {
                title: "Sample recipe: rice + veg".to_string(),
                calories_per_serving: 400.0,
                protein_g: 25.0,
                fat_g: 12.0,
                carbs_g: 45.0,
            }
            .with_target(100),
        }
    }

    fn week(days: usize) -> WeekPlan {
        WeekPlan {
            user: PlanUser {
                name: "Test".to_string(),
                age: 30,
                dietary_preferences: None,
            },
            calorie_target: 1800.0,
            days: (1..=days as u32)
                .map(|day| DayPlan {
                    day,
                    meals: MealSlot::ALL.into_iter().map(entry).collect(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_slot_serializes_as_type() {
        let json = serde_json::to_value(entry(MealSlot::Snack1)).unwrap();
        assert_eq!(json["type"], "snack_1");
        assert_eq!(json["nutrition"]["calories_targeted"], 100);
    }

    #[test]
    fn test_both_snacks_use_snack_course() {
        assert_eq!(MealSlot::Snack1.course(), Course::Snack);
        assert_eq!(MealSlot::Snack2.course(), Course::Snack);
        assert_eq!(MealSlot::Dinner.course(), Course::Dinner);
    }

    #[test]
    fn test_validate_accepts_full_week() {
        assert!(week(7).validate().is_ok());
        assert_eq!(week(7).days[0].targeted_calories(), 500);
    }

    #[test]
    fn test_validate_rejects_short_week() {
        let err = week(6).validate().unwrap_err();
        assert!(matches!(err, PlanError::InvalidRecord(_)));
    }

    #[test]
    fn test_validate_rejects_duplicate_slot() {
        let mut plan = week(7);
        plan.days[2].meals[4].slot = MealSlot::Snack1;
        assert!(plan.validate().is_err());
    }
}
