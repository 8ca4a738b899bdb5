use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::ActivityLevel;

// ─────────────────────────────────────────────────────────────────────────────
// Energy model
// ─────────────────────────────────────────────────────────────────────────────

/// Mifflin-St Jeor sex offsets.
pub const BMR_MALE_OFFSET: f64 = 5.0;
pub const BMR_FEMALE_OFFSET: f64 = -161.0;

/// Multiplier used when an activity level has no table entry.
pub const DEFAULT_ACTIVITY_MULTIPLIER: f64 = 1.375;

/// Approximate energy content of one kilogram of body weight.
pub const KCAL_PER_KG: f64 = 7700.0;

/// Weekly weight change used when the profile leaves it unset.
pub const DEFAULT_TARGET_RATE_KG_PER_WEEK: f64 = 0.5;

/// Default protein target in grams per kilogram of body weight.
pub const DEFAULT_PROTEIN_G_PER_KG: f64 = 1.8;

/// Default share of calories coming from fat.
pub const DEFAULT_FAT_PCT: f64 = 0.25;

pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;
pub const KCAL_PER_G_CARBS: f64 = 4.0;

// ─────────────────────────────────────────────────────────────────────────────
// Meal plan
// ─────────────────────────────────────────────────────────────────────────────

/// Share of the daily target for each meal. The two snacks split SNACK_TOTAL_SHARE.
pub const BREAKFAST_SHARE: f64 = 0.22;
pub const LUNCH_SHARE: f64 = 0.34;
pub const DINNER_SHARE: f64 = 0.30;
pub const SNACK_TOTAL_SHARE: f64 = 0.14;

/// Seed used when the caller does not supply one.
pub const DEFAULT_PLAN_SEED: u64 = 42;

/// Sessions per week when the CLI is not told otherwise.
pub const DEFAULT_DAYS_PER_WEEK: u32 = 4;

/// Map from activity level to TDEE multiplier.
pub static ACTIVITY_MULTIPLIERS: LazyLock<HashMap<ActivityLevel, f64>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert(ActivityLevel::Sedentary, 1.2); // little or no exercise
    m.insert(ActivityLevel::Light, 1.375); // 1-3 days/week
    m.insert(ActivityLevel::Moderate, 1.55); // 3-5 days/week
    m.insert(ActivityLevel::Active, 1.725); // 6-7 days/week
    m.insert(ActivityLevel::VeryActive, 1.9); // hard training or physical job
    m
});

/// Get the TDEE multiplier for an activity level.
pub fn activity_multiplier(level: ActivityLevel) -> f64 {
    *ACTIVITY_MULTIPLIERS
        .get(&level)
        .unwrap_or(&DEFAULT_ACTIVITY_MULTIPLIER)
}
