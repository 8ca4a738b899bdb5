use serde::Serialize;

use crate::models::{ActivityLevel, Goal, Sex, UserProfile};
use crate::planner::constants::*;

/// Round to `decimals` places, ties to even.
///
/// Rounds the exact binary value through `format!`, so 1.115 (stored as
/// 1.11499...) goes down. Scaling by 10^n first would round it up.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    format!("{:.*}", decimals as usize, value)
        .parse()
        .unwrap_or(value)
}

/// Daily macro targets in grams and calories.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Macros {
    pub calorie_target: f64,
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbs_g: f64,
    pub protein_cal: f64,
    pub fat_cal: f64,
    pub carbs_cal: f64,
}

/// Protein and fat parameters for the macro split.
#[derive(Debug, Clone)]
pub struct MacroConfig {
    pub protein_g_per_kg: f64,
    pub fat_pct: f64,
}

impl Default for MacroConfig {
    fn default() -> Self {
        Self {
            protein_g_per_kg: DEFAULT_PROTEIN_G_PER_KG,
            fat_pct: DEFAULT_FAT_PCT,
        }
    }
}

/// Energy numbers derived from a profile. Computed fresh on every run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnergySummary {
    pub bmr: f64,
    pub tdee: f64,
    pub calorie_target: f64,
    pub macros: Macros,
}

/// Mifflin-St Jeor basal metabolic rate, rounded to 2 decimals.
///
/// BMR = 10*weight + 6.25*height - 5*age + offset, with offset +5 for men
/// and -161 for women.
pub fn bmr(sex: Sex, weight_kg: f64, height_cm: f64, age: u32) -> f64 {
    let offset = match sex {
        Sex::Male => BMR_MALE_OFFSET,
        Sex::Female => BMR_FEMALE_OFFSET,
    };
    round_to(
        10.0 * weight_kg + 6.25 * height_cm - 5.0 * age as f64 + offset,
        2,
    )
}

/// Total daily energy expenditure, rounded to 2 decimals.
pub fn tdee(bmr: f64, activity_level: ActivityLevel) -> f64 {
    round_to(bmr * activity_multiplier(activity_level), 2)
}

/// Daily calorie target for a goal, rounded to the nearest calorie.
///
/// The deficit or surplus is `weekly_rate_kg * 7700 / 7` kcal per day.
pub fn calorie_target(tdee: f64, goal: Goal, weekly_rate_kg: f64) -> f64 {
    let daily_delta = weekly_rate_kg * KCAL_PER_KG / 7.0;
    let target = match goal {
        Goal::LoseWeight => tdee - daily_delta,
        Goal::GainWeight => tdee + daily_delta,
        Goal::Maintain => tdee,
    };
    round_to(target, 0)
}

/// Split a calorie target into protein, fat and carbohydrate.
///
/// Protein comes from body weight, fat from a share of calories, and carbs
/// take whatever is left. A negative remainder clamps carbs to zero.
pub fn macro_split(calorie_target: f64, weight_kg: f64, config: &MacroConfig) -> Macros {
    let protein_g = round_to(weight_kg * config.protein_g_per_kg, 1);
    let protein_cal = protein_g * KCAL_PER_G_PROTEIN;

    let fat_cal = calorie_target * config.fat_pct;
    let fat_g = round_to(fat_cal / KCAL_PER_G_FAT, 1);

    let remaining_cal = calorie_target - (protein_cal + fat_cal);
    let carbs_g = if remaining_cal > 0.0 {
        round_to(remaining_cal / KCAL_PER_G_CARBS, 1)
    } else {
        0.0
    };

    Macros {
        calorie_target: round_to(calorie_target, 1),
        protein_g,
        fat_g,
        carbs_g,
        protein_cal,
        fat_cal: round_to(fat_cal, 1),
        carbs_cal: round_to(carbs_g * KCAL_PER_G_CARBS, 1),
    }
}

/// Chain BMR, TDEE, target and macros for a profile.
pub fn summarize_profile(profile: &UserProfile) -> EnergySummary {
    let bmr = bmr(
        profile.sex,
        profile.weight_kg,
        profile.height_cm,
        profile.age,
    );
    let tdee = tdee(bmr, profile.activity_level);
    let target = calorie_target(tdee, profile.goal, profile.weekly_rate_kg());
    let macros = macro_split(target, profile.weight_kg, &MacroConfig::default());

    tracing::debug!(bmr, tdee, target, "computed energy summary");

    EnergySummary {
        bmr,
        tdee,
        calorie_target: target,
        macros,
    }
}
