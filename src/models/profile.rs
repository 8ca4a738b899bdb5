use std::fmt;

use serde::{Deserialize, Serialize};

use crate::planner::constants::DEFAULT_TARGET_RATE_KG_PER_WEEK;

/// Biological sex used by the BMR offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    #[serde(alias = "m")]
    Male,
    #[serde(alias = "f")]
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }

    /// Lenient parse for typed input: anything that is not "m"/"male" is female.
    pub fn from_label(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "m" | "male" => Sex::Male,
            _ => Sex::Female,
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|level| level.as_str() == s)
    }

    /// Lenient parse: unknown labels fall back to `Light`.
    pub fn from_label(s: &str) -> Self {
        Self::parse(s).unwrap_or(ActivityLevel::Light)
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    LoseWeight,
    Maintain,
    GainWeight,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::LoseWeight, Goal::Maintain, Goal::GainWeight];

    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::LoseWeight => "lose_weight",
            Goal::Maintain => "maintain",
            Goal::GainWeight => "gain_weight",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|goal| goal.as_str() == s)
    }

    /// Lenient parse: unknown labels fall back to `Maintain`.
    pub fn from_label(s: &str) -> Self {
        Self::parse(s).unwrap_or(Goal::Maintain)
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The user's anthropometric inputs and goals, as persisted in the session profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub age: u32,
    pub sex: Sex,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
    #[serde(default)]
    pub target_rate_kg_per_week: Option<f64>,
    #[serde(default)]
    pub dietary_preferences: Option<String>,
}

impl UserProfile {
    /// Weekly weight change target, falling back to 0.5 kg when unset or zero.
    pub fn weekly_rate_kg(&self) -> f64 {
        self.target_rate_kg_per_week
            .filter(|rate| *rate != 0.0)
            .unwrap_or(DEFAULT_TARGET_RATE_KG_PER_WEEK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sex_from_label_treats_unknown_as_female() {
        assert_eq!(Sex::from_label("Male"), Sex::Male);
        assert_eq!(Sex::from_label("m"), Sex::Male);
        assert_eq!(Sex::from_label("female"), Sex::Female);
        assert_eq!(Sex::from_label("other"), Sex::Female);
        assert_eq!(Sex::from_label(""), Sex::Female);
    }

    #[test]
    fn test_activity_from_label_defaults_to_light() {
        assert_eq!(ActivityLevel::from_label("very_active"), ActivityLevel::VeryActive);
        assert_eq!(ActivityLevel::from_label(" Moderate "), ActivityLevel::Moderate);
        assert_eq!(ActivityLevel::from_label("couch"), ActivityLevel::Light);
    }

    #[test]
    fn test_goal_from_label_defaults_to_maintain() {
        assert_eq!(Goal::from_label("lose_weight"), Goal::LoseWeight);
        assert_eq!(Goal::from_label("bulk"), Goal::Maintain);
    }

    #[test]
    fn test_profile_decode_rejects_unknown_activity() {
        let json = r#"{
            "name": "Test", "age": 30, "sex": "female", "height_cm": 160.0,
            "weight_kg": 60.0, "activity_level": "couch", "goal": "maintain"
        }"#;
        let err = serde_json::from_str::<UserProfile>(json).unwrap_err();
        assert!(err.to_string().contains("couch"));
    }

    #[test]
    fn test_profile_optional_fields_default() {
        let json = r#"{
            "name": "Test", "age": 30, "sex": "m", "height_cm": 175.0,
            "weight_kg": 70.0, "activity_level": "moderate", "goal": "gain_weight"
        }"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.sex, Sex::Male);
        assert_eq!(profile.target_rate_kg_per_week, None);
        assert_eq!(profile.dietary_preferences, None);
        assert!((profile.weekly_rate_kg() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_zero_rate_counts_as_unset() {
        let json = r#"{
            "name": "Test", "age": 30, "sex": "f", "height_cm": 160.0,
            "weight_kg": 60.0, "activity_level": "light", "goal": "lose_weight",
            "target_rate_kg_per_week": 0.0
        }"#;
        let mut profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.weekly_rate_kg(), 0.5);
        profile.target_rate_kg_per_week = Some(0.75);
        assert_eq!(profile.weekly_rate_kg(), 0.75);
    }
}
