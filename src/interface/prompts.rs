use std::str::FromStr;

use dialoguer::{Confirm, Input};
use strsim::jaro_winkler;

use crate::error::{PlanError, Result};
use crate::models::{ActivityLevel, Goal, Sex, UserProfile};
use crate::planner::constants::DEFAULT_TARGET_RATE_KG_PER_WEEK;

/// Minimum similarity for a typed label to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Outcome of matching typed text against a fixed set of labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceMatch {
    Exact(&'static str),
    Suggested(&'static str),
    NoMatch,
}

/// Match `input` against `options`, case-insensitively, then by similarity.
pub fn resolve_choice(input: &str, options: &[&'static str]) -> ChoiceMatch {
    let input = input.trim().to_lowercase();

    if let Some(exact) = options.iter().find(|o| **o == input) {
        return ChoiceMatch::Exact(*exact);
    }

    options
        .iter()
        .map(|o| (*o, jaro_winkler(o, &input)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(o, _)| ChoiceMatch::Suggested(o))
        .unwrap_or(ChoiceMatch::NoMatch)
}

/// Prompt for free text with a default.
pub fn prompt_text(prompt: &str, default: &str) -> Result<String> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;
    Ok(input.trim().to_string())
}

/// Prompt for a number. A value that does not parse aborts onboarding.
pub fn prompt_number<T>(prompt: &str, default: T) -> Result<T>
where
    T: FromStr + ToString,
{
    let input = prompt_text(prompt, &default.to_string())?;
    input
        .parse()
        .map_err(|_| PlanError::InvalidInput(format!("'{}' is not a valid number", input)))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Prompt for one of `options`, offering the closest label on a typo.
///
/// Returns the raw text when nothing matches or the suggestion is declined.
pub fn prompt_choice(prompt: &str, options: &[&'static str], default: &str) -> Result<String> {
    println!("Options: {}", options.join(", "));
    let input = prompt_text(prompt, default)?;

    match resolve_choice(&input, options) {
        ChoiceMatch::Exact(label) => Ok(label.to_string()),
        ChoiceMatch::Suggested(label) => {
            if prompt_yes_no(&format!("Did you mean '{}'?", label), true)? {
                Ok(label.to_string())
            } else {
                Ok(input)
            }
        }
        ChoiceMatch::NoMatch => Ok(input),
    }
}

/// Interactively collect every profile field.
pub fn collect_profile() -> Result<UserProfile> {
    println!("Welcome to DesiFit onboarding. Please enter basic info.");

    let name = prompt_text("Name", "Guest")?;
    let age: u32 = prompt_number("Age (years)", 25)?;
    let sex = Sex::from_label(&prompt_text("Sex (male/female)", "female")?);
    let height_cm: f64 = prompt_number("Height (cm)", 162.0)?;
    let weight_kg: f64 = prompt_number("Weight (kg)", 70.0)?;

    let activity_labels = ActivityLevel::ALL.map(|a| a.as_str());
    let activity_input = prompt_choice("Activity level", &activity_labels, "light")?;
    let activity_level = ActivityLevel::parse(&activity_input).unwrap_or_else(|| {
        tracing::warn!(input = %activity_input, "unknown activity level, using light");
        ActivityLevel::from_label(&activity_input)
    });

    let goal_labels = Goal::ALL.map(|g| g.as_str());
    let goal_input = prompt_choice("Goal", &goal_labels, "lose_weight")?;
    let goal = Goal::parse(&goal_input).unwrap_or_else(|| {
        tracing::warn!(input = %goal_input, "unknown goal, using maintain");
        Goal::from_label(&goal_input)
    });

    let target_rate: f64 = prompt_number(
        "Target kg per week (e.g., 0.5)",
        DEFAULT_TARGET_RATE_KG_PER_WEEK,
    )?;
    let preferences = prompt_text(
        "Dietary preferences (e.g., vegetarian, non-veg, no onion)",
        "vegetarian",
    )?;

    Ok(UserProfile {
        name,
        age,
        sex,
        height_cm,
        weight_kg,
        activity_level,
        goal,
        target_rate_kg_per_week: Some(target_rate),
        dietary_preferences: (!preferences.is_empty()).then_some(preferences),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOALS: [&str; 3] = ["lose_weight", "maintain", "gain_weight"];

    #[test]
    fn test_resolve_exact_ignores_case() {
        assert_eq!(resolve_choice(" Maintain ", &GOALS), ChoiceMatch::Exact("maintain"));
    }

    #[test]
    fn test_resolve_suggests_on_typo() {
        assert_eq!(
            resolve_choice("lose_wieght", &GOALS),
            ChoiceMatch::Suggested("lose_weight")
        );
    }

    #[test]
    fn test_resolve_no_match() {
        assert_eq!(resolve_choice("xyz", &GOALS), ChoiceMatch::NoMatch);
    }
}
