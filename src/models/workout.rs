use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::profile::Goal;

/// Muscle-group emphasis of a workout day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Focus {
    FullBody,
    UpperBody,
    LowerBody,
}

impl Focus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Focus::FullBody => "full_body",
            Focus::UpperBody => "upper_body",
            Focus::LowerBody => "lower_body",
        }
    }
}

impl fmt::Display for Focus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Equipment {
    Gym,
    Home,
}

impl Equipment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Equipment::Gym => "gym",
            Equipment::Home => "home",
        }
    }

    /// Lenient parse: anything that is not "gym" gets home-style exercises.
    pub fn from_label(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("gym") {
            Equipment::Gym
        } else {
            Equipment::Home
        }
    }
}

impl fmt::Display for Equipment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub name: String,
    pub scheme: String,
}

impl Exercise {
    pub fn new(name: &str, scheme: &str) -> Self {
        Self {
            name: name.to_string(),
            scheme: scheme.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutDay {
    pub day_index: u32,
    pub focus: Focus,
    pub equipment: Equipment,
    pub goal: Goal,
    pub exercises: Vec<Exercise>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekWorkout {
    pub week_index: u32,
    pub goal: Goal,
    pub days_per_week: u32,
    pub equipment: Equipment,
    pub days: Vec<WorkoutDay>,
}
