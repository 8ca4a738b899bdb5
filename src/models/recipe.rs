use std::fmt;

use serde::{Deserialize, Serialize};

/// Dietary category a recipe is tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DietTag {
    #[serde(rename = "veg")]
    Veg,
    #[serde(rename = "non-veg")]
    NonVeg,
}

impl DietTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            DietTag::Veg => "veg",
            DietTag::NonVeg => "non-veg",
        }
    }
}

impl fmt::Display for DietTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Catalog section a meal slot draws its recipes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Course {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

/// A candidate meal with its ingredient list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub tags: Vec<DietTag>,
}

impl Recipe {
    pub fn new(name: &str, ingredients: &[&str], tags: &[DietTag]) -> Self {
        Self {
            name: name.to_string(),
            ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
            tags: tags.to_vec(),
        }
    }

    pub fn has_tag(&self, tag: DietTag) -> bool {
        self.tags.contains(&tag)
    }
}

/// Dietary preference derived from the free-text profile field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DietPreference {
    Any,
    Vegetarian,
    NonVegetarian,
}

impl DietPreference {
    /// Informal substring match. "veg" is checked first, so any text
    /// mentioning it (including "non-veg") selects the veg filter; "non"
    /// on its own selects non-veg recipes.
    pub fn from_text(text: Option<&str>) -> Self {
        let Some(text) = text else {
            return DietPreference::Any;
        };
        let pref = text.to_lowercase();
        if pref.contains("veg") {
            DietPreference::Vegetarian
        } else if pref.contains("non") {
            DietPreference::NonVegetarian
        } else {
            DietPreference::Any
        }
    }

    /// Tag a recipe must carry to pass this preference, if any.
    pub fn required_tag(&self) -> Option<DietTag> {
        match self {
            DietPreference::Any => None,
            DietPreference::Vegetarian => Some(DietTag::Veg),
            DietPreference::NonVegetarian => Some(DietTag::NonVeg),
        }
    }
}
