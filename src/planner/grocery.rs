use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{DayPlan, WeekPlan};

/// Ingredient name to number of times it appears across a plan's recipes.
///
/// Names are used verbatim: "Onion" and "onion" are different entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroceryList {
    counts: BTreeMap<String, u32>,
}

impl GroceryList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_plan(plan: &WeekPlan) -> Self {
        Self::from_days(&plan.days)
    }

    pub fn from_days(days: &[DayPlan]) -> Self {
        let mut grocery = Self::new();
        for ingredient in days
            .iter()
            .flat_map(|d| &d.meals)
            .flat_map(|m| &m.recipe.ingredients)
        {
            grocery.add(ingredient, 1);
        }
        grocery
    }

    pub fn add(&mut self, ingredient: &str, count: u32) {
        *self.counts.entry(ingredient.to_string()).or_insert(0) += count;
    }

    /// Add every count from `other` into this list.
    pub fn merge(&mut self, other: &GroceryList) {
        for (ingredient, count) in &other.counts {
            self.add(ingredient, *count);
        }
    }

    pub fn get(&self, ingredient: &str) -> u32 {
        self.counts.get(ingredient).copied().unwrap_or(0)
    }

    /// Entries sorted by ingredient name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Sum of all counts.
    pub fn total_items(&self) -> u32 {
        self.counts.values().sum()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
