use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::{Course, DietTag, Recipe};

/// Candidate recipes grouped by course.
#[derive(Debug, Clone, Default)]
pub struct RecipeCatalog {
    courses: HashMap<Course, Vec<Recipe>>,
}

impl RecipeCatalog {
    /// An empty catalog. Every slot falls back to the placeholder meal.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in Indian-style sample catalog.
    pub fn builtin() -> &'static RecipeCatalog {
        &BUILTIN_CATALOG
    }

    pub fn with_course(mut self, course: Course, recipes: Vec<Recipe>) -> Self {
        self.courses.insert(course, recipes);
        self
    }

    pub fn recipes_for(&self, course: Course) -> &[Recipe] {
        self.courses.get(&course).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every recipe in the catalog.
    pub fn all_recipes(&self) -> impl Iterator<Item = &Recipe> {
        self.courses.values().flatten()
    }
}

/// Meal used when a course has no recipes at all.
pub fn placeholder_recipe() -> Recipe {
    Recipe::new("Simple meal", &["rice", "veg"], &[DietTag::Veg])
}

static BUILTIN_CATALOG: LazyLock<RecipeCatalog> = LazyLock::new(|| {
    use DietTag::{NonVeg, Veg};

    RecipeCatalog::new()
        .with_course(
            Course::Breakfast,
            vec![
                Recipe::new(
                    "Poha with peanuts",
                    &["poha", "peanuts", "onion", "turmeric"],
                    &[Veg],
                ),
                Recipe::new(
                    "Masala omelette + toast",
                    &["eggs", "tomato", "onion", "bread"],
                    &[NonVeg],
                ),
                Recipe::new(
                    "Upma with vegetables",
                    &["semolina", "carrot", "peas", "mustard seeds"],
                    &[Veg],
                ),
                Recipe::new(
                    "Curd + fruit + 2 parathas",
                    &["curd", "banana", "whole wheat flour"],
                    &[Veg],
                ),
            ],
        )
        .with_course(
            Course::Lunch,
            vec![
                Recipe::new(
                    "Dal + brown rice + sabzi",
                    &["lentils", "brown rice", "mixed veg"],
                    &[Veg],
                ),
                Recipe::new(
                    "Rajma + rice + salad",
                    &["kidney beans", "rice", "cucumber"],
                    &[Veg],
                ),
                Recipe::new(
                    "Chicken curry + roti",
                    &["chicken", "tomato", "spices", "wheat"],
                    &[NonVeg],
                ),
                Recipe::new(
                    "Paneer bhurji + roti",
                    &["paneer", "onion", "tomato", "wheat"],
                    &[Veg],
                ),
            ],
        )
        .with_course(
            Course::Dinner,
            vec![
                Recipe::new("Grilled fish + veg", &["fish", "lemon", "spinach"], &[NonVeg]),
                Recipe::new(
                    "Mixed vegetable curry + roti",
                    &["mixed veg", "spices", "wheat"],
                    &[Veg],
                ),
                Recipe::new(
                    "Chole + bhatura (small)",
                    &["chickpeas", "spices", "flour"],
                    &[Veg],
                ),
                Recipe::new("Palak paneer + roti", &["spinach", "paneer", "wheat"], &[Veg]),
            ],
        )
        .with_course(
            Course::Snack,
            vec![
                Recipe::new("Roasted chana", &["roasted chana"], &[Veg]),
                Recipe::new("Fruit + curd", &["apple", "curd"], &[Veg]),
                Recipe::new("Peanut chikki (small)", &["peanuts", "jaggery"], &[Veg]),
                Recipe::new(
                    "Buttermilk + roasted makhana",
                    &["buttermilk", "makhana"],
                    &[Veg],
                ),
            ],
        )
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_covers_every_course() {
        let catalog = RecipeCatalog::builtin();
        for course in [Course::Breakfast, Course::Lunch, Course::Dinner, Course::Snack] {
            assert_eq!(catalog.recipes_for(course).len(), 4);
        }
    }

    #[test]
    fn test_builtin_recipes_are_tagged() {
        assert!(
            RecipeCatalog::builtin()
                .all_recipes()
                .all(|r| !r.tags.is_empty() && !r.ingredients.is_empty())
        );
    }

    #[test]
    fn test_snacks_have_no_non_veg_option() {
        let snacks = RecipeCatalog::builtin().recipes_for(Course::Snack);
        assert!(snacks.iter().all(|r| !r.has_tag(DietTag::NonVeg)));
    }

    #[test]
    fn test_empty_catalog_returns_empty_slice() {
        assert!(RecipeCatalog::new().recipes_for(Course::Lunch).is_empty());
    }
}
