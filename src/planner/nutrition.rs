use crate::error::Result;
use crate::models::NutritionAnalysis;

/// Stub values per serving.
const STUB_CALORIES: f64 = 400.0;
const STUB_PROTEIN_G: f64 = 25.0;
const STUB_FAT_G: f64 = 12.0;
const STUB_CARBS_G: f64 = 45.0;

/// Source of per-serving nutrition estimates for a recipe.
///
/// The planner only consumes the returned shape, so a local stub and a
/// remote nutrition API are interchangeable.
pub trait NutritionAnalyzer {
    fn analyze(&self, ingredients: &[String], servings: u32) -> Result<NutritionAnalysis>;
}

/// Offline analyzer returning fixed synthetic numbers.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubAnalyzer;

impl NutritionAnalyzer for StubAnalyzer {
    fn analyze(&self, ingredients: &[String], servings: u32) -> Result<NutritionAnalysis> {
        let text = ingredients
            .iter()
            .take(3)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" + ");

        Ok(NutritionAnalysis {
            title: format!("Sample recipe: {}", text),
            calories_per_serving: STUB_CALORIES / servings.max(1) as f64,
            protein_g: STUB_PROTEIN_G,
            fat_g: STUB_FAT_G,
            carbs_g: STUB_CARBS_G,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingredients(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_stub_title_uses_first_three() {
        let analysis = StubAnalyzer
            .analyze(&ingredients(&["poha", "peanuts", "onion", "turmeric"]), 1)
            .unwrap();
        assert_eq!(analysis.title, "Sample recipe: poha + peanuts + onion");
        assert_eq!(analysis.calories_per_serving, 400.0);
        assert_eq!(analysis.protein_g, 25.0);
        assert_eq!(analysis.fat_g, 12.0);
        assert_eq!(analysis.carbs_g, 45.0);
    }

    #[test]
    fn test_stub_divides_by_servings() {
        let items = ingredients(&["rice"]);
        assert_eq!(StubAnalyzer.analyze(&items, 4).unwrap().calories_per_serving, 100.0);
        // Zero servings is treated as one.
        assert_eq!(StubAnalyzer.analyze(&items, 0).unwrap().calories_per_serving, 400.0);
    }
}
