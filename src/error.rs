use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("No session profile found at {0}. Run `desifit onboard` first.")]
    ProfileNotFound(String),

    #[error("Meal plan not found: {0}")]
    MealPlanNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Nutrition analysis failed: {0}")]
    Analysis(String),
}

pub type Result<T> = std::result::Result<T, PlanError>;
