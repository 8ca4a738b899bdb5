pub mod prompts;
pub mod render;

pub use prompts::{
    collect_profile, prompt_choice, prompt_number, prompt_text, prompt_yes_no, resolve_choice,
    ChoiceMatch,
};
pub use render::{display_grocery_list, display_meal_plan, display_summary, display_workout};
