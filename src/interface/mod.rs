pub mod prompts;
pub mod render;

pub use prompts::{
    collect_budget, parse_meal_scope, parse_meal_type, prompt_manual_macros, prompt_meal_split,
    prompt_preset, prompt_total_calories, prompt_yes_no, suggest_meal_scope,
};
pub use render::{
    display_day_report, display_entries, display_macros, display_summary, progress_bar,
};
