pub mod calculations;
pub mod constants;

pub use calculations::{
    aggregate_consumed, aggregate_consumed_tag, auto_macro_grams, build_day_report,
    build_summary, derive_macro_targets, progress_ratio, resolve_meal_target,
    resolve_meal_target_tag, round_half_up,
};
pub use constants::*;
