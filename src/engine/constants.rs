/// Share of daily kcal assigned to protein in auto-calculate mode.
pub const PROTEIN_CALORIE_RATIO: f64 = 0.30;

/// Share of daily kcal assigned to carbohydrates in auto-calculate mode.
pub const CARBS_CALORIE_RATIO: f64 = 0.50;

/// Share of daily kcal assigned to fats in auto-calculate mode.
pub const FATS_CALORIE_RATIO: f64 = 0.20;

/// Energy density per gram.
pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
pub const KCAL_PER_GRAM_FATS: f64 = 9.0;

// ─────────────────────────────────────────────────────────────────────────────
// Budget form defaults
// ─────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_TOTAL_CALORIES: f64 = 2000.0;

pub const DEFAULT_BREAKFAST_CALORIES: f64 = 400.0;
pub const DEFAULT_LUNCH_CALORIES: f64 = 700.0;
pub const DEFAULT_DINNER_CALORIES: f64 = 600.0;
pub const DEFAULT_SNACKS_CALORIES: f64 = 300.0;

pub const DEFAULT_PROTEIN_GRAMS: f64 = 100.0;
pub const DEFAULT_CARBS_GRAMS: f64 = 250.0;
pub const DEFAULT_FATS_GRAMS: f64 = 70.0;

/// Largest gap between the meal sum and the daily total still treated as equal.
pub const MEAL_SPLIT_TOLERANCE: f64 = 1e-6;

// ─────────────────────────────────────────────────────────────────────────────
// Calorie presets
// ─────────────────────────────────────────────────────────────────────────────

/// Weight-loss baseline for female profiles.
pub const PRESET_BASE_CALORIES_FEMALE: f64 = 1600.0;

/// Weight-loss baseline for every other profile.
pub const PRESET_BASE_CALORIES_OTHER: f64 = 2000.0;

pub const PRESET_MAINTENANCE_OFFSET: f64 = 400.0;
pub const PRESET_MUSCLE_GAIN_OFFSET: f64 = 800.0;

// ─────────────────────────────────────────────────────────────────────────────
// Display
// ─────────────────────────────────────────────────────────────────────────────

/// Width of a rendered progress bar in cells.
pub const PROGRESS_BAR_WIDTH: usize = 24;

/// Minimum Jaro-Winkler score for a meal tag suggestion.
pub const MEAL_SUGGESTION_THRESHOLD: f64 = 0.7;
