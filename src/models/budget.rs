use serde::{Deserialize, Serialize};

use crate::engine::constants::{
    DEFAULT_BREAKFAST_CALORIES, DEFAULT_CARBS_GRAMS, DEFAULT_DINNER_CALORIES,
    DEFAULT_FATS_GRAMS, DEFAULT_LUNCH_CALORIES, DEFAULT_PROTEIN_GRAMS, DEFAULT_SNACKS_CALORIES,
    DEFAULT_TOTAL_CALORIES, MEAL_SPLIT_TOLERANCE, PRESET_BASE_CALORIES_FEMALE,
    PRESET_BASE_CALORIES_OTHER, PRESET_MAINTENANCE_OFFSET, PRESET_MUSCLE_GAIN_OFFSET,
};
use crate::engine::calculations::auto_macro_grams;
use crate::error::{BudgetError, Result};
use crate::models::meal::MealType;
use crate::models::nutrients::MacroGrams;

/// Calories allotted to each meal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MealCalorieSplit {
    pub breakfast: f64,
    pub lunch: f64,
    pub dinner: f64,
    pub snacks: f64,
}

impl MealCalorieSplit {
    pub fn new(breakfast: f64, lunch: f64, dinner: f64, snacks: f64) -> Self {
        Self {
            breakfast,
            lunch,
            dinner,
            snacks,
        }
    }

    pub fn get(&self, meal: MealType) -> f64 {
        match meal {
            MealType::Breakfast => self.breakfast,
            MealType::Lunch => self.lunch,
            MealType::Dinner => self.dinner,
            MealType::Snacks => self.snacks,
        }
    }

    pub fn set(&mut self, meal: MealType, calories: f64) {
        match meal {
            MealType::Breakfast => self.breakfast = calories,
            MealType::Lunch => self.lunch = calories,
            MealType::Dinner => self.dinner = calories,
            MealType::Snacks => self.snacks = calories,
        }
    }

    pub fn total(&self) -> f64 {
        MealType::ALL.iter().map(|m| self.get(*m)).sum()
    }

    /// Same proportions, rescaled to `total_calories` in whole kcal.
    ///
    /// Snacks absorb the rounding remainder so the meals add up to the total.
    /// An empty split falls back to the default proportions.
    pub fn scaled_to(&self, total_calories: f64) -> Self {
        let base = if self.total() > 0.0 {
            *self
        } else {
            Self::default()
        };
        let factor = total_calories / base.total();

        let mut scaled = base;
        let mut assigned = 0.0;
        for meal in [MealType::Breakfast, MealType::Lunch, MealType::Dinner] {
            let calories = (base.get(meal) * factor).round();
            scaled.set(meal, calories);
            assigned += calories;
        }
        scaled.set(MealType::Snacks, (total_calories - assigned).max(0.0));
        scaled
    }
}

impl Default for MealCalorieSplit {
    fn default() -> Self {
        Self::new(
            DEFAULT_BREAKFAST_CALORIES,
            DEFAULT_LUNCH_CALORIES,
            DEFAULT_DINNER_CALORIES,
            DEFAULT_SNACKS_CALORIES,
        )
    }
}

/// The user's daily calorie budget, in the budget provider's JSON shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyBudget {
    pub total_calories: f64,

    /// Manually entered grams. Ignored when `auto_calculate_macros` is set.
    pub macros: MacroGrams,

    pub meals: MealCalorieSplit,

    #[serde(default)]
    pub auto_calculate_macros: bool,
}

impl DailyBudget {
    /// Effective macro grams per day.
    ///
    /// Auto mode derives grams from `total_calories` and overrides the manual
    /// grams; a zero total yields zero grams. Manual grams must be >= 0.
    pub fn macro_targets(&self) -> Result<MacroGrams> {
        if self.auto_calculate_macros {
            Ok(auto_macro_grams(self.total_calories))
        } else {
            self.macros.validate()?;
            Ok(self.macros)
        }
    }

    /// Caller-side input validation, as done by the budget form before saving.
    ///
    /// The engine itself never calls this.
    pub fn validate(&self) -> Result<()> {
        if !self.total_calories.is_finite() || self.total_calories <= 0.0 {
            return Err(BudgetError::Validation(format!(
                "total calories must be greater than 0, got {}",
                self.total_calories
            )));
        }

        for meal in MealType::ALL {
            let calories = self.meals.get(meal);
            if !calories.is_finite() || calories < 0.0 {
                return Err(BudgetError::Validation(format!(
                    "{} calories must be a non-negative number, got {}",
                    meal.tag(),
                    calories
                )));
            }
        }

        if !self.auto_calculate_macros {
            self.macros.validate()?;
        }

        let meal_sum = self.meals.total();
        if (meal_sum - self.total_calories).abs() > MEAL_SPLIT_TOLERANCE {
            return Err(BudgetError::Validation(format!(
                "sum of meals ({}) doesn't match total calories ({})",
                meal_sum, self.total_calories
            )));
        }

        Ok(())
    }
}

impl Default for DailyBudget {
    fn default() -> Self {
        Self {
            total_calories: DEFAULT_TOTAL_CALORIES,
            macros: MacroGrams::new(DEFAULT_PROTEIN_GRAMS, DEFAULT_CARBS_GRAMS, DEFAULT_FATS_GRAMS),
            meals: MealCalorieSplit::default(),
            auto_calculate_macros: true,
        }
    }
}

/// Daily calorie presets offered by the budget form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetPreset {
    WeightLoss,
    Maintenance,
    MuscleGain,
}

impl BudgetPreset {
    pub const ALL: [BudgetPreset; 3] = [
        BudgetPreset::WeightLoss,
        BudgetPreset::Maintenance,
        BudgetPreset::MuscleGain,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BudgetPreset::WeightLoss => "Weight Loss",
            BudgetPreset::Maintenance => "Maintenance",
            BudgetPreset::MuscleGain => "Muscle Gain",
        }
    }

    /// Estimated kcal/day. Female profiles start from a lower base.
    pub fn calories(self, female: bool) -> f64 {
        let base = if female {
            PRESET_BASE_CALORIES_FEMALE
        } else {
            PRESET_BASE_CALORIES_OTHER
        };
        match self {
            BudgetPreset::WeightLoss => base,
            BudgetPreset::Maintenance => base + PRESET_MAINTENANCE_OFFSET,
            BudgetPreset::MuscleGain => base + PRESET_MUSCLE_GAIN_OFFSET,
        }
    }
}
