use serde::{Deserialize, Serialize};

use crate::error::{BudgetError, Result};
use crate::models::meal::MealType;
use crate::models::nutrients::{Nutrient, NutrientTotals};

/// A food logged under a meal, with amounts already resolved for the
/// logged quantity and unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggedFoodEntry {
    /// Opaque id, unique within a meal log. Empty until assigned.
    #[serde(default)]
    pub id: String,

    pub meal_type: MealType,

    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl LoggedFoodEntry {
    pub fn new(id: impl Into<String>, meal_type: MealType, nutrients: NutrientTotals) -> Self {
        Self {
            id: id.into(),
            meal_type,
            calories: nutrients.calories,
            protein: nutrients.protein,
            carbs: nutrients.carbs,
            fats: nutrients.fats,
        }
    }

    pub fn nutrients(&self) -> NutrientTotals {
        NutrientTotals::new(self.calories, self.protein, self.carbs, self.fats)
    }

    /// Amounts must be finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        let nutrients = self.nutrients();
        for nutrient in Nutrient::ALL {
            let value = nutrients.get(nutrient);
            if !value.is_finite() || value < 0.0 {
                return Err(BudgetError::Validation(format!(
                    "entry '{}': {} must be a non-negative number, got {}",
                    self.id,
                    nutrient.label().to_lowercase(),
                    value
                )));
            }
        }
        Ok(())
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{} [{}]: {} kcal, P:{} C:{} F:{}",
            self.id,
            self.meal_type.tag(),
            self.calories,
            self.protein,
            self.carbs,
            self.fats
        )
    }
}
