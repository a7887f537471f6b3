use std::fmt;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use crate::error::{BudgetError, Result};

/// The four tracked quantities of a meal or day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nutrient {
    Calories,
    Protein,
    Carbs,
    Fats,
}

impl Nutrient {
    pub const ALL: [Nutrient; 4] = [
        Nutrient::Calories,
        Nutrient::Protein,
        Nutrient::Carbs,
        Nutrient::Fats,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Nutrient::Calories => "Calories",
            Nutrient::Protein => "Protein",
            Nutrient::Carbs => "Carbs",
            Nutrient::Fats => "Fats",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Nutrient::Calories => "kcal",
            _ => "g",
        }
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Macro grams for a day or a meal.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MacroGrams {
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl MacroGrams {
    pub fn new(protein: f64, carbs: f64, fats: f64) -> Self {
        Self {
            protein,
            carbs,
            fats,
        }
    }

    /// Energy implied by these grams (4/4/9 kcal per gram).
    pub fn energy_kcal(&self) -> f64 {
        use crate::engine::constants::{
            KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FATS, KCAL_PER_GRAM_PROTEIN,
        };
        self.protein * KCAL_PER_GRAM_PROTEIN
            + self.carbs * KCAL_PER_GRAM_CARBS
            + self.fats * KCAL_PER_GRAM_FATS
    }

    /// Reject negative or non-finite grams.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("protein", self.protein),
            ("carbs", self.carbs),
            ("fats", self.fats),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(BudgetError::Validation(format!(
                    "{} grams must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// Calories plus macro grams. Used for consumed totals, targets and ratios.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NutrientTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl NutrientTotals {
    pub fn new(calories: f64, protein: f64, carbs: f64, fats: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fats,
        }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn from_macros(calories: f64, macros: &MacroGrams) -> Self {
        Self::new(calories, macros.protein, macros.carbs, macros.fats)
    }

    pub fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Protein => self.protein,
            Nutrient::Carbs => self.carbs,
            Nutrient::Fats => self.fats,
        }
    }

    /// Apply `f` to every field.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.calories), f(self.protein), f(self.carbs), f(self.fats))
    }

    /// Combine two totals field by field.
    pub fn zip_with(&self, other: &Self, f: impl Fn(f64, f64) -> f64) -> Self {
        Self::new(
            f(self.calories, other.calories),
            f(self.protein, other.protein),
            f(self.carbs, other.carbs),
            f(self.fats, other.fats),
        )
    }

    /// Round every field to the nearest integer, halves rounding up.
    ///
    /// Only for presentation; accumulation keeps full precision.
    pub fn rounded(&self) -> Self {
        self.map(crate::engine::round_half_up)
    }

    /// Clamp every field to `max` (progress bars cap at 1.0).
    pub fn capped(&self, max: f64) -> Self {
        self.map(|v| v.min(max))
    }

    pub fn is_finite(&self) -> bool {
        Nutrient::ALL.iter().all(|n| self.get(*n).is_finite())
    }

    /// Map a provider nutrition list (`Calories`, `Protein`, `Carbohydrates`,
    /// `Fat`) onto totals. Other names are ignored; missing ones stay 0.
    pub fn from_nutrition_list(items: &[NutritionItem]) -> Self {
        items
            .iter()
            .fold(Self::zero(), |mut acc, item| {
                match item.name.as_str() {
                    "Calories" => acc.calories = item.amount,
                    "Protein" => acc.protein = item.amount,
                    "Carbohydrates" => acc.carbs = item.amount,
                    "Fat" => acc.fats = item.amount,
                    _ => {}
                }
                acc
            })
    }
}

impl Add for NutrientTotals {
    type Output = NutrientTotals;

    fn add(self, rhs: Self) -> Self::Output {
        self.zip_with(&rhs, |a, b| a + b)
    }
}

impl AddAssign for NutrientTotals {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// One row of a food's nutrition list as returned by the food provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionItem {
    pub name: String,
    pub amount: f64,
    #[serde(default)]
    pub unit: Option<String>,
}
