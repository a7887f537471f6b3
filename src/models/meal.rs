use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BudgetError;

/// One of the four meals a food entry can be logged under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    #[serde(alias = "Breakfast")]
    Breakfast,
    #[serde(alias = "Lunch")]
    Lunch,
    #[serde(alias = "Dinner")]
    Dinner,
    #[serde(alias = "Snacks")]
    Snacks,
}

impl MealType {
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snacks,
    ];

    /// Lowercase tag as used by the meal-log provider.
    pub fn tag(self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snacks => "snacks",
        }
    }

    /// Capitalized label for display.
    pub fn label(self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snacks => "Snacks",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MealType {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(MealType::Breakfast),
            "lunch" => Ok(MealType::Lunch),
            "dinner" => Ok(MealType::Dinner),
            "snacks" => Ok(MealType::Snacks),
            _ => Err(BudgetError::InvalidMealType(s.to_string())),
        }
    }
}

/// Scope of a summary query: the whole day or a single meal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MealScope {
    Today,
    Meal(MealType),
}

impl MealScope {
    /// Today followed by every meal, in display order.
    pub const ALL: [MealScope; 5] = [
        MealScope::Today,
        MealScope::Meal(MealType::Breakfast),
        MealScope::Meal(MealType::Lunch),
        MealScope::Meal(MealType::Dinner),
        MealScope::Meal(MealType::Snacks),
    ];

    pub fn tag(self) -> &'static str {
        match self {
            MealScope::Today => "today",
            MealScope::Meal(meal) => meal.tag(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MealScope::Today => "Today",
            MealScope::Meal(meal) => meal.label(),
        }
    }
}

impl From<MealType> for MealScope {
    fn from(meal: MealType) -> Self {
        MealScope::Meal(meal)
    }
}

impl fmt::Display for MealScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MealScope {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("today") {
            return Ok(MealScope::Today);
        }
        s.parse::<MealType>().map(MealScope::Meal)
    }
}
