pub mod cli;
pub mod engine;
pub mod error;
pub mod interface;
pub mod models;
pub mod state;

pub use error::{BudgetError, Result};
pub use models::{DailyBudget, LoggedFoodEntry, MealScope, MealType, NutritionSummary};
