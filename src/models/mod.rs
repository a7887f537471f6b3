pub mod budget;
pub mod entry;
pub mod meal;
pub mod nutrients;
pub mod summary;

pub use budget::{BudgetPreset, DailyBudget, MealCalorieSplit};
pub use entry::LoggedFoodEntry;
pub use meal::{MealScope, MealType};
pub use nutrients::{MacroGrams, Nutrient, NutrientTotals, NutritionItem};
pub use summary::NutritionSummary;
