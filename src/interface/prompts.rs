use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::engine::auto_macro_grams;
use crate::engine::constants::MEAL_SUGGESTION_THRESHOLD;
use crate::error::{BudgetError, Result};
use crate::models::{BudgetPreset, DailyBudget, MacroGrams, MealCalorieSplit, MealScope, MealType};

/// Closest known meal tag to `input`, if any is similar enough.
pub fn suggest_meal_scope(input: &str) -> Option<MealScope> {
    let input = input.trim().to_lowercase();

    MealScope::ALL
        .into_iter()
        .map(|scope| (scope, jaro_winkler(scope.tag(), &input)))
        .filter(|(_, score)| *score > MEAL_SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(scope, _)| scope)
}

/// Parse a meal tag, attaching a suggestion to the error when one exists.
pub fn parse_meal_scope(input: &str) -> Result<MealScope> {
    input.parse().map_err(|_| match suggest_meal_scope(input) {
        Some(scope) => {
            BudgetError::InvalidMealType(format!("{} (did you mean '{}'?)", input, scope.tag()))
        }
        None => BudgetError::InvalidMealType(input.to_string()),
    })
}

/// Parse a meal tag that must name a single meal, not Today.
pub fn parse_meal_type(input: &str) -> Result<MealType> {
    match parse_meal_scope(input)? {
        MealScope::Meal(meal) => Ok(meal),
        MealScope::Today => Err(BudgetError::InvalidMealType(format!(
            "{} (entries must be logged under a single meal)",
            input
        ))),
    }
}

fn parse_number(input: &str) -> Result<f64> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| BudgetError::Validation(format!("Invalid number: {}", input)))?;

    if !value.is_finite() || value < 0.0 {
        return Err(BudgetError::Validation(format!(
            "Value must be a non-negative number: {}",
            input
        )));
    }

    Ok(value)
}

fn prompt_number(prompt: &str, default: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    parse_number(&input)
}

/// Prompt for a calorie preset.
pub fn prompt_preset() -> Result<BudgetPreset> {
    let options: Vec<&str> = BudgetPreset::ALL.iter().map(|p| p.label()).collect();

    let selection = Select::new()
        .with_prompt("Choose a preset")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(BudgetPreset::ALL[selection.min(BudgetPreset::ALL.len() - 1)])
}

/// Prompt for the total daily calorie budget.
pub fn prompt_total_calories(default: f64) -> Result<f64> {
    let total = prompt_number("Total daily calorie budget (kcal)", default)?;
    if total <= 0.0 {
        return Err(BudgetError::Validation(
            "Total calories must be greater than 0".to_string(),
        ));
    }
    Ok(total)
}

/// Prompt for the calories of each meal.
pub fn prompt_meal_split(defaults: &MealCalorieSplit) -> Result<MealCalorieSplit> {
    println!(
        "Meal calories must add up to the daily total ({:.0} kcal).",
        defaults.total()
    );
    let mut split = *defaults;
    for meal in MealType::ALL {
        let calories = prompt_number(&format!("{} calories", meal.label()), defaults.get(meal))?;
        split.set(meal, calories);
    }
    Ok(split)
}

/// Prompt for manual macro grams.
pub fn prompt_manual_macros(defaults: &MacroGrams) -> Result<MacroGrams> {
    Ok(MacroGrams::new(
        prompt_number("Protein (g)", defaults.protein)?,
        prompt_number("Carbs (g)", defaults.carbs)?,
        prompt_number("Fats (g)", defaults.fats)?,
    ))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Walk the user through the budget form, starting from `current`.
///
/// The returned budget has passed `DailyBudget::validate`.
pub fn collect_budget(current: &DailyBudget) -> Result<DailyBudget> {
    let preset = prompt_preset()?;
    let female = prompt_yes_no("Use the female baseline for presets?", false)?;
    let estimate = preset.calories(female);
    println!("Estimated Calories: {:.0} kcal/day", estimate);

    let total_calories = prompt_total_calories(estimate)?;
    let meals = prompt_meal_split(&current.meals.scaled_to(total_calories))?;

    let auto_calculate_macros =
        prompt_yes_no("Auto-calculate macros (30% protein, 50% carbs, 20% fats)?", true)?;

    let macros = if auto_calculate_macros {
        let derived = auto_macro_grams(total_calories);
        println!(
            "Protein {:.0} g, Carbs {:.0} g, Fats {:.0} g",
            derived.protein, derived.carbs, derived.fats
        );
        derived
    } else {
        prompt_manual_macros(&current.macros)?
    };

    let budget = DailyBudget {
        total_calories,
        macros,
        meals,
        auto_calculate_macros,
    };
    budget.validate()?;

    Ok(budget)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggest_meal_scope() {
        assert_eq!(
            suggest_meal_scope("breakfst"),
            Some(MealScope::Meal(MealType::Breakfast))
        );
        assert_eq!(
            suggest_meal_scope("Snack"),
            Some(MealScope::Meal(MealType::Snacks))
        );
        assert_eq!(suggest_meal_scope("xyz"), None);
    }

    #[test]
    fn test_parse_meal_scope_with_hint() {
        let err = parse_meal_scope("dinnr").unwrap_err();
        assert!(err.to_string().contains("did you mean 'dinner'"));
        assert_eq!(parse_meal_scope("Today").unwrap(), MealScope::Today);
    }

    #[test]
    fn test_parse_meal_type_rejects_today() {
        assert!(matches!(
            parse_meal_type("today"),
            Err(BudgetError::InvalidMealType(_))
        ));
        assert_eq!(parse_meal_type("lunch").unwrap(), MealType::Lunch);
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number(" 450 ").unwrap(), 450.0);
        assert!(parse_number("abc").is_err());
        assert!(parse_number("-5").is_err());
    }
}
