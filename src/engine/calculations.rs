use crate::engine::constants::*;
use crate::error::{BudgetError, Result};
use crate::models::{
    DailyBudget, LoggedFoodEntry, MacroGrams, MealScope, MealType, Nutrient, NutrientTotals,
    NutritionSummary,
};

/// Round to the nearest integer, halves rounding up.
pub fn round_half_up(value: f64) -> f64 {
    if value >= 0.0 {
        value.round()
    } else {
        (value + 0.5).floor()
    }
}

/// Macro grams implied by a calorie total at the fixed 30/50/20 split.
///
/// Non-positive totals yield zero grams.
pub fn auto_macro_grams(total_calories: f64) -> MacroGrams {
    if total_calories.is_nan() || total_calories <= 0.0 {
        return MacroGrams::default();
    }
    MacroGrams::new(
        round_half_up(total_calories * PROTEIN_CALORIE_RATIO / KCAL_PER_GRAM_PROTEIN),
        round_half_up(total_calories * CARBS_CALORIE_RATIO / KCAL_PER_GRAM_CARBS),
        round_half_up(total_calories * FATS_CALORIE_RATIO / KCAL_PER_GRAM_FATS),
    )
}

/// Derive the day's macro grams.
///
/// With `auto_calculate` the grams come from `total_calories`; otherwise
/// `manual` is returned unchanged after checking it is present and >= 0.
pub fn derive_macro_targets(
    total_calories: f64,
    auto_calculate: bool,
    manual: Option<&MacroGrams>,
) -> Result<MacroGrams> {
    if !total_calories.is_finite() || total_calories <= 0.0 {
        return Err(BudgetError::Validation(format!(
            "total calories must be greater than 0, got {}",
            total_calories
        )));
    }

    if auto_calculate {
        return Ok(auto_macro_grams(total_calories));
    }

    let manual = manual.ok_or_else(|| {
        BudgetError::Validation(
            "manual macro grams are required when auto-calculate is off".to_string(),
        )
    })?;
    manual.validate()?;
    Ok(*manual)
}

/// Targets for a scope.
///
/// Today uses the day's totals as-is. A meal gets its calorie allotment and
/// the day's macros scaled by `meal_calories / total_calories`, each rounded
/// on its own. Per-meal rounding drift is not redistributed.
pub fn resolve_meal_target(budget: &DailyBudget, scope: MealScope) -> Result<NutrientTotals> {
    let macros = budget.macro_targets()?;

    match scope {
        MealScope::Today => Ok(NutrientTotals::from_macros(budget.total_calories, &macros)),
        MealScope::Meal(meal) => {
            let meal_calories = budget.meals.get(meal);
            let ratio = if budget.total_calories > 0.0 {
                meal_calories / budget.total_calories
            } else {
                0.0
            };

            if ratio == 0.0 {
                tracing::debug!(meal = meal.tag(), "zero meal ratio, target is all-zero");
                return Ok(NutrientTotals::zero());
            }

            Ok(NutrientTotals::new(
                meal_calories,
                round_half_up(macros.protein * ratio),
                round_half_up(macros.carbs * ratio),
                round_half_up(macros.fats * ratio),
            ))
        }
    }
}

/// `resolve_meal_target` for a raw meal tag such as `"breakfast"` or `"Today"`.
pub fn resolve_meal_target_tag(budget: &DailyBudget, tag: &str) -> Result<NutrientTotals> {
    resolve_meal_target(budget, tag.parse()?)
}

/// Sum values in a canonical order so the result does not depend on the
/// order entries were logged in.
fn canonical_sum(mut values: Vec<f64>) -> f64 {
    values.sort_by(f64::total_cmp);
    values.into_iter().fold(0.0, |acc, v| acc + v)
}

fn sum_meal(entries: &[LoggedFoodEntry], meal: MealType) -> NutrientTotals {
    let selected: Vec<NutrientTotals> = entries
        .iter()
        .filter(|e| e.meal_type == meal)
        .map(LoggedFoodEntry::nutrients)
        .collect();

    let field =
        |nutrient: Nutrient| canonical_sum(selected.iter().map(|n| n.get(nutrient)).collect());

    NutrientTotals::new(
        field(Nutrient::Calories),
        field(Nutrient::Protein),
        field(Nutrient::Carbs),
        field(Nutrient::Fats),
    )
}

/// Consumed totals for a scope, in full precision.
///
/// Today is the sum of the four meal totals, so it always equals that sum.
/// An empty selection is all-zero.
pub fn aggregate_consumed(entries: &[LoggedFoodEntry], scope: MealScope) -> NutrientTotals {
    match scope {
        MealScope::Today => MealType::ALL
            .iter()
            .map(|meal| sum_meal(entries, *meal))
            .fold(NutrientTotals::zero(), |acc, t| acc + t),
        MealScope::Meal(meal) => sum_meal(entries, meal),
    }
}

/// `aggregate_consumed` for a raw meal tag.
pub fn aggregate_consumed_tag(entries: &[LoggedFoodEntry], tag: &str) -> Result<NutrientTotals> {
    Ok(aggregate_consumed(entries, tag.parse()?))
}

/// `consumed / target`, or 0 where the target is not positive.
pub fn progress_ratio(consumed: &NutrientTotals, target: &NutrientTotals) -> NutrientTotals {
    consumed.zip_with(target, |c, t| if t > 0.0 { c / t } else { 0.0 })
}

/// Consumed, target and ratio for one scope.
pub fn build_summary(
    budget: &DailyBudget,
    entries: &[LoggedFoodEntry],
    scope: MealScope,
) -> Result<NutritionSummary> {
    let target = resolve_meal_target(budget, scope)?;
    let consumed = aggregate_consumed(entries, scope);
    let ratio = progress_ratio(&consumed, &target);

    Ok(NutritionSummary {
        scope,
        consumed,
        target,
        ratio,
    })
}

/// Summaries for Today and each meal, in display order.
pub fn build_day_report(
    budget: &DailyBudget,
    entries: &[LoggedFoodEntry],
) -> Result<Vec<NutritionSummary>> {
    MealScope::ALL
        .iter()
        .map(|scope| build_summary(budget, entries, *scope))
        .collect()
}
