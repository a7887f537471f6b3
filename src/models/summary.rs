use crate::models::meal::MealScope;
use crate::models::nutrients::{Nutrient, NutrientTotals};

/// Consumed vs target for one scope. Derived on every query, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NutritionSummary {
    pub scope: MealScope,
    pub consumed: NutrientTotals,
    pub target: NutrientTotals,
    /// Raw `consumed / target`; may exceed 1.0. Zero when the target is zero.
    pub ratio: NutrientTotals,
}

impl NutritionSummary {
    /// Ratio for display, capped at 100%.
    pub fn progress(&self, nutrient: Nutrient) -> f64 {
        self.ratio.capped(1.0).get(nutrient)
    }

    /// Nutrients whose consumption has passed the target.
    pub fn over_target(&self) -> Vec<Nutrient> {
        Nutrient::ALL
            .into_iter()
            .filter(|n| self.ratio.get(*n) > 1.0)
            .collect()
    }

    /// Target minus consumed, floored at zero.
    pub fn remaining(&self) -> NutrientTotals {
        self.target.zip_with(&self.consumed, |t, c| (t - c).max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_summary() -> NutritionSummary {
        NutritionSummary {
            scope: MealScope::Today,
            consumed: NutrientTotals::new(2200.0, 100.0, 125.0, 0.0),
            target: NutrientTotals::new(2000.0, 150.0, 250.0, 44.0),
            ratio: NutrientTotals::new(1.1, 100.0 / 150.0, 0.5, 0.0),
        }
    }

    #[test]
    fn test_progress_capped() {
        let summary = sample_summary();
        assert_eq!(summary.progress(Nutrient::Calories), 1.0);
        assert_eq!(summary.progress(Nutrient::Carbs), 0.5);
    }

    #[test]
    fn test_over_target_and_remaining() {
        let summary = sample_summary();
        assert_eq!(summary.over_target(), vec![Nutrient::Calories]);
        assert_eq!(
            summary.remaining(),
            NutrientTotals::new(0.0, 50.0, 125.0, 44.0)
        );
    }
}
