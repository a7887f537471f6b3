use std::collections::HashSet;

use crate::engine;
use crate::error::{BudgetError, Result};
use crate::models::{
    DailyBudget, LoggedFoodEntry, MealScope, MealType, NutrientTotals, NutritionSummary,
};

/// Holds the day's logged entries and keeps their ids unique.
pub struct MealLogManager {
    /// Entries in the order they were logged.
    entries: Vec<LoggedFoodEntry>,
}

impl MealLogManager {
    /// Create a manager from loaded entries.
    ///
    /// Entries with an empty or repeated id get a fresh one.
    pub fn new(entries: Vec<LoggedFoodEntry>) -> Self {
        let mut manager = Self {
            entries: Vec::with_capacity(entries.len()),
        };
        let mut seen = HashSet::new();

        for mut entry in entries {
            if entry.id.is_empty() || !seen.insert(entry.id.clone()) {
                let fresh = manager.next_id(entry.meal_type, &seen);
                if !entry.id.is_empty() {
                    tracing::warn!(old = %entry.id, new = %fresh, "duplicate entry id reassigned");
                }
                seen.insert(fresh.clone());
                entry.id = fresh;
            }
            manager.entries.push(entry);
        }

        manager
    }

    /// First unused `{meal}-{n}` id.
    fn next_id(&self, meal: MealType, taken: &HashSet<String>) -> String {
        (1..)
            .map(|n| format!("{}-{}", meal.tag(), n))
            .find(|id| !taken.contains(id) && self.get_entry(id).is_none())
            .unwrap_or_default()
    }

    pub fn get_entry(&self, id: &str) -> Option<&LoggedFoodEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Log a food under a meal. A missing id is generated.
    pub fn add_entry(
        &mut self,
        meal: MealType,
        nutrients: NutrientTotals,
        id: Option<String>,
    ) -> Result<&LoggedFoodEntry> {
        let id = match id {
            Some(id) if self.get_entry(&id).is_some() => {
                return Err(BudgetError::Validation(format!(
                    "entry id '{}' is already in use",
                    id
                )));
            }
            Some(id) if !id.is_empty() => id,
            _ => self.next_id(meal, &HashSet::new()),
        };

        let entry = LoggedFoodEntry::new(id, meal, nutrients);
        entry.validate()?;
        tracing::info!(entry = %entry.debug_string(), "logged entry");

        self.entries.push(entry);
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Remove an entry by id.
    pub fn remove_entry(&mut self, id: &str) -> Result<LoggedFoodEntry> {
        let index = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| BudgetError::EntryNotFound(id.to_string()))?;

        let removed = self.entries.remove(index);
        tracing::info!(entry = %removed.debug_string(), "removed entry");
        Ok(removed)
    }

    /// Append already-built entries (e.g. from a CSV import), fixing ids.
    ///
    /// All-or-nothing: if any entry is invalid the log is left untouched.
    pub fn extend(&mut self, entries: Vec<LoggedFoodEntry>) -> Result<usize> {
        let mut taken = HashSet::new();
        let mut staged = Vec::with_capacity(entries.len());

        for mut entry in entries {
            let keep_id = !entry.id.is_empty()
                && self.get_entry(&entry.id).is_none()
                && !taken.contains(&entry.id);
            if !keep_id {
                entry.id = self.next_id(entry.meal_type, &taken);
            }
            entry.validate()?;
            taken.insert(entry.id.clone());
            staged.push(entry);
        }

        let added = staged.len();
        for entry in &staged {
            tracing::info!(entry = %entry.debug_string(), "logged entry");
        }
        self.entries.extend(staged);
        Ok(added)
    }

    pub fn entries(&self) -> &[LoggedFoodEntry] {
        &self.entries
    }

    /// Entries logged under one meal.
    pub fn entries_for(&self, meal: MealType) -> Vec<&LoggedFoodEntry> {
        self.entries.iter().filter(|e| e.meal_type == meal).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Summary of the current entries against a budget.
    pub fn summary(&self, budget: &DailyBudget, scope: MealScope) -> Result<NutritionSummary> {
        engine::build_summary(budget, &self.entries, scope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nutrients(cal: f64) -> NutrientTotals {
        NutrientTotals::new(cal, 1.0, 2.0, 3.0)
    }

    #[test]
    fn test_new_assigns_missing_and_duplicate_ids() {
        let entries = vec![
            LoggedFoodEntry::new("", MealType::Lunch, nutrients(100.0)),
            LoggedFoodEntry::new("x", MealType::Dinner, nutrients(200.0)),
            LoggedFoodEntry::new("x", MealType::Dinner, nutrients(300.0)),
        ];
        let manager = MealLogManager::new(entries);

        let ids: Vec<&str> = manager.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["lunch-1", "x", "dinner-1"]);
    }

    #[test]
    fn test_add_and_remove() {
        let mut manager = MealLogManager::new(Vec::new());
        let id = manager
            .add_entry(MealType::Breakfast, nutrients(300.0), None)
            .unwrap()
            .id
            .clone();
        assert_eq!(id, "breakfast-1");

        manager
            .add_entry(MealType::Breakfast, nutrients(50.0), None)
            .unwrap();
        assert_eq!(manager.entries_for(MealType::Breakfast).len(), 2);

        let removed = manager.remove_entry(&id).unwrap();
        assert_eq!(removed.calories, 300.0);
        assert_eq!(manager.len(), 1);

        assert!(matches!(
            manager.remove_entry(&id),
            Err(BudgetError::EntryNotFound(_))
        ));
    }

    #[test]
    fn test_add_rejects_duplicate_id_and_negative() {
        let mut manager = MealLogManager::new(Vec::new());
        manager
            .add_entry(MealType::Lunch, nutrients(10.0), Some("a".to_string()))
            .unwrap();
        assert!(
            manager
                .add_entry(MealType::Lunch, nutrients(10.0), Some("a".to_string()))
                .is_err()
        );
        assert!(
            manager
                .add_entry(MealType::Lunch, nutrients(-10.0), None)
                .is_err()
        );
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn test_extend_is_all_or_nothing() {
        let mut manager = MealLogManager::new(Vec::new());
        let batch = vec![
            LoggedFoodEntry::new("a", MealType::Breakfast, nutrients(200.0)),
            LoggedFoodEntry::new("b", MealType::Lunch, nutrients(-5.0)),
        ];

        assert!(manager.extend(batch).is_err());
        assert_eq!(manager.len(), 0);
        assert!(manager.get_entry("a").is_none());
    }

    #[test]
    fn test_extend_fixes_ids_within_batch() {
        let mut manager = MealLogManager::new(vec![LoggedFoodEntry::new(
            "a",
            MealType::Dinner,
            nutrients(100.0),
        )]);
        let batch = vec![
            LoggedFoodEntry::new("a", MealType::Snacks, nutrients(50.0)),
            LoggedFoodEntry::new("", MealType::Snacks, nutrients(60.0)),
            LoggedFoodEntry::new("c", MealType::Lunch, nutrients(70.0)),
            LoggedFoodEntry::new("c", MealType::Lunch, nutrients(80.0)),
        ];

        assert_eq!(manager.extend(batch).unwrap(), 4);
        let ids: Vec<&str> = manager.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "snacks-1", "snacks-2", "c", "lunch-1"]);
    }
}
