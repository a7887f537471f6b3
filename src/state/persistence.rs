use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::models::{DailyBudget, LoggedFoodEntry, Nutrient, NutrientTotals, NutritionSummary};

/// Load a budget from a JSON file in the budget provider's shape.
pub fn load_budget<P: AsRef<Path>>(path: P) -> Result<DailyBudget> {
    let content = fs::read_to_string(path.as_ref())?;
    let budget: DailyBudget = serde_json::from_str(&content)?;
    tracing::debug!(
        path = %path.as_ref().display(),
        total_calories = budget.total_calories,
        "loaded budget"
    );
    Ok(budget)
}

/// Save a budget as pretty JSON.
pub fn save_budget<P: AsRef<Path>>(path: P, budget: &DailyBudget) -> Result<()> {
    let json = serde_json::to_string_pretty(budget)?;
    fs::write(path.as_ref(), json)?;
    tracing::info!(path = %path.as_ref().display(), "saved budget");
    Ok(())
}

/// Load meal-log entries from a JSON array.
///
/// Every entry is validated; the first invalid one fails the load.
pub fn load_entries<P: AsRef<Path>>(path: P) -> Result<Vec<LoggedFoodEntry>> {
    let content = fs::read_to_string(path.as_ref())?;
    let entries: Vec<LoggedFoodEntry> = serde_json::from_str(&content)?;
    for entry in &entries {
        entry.validate()?;
    }
    tracing::debug!(
        path = %path.as_ref().display(),
        count = entries.len(),
        "loaded meal log"
    );
    Ok(entries)
}

/// Save meal-log entries as a pretty JSON array.
pub fn save_entries<P: AsRef<Path>>(path: P, entries: &[LoggedFoodEntry]) -> Result<()> {
    let json = serde_json::to_string_pretty(entries)?;
    fs::write(path.as_ref(), json)?;
    tracing::info!(
        path = %path.as_ref().display(),
        count = entries.len(),
        "saved meal log"
    );
    Ok(())
}

/// One CSV row: `id,meal_type,calories,protein,carbs,fats`.
#[derive(Debug, Deserialize)]
struct EntryRecord {
    #[serde(default)]
    id: String,
    meal_type: String,
    calories: f64,
    protein: f64,
    carbs: f64,
    fats: f64,
}

/// Read entries from a CSV file with a header row.
///
/// Meal types are matched case-insensitively; an unknown one fails the import.
pub fn import_entries_csv<P: AsRef<Path>>(path: P) -> Result<Vec<LoggedFoodEntry>> {
    let mut rdr = csv::Reader::from_path(path.as_ref())?;
    let mut entries = Vec::new();

    for record in rdr.deserialize() {
        let record: EntryRecord = record?;
        let entry = LoggedFoodEntry::new(
            record.id,
            record.meal_type.parse()?,
            NutrientTotals::new(record.calories, record.protein, record.carbs, record.fats),
        );
        entry.validate()?;
        entries.push(entry);
    }

    tracing::debug!(
        path = %path.as_ref().display(),
        count = entries.len(),
        "imported entries from CSV"
    );
    Ok(entries)
}

/// Write a day report as CSV, one row per scope and nutrient.
///
/// Consumed and target are rounded for presentation; ratios keep 3 decimals.
pub fn write_report_csv<P: AsRef<Path>>(path: P, report: &[NutritionSummary]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path.as_ref())?;

    wtr.write_record(["scope", "nutrient", "consumed", "target", "ratio"])?;

    for summary in report {
        let consumed = summary.consumed.rounded();
        let target = summary.target.rounded();
        for nutrient in Nutrient::ALL {
            wtr.write_record([
                summary.scope.tag().to_string(),
                nutrient.label().to_lowercase(),
                format!("{:.0}", consumed.get(nutrient)),
                format!("{:.0}", target.get(nutrient)),
                format!("{:.3}", summary.ratio.get(nutrient)),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
