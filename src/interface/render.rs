use crate::engine::constants::PROGRESS_BAR_WIDTH;
use crate::models::{LoggedFoodEntry, MacroGrams, Nutrient, NutritionSummary};

/// Render a ratio as a fixed-width bar, capped at 100%.
pub fn progress_bar(ratio: f64, width: usize) -> String {
    let clamped = if ratio.is_finite() {
        ratio.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = (clamped * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

/// Display consumed vs target for one scope.
pub fn display_summary(summary: &NutritionSummary) {
    let consumed = summary.consumed.rounded();
    let target = summary.target.rounded();

    println!("=== {} ===", summary.scope);

    for nutrient in Nutrient::ALL {
        let ratio = summary.ratio.get(nutrient);
        let over = if ratio > 1.0 { "  (over)" } else { "" };
        println!(
            "  {:<9} {} {:>5.0} / {:<5.0} {:<4} {:>4.0}%{}",
            nutrient.label(),
            progress_bar(summary.progress(nutrient), PROGRESS_BAR_WIDTH),
            consumed.get(nutrient),
            target.get(nutrient),
            nutrient.unit(),
            ratio * 100.0,
            over
        );
    }

    let remaining = summary.remaining().rounded();
    println!(
        "  Remaining: {:.0} kcal, P:{:.0} g C:{:.0} g F:{:.0} g",
        remaining.calories, remaining.protein, remaining.carbs, remaining.fats
    );
    println!();
}

/// Display Today followed by every meal.
pub fn display_day_report(report: &[NutritionSummary]) {
    if report.is_empty() {
        println!("No summary available.");
        return;
    }

    println!();
    for summary in report {
        display_summary(summary);
    }
}

/// Display macro grams and the energy they imply.
pub fn display_macros(total_calories: f64, macros: &MacroGrams) {
    println!();
    println!("=== Macros for {:.0} kcal ===", total_calories);
    println!("  Protein: {:.0} g", macros.protein);
    println!("  Carbs:   {:.0} g", macros.carbs);
    println!("  Fats:    {:.0} g", macros.fats);
    println!("  Energy from macros: {:.0} kcal", macros.energy_kcal());
    println!();
}

/// Display a list of logged entries.
pub fn display_entries(entries: &[LoggedFoodEntry], title: &str) {
    if entries.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, entries.len());

    let max_id_len = entries.iter().map(|e| e.id.len()).max().unwrap_or(8);

    for entry in entries {
        println!(
            "  {:<width$}  {:<9} {:>5.0} kcal  P:{:.1} C:{:.1} F:{:.1}",
            entry.id,
            entry.meal_type.label(),
            entry.calories,
            entry.protein,
            entry.carbs,
            entry.fats,
            width = max_id_len
        );
    }

    println!();
}
