use clap::Parser;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use nutri_budget_rs::cli::{Cli, Command};
use nutri_budget_rs::engine::{build_day_report, build_summary, derive_macro_targets};
use nutri_budget_rs::error::Result;
use nutri_budget_rs::interface::{
    collect_budget, display_day_report, display_entries, display_macros, display_summary,
    parse_meal_scope, parse_meal_type, prompt_yes_no,
};
use nutri_budget_rs::models::{DailyBudget, LoggedFoodEntry, NutrientTotals};
use nutri_budget_rs::state::{
    import_entries_csv, load_budget, load_entries, save_budget, save_entries, write_report_csv,
    MealLogManager,
};

fn main() {
    init_logging();

    if let Err(e) = run() {
        if e.is_input_error() {
            eprintln!("Warning: {}", e);
        } else {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` overrides the default level.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("nutri_budget_rs=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Summary { meal } => cmd_summary(&cli.budget, &cli.log, meal.as_deref()),
        Command::Macros { calories } => cmd_macros(calories),
        Command::SetBudget => cmd_set_budget(&cli.budget),
        Command::Log {
            meal,
            calories,
            protein,
            carbs,
            fats,
            id,
        } => cmd_log(
            &cli.log,
            &meal,
            NutrientTotals::new(calories, protein, carbs, fats),
            id,
        ),
        Command::Remove { id } => cmd_remove(&cli.log, &id),
        Command::List => cmd_list(&cli.log),
        Command::Import { path } => cmd_import(&cli.log, &path),
        Command::Export { path } => cmd_export(&cli.budget, &cli.log, &path),
    }
}

/// Load the budget, falling back to the form defaults when the file is missing.
fn budget_or_default(path: &Path) -> Result<DailyBudget> {
    if path.exists() {
        let budget = load_budget(path)?;
        if let Err(e) = budget.validate() {
            tracing::warn!("budget failed validation: {}", e);
        }
        Ok(budget)
    } else {
        tracing::warn!(path = %path.display(), "budget file not found, using defaults");
        Ok(DailyBudget::default())
    }
}

/// Load the meal log; a missing file is an empty log.
fn log_or_empty(path: &Path) -> Result<MealLogManager> {
    let entries: Vec<LoggedFoodEntry> = if path.exists() {
        load_entries(path)?
    } else {
        Vec::new()
    };
    Ok(MealLogManager::new(entries))
}

/// Show progress for one scope or the whole day.
fn cmd_summary(budget_path: &str, log_path: &str, meal: Option<&str>) -> Result<()> {
    let budget = budget_or_default(Path::new(budget_path))?;
    let manager = log_or_empty(Path::new(log_path))?;

    match meal {
        Some(tag) => {
            let scope = parse_meal_scope(tag)?;
            let summary = build_summary(&budget, manager.entries(), scope)?;
            println!();
            display_summary(&summary);
        }
        None => {
            let report = build_day_report(&budget, manager.entries())?;
            display_day_report(&report);
        }
    }

    Ok(())
}

/// Print auto-derived macros for a calorie total.
fn cmd_macros(calories: f64) -> Result<()> {
    let macros = derive_macro_targets(calories, true, None)?;
    display_macros(calories, &macros);
    Ok(())
}

/// Run the interactive budget form and save the result.
fn cmd_set_budget(budget_path: &str) -> Result<()> {
    let path = Path::new(budget_path);
    let current = budget_or_default(path)?;

    let budget = collect_budget(&current)?;

    println!();
    println!(
        "Budget: {:.0} kcal | Breakfast {:.0}, Lunch {:.0}, Dinner {:.0}, Snacks {:.0}",
        budget.total_calories,
        budget.meals.breakfast,
        budget.meals.lunch,
        budget.meals.dinner,
        budget.meals.snacks
    );

    if prompt_yes_no("Save calorie budget?", true)? {
        save_budget(path, &budget)?;
        println!("Calorie budget saved.");
    }

    Ok(())
}

/// Append one entry to the meal log.
fn cmd_log(log_path: &str, meal: &str, nutrients: NutrientTotals, id: Option<String>) -> Result<()> {
    let path = Path::new(log_path);
    let meal = parse_meal_type(meal)?;
    let mut manager = log_or_empty(path)?;

    let entry = manager.add_entry(meal, nutrients, id)?;
    println!("Logged {} under {}.", entry.id, meal);

    save_entries(path, manager.entries())?;
    Ok(())
}

/// Remove one entry from the meal log.
fn cmd_remove(log_path: &str, id: &str) -> Result<()> {
    let path = Path::new(log_path);
    let mut manager = log_or_empty(path)?;

    let removed = manager.remove_entry(id)?;
    println!("Removed {} from {}.", removed.id, removed.meal_type);

    save_entries(path, manager.entries())?;
    Ok(())
}

fn cmd_list(log_path: &str) -> Result<()> {
    let manager = log_or_empty(Path::new(log_path))?;
    display_entries(manager.entries(), "Meal Log");
    Ok(())
}

/// Append entries from CSV to the meal log.
fn cmd_import(log_path: &str, csv_path: &str) -> Result<()> {
    let path = Path::new(log_path);
    let imported = import_entries_csv(csv_path)?;
    let mut manager = log_or_empty(path)?;

    let added = manager.extend(imported)?;
    save_entries(path, manager.entries())?;
    println!("Imported {} entries ({} total).", added, manager.len());
    Ok(())
}

/// Write the day report as CSV.
fn cmd_export(budget_path: &str, log_path: &str, csv_path: &str) -> Result<()> {
    let budget = budget_or_default(Path::new(budget_path))?;
    let manager = log_or_empty(Path::new(log_path))?;

    let report = build_day_report(&budget, manager.entries())?;
    write_report_csv(csv_path, &report)?;
    println!("Report written to {}.", csv_path);
    Ok(())
}
