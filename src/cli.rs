use clap::{Parser, Subcommand};

/// NutriBudget — per-meal calorie and macro targets with daily progress.
#[derive(Parser, Debug)]
#[command(name = "nutri_budget")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the calorie budget JSON file.
    #[arg(short, long, default_value = "calorie_budget.json")]
    pub budget: String,

    /// Path to the meal log JSON file.
    #[arg(short, long, default_value = "meal_log.json")]
    pub log: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show consumed vs target for today and each meal.
    Summary {
        /// Limit to one scope: today, breakfast, lunch, dinner or snacks.
        #[arg(short, long)]
        meal: Option<String>,
    },

    /// Show macro grams derived from a calorie total.
    Macros {
        /// Daily calorie total.
        #[arg(short, long)]
        calories: f64,
    },

    /// Set the calorie budget interactively.
    SetBudget,

    /// Log a food under a meal.
    Log {
        /// Meal: breakfast, lunch, dinner or snacks.
        #[arg(short, long)]
        meal: String,

        #[arg(long)]
        calories: f64,

        #[arg(long, default_value_t = 0.0)]
        protein: f64,

        #[arg(long, default_value_t = 0.0)]
        carbs: f64,

        #[arg(long, default_value_t = 0.0)]
        fats: f64,

        /// Entry id (generated when omitted).
        #[arg(long)]
        id: Option<String>,
    },

    /// Remove a logged entry by id.
    Remove {
        id: String,
    },

    /// List logged entries.
    List,

    /// Append entries from a CSV file (id,meal_type,calories,protein,carbs,fats).
    Import {
        path: String,
    },

    /// Write today's report to a CSV file.
    Export {
        path: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Summary { meal: None }
    }
}
