mod manager;
mod persistence;

pub use manager::MealLogManager;
pub use persistence::{
    import_entries_csv, load_budget, load_entries, save_budget, save_entries, write_report_csv,
};
