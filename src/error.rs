use thiserror::Error;

#[derive(Debug, Error)]
pub enum BudgetError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid meal type: {0}")]
    InvalidMealType(String),

    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl BudgetError {
    /// True for errors caused by bad input rather than I/O.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            BudgetError::Validation(_) | BudgetError::InvalidMealType(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, BudgetError>;
