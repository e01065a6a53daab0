use thiserror::Error;

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Meal not found: {0}")]
    MealNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl MenuError {
    /// The pool cannot supply `requested` distinct meals.
    pub(crate) fn pool_too_small(pool_len: usize, requested: usize) -> Self {
        MenuError::InvalidOperation(format!(
            "meal pool is empty or smaller than menu (pool has {}, menu needs {})",
            pool_len, requested
        ))
    }
}

pub type Result<T> = std::result::Result<T, MenuError>;
