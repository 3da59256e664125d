use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Db(#[from] mongodb::error::Error),

    #[error("No cat named '{0}' in the database")]
    NotFound(String),

    #[error("A cat named '{0}' already exists")]
    DuplicateName(String),

    #[error("Validation failed: {0}")]
    Validation(String),
}
