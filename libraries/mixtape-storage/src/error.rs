/// Storage-specific errors
use thiserror::Error;

/// Errors raised while opening or preparing the database.
///
/// Query failures inside the vertical slices surface as
/// `mixtape_core::MixtapeError` instead.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Database connection error
    #[error("Database connection error: {0}")]
    Connection(String),

    /// Migration error
    #[error("Migration error: {0}")]
    Migration(String),

    /// I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
