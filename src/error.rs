use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the word tracker library.
#[derive(Error, Debug)]
pub enum TrackerError {
    /// A SQLite statement failed.
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A CSV record could not be read or written.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A file could not be opened.
    #[error("Failed to open {path}: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A date string did not match `YYYY-MM-DD`.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Word text is empty")]
    EmptyWord,

    /// The word already exists (case-insensitive); carries the stored spelling.
    #[error("\"{0}\" has already been added")]
    DuplicateWord(String),

    #[error("No word with id {0}")]
    WordNotFound(i64),
}

pub type Result<T> = std::result::Result<T, TrackerError>;
