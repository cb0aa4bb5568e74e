//! Error types for the portfolio core

use thiserror::Error;

/// Main error type for portfolio operations
#[derive(Error, Debug)]
pub enum PortfolioError {
    /// The request never produced an HTTP response (DNS, refused, reset...)
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status.
    ///
    /// `message` is already the user-facing text: the body's `message` or
    /// `error` field when present, otherwise the per-operation fallback.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// A 2xx response whose body did not have the expected shape
    #[error("{0}")]
    InvalidResponse(String),

    /// A mutation for this message id is already in flight
    #[error("Message {0} is busy")]
    Busy(String),

    /// A protected operation was attempted without a stored token
    #[error("Not logged in")]
    Unauthenticated,

    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// Invalid configuration value
    #[error("Config error: {0}")]
    Config(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PortfolioError {
    /// HTTP status of an API error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            PortfolioError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias using PortfolioError
pub type PortfolioResult<T> = Result<T, PortfolioError>;
