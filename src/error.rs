//! Custom error types for tally-cli
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Entry kind was not "income" or "expense"
    #[error("Transaction type must be 'income' or 'expense', got '{0}'")]
    InvalidKind(String),

    /// Validation errors for user-supplied input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Storage errors (reading or writing the data file)
    #[error("Storage error: {0}")]
    Storage(String),
}

impl LedgerError {
    /// Check if this is an invalid-kind error
    pub fn is_invalid_kind(&self) -> bool {
        matches!(self, Self::InvalidKind(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
