//! Error types for the Car actor.

use super::validation::ValidationError;
use thiserror::Error;

/// Errors that can occur during car operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CarError {
    /// The requested car was not found.
    #[error("Car not found: {0}")]
    NotFound(String),

    /// The car payload broke a validation rule.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// `sortBy` named a field the query engine cannot sort on.
    #[error("Invalid sort field '{0}'. Allowed: brand, model, year, insurance, roadTax, inspection")]
    InvalidSortField(String),

    /// A query-string parameter could not be interpreted.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// The store could not be reached or failed internally.
    #[error("Car store error: {0}")]
    Store(String),
}
