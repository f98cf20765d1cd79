//! Domain-level error types.

use thiserror::Error;

/// Repository-level errors.
///
/// "Not found" is never an error here: lookups return empty results and
/// mutations return zero counts.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Invalid title pattern: {0}")]
    InvalidPattern(String),
}
