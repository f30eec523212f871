//! Expense error types.

use thiserror::Error;

/// Errors raised around expense reporting.
///
/// The engine itself never fails; these cover loading input and strict
/// consistency checks.
#[derive(Debug, Error)]
pub enum ExpenseError {
    /// Snapshot could not be parsed.
    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(#[from] serde_json::Error),

    /// Input has warning-level integrity issues.
    #[error("Input has {count} integrity warning(s); first: {first}")]
    IntegrityViolations {
        /// Number of warnings.
        count: usize,
        /// Description of the first warning.
        first: String,
    },
}
