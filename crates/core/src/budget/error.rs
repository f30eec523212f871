//! Budget error types.

use culinaria_shared::types::EventId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Budget-related errors.
#[derive(Debug, Error)]
pub enum BudgetError {
    /// Event not found.
    #[error("Event not found: {0}")]
    EventNotFound(EventId),

    /// Budget amount cannot be negative.
    #[error("Event {event_id} has a negative budget: {budget}")]
    NegativeBudget {
        /// Event ID.
        event_id: EventId,
        /// Offending amount.
        budget: Decimal,
    },

    /// Event name is empty.
    #[error("Event {0} has an empty name")]
    EmptyName(EventId),
}
