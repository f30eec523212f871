//! Event budgets and budget-vs-actual analysis.
//!
//! Orders may be placed for a budgeted event (a banquet, a tasting menu, a
//! catering service). Realized spend of processed orders is compared against
//! each event's budget.

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::BudgetError;
pub use service::EventBudgetService;
pub use types::{
    Event, EventBudgetLine, EventBudgetReport, EventBudgetSummary, VarianceResult, VarianceStatus,
};
