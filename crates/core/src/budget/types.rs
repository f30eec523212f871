//! Budget data types.

use chrono::NaiveDate;
use culinaria_shared::types::EventId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A budgeted event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Event ID.
    pub id: EventId,
    /// Event name.
    pub name: String,
    /// Date the event takes place.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Budgeted amount.
    #[serde(default)]
    pub budget: Decimal,
}

/// Event budget with its realized spend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventBudgetLine {
    /// Event ID.
    pub event_id: EventId,
    /// Event name.
    pub event_name: String,
    /// Event date.
    pub date: Option<NaiveDate>,
    /// Budgeted amount.
    pub budgeted: Decimal,
    /// Realized cost of the event's processed orders.
    pub actual: Decimal,
    /// Variance (budgeted - actual).
    pub variance: Decimal,
    /// Utilization percentage (actual / budgeted * 100).
    pub utilization_percent: Decimal,
    /// Variance status.
    pub status: VarianceStatus,
    /// Number of processed orders linked to the event.
    pub order_count: u32,
}

/// Budget vs actual report over all events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventBudgetReport {
    /// One line per event, in input order.
    pub lines: Vec<EventBudgetLine>,
    /// Summary totals.
    pub summary: EventBudgetSummary,
    /// Realized spend of processed orders linked to no known event.
    pub unlinked_expense: Decimal,
}

impl EventBudgetReport {
    /// Finds the line of an event.
    #[must_use]
    pub fn line(&self, event_id: EventId) -> Option<&EventBudgetLine> {
        self.lines.iter().find(|line| line.event_id == event_id)
    }

    /// Events whose actual exceeds their budget.
    pub fn over_budget(&self) -> impl Iterator<Item = &EventBudgetLine> {
        self.lines
            .iter()
            .filter(|line| line.status == VarianceStatus::Unfavorable)
    }
}

/// Budget vs actual summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventBudgetSummary {
    /// Total budgeted amount.
    pub total_budgeted: Decimal,
    /// Total actual amount.
    pub total_actual: Decimal,
    /// Total variance.
    pub total_variance: Decimal,
    /// Overall utilization percentage.
    pub overall_utilization: Decimal,
}

/// Variance calculation result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VarianceResult {
    /// Budgeted amount.
    pub budgeted: Decimal,
    /// Actual amount.
    pub actual: Decimal,
    /// Variance amount.
    pub variance: Decimal,
    /// Variance percentage.
    pub variance_percent: Decimal,
    /// Utilization percentage.
    pub utilization_percent: Decimal,
    /// Variance status.
    pub status: VarianceStatus,
}

/// Variance status classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VarianceStatus {
    /// Spent less than budgeted.
    Favorable,
    /// Spent more than budgeted.
    Unfavorable,
    /// Spent exactly the budget.
    OnBudget,
}
