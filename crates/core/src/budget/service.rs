//! Event budget service for variance calculation and validation.

use std::cmp::Ordering;
use std::collections::HashMap;

use culinaria_shared::types::EventId;
use rust_decimal::Decimal;

use super::error::BudgetError;
use super::types::{
    Event, EventBudgetLine, EventBudgetReport, EventBudgetSummary, VarianceResult, VarianceStatus,
};
use crate::procurement::{Order, OrderItem, PriceResolver, Product, RealizedSpend};

/// Event budget service for business logic.
pub struct EventBudgetService;

impl EventBudgetService {
    /// Calculate variance between budgeted and actual spend.
    ///
    /// variance = budgeted - actual
    ///   - Positive variance (under budget) is favorable
    ///   - Negative variance (over budget) is unfavorable
    ///
    /// Percentages are zero when nothing was budgeted.
    #[must_use]
    pub fn calculate_variance(budgeted: Decimal, actual: Decimal) -> VarianceResult {
        let variance = budgeted.saturating_sub(actual);

        let status = match variance.cmp(&Decimal::ZERO) {
            Ordering::Greater => VarianceStatus::Favorable,
            Ordering::Less => VarianceStatus::Unfavorable,
            Ordering::Equal => VarianceStatus::OnBudget,
        };

        VarianceResult {
            budgeted,
            actual,
            variance,
            variance_percent: percent_of(variance, budgeted),
            utilization_percent: percent_of(actual, budgeted),
            status,
        }
    }

    /// Validate an event before it is budgeted.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::NegativeBudget` if the budget is negative.
    /// Returns `BudgetError::EmptyName` if the name is blank.
    pub fn validate_event_budget(event: &Event) -> Result<(), BudgetError> {
        if event.budget < Decimal::ZERO {
            return Err(BudgetError::NegativeBudget {
                event_id: event.id,
                budget: event.budget,
            });
        }

        if event.name.trim().is_empty() {
            return Err(BudgetError::EmptyName(event.id));
        }

        Ok(())
    }

    /// Compares every event's budget with the realized cost of its
    /// processed orders.
    ///
    /// Lines follow event order; a repeated event id keeps its first record.
    /// Processed orders without an event, or pointing at an unknown one,
    /// add to `unlinked_expense`.
    #[must_use]
    pub fn budget_vs_actual(
        events: &[Event],
        orders: &[Order],
        items: &[OrderItem],
        products: &[Product],
    ) -> EventBudgetReport {
        let pricing = PriceResolver::new(products);
        let spend = RealizedSpend::collect(orders, items, &pricing);

        let mut index: HashMap<EventId, usize> = HashMap::with_capacity(events.len());
        let mut tallies: Vec<(&Event, Decimal, u32)> = Vec::with_capacity(events.len());
        for event in events {
            if !index.contains_key(&event.id) {
                index.insert(event.id, tallies.len());
                tallies.push((event, Decimal::ZERO, 0));
            }
        }

        let mut unlinked_expense = Decimal::ZERO;
        for order in spend.orders() {
            let cost = spend.order_total(order.id);
            match order.event_id.and_then(|id| index.get(&id)) {
                Some(idx) => {
                    let tally = &mut tallies[*idx];
                    tally.1 = tally.1.saturating_add(cost);
                    tally.2 = tally.2.saturating_add(1);
                }
                None => unlinked_expense = unlinked_expense.saturating_add(cost),
            }
        }

        let lines: Vec<EventBudgetLine> = tallies
            .into_iter()
            .map(|(event, actual, order_count)| {
                let result = Self::calculate_variance(event.budget, actual);
                EventBudgetLine {
                    event_id: event.id,
                    event_name: event.name.clone(),
                    date: event.date,
                    budgeted: result.budgeted,
                    actual: result.actual,
                    variance: result.variance,
                    utilization_percent: result.utilization_percent,
                    status: result.status,
                    order_count,
                }
            })
            .collect();

        let summary = Self::summarize(&lines);

        EventBudgetReport {
            lines,
            summary,
            unlinked_expense,
        }
    }

    /// Looks up one event's line in a report.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::EventNotFound` if the report has no such event.
    pub fn event_status(
        report: &EventBudgetReport,
        event_id: EventId,
    ) -> Result<&EventBudgetLine, BudgetError> {
        report
            .line(event_id)
            .ok_or(BudgetError::EventNotFound(event_id))
    }

    fn summarize(lines: &[EventBudgetLine]) -> EventBudgetSummary {
        let total_budgeted = lines
            .iter()
            .fold(Decimal::ZERO, |sum, line| sum.saturating_add(line.budgeted));
        let total_actual = lines
            .iter()
            .fold(Decimal::ZERO, |sum, line| sum.saturating_add(line.actual));

        EventBudgetSummary {
            total_budgeted,
            total_actual,
            total_variance: total_budgeted.saturating_sub(total_actual),
            overall_utilization: percent_of(total_actual, total_budgeted),
        }
    }
}

/// `part / whole * 100` rounded to cents; zero when `whole` is zero.
fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    part.checked_div(whole)
        .map(|ratio| ratio.saturating_mul(Decimal::ONE_HUNDRED).round_dp(2))
        .unwrap_or_default()
}
