//! Property-based and scenario tests for event budgets.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::service::EventBudgetService;
use super::types::VarianceStatus;

proptest! {
    /// variance = budgeted - actual, favorable when under budget.
    #[test]
    fn test_variance_calculation(
        budgeted in 0i64..1_000_000_000,
        actual in 0i64..1_000_000_000,
    ) {
        let budgeted = Decimal::new(budgeted, 2);
        let actual = Decimal::new(actual, 2);

        let result = EventBudgetService::calculate_variance(budgeted, actual);

        prop_assert_eq!(result.variance, budgeted - actual);

        if result.variance > Decimal::ZERO {
            prop_assert_eq!(result.status, VarianceStatus::Favorable);
        } else if result.variance < Decimal::ZERO {
            prop_assert_eq!(result.status, VarianceStatus::Unfavorable);
        } else {
            prop_assert_eq!(result.status, VarianceStatus::OnBudget);
        }
    }

    /// If B > 0: utilization_percent = (A / B) * 100, rounded to cents.
    #[test]
    fn test_utilization_percent_nonzero_budget(
        budgeted in 1i64..1_000_000_000,
        actual in 0i64..1_000_000_000,
    ) {
        let budgeted = Decimal::from(budgeted);
        let actual = Decimal::from(actual);

        let result = EventBudgetService::calculate_variance(budgeted, actual);

        let expected = (actual / budgeted * dec!(100)).round_dp(2);
        prop_assert_eq!(result.utilization_percent, expected);
    }

    /// If B = 0: both percentages are zero.
    #[test]
    fn test_percentages_zero_budget(actual in 0i64..1_000_000_000) {
        let result = EventBudgetService::calculate_variance(Decimal::ZERO, Decimal::from(actual));

        prop_assert_eq!(result.utilization_percent, Decimal::ZERO);
        prop_assert_eq!(result.variance_percent, Decimal::ZERO);
    }

    /// Every processed cost is either on an event line or unlinked.
    #[test]
    fn test_realized_cost_is_conserved(
        prices in prop::collection::vec((0usize..4, 1i64..100_000), 0..30),
    ) {
        let mut fx = fixture::Fixture::with_events(3);
        for (slot, cents) in &prices {
            let event = fx.events.get(*slot).map(|e| e.id);
            let order = fx.add_order(event, crate::procurement::OrderStatus::Processed);
            fx.add_item(order, Decimal::ONE, Decimal::new(*cents, 2));
        }

        let report = fx.report();
        let expected: Decimal = prices.iter().map(|(_, c)| Decimal::new(*c, 2)).sum();

        prop_assert_eq!(report.summary.total_actual + report.unlinked_expense, expected);
        prop_assert_eq!(
            report.summary.total_variance,
            report.summary.total_budgeted - report.summary.total_actual
        );
    }
}

mod fixture {
    use chrono::{TimeZone, Utc};
    use culinaria_shared::types::{EventId, OrderId, OrderItemId, TeacherId};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::budget::service::EventBudgetService;
    use crate::budget::types::{Event, EventBudgetReport};
    use crate::procurement::{Order, OrderItem, OrderStatus};

    #[derive(Debug, Default)]
    pub struct Fixture {
        pub events: Vec<Event>,
        pub orders: Vec<Order>,
        pub items: Vec<OrderItem>,
    }

    impl Fixture {
        pub fn with_events(count: usize) -> Self {
            let events = (0..count)
                .map(|i| Event {
                    id: EventId::new(),
                    name: format!("Evento {i}"),
                    date: None,
                    budget: dec!(500),
                })
                .collect();
            Self {
                events,
                ..Self::default()
            }
        }

        pub fn add_order(&mut self, event_id: Option<EventId>, status: OrderStatus) -> OrderId {
            let id = OrderId::new();
            let at = Utc.with_ymd_and_hms(2026, 6, 1, 10, 0, 0).unwrap();
            self.orders.push(Order {
                id,
                event_id,
                teacher_id: TeacherId::new(),
                status,
                notes: None,
                created_at: at,
                updated_at: at,
            });
            id
        }

        pub fn add_item(&mut self, order_id: OrderId, quantity: Decimal, unit_price: Decimal) {
            self.items.push(OrderItem {
                id: OrderItemId::new(),
                order_id,
                product_id: None,
                product_name: "Langostinos".to_string(),
                quantity,
                unit: "kg".to_string(),
                is_out_of_catalog: true,
                supplier_id: None,
                unit_price: Some(unit_price),
            });
        }

        pub fn report(&self) -> EventBudgetReport {
            EventBudgetService::budget_vs_actual(&self.events, &self.orders, &self.items, &[])
        }
    }
}

#[cfg(test)]
mod unit_tests {
    use super::fixture::Fixture;
    use super::*;
    use crate::budget::error::BudgetError;
    use crate::budget::types::Event;
    use crate::procurement::OrderStatus;
    use chrono::NaiveDate;
    use culinaria_shared::types::EventId;

    fn event(name: &str, budget: Decimal) -> Event {
        Event {
            id: EventId::new(),
            name: name.to_string(),
            date: NaiveDate::from_ymd_opt(2026, 12, 18),
            budget,
        }
    }

    #[test]
    fn test_validate_accepts_valid_event() {
        let result = EventBudgetService::validate_event_budget(&event("Cena de Navidad", dec!(1200)));
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_budget() {
        let result = EventBudgetService::validate_event_budget(&event("Cena de Navidad", dec!(-1)));
        assert!(matches!(result, Err(BudgetError::NegativeBudget { .. })));
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let result = EventBudgetService::validate_event_budget(&event("  ", dec!(10)));
        assert!(matches!(result, Err(BudgetError::EmptyName(_))));
    }

    #[test]
    fn test_budget_vs_actual_per_event() {
        let mut fx = Fixture::default();
        fx.events.push(event("Cena de Navidad", dec!(1000)));
        fx.events.push(event("Jornada de puertas abiertas", dec!(200)));
        let dinner = fx.events[0].id;
        let open_day = fx.events[1].id;

        let o1 = fx.add_order(Some(dinner), OrderStatus::Processed);
        fx.add_item(o1, dec!(10), dec!(45));
        let o2 = fx.add_order(Some(dinner), OrderStatus::Processed);
        fx.add_item(o2, dec!(2), dec!(100));
        let draft = fx.add_order(Some(dinner), OrderStatus::Draft);
        fx.add_item(draft, dec!(1), dec!(999));
        let o3 = fx.add_order(Some(open_day), OrderStatus::Processed);
        fx.add_item(o3, dec!(5), dec!(50));
        let loose = fx.add_order(None, OrderStatus::Processed);
        fx.add_item(loose, dec!(1), dec!(30));

        let report = fx.report();

        let line = report.line(dinner).unwrap();
        assert_eq!(line.actual, dec!(650));
        assert_eq!(line.variance, dec!(350));
        assert_eq!(line.utilization_percent, dec!(65.00));
        assert_eq!(line.status, VarianceStatus::Favorable);
        assert_eq!(line.order_count, 2);

        let line = report.line(open_day).unwrap();
        assert_eq!(line.actual, dec!(250));
        assert_eq!(line.status, VarianceStatus::Unfavorable);
        assert_eq!(report.over_budget().count(), 1);

        assert_eq!(report.unlinked_expense, dec!(30));
        assert_eq!(report.summary.total_budgeted, dec!(1200));
        assert_eq!(report.summary.total_actual, dec!(900));
        assert_eq!(report.summary.total_variance, dec!(300));
        assert_eq!(report.summary.overall_utilization, dec!(75.00));
    }

    #[test]
    fn test_unknown_event_is_unlinked() {
        let mut fx = Fixture::default();
        let order = fx.add_order(Some(EventId::new()), OrderStatus::Processed);
        fx.add_item(order, dec!(3), dec!(4));

        let report = fx.report();

        assert!(report.lines.is_empty());
        assert_eq!(report.unlinked_expense, dec!(12));
        assert_eq!(report.summary.overall_utilization, Decimal::ZERO);
    }

    #[test]
    fn test_event_status_lookup() {
        let mut fx = Fixture::default();
        fx.events.push(event("Catering", dec!(80)));
        let id = fx.events[0].id;
        let report = fx.report();

        let line = EventBudgetService::event_status(&report, id).unwrap();
        assert_eq!(line.actual, Decimal::ZERO);
        assert_eq!(line.status, VarianceStatus::Favorable);

        let missing = EventId::new();
        let err = EventBudgetService::event_status(&report, missing).unwrap_err();
        assert!(matches!(err, BudgetError::EventNotFound(id) if id == missing));
    }

    #[test]
    fn test_repeated_event_keeps_first_record() {
        let mut fx = Fixture::default();
        let first = event("Catering", dec!(100));
        let mut duplicate = first.clone();
        duplicate.budget = dec!(5000);
        fx.events.push(first);
        fx.events.push(duplicate);

        let report = fx.report();

        assert_eq!(report.lines.len(), 1);
        assert_eq!(report.lines[0].budgeted, dec!(100));
    }
}
