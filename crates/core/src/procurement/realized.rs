//! Realized spend: the priced line items of processed orders.

use std::collections::{HashMap, HashSet};

use culinaria_shared::types::OrderId;
use rust_decimal::Decimal;

use super::pricing::PriceResolver;
use super::types::{Order, OrderItem};

/// Processed orders and their priced items.
///
/// Orders are kept in input order. When an order id appears more than once
/// only the first record is considered. Sums saturate instead of overflowing.
#[derive(Debug, Default)]
pub struct RealizedSpend<'a> {
    orders: Vec<&'a Order>,
    items: Vec<(&'a OrderItem, Decimal)>,
    order_totals: HashMap<OrderId, Decimal>,
    total: Decimal,
}

impl<'a> RealizedSpend<'a> {
    /// Filters processed orders and prices their items.
    #[must_use]
    pub fn collect(
        orders: &'a [Order],
        items: &'a [OrderItem],
        pricing: &PriceResolver<'_>,
    ) -> Self {
        let mut seen = HashSet::with_capacity(orders.len());
        let mut spend = Self::default();

        for order in orders {
            if !seen.insert(order.id) {
                continue;
            }
            if order.status.is_realized() {
                spend.orders.push(order);
                spend.order_totals.insert(order.id, Decimal::ZERO);
            }
        }

        for item in items {
            let Some(order_total) = spend.order_totals.get_mut(&item.order_id) else {
                continue;
            };
            let cost = pricing.item_cost(item);
            *order_total = order_total.saturating_add(cost);
            spend.total = spend.total.saturating_add(cost);
            spend.items.push((item, cost));
        }

        spend
    }

    /// Processed orders, in input order.
    #[must_use]
    pub fn orders(&self) -> &[&'a Order] {
        &self.orders
    }

    /// Items of processed orders with their cost.
    #[must_use]
    pub fn items(&self) -> &[(&'a OrderItem, Decimal)] {
        &self.items
    }

    /// Cost of one processed order; zero for unknown or unprocessed orders.
    #[must_use]
    pub fn order_total(&self, order_id: OrderId) -> Decimal {
        self.order_totals
            .get(&order_id)
            .copied()
            .unwrap_or_default()
    }

    /// Cost of every processed item.
    #[must_use]
    pub const fn total(&self) -> Decimal {
        self.total
    }
}
