//! Owned input snapshot as exported by the application's data layer.

use serde::{Deserialize, Serialize};

use super::error::ExpenseError;
use super::integrity::{IntegrityIssue, check_integrity, ensure_consistent};
use super::types::ExpenseDataset;
use crate::academic::{Assignment, Cycle, Group, Module, Teacher};
use crate::budget::Event;
use crate::procurement::{Order, OrderItem, Product, Supplier};
use crate::sales::Sale;

/// Every collection an expense report is computed from.
///
/// Missing collections deserialize as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExpenseSnapshot {
    /// Procurement orders.
    pub orders: Vec<Order>,
    /// Order line items.
    pub order_items: Vec<OrderItem>,
    /// Sales ledger.
    pub sales: Vec<Sale>,
    /// Teachers.
    pub teachers: Vec<Teacher>,
    /// Teacher-to-group assignments.
    pub assignments: Vec<Assignment>,
    /// Groups.
    pub groups: Vec<Group>,
    /// Modules.
    pub modules: Vec<Module>,
    /// Cycles.
    pub cycles: Vec<Cycle>,
    /// Product catalog.
    pub products: Vec<Product>,
    /// Suppliers, used to label supplier totals.
    pub suppliers: Vec<Supplier>,
    /// Budgeted events.
    pub events: Vec<Event>,
}

impl ExpenseSnapshot {
    /// Parses a snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self, ExpenseError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Borrows the snapshot as engine input.
    #[must_use]
    pub fn dataset(&self) -> ExpenseDataset<'_> {
        ExpenseDataset {
            orders: &self.orders,
            order_items: &self.order_items,
            sales: &self.sales,
            teachers: &self.teachers,
            assignments: &self.assignments,
            groups: &self.groups,
            modules: &self.modules,
            cycles: &self.cycles,
            products: &self.products,
        }
    }

    /// Runs the integrity checks and fails on any warning-level issue.
    ///
    /// On success returns the remaining informational issues.
    ///
    /// # Errors
    ///
    /// Returns `ExpenseError::IntegrityViolations` when warnings exist.
    pub fn ensure_consistent(&self) -> Result<Vec<IntegrityIssue>, ExpenseError> {
        let issues = check_integrity(&self.dataset());
        ensure_consistent(&issues)?;
        Ok(issues)
    }
}
