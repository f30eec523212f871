//! Expense report data types.

use std::collections::BTreeMap;
use std::hash::{DefaultHasher, Hash, Hasher};

use culinaria_shared::types::{CycleId, GroupId, ModuleId, SupplierId, TeacherId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::academic::{Assignment, Cycle, Group, Module, Teacher};
use crate::procurement::{Order, OrderItem, Product};
use crate::sales::Sale;

/// Borrowed input collections for one report computation.
///
/// Every collection is owned by the caller; the engine only reads them.
#[derive(Debug, Clone, Copy, Default, Hash)]
pub struct ExpenseDataset<'a> {
    /// Procurement orders.
    pub orders: &'a [Order],
    /// Order line items.
    pub order_items: &'a [OrderItem],
    /// Sales ledger.
    pub sales: &'a [Sale],
    /// Teachers.
    pub teachers: &'a [Teacher],
    /// Teacher-to-group assignments.
    pub assignments: &'a [Assignment],
    /// Groups.
    pub groups: &'a [Group],
    /// Modules.
    pub modules: &'a [Module],
    /// Cycles.
    pub cycles: &'a [Cycle],
    /// Product catalog.
    pub products: &'a [Product],
}

impl ExpenseDataset<'_> {
    /// Stable hash of every input record, used as a cache key.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        format!("{:016x}", hasher.finish())
    }
}

/// Expense, order count and sales of one teacher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherExpense {
    /// Teacher ID.
    pub teacher_id: TeacherId,
    /// Teacher name (the id when the teacher is unknown).
    pub name: String,
    /// Realized cost of the teacher's processed orders.
    pub expense: Decimal,
    /// Number of processed orders.
    pub order_count: u32,
    /// Sum of the teacher's sales.
    pub sales_total: Decimal,
    /// Sales minus expense.
    pub balance: Decimal,
}

impl TeacherExpense {
    pub(crate) fn empty(teacher_id: TeacherId, name: String) -> Self {
        Self {
            teacher_id,
            name,
            expense: Decimal::ZERO,
            order_count: 0,
            sales_total: Decimal::ZERO,
            balance: Decimal::ZERO,
        }
    }
}

/// Expense attribution report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseReport {
    /// Realized cost of every processed order.
    pub total_expense: Decimal,
    /// Sum of every sale.
    pub total_revenue: Decimal,
    /// Revenue minus expense.
    pub balance: Decimal,
    /// Total expense divided by the number of teachers with processed orders.
    pub avg_expense_per_teacher: Decimal,
    /// One row per teacher: known teachers first, then unknown ones seen on orders.
    pub expense_by_teacher: Vec<TeacherExpense>,
    /// Up to five teachers with the highest expense.
    pub top_teachers: Vec<TeacherExpense>,
    /// Attributed expense per group.
    pub expense_by_group: BTreeMap<GroupId, Decimal>,
    /// Attributed expense per module.
    pub expense_by_module: BTreeMap<ModuleId, Decimal>,
    /// Attributed expense per cycle.
    pub expense_by_cycle: BTreeMap<CycleId, Decimal>,
    /// Realized cost of items bought from each supplier.
    pub expense_by_supplier: BTreeMap<SupplierId, Decimal>,
}

impl ExpenseReport {
    /// Looks up a teacher's row.
    #[must_use]
    pub fn teacher(&self, teacher_id: TeacherId) -> Option<&TeacherExpense> {
        self.expense_by_teacher
            .iter()
            .find(|row| row.teacher_id == teacher_id)
    }

    /// Expense attributed to group ids.
    #[must_use]
    pub fn attributed_expense(&self) -> Decimal {
        self.expense_by_group
            .values()
            .fold(Decimal::ZERO, |sum, amount| sum.saturating_add(*amount))
    }

    /// Expense of teachers without group assignments.
    #[must_use]
    pub fn unattributed_expense(&self) -> Decimal {
        self.total_expense.saturating_sub(self.attributed_expense())
    }
}
