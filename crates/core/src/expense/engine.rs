//! Expense attribution engine.

use std::collections::{BTreeMap, HashMap};

use culinaria_shared::types::TeacherId;
use rust_decimal::Decimal;

use super::types::{ExpenseDataset, ExpenseReport, TeacherExpense};
use crate::academic::{AcademicHierarchy, Teacher};
use crate::procurement::{PriceResolver, RealizedSpend};

/// Number of teachers listed in `ExpenseReport::top_teachers`.
pub const TOP_TEACHERS_LIMIT: usize = 5;

/// Computes expense reports.
///
/// The engine is total: empty or inconsistent input never fails. Items of
/// unknown orders are ignored, unresolvable prices cost zero, and a dangling
/// group, module or cycle id stops the rollup above it. Sums saturate at the
/// `Decimal` bounds.
pub struct ExpenseEngine;

impl ExpenseEngine {
    /// Computes the full expense report.
    #[must_use]
    pub fn compute(data: &ExpenseDataset<'_>) -> ExpenseReport {
        let pricing = PriceResolver::new(data.products);
        let hierarchy =
            AcademicHierarchy::new(data.cycles, data.modules, data.groups, data.assignments);
        let spend = RealizedSpend::collect(data.orders, data.order_items, &pricing);

        let mut report = ExpenseReport {
            total_expense: spend.total(),
            ..ExpenseReport::default()
        };

        for (item, cost) in spend.items() {
            if let Some(supplier_id) = item.supplier_id {
                add_to(&mut report.expense_by_supplier, supplier_id, *cost);
            }
        }

        let mut ledger = TeacherLedger::new(data.teachers);
        for order in spend.orders() {
            let row = ledger.row_mut(order.teacher_id);
            row.expense = row.expense.saturating_add(spend.order_total(order.id));
            row.order_count = row.order_count.saturating_add(1);
        }
        for sale in data.sales {
            report.total_revenue = report.total_revenue.saturating_add(sale.amount);
            if let Some(row) = ledger.existing_mut(sale.teacher_id) {
                row.sales_total = row.sales_total.saturating_add(sale.amount);
            }
        }
        let rows = ledger.into_rows();

        report.balance = report.total_revenue.saturating_sub(report.total_expense);
        report.avg_expense_per_teacher = Self::average_per_active_teacher(&rows, spend.total());

        Self::attribute(&rows, &hierarchy, &mut report);
        report.top_teachers = Self::top_teachers(&rows, TOP_TEACHERS_LIMIT);
        report.expense_by_teacher = rows;

        report
    }

    /// Total divided by the teachers with at least one processed order.
    fn average_per_active_teacher(rows: &[TeacherExpense], total: Decimal) -> Decimal {
        let active = rows.iter().filter(|row| row.order_count > 0).count();
        if active == 0 {
            Decimal::ZERO
        } else {
            total / Decimal::from(active)
        }
    }

    /// Splits each teacher's expense equally over their assigned groups and
    /// rolls the shares up to modules and cycles.
    ///
    /// Every assigned group id receives its share, resolved or not. A share
    /// moves up one level only when the id holding the parent reference
    /// exists.
    fn attribute(
        rows: &[TeacherExpense],
        hierarchy: &AcademicHierarchy<'_>,
        report: &mut ExpenseReport,
    ) {
        for row in rows {
            let groups = hierarchy.assigned_groups(row.teacher_id);
            if groups.is_empty() || row.expense.is_zero() {
                continue;
            }

            let share = row.expense / Decimal::from(groups.len());
            for group_id in groups {
                let path = hierarchy.resolve_path(*group_id);
                add_to(&mut report.expense_by_group, path.group, share);
                if let Some(module) = path.module {
                    add_to(&mut report.expense_by_module, module, share);
                }
                if let Some(cycle) = path.cycle {
                    add_to(&mut report.expense_by_cycle, cycle, share);
                }
            }
        }
    }

    /// Highest expense first; equal expenses keep row order.
    fn top_teachers(rows: &[TeacherExpense], limit: usize) -> Vec<TeacherExpense> {
        let mut ranked = rows.to_vec();
        ranked.sort_by(|a, b| b.expense.cmp(&a.expense));
        ranked.truncate(limit);
        ranked
    }
}

fn add_to<K: Ord>(totals: &mut BTreeMap<K, Decimal>, key: K, amount: Decimal) {
    let total = totals.entry(key).or_default();
    *total = total.saturating_add(amount);
}

/// Computes the expense report for a dataset.
///
/// Shorthand for [`ExpenseEngine::compute`].
#[must_use]
pub fn compute_expense_report(data: &ExpenseDataset<'_>) -> ExpenseReport {
    ExpenseEngine::compute(data)
}

/// Per-teacher accumulator that preserves first-seen order.
struct TeacherLedger {
    rows: Vec<TeacherExpense>,
    index: HashMap<TeacherId, usize>,
}

impl TeacherLedger {
    fn new(teachers: &[Teacher]) -> Self {
        let mut ledger = Self {
            rows: Vec::with_capacity(teachers.len()),
            index: HashMap::with_capacity(teachers.len()),
        };
        for teacher in teachers {
            ledger.insert(teacher.id, teacher.name.clone());
        }
        ledger
    }

    fn insert(&mut self, teacher_id: TeacherId, name: String) -> usize {
        if let Some(idx) = self.index.get(&teacher_id) {
            return *idx;
        }
        self.rows.push(TeacherExpense::empty(teacher_id, name));
        let idx = self.rows.len() - 1;
        self.index.insert(teacher_id, idx);
        idx
    }

    fn row_mut(&mut self, teacher_id: TeacherId) -> &mut TeacherExpense {
        let idx = match self.index.get(&teacher_id) {
            Some(idx) => *idx,
            None => self.insert(teacher_id, teacher_id.to_string()),
        };
        &mut self.rows[idx]
    }

    fn existing_mut(&mut self, teacher_id: TeacherId) -> Option<&mut TeacherExpense> {
        let idx = *self.index.get(&teacher_id)?;
        self.rows.get_mut(idx)
    }

    fn into_rows(mut self) -> Vec<TeacherExpense> {
        for row in &mut self.rows {
            row.balance = row.sales_total.saturating_sub(row.expense);
        }
        self.rows
    }
}
