//! Integrity diagnostics for expense input.
//!
//! The engine quietly tolerates dangling references and unpriced items. These
//! checks surface them so callers can log or reject the input; they never
//! change report figures.

use std::collections::HashSet;

use culinaria_shared::types::{
    CycleId, GroupId, ModuleId, OrderId, OrderItemId, ProductId, SupplierId, TeacherId,
};
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use super::engine::ExpenseEngine;
use super::error::ExpenseError;
use super::types::ExpenseDataset;
use crate::academic::AcademicHierarchy;
use crate::procurement::{PriceResolver, PriceSource, RealizedSpend};

/// How serious an integrity issue is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Expected approximation; reported for visibility.
    Info,
    /// Data that silently drops out of some total.
    Warning,
}

/// A single integrity finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IntegrityIssue {
    /// Item whose order does not exist.
    #[error("Order item {item_id} references unknown order {order_id}")]
    OrphanedItem {
        /// Item ID.
        item_id: OrderItemId,
        /// Missing order.
        order_id: OrderId,
    },

    /// Processed order placed by a teacher missing from the teacher list.
    #[error("Processed order {order_id} belongs to unknown teacher {teacher_id}")]
    UnknownTeacher {
        /// Order ID.
        order_id: OrderId,
        /// Missing teacher.
        teacher_id: TeacherId,
    },

    /// Assignment to a group that does not exist.
    #[error("Teacher {teacher_id} is assigned to unknown group {group_id}")]
    DanglingAssignment {
        /// Assigned teacher.
        teacher_id: TeacherId,
        /// Missing group.
        group_id: GroupId,
    },

    /// Group whose module does not exist.
    #[error("Group {group_id} references unknown module {module_id}")]
    DanglingGroupModule {
        /// Group ID.
        group_id: GroupId,
        /// Missing module.
        module_id: ModuleId,
    },

    /// Module whose cycle does not exist.
    #[error("Module {module_id} references unknown cycle {cycle_id}")]
    DanglingModuleCycle {
        /// Module ID.
        module_id: ModuleId,
        /// Missing cycle.
        cycle_id: CycleId,
    },

    /// Processed item with no resolvable price.
    #[error("Processed item {item_id} ({product_name}) has no resolvable price")]
    UnpricedItem {
        /// Item ID.
        item_id: OrderItemId,
        /// Name on the item.
        product_name: String,
    },

    /// Processed item priced from the product's first listed supplier.
    #[error("Item {item_id} priced from first supplier {supplier_id} of product {product_id}")]
    FirstSupplierFallback {
        /// Item ID.
        item_id: OrderItemId,
        /// Catalog product.
        product_id: ProductId,
        /// Supplier whose price was used.
        supplier_id: SupplierId,
    },

    /// Teacher with realized expense that reaches no group.
    #[error("Teacher {teacher_id} has realized expense {expense} but no group assignments")]
    UnassignedTeacher {
        /// Teacher ID.
        teacher_id: TeacherId,
        /// Expense missing from the hierarchy breakdown.
        expense: Decimal,
    },
}

impl IntegrityIssue {
    /// Severity of the issue.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::FirstSupplierFallback { .. } | Self::UnassignedTeacher { .. } => Severity::Info,
            Self::OrphanedItem { .. }
            | Self::UnknownTeacher { .. }
            | Self::DanglingAssignment { .. }
            | Self::DanglingGroupModule { .. }
            | Self::DanglingModuleCycle { .. }
            | Self::UnpricedItem { .. } => Severity::Warning,
        }
    }
}

/// Lists every integrity issue in the dataset.
///
/// Issues are grouped by kind in a fixed order and otherwise follow input order.
#[must_use]
pub fn check_integrity(data: &ExpenseDataset<'_>) -> Vec<IntegrityIssue> {
    let mut issues = Vec::new();
    let pricing = PriceResolver::new(data.products);
    let hierarchy =
        AcademicHierarchy::new(data.cycles, data.modules, data.groups, data.assignments);
    let spend = RealizedSpend::collect(data.orders, data.order_items, &pricing);

    let order_ids: HashSet<OrderId> = data.orders.iter().map(|o| o.id).collect();
    issues.extend(
        data.order_items
            .iter()
            .filter(|item| !order_ids.contains(&item.order_id))
            .map(|item| IntegrityIssue::OrphanedItem {
                item_id: item.id,
                order_id: item.order_id,
            }),
    );

    let teacher_ids: HashSet<TeacherId> = data.teachers.iter().map(|t| t.id).collect();
    issues.extend(
        spend
            .orders()
            .iter()
            .filter(|order| !teacher_ids.contains(&order.teacher_id))
            .map(|order| IntegrityIssue::UnknownTeacher {
                order_id: order.id,
                teacher_id: order.teacher_id,
            }),
    );

    for assignment in data.assignments {
        if hierarchy.group(assignment.group_id).is_none() {
            issues.push(IntegrityIssue::DanglingAssignment {
                teacher_id: assignment.professor_id,
                group_id: assignment.group_id,
            });
        }
    }
    for group in data.groups {
        if hierarchy.module_of(group).is_none() {
            issues.push(IntegrityIssue::DanglingGroupModule {
                group_id: group.id,
                module_id: group.module_id,
            });
        }
    }
    for module in data.modules {
        if hierarchy.cycle_of(module).is_none() {
            issues.push(IntegrityIssue::DanglingModuleCycle {
                module_id: module.id,
                cycle_id: module.cycle_id,
            });
        }
    }

    for (item, _) in spend.items() {
        match pricing.resolve(item) {
            PriceSource::Unpriced => issues.push(IntegrityIssue::UnpricedItem {
                item_id: item.id,
                product_name: item.product_name.clone(),
            }),
            PriceSource::FirstSupplierFallback { supplier_id, .. } => {
                if let Some(product_id) = item.product_id {
                    issues.push(IntegrityIssue::FirstSupplierFallback {
                        item_id: item.id,
                        product_id,
                        supplier_id,
                    });
                }
            }
            PriceSource::Explicit { .. } => {}
        }
    }

    let report = ExpenseEngine::compute(data);
    issues.extend(
        report
            .expense_by_teacher
            .iter()
            .filter(|row| {
                !row.expense.is_zero() && hierarchy.assigned_groups(row.teacher_id).is_empty()
            })
            .map(|row| IntegrityIssue::UnassignedTeacher {
                teacher_id: row.teacher_id,
                expense: row.expense,
            }),
    );

    issues
}

/// Fails when any issue has warning severity.
pub fn ensure_consistent(issues: &[IntegrityIssue]) -> Result<(), ExpenseError> {
    let mut warnings = issues
        .iter()
        .filter(|issue| issue.severity() == Severity::Warning);

    match warnings.next() {
        None => Ok(()),
        Some(first) => Err(ExpenseError::IntegrityViolations {
            count: 1 + warnings.count(),
            first: first.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::academic::{Assignment, Cycle, Group, Module, Teacher};
    use crate::procurement::{OfferStatus, Order, OrderItem, OrderStatus, Product, ProductSupplier};
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn teacher() -> Teacher {
        Teacher {
            id: TeacherId::new(),
            name: "Marta".to_string(),
            email: None,
        }
    }

    fn processed_order(teacher_id: TeacherId) -> Order {
        Order {
            id: OrderId::new(),
            event_id: None,
            teacher_id,
            status: OrderStatus::Processed,
            notes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn item(order_id: OrderId, product_id: Option<ProductId>, unit_price: Option<Decimal>) -> OrderItem {
        OrderItem {
            id: OrderItemId::new(),
            order_id,
            product_id,
            product_name: "Nata".to_string(),
            quantity: dec!(1),
            unit: "l".to_string(),
            is_out_of_catalog: false,
            supplier_id: None,
            unit_price,
        }
    }

    #[test]
    fn test_clean_dataset_has_no_issues() {
        let teachers = vec![teacher()];
        let cycles = vec![Cycle {
            id: CycleId::new(),
            name: "Dirección de Cocina".to_string(),
            code: None,
        }];
        let modules = vec![Module {
            id: ModuleId::new(),
            cycle_id: cycles[0].id,
            name: "Postres".to_string(),
        }];
        let groups = vec![Group {
            id: GroupId::new(),
            module_id: modules[0].id,
            name: "2B".to_string(),
        }];
        let assignments = vec![Assignment::new(teachers[0].id, groups[0].id)];
        let orders = vec![processed_order(teachers[0].id)];
        let items = vec![item(orders[0].id, None, Some(dec!(3)))];

        let data = ExpenseDataset {
            orders: &orders,
            order_items: &items,
            teachers: &teachers,
            assignments: &assignments,
            groups: &groups,
            modules: &modules,
            cycles: &cycles,
            ..ExpenseDataset::default()
        };

        let issues = check_integrity(&data);
        assert!(issues.is_empty(), "unexpected issues: {issues:?}");
        assert!(ensure_consistent(&issues).is_ok());
    }

    #[test]
    fn test_reports_dangling_references_and_pricing() {
        let teachers = vec![teacher()];
        let stranger = TeacherId::new();
        let missing_group = GroupId::new();
        let assignments = vec![Assignment::new(teachers[0].id, missing_group)];
        let groups = vec![Group {
            id: GroupId::new(),
            module_id: ModuleId::new(),
            name: "3C".to_string(),
        }];
        let products = vec![Product {
            id: ProductId::new(),
            name: "Nata".to_string(),
            suppliers: vec![ProductSupplier {
                supplier_id: SupplierId::new(),
                price: dec!(2),
                status: OfferStatus::Active,
            }],
        }];
        let orders = vec![processed_order(stranger)];
        let orphan_order = OrderId::new();
        let items = vec![
            item(orders[0].id, None, None),
            item(orders[0].id, Some(products[0].id), None),
            item(orphan_order, None, Some(dec!(1))),
        ];

        let data = ExpenseDataset {
            orders: &orders,
            order_items: &items,
            teachers: &teachers,
            assignments: &assignments,
            groups: &groups,
            products: &products,
            ..ExpenseDataset::default()
        };

        let issues = check_integrity(&data);
        assert!(issues.contains(&IntegrityIssue::OrphanedItem {
            item_id: items[2].id,
            order_id: orphan_order,
        }));
        assert!(issues.contains(&IntegrityIssue::UnknownTeacher {
            order_id: orders[0].id,
            teacher_id: stranger,
        }));
        assert!(issues.contains(&IntegrityIssue::DanglingAssignment {
            teacher_id: teachers[0].id,
            group_id: missing_group,
        }));
        assert!(issues.contains(&IntegrityIssue::DanglingGroupModule {
            group_id: groups[0].id,
            module_id: groups[0].module_id,
        }));
        assert!(issues.contains(&IntegrityIssue::UnpricedItem {
            item_id: items[0].id,
            product_name: "Nata".to_string(),
        }));
        assert!(issues.contains(&IntegrityIssue::FirstSupplierFallback {
            item_id: items[1].id,
            product_id: products[0].id,
            supplier_id: products[0].suppliers[0].supplier_id,
        }));
        assert!(issues.contains(&IntegrityIssue::UnassignedTeacher {
            teacher_id: stranger,
            expense: dec!(2),
        }));

        let err = ensure_consistent(&issues).unwrap_err();
        assert!(matches!(err, ExpenseError::IntegrityViolations { count: 5, .. }));
    }

    #[test]
    fn test_info_issues_do_not_fail_consistency() {
        let issues = vec![IntegrityIssue::UnassignedTeacher {
            teacher_id: TeacherId::new(),
            expense: dec!(10),
        }];
        assert_eq!(issues[0].severity(), Severity::Info);
        assert!(ensure_consistent(&issues).is_ok());
    }
}
