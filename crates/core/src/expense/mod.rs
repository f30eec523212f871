//! Expense attribution.
//!
//! Turns processed orders, sales and the academic hierarchy into an
//! [`ExpenseReport`]: totals, per-teacher figures, a top-teacher ranking and
//! expense attributed to groups, modules, cycles and suppliers.

pub mod cache;
pub mod engine;
pub mod error;
pub mod integrity;
pub mod snapshot;
pub mod types;


pub use cache::{CachedReport, ReportCache};
pub use engine::{ExpenseEngine, TOP_TEACHERS_LIMIT, compute_expense_report};
pub use error::ExpenseError;
pub use integrity::{IntegrityIssue, Severity, check_integrity, ensure_consistent};
pub use snapshot::ExpenseSnapshot;
pub use types::{ExpenseDataset, ExpenseReport, TeacherExpense};
