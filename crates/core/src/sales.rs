//! Sales ledger.
//!
//! Sales are recorded independently from orders and feed the revenue side
//! of expense reports.

use chrono::NaiveDate;
use culinaria_shared::types::{SaleId, TeacherId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A sale recorded by a teacher (e.g. dishes sold from a practice service).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    /// Sale ID.
    pub id: SaleId,
    /// Teacher credited with the sale.
    pub teacher_id: TeacherId,
    /// Amount collected.
    pub amount: Decimal,
    /// Sale date.
    pub date: NaiveDate,
    /// Description.
    #[serde(default)]
    pub description: String,
    /// Free-form category.
    #[serde(default)]
    pub category: String,
}
