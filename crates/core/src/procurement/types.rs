//! Procurement data types.

use chrono::{DateTime, Utc};
use culinaria_shared::types::{EventId, OrderId, OrderItemId, ProductId, SupplierId, TeacherId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Lifecycle status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Being prepared by the teacher.
    Draft,
    /// Sent to administration.
    Submitted,
    /// Goods procured; the cost is realized.
    Processed,
    /// Delivered complete.
    ReceivedOk,
    /// Delivered with missing lines.
    ReceivedPartial,
}

impl OrderStatus {
    /// Whether orders in this status count as realized expense.
    ///
    /// Only `Processed` does; received orders are not counted.
    #[must_use]
    pub const fn is_realized(self) -> bool {
        matches!(self, Self::Processed)
    }
}

/// A procurement order placed by a teacher.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Order ID.
    pub id: OrderId,
    /// Event the order is for, if any.
    #[serde(default)]
    pub event_id: Option<EventId>,
    /// Teacher who placed the order.
    pub teacher_id: TeacherId,
    /// Lifecycle status.
    pub status: OrderStatus,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// A line item of an order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Item ID.
    pub id: OrderItemId,
    /// Owning order.
    pub order_id: OrderId,
    /// Catalog product; `None` for custom entries.
    #[serde(default)]
    pub product_id: Option<ProductId>,
    /// Product name as entered on the order.
    pub product_name: String,
    /// Quantity ordered (positive). Costs beyond the `Decimal` range saturate.
    pub quantity: Decimal,
    /// Unit of measure ("kg", "l", "ud", ...).
    pub unit: String,
    /// Whether the item was requested outside the catalog.
    #[serde(default)]
    pub is_out_of_catalog: bool,
    /// Supplier the item is bought from.
    #[serde(default)]
    pub supplier_id: Option<SupplierId>,
    /// Explicit unit price.
    #[serde(default)]
    pub unit_price: Option<Decimal>,
}

/// Availability of a supplier's offer for a product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfferStatus {
    /// Currently offered.
    #[default]
    Active,
    /// No longer offered.
    Inactive,
    /// Any status this version does not know about.
    #[serde(other)]
    Unknown,
}

/// One supplier's price for a product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSupplier {
    /// Supplier offering the product.
    pub supplier_id: SupplierId,
    /// Unit price.
    pub price: Decimal,
    /// Offer status.
    #[serde(default)]
    pub status: OfferStatus,
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product ID.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Supplier offers, in catalog order.
    #[serde(default)]
    pub suppliers: Vec<ProductSupplier>,
}

/// A supplier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    /// Supplier ID.
    pub id: SupplierId,
    /// Supplier name.
    pub name: String,
}
