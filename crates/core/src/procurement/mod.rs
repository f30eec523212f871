//! Procurement records: orders, order line items, the product catalog and suppliers.

pub mod pricing;
pub mod realized;
pub mod types;

pub use pricing::{PriceResolver, PriceSource};
pub use realized::RealizedSpend;
pub use types::{
    OfferStatus, Order, OrderItem, OrderStatus, Product, ProductSupplier, Supplier,
};
