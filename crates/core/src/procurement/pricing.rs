//! Item cost resolution against the product catalog.

use std::collections::HashMap;

use culinaria_shared::types::{ProductId, SupplierId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::{OrderItem, Product};

/// Where an item's unit price came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum PriceSource {
    /// The item carries its own unit price.
    Explicit {
        /// Unit price on the item.
        unit_price: Decimal,
    },
    /// Price of the first supplier listed on the catalog product.
    ///
    /// Not necessarily the cheapest offer nor the supplier named on the item.
    FirstSupplierFallback {
        /// Supplier whose price was taken.
        supplier_id: SupplierId,
        /// That supplier's unit price.
        unit_price: Decimal,
    },
    /// No price could be found; the item costs zero.
    Unpriced,
}

impl PriceSource {
    /// Unit price, zero when unpriced.
    #[must_use]
    pub const fn unit_price(self) -> Decimal {
        match self {
            Self::Explicit { unit_price } | Self::FirstSupplierFallback { unit_price, .. } => {
                unit_price
            }
            Self::Unpriced => Decimal::ZERO,
        }
    }
}

/// Resolves item costs against a borrowed product catalog.
#[derive(Debug, Default)]
pub struct PriceResolver<'a> {
    products: HashMap<ProductId, &'a Product>,
}

impl<'a> PriceResolver<'a> {
    /// Indexes the catalog. Duplicate product ids keep the first occurrence.
    #[must_use]
    pub fn new(products: &'a [Product]) -> Self {
        let mut index = HashMap::with_capacity(products.len());
        for product in products {
            index.entry(product.id).or_insert(product);
        }
        Self { products: index }
    }

    /// Looks up a catalog product.
    #[must_use]
    pub fn product(&self, id: ProductId) -> Option<&'a Product> {
        self.products.get(&id).copied()
    }

    /// Determines which unit price applies to an item.
    ///
    /// Precedence: explicit unit price, then the first supplier of the
    /// referenced product, otherwise unpriced.
    #[must_use]
    pub fn resolve(&self, item: &OrderItem) -> PriceSource {
        if let Some(unit_price) = item.unit_price {
            return PriceSource::Explicit { unit_price };
        }

        item.product_id
            .and_then(|id| self.product(id))
            .and_then(|product| product.suppliers.first())
            .map_or(PriceSource::Unpriced, |offer| {
                PriceSource::FirstSupplierFallback {
                    supplier_id: offer.supplier_id,
                    unit_price: offer.price,
                }
            })
    }

    /// Cost of an item: quantity times resolved unit price.
    ///
    /// Saturates at `Decimal::MAX` / `Decimal::MIN` instead of overflowing.
    #[must_use]
    pub fn item_cost(&self, item: &OrderItem) -> Decimal {
        item.quantity.saturating_mul(self.resolve(item).unit_price())
    }
}
