//! Typed IDs for type-safe entity references.
//!
//! Using typed IDs prevents accidentally passing a `GroupId` where a `ModuleId` is expected,
//! which matters a lot when walking the cycle → module → group hierarchy.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Creates a new random ID using UUID v7 (time-ordered).
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Creates an ID from an existing UUID.
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            #[must_use]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

typed_id!(CycleId, "Unique identifier for a teaching cycle.");
typed_id!(ModuleId, "Unique identifier for a module within a cycle.");
typed_id!(GroupId, "Unique identifier for a student group within a module.");
typed_id!(TeacherId, "Unique identifier for a teacher.");
typed_id!(
    AssignmentId,
    "Unique identifier for a teacher-to-group assignment."
);
typed_id!(OrderId, "Unique identifier for a procurement order.");
typed_id!(OrderItemId, "Unique identifier for an order line item.");
typed_id!(ProductId, "Unique identifier for a catalog product.");
typed_id!(SupplierId, "Unique identifier for a supplier.");
typed_id!(SaleId, "Unique identifier for a sale record.");
typed_id!(EventId, "Unique identifier for a budgeted event.");
