//! Typed IDs for type-safe entity references.
//!
//! Using typed IDs prevents accidentally passing a `UserId` where a
//! `CashBoxId` is expected.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
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

typed_id!(UserId, "Unique identifier for a user.");
typed_id!(CompanyId, "Unique identifier for a company.");
typed_id!(PartnerId, "Unique identifier for a partner (vendor, customer or beneficiary).");
typed_id!(DepartmentId, "Unique identifier for a company department.");
typed_id!(CashBoxId, "Unique identifier for a cash box.");
typed_id!(CashLineId, "Unique identifier for a cash box line.");
typed_id!(ReceiptId, "Unique identifier for a cash receipt voucher.");
typed_id!(PaymentTypeId, "Unique identifier for a payment type catalog entry.");
typed_id!(JournalId, "Unique identifier for an accounting journal.");
typed_id!(AccountId, "Unique identifier for a general ledger account.");
typed_id!(InvoiceId, "Unique identifier for a vendor or customer invoice.");
typed_id!(MoveId, "Unique identifier for a posted journal entry (move).");
typed_id!(MoveLineId, "Unique identifier for a single posted move line.");
typed_id!(PaymentId, "Unique identifier for a registered payment.");
