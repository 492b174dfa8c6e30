//! Typed row identifiers
//!
//! Every table uses a database-generated 64-bit identity. Wrapping the raw
//! integer per entity keeps a `ListId` from being passed where a `UserId`
//! is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! row_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw identity value
            #[inline]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Get the inner i64 value
            #[inline]
            pub const fn into_inner(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

row_id!(
    /// Identity of a row in the `users` table
    UserId
);

row_id!(
    /// Identity of a row in the `lists` table
    ListId
);

row_id!(
    /// Identity of a row in the `products` table
    ProductId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_roundtrip_inner() {
        let id = ListId::new(42);
        assert_eq!(id.into_inner(), 42);
        assert_eq!(i64::from(id), 42);
    }

    #[test]
    fn test_id_display() {
        assert_eq!(UserId::new(1).to_string(), "1");
    }

    #[test]
    fn test_id_serializes_as_number() {
        let json = serde_json::to_string(&ListId::new(9)).unwrap();
        assert_eq!(json, "9");

        let id: ListId = serde_json::from_str("9").unwrap();
        assert_eq!(id, ListId::new(9));
    }

    #[test]
    fn test_id_ordering() {
        assert!(ProductId::new(1) < ProductId::new(2));
    }
}
