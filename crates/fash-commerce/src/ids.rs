//! Newtype IDs for type-safe identifiers.
//!
//! Product ids are chosen by the store manager; order ids are handed out
//! sequentially by the platform. Keeping them as distinct types prevents
//! passing an order number where a product id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Macro to generate integer newtype ID structs.
macro_rules! define_id {
    ($name:ident, $inner:ty) => {
        /// A numeric identifier.
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name($inner);

        impl $name {
            /// Create a new ID from its numeric value.
            pub const fn new(id: $inner) -> Self {
                Self(id)
            }

            /// Get the numeric value.
            pub const fn get(&self) -> $inner {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$inner> for $name {
            fn from(id: $inner) -> Self {
                Self(id)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse::<$inner>().map(Self)
            }
        }
    };
}

define_id!(ProductId, i64);
define_id!(OrderId, u64);

impl OrderId {
    /// The id given to the first order placed in a run.
    pub const FIRST: OrderId = OrderId(1);

    /// The id following this one.
    pub fn next(self) -> OrderId {
        OrderId(self.0 + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new(42);
        assert_eq!(id.get(), 42);
    }

    #[test]
    fn test_id_parse() {
        let id: ProductId = " 7 ".parse().unwrap();
        assert_eq!(id, ProductId::new(7));
        assert!("seven".parse::<ProductId>().is_err());
    }

    #[test]
    fn test_id_display() {
        assert_eq!(format!("{}", OrderId::new(3)), "3");
    }

    #[test]
    fn test_order_id_sequence() {
        assert_eq!(OrderId::FIRST.get(), 1);
        assert_eq!(OrderId::FIRST.next(), OrderId::new(2));
    }

    #[test]
    fn test_ids_order_numerically() {
        let mut ids = vec![ProductId::new(10), ProductId::new(2), ProductId::new(-1)];
        ids.sort();
        assert_eq!(ids, vec![ProductId::new(-1), ProductId::new(2), ProductId::new(10)]);
    }
}
