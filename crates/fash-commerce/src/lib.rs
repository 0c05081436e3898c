//! Store domain types and logic for FASH-HUB.
//!
//! This crate provides the in-memory core of the store:
//!
//! - **Catalog**: Products and their stock
//! - **Cart**: The active session's pending selections
//! - **Checkout**: Immutable orders
//! - **Platform**: Orchestration of the three
//!
//! # Example
//!
//! ```rust
//! use fash_commerce::prelude::*;
//!
//! let mut platform = Platform::new(Currency::USD);
//! let shirt = Product::with_decimal_price(ProductId::new(1), "Shirt", 20.0, Currency::USD, 10)?;
//! platform.add_product(shirt)?;
//!
//! platform.add_item_to_cart(ProductId::new(1), 3)?;
//! let order = platform.place_order("user")?;
//! assert_eq!(order.total().display(), "$60.00");
//! # Ok::<(), CommerceError>(())
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod platform;

pub use error::{CommerceError, ErrorKind};
pub use ids::*;
pub use money::{Currency, Money};
pub use platform::{CartAddition, CartView, Platform};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{CommerceError, ErrorKind};
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    pub use crate::cart::{CartLine, ShoppingCart};
    pub use crate::catalog::{Catalog, Product};
    pub use crate::checkout::{Order, OrderLineItem};
    pub use crate::platform::{CartAddition, CartView, Platform};
}
