//! Product catalog module.
//!
//! Contains the product record and the id-keyed catalog that owns it.

mod catalog;
mod product;

pub use catalog::Catalog;
pub use product::Product;
