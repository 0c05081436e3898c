//! Checkout module.
//!
//! Contains the immutable order records produced at checkout.

mod order;

pub use order::{Order, OrderLineItem};
