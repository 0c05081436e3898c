//! Commerce error types.

use crate::ids::ProductId;
use thiserror::Error;

/// Errors that can occur in catalog, cart and checkout operations.
///
/// A failed operation never leaves partial changes behind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Product not found in the catalog.
    #[error("Product ID not found: {0}")]
    ProductNotFound(ProductId),

    /// Item not in cart.
    #[error("Product not found in cart: {0}")]
    ItemNotInCart(ProductId),

    /// Requested more than the catalog has in stock.
    #[error("Insufficient stock for product: {name} (requested {requested}, available {available})")]
    InsufficientStock {
        product_id: ProductId,
        name: String,
        requested: i64,
        available: i64,
    },

    /// Quantity was zero or negative.
    #[error("Quantity must be positive, got {0}")]
    InvalidQuantity(i64),

    /// A product record failed validation.
    #[error("Invalid product: {0}")]
    InvalidProduct(String),

    /// Checkout attempted with nothing in the cart.
    #[error("Shopping cart is empty.")]
    EmptyCart,

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in quantity or money calculation")]
    Overflow,
}

/// Coarse classification of a [`CommerceError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed a bad value; retrying with other input may succeed.
    InvalidArgument,
    /// The platform was in a state where the operation cannot run.
    Runtime,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "invalid_argument",
            ErrorKind::Runtime => "runtime",
        }
    }
}

impl CommerceError {
    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CommerceError::ProductNotFound(_)
            | CommerceError::ItemNotInCart(_)
            | CommerceError::InsufficientStock { .. }
            | CommerceError::InvalidQuantity(_)
            | CommerceError::InvalidProduct(_) => ErrorKind::InvalidArgument,
            CommerceError::EmptyCart | CommerceError::Overflow => ErrorKind::Runtime,
        }
    }

    /// Check if this error was caused by bad input.
    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }
}
