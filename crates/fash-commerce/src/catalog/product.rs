//! Product records.

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::Serialize;

/// A product in the catalog.
///
/// `id`, `name` and `price` are fixed once the product is created; only
/// `stock` changes afterwards, and it never goes negative.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Product {
    /// Unique product identifier, chosen by the manager.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    stock: i64,
}

impl Product {
    /// Create a validated product.
    ///
    /// Returns an error if the name is blank, the price is negative, or the
    /// stock is negative.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Money,
        stock: i64,
    ) -> Result<Self, CommerceError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CommerceError::InvalidProduct(
                "name must not be empty".to_string(),
            ));
        }
        if price.is_negative() {
            return Err(CommerceError::InvalidProduct(format!(
                "price must not be negative, got {}",
                price.display_amount()
            )));
        }
        if stock < 0 {
            return Err(CommerceError::InvalidProduct(format!(
                "stock must not be negative, got {}",
                stock
            )));
        }
        Ok(Self {
            id,
            name: name.trim().to_string(),
            price,
            stock,
        })
    }

    /// Create a product from a decimal price.
    pub fn with_decimal_price(
        id: ProductId,
        name: impl Into<String>,
        price: f64,
        currency: Currency,
        stock: i64,
    ) -> Result<Self, CommerceError> {
        let price = Money::from_decimal(price, currency).ok_or_else(|| {
            CommerceError::InvalidProduct(format!("price {} is not representable", price))
        })?;
        Self::new(id, name, price, stock)
    }

    /// Units currently in stock.
    pub fn stock(&self) -> i64 {
        self.stock
    }

    /// Check if a specific quantity can be taken from stock.
    pub fn can_fulfill(&self, quantity: i64) -> bool {
        quantity <= self.stock
    }

    /// Check if out of stock.
    pub fn is_out_of_stock(&self) -> bool {
        self.stock == 0
    }

    /// Take `quantity` units out of stock.
    pub(crate) fn take_stock(&mut self, quantity: i64) -> Result<(), CommerceError> {
        if quantity <= 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }
        if !self.can_fulfill(quantity) {
            return Err(CommerceError::InsufficientStock {
                product_id: self.id,
                name: self.name.clone(),
                requested: quantity,
                available: self.stock,
            });
        }
        self.stock -= quantity;
        Ok(())
    }

    /// Put `quantity` units back into stock.
    pub(crate) fn restock(&mut self, quantity: i64) -> Result<(), CommerceError> {
        self.stock = self
            .stock
            .checked_add(quantity)
            .ok_or(CommerceError::Overflow)?;
        Ok(())
    }

    /// Price of `quantity` units.
    pub fn line_total(&self, quantity: i64) -> Result<Money, CommerceError> {
        self.price
            .try_multiply(quantity)
            .ok_or(CommerceError::Overflow)
    }
}
