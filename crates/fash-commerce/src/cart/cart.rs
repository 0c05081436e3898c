//! Shopping cart.

use std::collections::BTreeMap;

use crate::catalog::{Catalog, Product};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::Serialize;

/// Pending selections for the active session: product id to quantity.
///
/// Every entry present has a positive quantity.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ShoppingCart {
    items: BTreeMap<ProductId, i64>,
}

impl ShoppingCart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` of a product, merging with any quantity already in
    /// the cart.
    ///
    /// Returns the new quantity for that product.
    pub fn add_item(&mut self, product_id: ProductId, quantity: i64) -> Result<i64, CommerceError> {
        if quantity <= 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }

        let current = self.quantity_of(product_id);
        let merged = current
            .checked_add(quantity)
            .ok_or(CommerceError::Overflow)?;
        self.items.insert(product_id, merged);
        Ok(merged)
    }

    /// Remove a product from the cart, returning the quantity it held.
    pub fn remove_item(&mut self, product_id: ProductId) -> Result<i64, CommerceError> {
        self.items
            .remove(&product_id)
            .ok_or(CommerceError::ItemNotInCart(product_id))
    }

    /// Sum of price × quantity over every entry.
    pub fn calculate_total(&self, catalog: &Catalog) -> Result<Money, CommerceError> {
        let subtotals = self
            .lines(catalog)?
            .into_iter()
            .map(|line| line.subtotal)
            .collect::<Vec<_>>();
        Money::try_sum(subtotals.iter(), catalog.currency()).ok_or(CommerceError::Overflow)
    }

    /// Join each entry with its catalog product.
    pub fn lines<'a>(&self, catalog: &'a Catalog) -> Result<Vec<CartLine<'a>>, CommerceError> {
        self.items
            .iter()
            .map(|(&id, &quantity)| {
                let product = catalog.require(id)?;
                Ok(CartLine {
                    product,
                    quantity,
                    subtotal: product.line_total(quantity)?,
                })
            })
            .collect()
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Quantity held for a product, zero when absent.
    pub fn quantity_of(&self, product_id: ProductId) -> i64 {
        self.items.get(&product_id).copied().unwrap_or(0)
    }

    /// Total item count (sum of quantities).
    ///
    /// Each line holds at most `i64::MAX` units, so the sum can overflow.
    pub fn item_count(&self) -> Result<i64, CommerceError> {
        self.items
            .values()
            .try_fold(0_i64, |count, &quantity| count.checked_add(quantity))
            .ok_or(CommerceError::Overflow)
    }

    /// Number of distinct products.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Entries in product id order.
    pub fn iter(&self) -> impl Iterator<Item = (ProductId, i64)> + '_ {
        self.items.iter().map(|(&id, &quantity)| (id, quantity))
    }
}

/// A cart entry resolved against the catalog.
#[derive(Debug, Clone, Serialize)]
pub struct CartLine<'a> {
    pub product: &'a Product,
    pub quantity: i64,
    pub subtotal: Money,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn catalog() -> Catalog {
        let mut catalog = Catalog::new(Currency::USD);
        catalog
            .upsert(Product::with_decimal_price(ProductId::new(1), "Shirt", 20.0, Currency::USD, 10).unwrap())
            .unwrap();
        catalog
            .upsert(Product::with_decimal_price(ProductId::new(2), "Scarf", 7.5, Currency::USD, 4).unwrap())
            .unwrap();
        catalog
    }

    #[test]
    fn test_add_item() {
        let mut cart = ShoppingCart::new();
        assert_eq!(cart.add_item(ProductId::new(1), 2).unwrap(), 2);
        assert_eq!(cart.item_count().unwrap(), 2);
        assert_eq!(cart.unique_item_count(), 1);
    }

    #[test]
    fn test_add_same_item_increases_quantity() {
        let mut cart = ShoppingCart::new();
        cart.add_item(ProductId::new(1), 1).unwrap();
        assert_eq!(cart.add_item(ProductId::new(1), 2).unwrap(), 3);
        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.quantity_of(ProductId::new(1)), 3);
    }

    #[test]
    fn test_invalid_quantity() {
        let mut cart = ShoppingCart::new();
        assert_eq!(
            cart.add_item(ProductId::new(1), 0).unwrap_err(),
            CommerceError::InvalidQuantity(0)
        );
        assert!(cart.add_item(ProductId::new(1), -3).is_err());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_overflowing_merge_leaves_cart_unchanged() {
        let mut cart = ShoppingCart::new();
        cart.add_item(ProductId::new(1), i64::MAX).unwrap();
        assert_eq!(cart.add_item(ProductId::new(1), 1).unwrap_err(), CommerceError::Overflow);
        assert_eq!(cart.quantity_of(ProductId::new(1)), i64::MAX);
    }

    #[test]
    fn test_remove_item() {
        let mut cart = ShoppingCart::new();
        cart.add_item(ProductId::new(1), 4).unwrap();
        assert_eq!(cart.remove_item(ProductId::new(1)).unwrap(), 4);
        assert!(cart.is_empty());
        assert_eq!(
            cart.remove_item(ProductId::new(1)).unwrap_err(),
            CommerceError::ItemNotInCart(ProductId::new(1))
        );
    }

    #[test]
    fn test_calculate_total() {
        let catalog = catalog();
        let mut cart = ShoppingCart::new();
        assert_eq!(cart.calculate_total(&catalog).unwrap().amount_cents, 0);

        cart.add_item(ProductId::new(1), 3).unwrap();
        cart.add_item(ProductId::new(2), 2).unwrap();
        assert_eq!(cart.calculate_total(&catalog).unwrap().amount_cents, 7500);
    }

    #[test]
    fn test_calculate_total_unknown_product() {
        let catalog = catalog();
        let mut cart = ShoppingCart::new();
        cart.add_item(ProductId::new(42), 1).unwrap();
        assert_eq!(
            cart.calculate_total(&catalog).unwrap_err(),
            CommerceError::ProductNotFound(ProductId::new(42))
        );
    }

    #[test]
    fn test_lines_in_id_order() {
        let catalog = catalog();
        let mut cart = ShoppingCart::new();
        cart.add_item(ProductId::new(2), 1).unwrap();
        cart.add_item(ProductId::new(1), 2).unwrap();

        let lines = cart.lines(&catalog).unwrap();
        assert_eq!(lines[0].product.name, "Shirt");
        assert_eq!(lines[0].subtotal.amount_cents, 4000);
        assert_eq!(lines[1].product.name, "Scarf");
    }

    #[test]
    fn test_clear() {
        let mut cart = ShoppingCart::new();
        cart.add_item(ProductId::new(1), 1).unwrap();
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count().unwrap(), 0);
    }
}
