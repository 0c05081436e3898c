//! The store platform: catalog, the active cart and order history.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::cart::{CartLine, ShoppingCart};
use crate::catalog::{Catalog, Product};
use crate::checkout::{Order, OrderLineItem};
use crate::error::CommerceError;
use crate::ids::{OrderId, ProductId};
use crate::money::{Currency, Money};

/// Orchestrates catalog, cart and checkout for a single session.
///
/// Stock is taken out of the catalog when an item goes into the cart and
/// returned when the item is removed again. Placing an order does not touch
/// stock.
#[derive(Debug, Clone)]
pub struct Platform {
    catalog: Catalog,
    cart: ShoppingCart,
    orders: Vec<Order>,
    next_order_id: OrderId,
}

/// Result of a successful add-to-cart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartAddition {
    pub product_id: ProductId,
    pub product_name: String,
    pub added: i64,
    /// Quantity of this product now in the cart.
    pub in_cart: i64,
    /// Stock left in the catalog.
    pub remaining_stock: i64,
}

/// Cart contents resolved against the catalog, with the running total.
#[derive(Debug, Clone, Serialize)]
pub struct CartView<'a> {
    pub lines: Vec<CartLine<'a>>,
    pub total: Money,
}

impl CartView<'_> {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Platform {
    /// Create an empty platform pricing everything in `currency`.
    pub fn new(currency: Currency) -> Self {
        Self::with_catalog(Catalog::new(currency))
    }

    /// Create a platform around an existing catalog.
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog,
            cart: ShoppingCart::new(),
            orders: Vec::new(),
            next_order_id: OrderId::FIRST,
        }
    }

    pub fn currency(&self) -> Currency {
        self.catalog.currency()
    }

    /// Add a product to the catalog, replacing any product with the same id.
    ///
    /// Returns the replaced product.
    pub fn add_product(&mut self, product: Product) -> Result<Option<Product>, CommerceError> {
        let id = product.id;
        let replaced = self.catalog.upsert(product)?;
        match &replaced {
            Some(old) => warn!(product_id = %id, old_name = %old.name, "Product overwritten"),
            None => debug!(product_id = %id, "Product added"),
        }
        Ok(replaced)
    }

    /// All catalog products in id order.
    pub fn browse_products(&self) -> Vec<&Product> {
        self.catalog.iter().collect()
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.catalog.get(id)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Reserve `quantity` units of a product and put them in the cart.
    ///
    /// Fails without side effects if the product is unknown, the quantity is
    /// not positive, or it exceeds the product's stock.
    pub fn add_item_to_cart(
        &mut self,
        product_id: ProductId,
        quantity: i64,
    ) -> Result<CartAddition, CommerceError> {
        let product = self.catalog.require_mut(product_id)?;
        product.take_stock(quantity)?;

        let in_cart = match self.cart.add_item(product_id, quantity) {
            Ok(in_cart) => in_cart,
            Err(e) => {
                product.restock(quantity)?;
                return Err(e);
            }
        };

        debug!(
            product_id = %product_id,
            quantity,
            in_cart,
            remaining_stock = product.stock(),
            "Item added to cart"
        );

        Ok(CartAddition {
            product_id,
            product_name: product.name.clone(),
            added: quantity,
            in_cart,
            remaining_stock: product.stock(),
        })
    }

    /// Remove a product from the cart and return its quantity to stock.
    ///
    /// The units are added to the product's current stock. If the manager
    /// re-added the product while it sat in the cart, they land on top of
    /// the new stock figure. Returns the quantity that was restored.
    pub fn remove_item_from_cart(&mut self, product_id: ProductId) -> Result<i64, CommerceError> {
        let quantity = self.cart.quantity_of(product_id);
        if quantity == 0 {
            return Err(CommerceError::ItemNotInCart(product_id));
        }

        self.catalog.require_mut(product_id)?.restock(quantity)?;
        self.cart.remove_item(product_id)?;

        debug!(product_id = %product_id, quantity, "Item removed from cart, stock restored");
        Ok(quantity)
    }

    /// Turn the cart into an order placed by `placed_by`.
    ///
    /// The cart is empty afterwards. Fails with [`CommerceError::EmptyCart`]
    /// when there is nothing to order.
    pub fn place_order(&mut self, placed_by: &str) -> Result<&Order, CommerceError> {
        if self.cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }

        let total = self.cart.calculate_total(&self.catalog)?;
        let line_items = self
            .cart
            .lines(&self.catalog)?
            .into_iter()
            .map(|line| OrderLineItem::snapshot(line.product, line.quantity))
            .collect::<Result<Vec<_>, _>>()?;

        let order_id = self.next_order_id;
        self.orders
            .push(Order::new(order_id, line_items, total, placed_by));
        self.next_order_id = order_id.next();
        self.cart.clear();

        info!(order_id = %order_id, total = %total, placed_by, "Order placed");
        Ok(&self.orders[self.orders.len() - 1])
    }

    /// Orders placed so far, oldest first.
    pub fn view_order_history(&self) -> &[Order] {
        &self.orders
    }

    /// Current cart contents with totals.
    pub fn view_cart(&self) -> Result<CartView<'_>, CommerceError> {
        Ok(CartView {
            lines: self.cart.lines(&self.catalog)?,
            total: self.cart.calculate_total(&self.catalog)?,
        })
    }

    pub fn cart(&self) -> &ShoppingCart {
        &self.cart
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::new(Currency::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn platform_with_shirt() -> Platform {
        let mut platform = Platform::new(Currency::USD);
        platform
            .add_product(
                Product::with_decimal_price(ProductId::new(1), "Shirt", 20.0, Currency::USD, 10)
                    .unwrap(),
            )
            .unwrap();
        platform
    }

    #[test]
    fn test_add_item_to_cart_reserves_stock() {
        let mut platform = platform_with_shirt();
        let added = platform.add_item_to_cart(ProductId::new(1), 3).unwrap();

        assert_eq!(added.product_name, "Shirt");
        assert_eq!(added.in_cart, 3);
        assert_eq!(added.remaining_stock, 7);
        assert_eq!(platform.product(ProductId::new(1)).unwrap().stock(), 7);
        assert_eq!(platform.cart().quantity_of(ProductId::new(1)), 3);
    }

    #[test]
    fn test_add_item_to_cart_merges() {
        let mut platform = platform_with_shirt();
        platform.add_item_to_cart(ProductId::new(1), 3).unwrap();
        let added = platform.add_item_to_cart(ProductId::new(1), 2).unwrap();

        assert_eq!(added.in_cart, 5);
        assert_eq!(added.remaining_stock, 5);
    }

    #[test]
    fn test_add_item_to_cart_rejects_bad_input() {
        let mut platform = platform_with_shirt();

        let err = platform.add_item_to_cart(ProductId::new(1), 11).unwrap_err();
        assert!(matches!(err, CommerceError::InsufficientStock { requested: 11, available: 10, .. }));

        let err = platform.add_item_to_cart(ProductId::new(1), 0).unwrap_err();
        assert_eq!(err, CommerceError::InvalidQuantity(0));

        let err = platform.add_item_to_cart(ProductId::new(99), 1).unwrap_err();
        assert_eq!(err, CommerceError::ProductNotFound(ProductId::new(99)));

        assert_eq!(platform.product(ProductId::new(1)).unwrap().stock(), 10);
        assert!(platform.cart().is_empty());
    }

    #[test]
    fn test_remove_item_from_cart_restores_stock() {
        let mut platform = platform_with_shirt();
        platform.add_item_to_cart(ProductId::new(1), 4).unwrap();

        assert_eq!(platform.remove_item_from_cart(ProductId::new(1)).unwrap(), 4);
        assert_eq!(platform.product(ProductId::new(1)).unwrap().stock(), 10);
        assert!(platform.cart().is_empty());

        assert_eq!(
            platform.remove_item_from_cart(ProductId::new(1)).unwrap_err(),
            CommerceError::ItemNotInCart(ProductId::new(1))
        );
    }

    #[test]
    fn test_place_order() {
        let mut platform = platform_with_shirt();
        platform.add_item_to_cart(ProductId::new(1), 3).unwrap();

        let order = platform.place_order("user").unwrap();
        assert_eq!(order.id(), OrderId::new(1));
        assert_eq!(order.total().amount_cents, 6000);
        assert_eq!(order.placed_by(), "user");

        assert!(platform.cart().is_empty());
        assert_eq!(platform.product(ProductId::new(1)).unwrap().stock(), 7);
        assert_eq!(platform.view_order_history().len(), 1);
    }

    #[test]
    fn test_place_order_empty_cart() {
        let mut platform = platform_with_shirt();
        assert_eq!(platform.place_order("user").unwrap_err(), CommerceError::EmptyCart);
        assert!(platform.view_order_history().is_empty());
    }

    #[test]
    fn test_order_ids_are_sequential() {
        let mut platform = platform_with_shirt();
        for expected in 1..=3 {
            platform.add_item_to_cart(ProductId::new(1), 1).unwrap();
            let order = platform.place_order("user").unwrap();
            assert_eq!(order.id().get(), expected);
        }
    }

    #[test]
    fn test_view_cart() {
        let mut platform = platform_with_shirt();
        assert!(platform.view_cart().unwrap().is_empty());

        platform.add_item_to_cart(ProductId::new(1), 2).unwrap();
        let view = platform.view_cart().unwrap();
        assert_eq!(view.lines.len(), 1);
        assert_eq!(view.lines[0].quantity, 2);
        assert_eq!(view.total.display(), "$40.00");
    }

    #[test]
    fn test_add_product_overwrite_returns_previous() {
        let mut platform = platform_with_shirt();
        let replaced = platform
            .add_product(
                Product::with_decimal_price(ProductId::new(1), "Polo", 25.0, Currency::USD, 3)
                    .unwrap(),
            )
            .unwrap();

        assert_eq!(replaced.unwrap().name, "Shirt");
        assert_eq!(platform.browse_products().len(), 1);
        assert_eq!(platform.browse_products()[0].name, "Polo");
    }
}
