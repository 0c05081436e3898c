//! Order types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::OrderId;
use crate::money::Money;

/// A completed purchase.
///
/// Orders are only built by the platform at checkout and cannot be changed
/// afterwards.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Order {
    id: OrderId,
    line_items: Vec<OrderLineItem>,
    total: Money,
    placed_by: String,
    placed_at: DateTime<Utc>,
}

impl Order {
    pub(crate) fn new(
        id: OrderId,
        line_items: Vec<OrderLineItem>,
        total: Money,
        placed_by: impl Into<String>,
    ) -> Self {
        Self {
            id,
            line_items,
            total,
            placed_by: placed_by.into(),
            placed_at: Utc::now(),
        }
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    /// Purchased lines, in product id order.
    pub fn line_items(&self) -> &[OrderLineItem] {
        &self.line_items
    }

    /// Total amount charged.
    pub fn total(&self) -> Money {
        self.total
    }

    /// Username of the customer who placed the order.
    pub fn placed_by(&self) -> &str {
        &self.placed_by
    }

    pub fn placed_at(&self) -> DateTime<Utc> {
        self.placed_at
    }

    /// Units across all line items.
    pub fn item_count(&self) -> Result<i64, CommerceError> {
        self.line_items
            .iter()
            .try_fold(0_i64, |count, item| count.checked_add(item.quantity))
            .ok_or(CommerceError::Overflow)
    }
}

/// A line item in an order.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OrderLineItem {
    /// The product as it was when the order was placed.
    pub product: Product,
    /// Quantity ordered.
    pub quantity: i64,
    /// Price for this line at order time.
    pub subtotal: Money,
}

impl OrderLineItem {
    pub(crate) fn snapshot(product: &Product, quantity: i64) -> Result<Self, CommerceError> {
        Ok(Self {
            product: product.clone(),
            quantity,
            subtotal: product.line_total(quantity)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;
    use crate::money::Currency;

    #[test]
    fn test_order_snapshot() {
        let mut product =
            Product::with_decimal_price(ProductId::new(1), "Shirt", 20.0, Currency::USD, 10).unwrap();
        let line = OrderLineItem::snapshot(&product, 3).unwrap();
        product.take_stock(5).unwrap();

        let order = Order::new(OrderId::FIRST, vec![line], Money::new(6000, Currency::USD), "user");

        assert_eq!(order.id(), OrderId::FIRST);
        assert_eq!(order.item_count().unwrap(), 3);
        assert_eq!(order.total().display(), "$60.00");
        assert_eq!(order.placed_by(), "user");
        // The snapshot keeps the stock level from checkout time.
        assert_eq!(order.line_items()[0].product.stock(), 10);
        assert_eq!(order.line_items()[0].subtotal.amount_cents, 6000);
    }
}
