//! Rendering of catalog, cart and orders.

use fash_commerce::prelude::*;

use crate::output::{stock_badge, Output};

const PRODUCT_WIDTHS: [usize; 4] = [6, 24, 12, 12];

/// Print the catalog listing.
pub fn products(output: &Output, products: &[&Product]) {
    if output.is_json() {
        output.json(&products);
        return;
    }
    if products.is_empty() {
        output.line("No products available.");
        return;
    }

    output.table_row(&["ID", "Name", "Price", "Stock"], &PRODUCT_WIDTHS);
    for product in products {
        let id = product.id.to_string();
        let price = product.price.display();
        let stock = stock_badge(product.stock());
        output.table_row(
            &[id.as_str(), product.name.as_str(), price.as_str(), stock.as_str()],
            &PRODUCT_WIDTHS,
        );
    }
}

/// Print the cart contents and total.
pub fn cart(output: &Output, view: &CartView<'_>) {
    if output.is_json() {
        output.json(view);
        return;
    }
    if view.is_empty() {
        output.line("Shopping cart is empty.");
        return;
    }

    for line in &view.lines {
        output.line(&format!(
            "Product: {}, Quantity: {}, Total: {}",
            line.product.name,
            line.quantity,
            line.subtotal.display()
        ));
    }
    output.kv("Cart total", &view.total.display());
}

/// Print one order.
pub fn order(output: &Output, order: &Order) {
    if output.is_json() {
        output.json(order);
        return;
    }

    output.line(&format!("Order ID: {}", order.id()));
    output.kv("Placed by", order.placed_by());
    output.kv(
        "Placed at",
        &order.placed_at().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    );
    for item in order.line_items() {
        output.line(&format!(
            "Product: {}, Quantity: {}, Subtotal: {}",
            item.product.name,
            item.quantity,
            item.subtotal.display()
        ));
    }
    output.line(&format!("Total Amount: {}", order.total().display()));
}

/// Print the order history, oldest first.
pub fn order_history(output: &Output, orders: &[Order]) {
    if output.is_json() {
        output.json(&orders);
        return;
    }
    if orders.is_empty() {
        output.line("No orders placed yet.");
        return;
    }

    for placed in orders {
        order(output, placed);
        output.line("");
    }
}
