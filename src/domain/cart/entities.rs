//! Cart state container
//!
//! The cart is an ordered mapping from product id to line: insertion order
//! is display order, and there is at most one line per product. Derived
//! totals are recomputed from the lines on every read so they can never
//! drift out of sync with them.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::domain::cart::errors::CartError;
use crate::domain::catalog::Product;

/// One distinct product held in the cart
#[derive(Debug, Clone)]
pub struct CartLine {
    /// Shared reference into the immutable catalog; the cart never owns or
    /// mutates product data.
    pub product: Arc<Product>,
    /// Always >= 1; a line whose quantity drops to 0 is removed entirely.
    pub quantity: u32,
}

impl CartLine {
    /// Price of this line: unit price times quantity
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// Session-scoped cart state: ordered lines plus the panel visibility flag
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
    open: bool,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` units of `product`.
    ///
    /// An existing line is incremented; otherwise a new line is appended at
    /// the end of the order. A quantity of 0 is rejected rather than
    /// silently accepted.
    pub fn add_item(&mut self, product: Arc<Product>, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity { quantity });
        }

        match self
            .lines
            .iter_mut()
            .find(|line| line.product.id == product.id)
        {
            Some(line) => line.quantity = line.quantity.saturating_add(quantity),
            None => self.lines.push(CartLine { product, quantity }),
        }

        Ok(())
    }

    /// Remove the line for `product_id`. No-op when absent.
    pub fn remove_item(&mut self, product_id: &str) {
        self.lines.retain(|line| line.product.id != product_id);
    }

    /// Set the quantity for `product_id`.
    ///
    /// A quantity <= 0 behaves exactly like [`Cart::remove_item`]. No-op
    /// when the product is not in the cart.
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(product_id);
            return;
        }

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product.id == product_id)
        {
            line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
    }

    /// Remove all lines. The panel visibility flag is untouched.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Lines in insertion order
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn contains(&self, product_id: &str) -> bool {
        self.lines.iter().any(|line| line.product.id == product_id)
    }

    /// Sum of quantities across all lines (not the line count)
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Sum of price x quantity over all lines, computed fresh on each read
    pub fn subtotal(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn product(id: &str, price: Decimal) -> Arc<Product> {
        Arc::new(Product {
            id: id.to_string(),
            name: format!("Produto {}", id),
            brand: "Bem Me Faz".to_string(),
            category: "skincare".to_string(),
            description: String::new(),
            price,
            image: String::new(),
            featured: false,
            best_seller: false,
            tags: vec![],
            variants: vec![],
        })
    }

    #[test]
    fn add_item_sums_quantities_into_a_single_line() {
        let mut cart = Cart::new();
        let serum = product("1", dec!(89.90));

        cart.add_item(serum.clone(), 2).unwrap();
        cart.add_item(serum, 3).unwrap();

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 5);
    }

    #[test]
    fn add_item_rejects_zero_quantity() {
        let mut cart = Cart::new();
        let err = cart.add_item(product("1", dec!(10.00)), 0).unwrap_err();
        assert_eq!(err, CartError::InvalidQuantity { quantity: 0 });
        assert!(cart.is_empty());
    }

    #[test]
    fn add_item_appends_new_lines_in_insertion_order() {
        let mut cart = Cart::new();
        cart.add_item(product("2", dec!(119.90)), 1).unwrap();
        cart.add_item(product("1", dec!(89.90)), 1).unwrap();
        cart.add_item(product("3", dec!(49.90)), 1).unwrap();

        let ids: Vec<&str> = cart
            .lines()
            .iter()
            .map(|line| line.product.id.as_str())
            .collect();
        assert_eq!(ids, ["2", "1", "3"]);
    }

    #[test]
    fn update_quantity_zero_or_negative_removes_the_line() {
        let mut cart = Cart::new();
        cart.add_item(product("1", dec!(89.90)), 2).unwrap();
        cart.update_quantity("1", 0);
        assert!(!cart.contains("1"));

        cart.add_item(product("1", dec!(89.90)), 2).unwrap();
        cart.update_quantity("1", -1);
        assert!(!cart.contains("1"));
    }

    #[test]
    fn update_quantity_sets_the_new_value() {
        let mut cart = Cart::new();
        cart.add_item(product("1", dec!(89.90)), 2).unwrap();
        cart.update_quantity("1", 7);
        assert_eq!(cart.lines()[0].quantity, 7);
    }

    #[test]
    fn update_quantity_on_absent_product_is_a_noop() {
        let mut cart = Cart::new();
        cart.add_item(product("1", dec!(89.90)), 2).unwrap();
        cart.update_quantity("99", 5);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn derived_totals_follow_the_lines() {
        let mut cart = Cart::new();
        cart.add_item(product("1", dec!(89.90)), 2).unwrap();
        cart.add_item(product("3", dec!(49.90)), 1).unwrap();

        assert_eq!(cart.subtotal(), dec!(229.70));
        assert_eq!(cart.item_count(), 3);

        cart.remove_item("1");
        assert_eq!(cart.subtotal(), dec!(49.90));
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn remove_item_on_absent_product_is_a_noop() {
        let mut cart = Cart::new();
        cart.add_item(product("1", dec!(89.90)), 2).unwrap();

        cart.remove_item("99");

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.subtotal(), dec!(179.80));
    }

    #[test]
    fn clear_is_idempotent_and_keeps_the_panel_flag() {
        let mut cart = Cart::new();
        cart.open();
        cart.add_item(product("1", dec!(89.90)), 2).unwrap();

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal(), Decimal::ZERO);

        cart.clear();
        assert!(cart.is_empty());
        assert!(cart.is_open());
    }

    #[test]
    fn open_and_close_only_touch_the_flag() {
        let mut cart = Cart::new();
        cart.add_item(product("1", dec!(89.90)), 1).unwrap();

        cart.open();
        assert!(cart.is_open());
        assert_eq!(cart.item_count(), 1);

        cart.close();
        assert!(!cart.is_open());
        assert_eq!(cart.item_count(), 1);
    }
}
