//! Cart manager
//!
//! Holds the chosen quantity per product. Entries only exist while their
//! quantity is positive; totals are recomputed from the entries on every call.

use rust_decimal::Decimal;
use shared::{CartItem, Product};
use std::collections::BTreeMap;

/// Derived cart totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CartTotals {
    /// Σ quantity
    pub quantity: u32,
    /// Σ quantity × price
    pub price: Decimal,
}

/// Mapping from product id to cart line, iterated in ascending id order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: BTreeMap<u32, CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pure form of [`Cart::change_quantity`]: returns the resulting cart and
    /// leaves `self` untouched
    pub fn with_change(&self, product: &Product, delta: i32) -> Cart {
        let mut next = self.clone();
        next.change_quantity(product, delta);
        next
    }

    /// Apply `delta` to the product's quantity (0 if absent)
    ///
    /// A result ≤ 0 removes the entry; anything else upserts a line carrying
    /// the given product data. Returns the resulting quantity.
    pub fn change_quantity(&mut self, product: &Product, delta: i32) -> u32 {
        let current = i64::from(self.quantity_of(product.id));
        let next = current + i64::from(delta);

        if next > 0 {
            let quantity = u32::try_from(next).unwrap_or(u32::MAX);
            self.items
                .insert(product.id, CartItem::new(product.clone(), quantity));
            quantity
        } else {
            self.items.remove(&product.id);
            0
        }
    }

    pub fn quantity_of(&self, product_id: u32) -> u32 {
        self.items
            .get(&product_id)
            .map(|item| item.quantity)
            .unwrap_or(0)
    }

    pub fn get(&self, product_id: u32) -> Option<&CartItem> {
        self.items.get(&product_id)
    }

    pub fn items(&self) -> impl Iterator<Item = &CartItem> {
        self.items.values()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn total_quantity(&self) -> u32 {
        self.items
            .values()
            .fold(0u32, |acc, item| acc.saturating_add(item.quantity))
    }

    pub fn total_price(&self) -> Decimal {
        self.items.values().map(CartItem::line_total).sum()
    }

    pub fn totals(&self) -> CartTotals {
        CartTotals {
            quantity: self.total_quantity(),
            price: self.total_price(),
        }
    }
}
