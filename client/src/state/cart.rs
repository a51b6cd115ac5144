//! Cart line-item mutations and totals.
//!
//! DESIGN
//! ======
//! Removal is optimistic: the line disappears locally before the backend
//! confirms, and a failed delete only surfaces an error (the line is not put
//! back). Additions are never applied locally; the caller reloads the whole
//! cart so backend-normalized quantities and prices are what the user sees.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use crate::net::types::{CartItem, Id};

/// Outcome of a `+`/`-` press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuantityChange {
    Updated(i64),
    /// The quantity would have dropped below 1, so the line was removed.
    Removed,
}

/// Drop the line with `item_id`, returning it if present.
pub fn remove_local(items: &mut Vec<CartItem>, item_id: Id) -> Option<CartItem> {
    let index = items.iter().position(|item| item.id == item_id)?;
    Some(items.remove(index))
}

/// Apply `delta` to a line's quantity. Never produces a quantity below 1.
pub fn adjust_quantity(items: &mut Vec<CartItem>, item_id: Id, delta: i64) -> Option<QuantityChange> {
    let item = items.iter_mut().find(|item| item.id == item_id)?;
    let next = item.quantity.saturating_add(delta);
    if next < 1 {
        remove_local(items, item_id);
        return Some(QuantityChange::Removed);
    }
    item.quantity = next;
    Some(QuantityChange::Updated(next))
}

pub fn total_items(items: &[CartItem]) -> i64 {
    items.iter().map(|item| item.quantity).sum()
}

/// Sum of `price * quantity`; lines without a price count as zero.
#[allow(clippy::cast_precision_loss)]
pub fn total_price(items: &[CartItem]) -> f64 {
    items
        .iter()
        .map(|item| item.price.unwrap_or(0.0) * item.quantity as f64)
        .sum()
}
