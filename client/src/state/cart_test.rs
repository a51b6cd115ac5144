use super::*;
use crate::state::view::{ListView, LoadKind};

fn item(id: Id, quantity: i64, price: Option<f64>) -> CartItem {
    CartItem {
        id,
        item_name: format!("item-{id}"),
        quantity,
        status: "pending".to_owned(),
        price,
        image: None,
    }
}

#[test]
fn remove_local_filters_matching_line() {
    let mut items = vec![item(1, 1, None), item(2, 3, None)];
    let removed = remove_local(&mut items, 1);
    assert_eq!(removed.map(|i| i.id), Some(1));
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, 2);
}

#[test]
fn remove_local_unknown_id_is_noop() {
    let mut items = vec![item(1, 1, None)];
    assert!(remove_local(&mut items, 99).is_none());
    assert_eq!(items.len(), 1);
}

#[test]
fn increment_updates_quantity() {
    let mut items = vec![item(1, 2, None)];
    assert_eq!(adjust_quantity(&mut items, 1, 1), Some(QuantityChange::Updated(3)));
    assert_eq!(items[0].quantity, 3);
}

#[test]
fn decrement_at_one_removes_line() {
    let mut items = vec![item(1, 1, None), item(2, 1, None)];
    assert_eq!(adjust_quantity(&mut items, 1, -1), Some(QuantityChange::Removed));
    assert!(items.iter().all(|i| i.id != 1));
    assert!(items.iter().all(|i| i.quantity >= 1));
}

#[test]
fn adjust_unknown_line_returns_none() {
    let mut items = vec![item(1, 1, None)];
    assert_eq!(adjust_quantity(&mut items, 5, 1), None);
}

#[test]
fn totals_treat_missing_price_as_zero() {
    let items = vec![item(1, 2, Some(10.0)), item(2, 3, None), item(3, 1, Some(0.5))];
    assert_eq!(total_items(&items), 6);
    assert!((total_price(&items) - 20.5).abs() < f64::EPSILON);
}

#[test]
fn failed_reload_after_add_shows_error_without_optimistic_entry() {
    let mut cart = ListView::default();
    cart.succeed(vec![item(1, 1, Some(5.0))]);

    cart.begin();
    cart.fail(LoadKind::Manual, "Failed to refresh cart.".to_owned());

    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].id, 1);
    assert!(cart.error.is_some());
}
