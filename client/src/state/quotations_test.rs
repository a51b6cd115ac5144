use super::*;

fn quotation(distributor_id: Id, status: &str) -> Quotation {
    Quotation {
        id: None,
        distributor_id,
        order_item_id: 1,
        price: Some(9.0),
        quantity: 1,
        estimated_delivery_time: None,
        status: status.to_owned(),
    }
}

fn confirmed(id: Id) -> CartItem {
    CartItem {
        id,
        item_name: format!("item-{id}"),
        quantity: 1,
        status: "confirmed".to_owned(),
        price: None,
        image: None,
    }
}

// =============================================================
// QuotationStatus
// =============================================================

#[test]
fn no_matching_quotation_is_not_submitted() {
    let list = vec![quotation(2, "approved")];
    assert_eq!(QuotationStatus::for_distributor(&list, 7), QuotationStatus::NotSubmitted);
    assert_eq!(QuotationStatus::for_distributor(&[], 7), QuotationStatus::NotSubmitted);
}

#[test]
fn first_match_wins() {
    let list = vec![quotation(7, "rejected"), quotation(7, "approved")];
    assert_eq!(QuotationStatus::for_distributor(&list, 7), QuotationStatus::Rejected);
}

#[test]
fn status_match_ignores_case_and_defaults_to_pending() {
    assert_eq!(QuotationStatus::for_distributor(&[quotation(7, "Approved")], 7), QuotationStatus::Approved);
    assert_eq!(QuotationStatus::for_distributor(&[quotation(7, "under review")], 7), QuotationStatus::Pending);
    assert_eq!(QuotationStatus::NotSubmitted.label(), "Not submitted");
}

// =============================================================
// DashboardState
// =============================================================

#[test]
fn one_failed_item_fetch_only_empties_that_item() {
    let mut state = DashboardState::default();
    state.items_loaded(vec![confirmed(1), confirmed(2), confirmed(3)]);
    assert_eq!(state.quotations.len(), 3);

    // Completion order differs from issue order.
    state.quotations_loaded(3, Ok(vec![quotation(7, "approved")]));
    state.quotations_loaded(2, Err("Server error.".to_owned()));
    state.quotations_loaded(1, Ok(vec![quotation(7, "pending")]));

    assert_eq!(state.quotations.get(&2), Some(&ItemQuotations::Loaded(Vec::new())));
    assert_eq!(state.status_for(1, Some(7)), Some(QuotationStatus::Pending));
    assert_eq!(state.status_for(2, Some(7)), Some(QuotationStatus::NotSubmitted));
    assert_eq!(state.status_for(3, Some(7)), Some(QuotationStatus::Approved));
    assert_eq!(state.items.error, None);
}

#[test]
fn results_for_unknown_items_are_ignored() {
    let mut state = DashboardState::default();
    state.items_loaded(vec![confirmed(1)]);
    state.quotations_loaded(42, Ok(vec![quotation(7, "approved")]));
    assert!(!state.quotations.contains_key(&42));
}

#[test]
fn status_is_unknown_while_loading() {
    let mut state = DashboardState::default();
    state.items_loaded(vec![confirmed(1)]);
    assert_eq!(state.status_for(1, Some(7)), None);
}

#[test]
fn reload_drops_selection_for_vanished_item() {
    let mut state = DashboardState::default();
    state.items_loaded(vec![confirmed(1), confirmed(2)]);
    state.selected = Some(2);
    assert_eq!(state.selected_item().map(|i| i.id), Some(2));
    state.items_loaded(vec![confirmed(1)]);
    assert_eq!(state.selected, None);
}

#[test]
fn reloading_one_item_leaves_others_loaded() {
    let mut state = DashboardState::default();
    state.items_loaded(vec![confirmed(1), confirmed(2)]);
    state.quotations_loaded(1, Ok(vec![quotation(7, "pending")]));
    state.quotations_loaded(2, Ok(Vec::new()));

    state.quotations_reloading(1);
    state.quotations_reloading(99);
    assert_eq!(state.status_for(1, Some(7)), None);
    assert_eq!(state.status_for(2, Some(7)), Some(QuotationStatus::NotSubmitted));
    assert!(!state.quotations.contains_key(&99));
}

// =============================================================
// QuotationForm
// =============================================================

fn form(price: &str, quantity: &str, date: &str) -> QuotationForm {
    QuotationForm { price: price.to_owned(), quantity: quantity.to_owned(), delivery_date: date.to_owned() }
}

#[test]
fn valid_form_builds_request() {
    let request = form("12.5", "3", "2026-11-01").to_request(7, 11).unwrap();
    assert!((request.price - 12.5).abs() < f64::EPSILON);
    assert_eq!(request.quantity, 3);
    assert_eq!(request.distributor_id, 7);
    assert_eq!(request.order_item_id, 11);
    assert_eq!(request.estimated_delivery_time, "2026-11-01T00:00:00.000Z");
}

#[test]
fn invalid_fields_are_rejected() {
    assert!(form("abc", "3", "2026-11-01").to_request(7, 11).is_err());
    assert!(form("10", "0", "2026-11-01").to_request(7, 11).is_err());
    assert!(form("10", "2.5", "2026-11-01").to_request(7, 11).is_err());
    assert!(form("10", "2", " ").to_request(7, 11).is_err());
}
