use super::*;

fn form(address: &str) -> DeliveryForm {
    DeliveryForm { address: address.to_owned(), phone: " 555-0100 ".to_owned(), notes: String::new() }
}

#[test]
fn empty_cart_is_rejected_first() {
    assert_eq!(form("").to_booking(1, 0), Err("Your cart is empty"));
    assert_eq!(form("1 Main St").to_booking(1, 0), Err("Your cart is empty"));
}

#[test]
fn blank_address_is_rejected() {
    assert_eq!(form("   ").to_booking(1, 2), Err("Please provide a delivery address"));
}

#[test]
fn valid_form_builds_trimmed_booking() {
    let booking = form(" 1 Main St ").to_booking(5, 1).unwrap();
    assert_eq!(booking.customer_id, 5);
    assert_eq!(booking.address, "1 Main St");
    assert_eq!(booking.phone, "555-0100");
    assert_eq!(booking.notes, "");
}

#[test]
fn confirmation_falls_back_to_default_message() {
    assert_eq!(OrderConfirmation::default().message_text(), DEFAULT_CONFIRMATION_MESSAGE);
    let placed = OrderConfirmation::placed(Some(12));
    assert_eq!(placed.message_text(), BOOKING_PLACED_MESSAGE);
    assert_eq!(placed.order_id, Some(12));
}

#[test]
fn parse_order_id_accepts_digits_only() {
    assert_eq!(parse_order_id(Some("42")), Some(42));
    assert_eq!(parse_order_id(Some("abc")), None);
    assert_eq!(parse_order_id(None), None);
}
