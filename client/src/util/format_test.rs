use super::*;

#[test]
fn format_price_two_decimals_or_na() {
    assert_eq!(format_price(Some(12.5)), "$12.50");
    assert_eq!(format_price(Some(0.0)), "$0.00");
    assert_eq!(format_price(None), "N/A");
}

#[test]
fn format_list_price_uses_price_on_request() {
    assert_eq!(format_list_price(Some(199.0)), "$199.00");
    assert_eq!(format_list_price(None), "Price on request");
}

#[test]
fn pluralize_singular_and_plural() {
    assert_eq!(pluralize(1, "item"), "1 item");
    assert_eq!(pluralize(0, "item"), "0 items");
    assert_eq!(pluralize(4, "day"), "4 days");
}

#[test]
fn delivery_time_absent_or_blank_is_not_specified() {
    assert_eq!(format_delivery_time(None), "Not specified");
    assert_eq!(format_delivery_time(Some(&DeliveryTime::Text("  ".to_owned()))), "Not specified");
    assert_eq!(format_delivery_time(Some(&DeliveryTime::Minutes(0))), "Not specified");
}

#[test]
fn delivery_time_text_passes_through() {
    let text = DeliveryTime::Text("2-3 business days".to_owned());
    assert_eq!(format_delivery_time(Some(&text)), "2-3 business days");
}

#[test]
fn delivery_time_minutes_scale() {
    assert_eq!(format_delivery_time(Some(&DeliveryTime::Minutes(45))), "45 minutes");
    assert_eq!(format_delivery_time(Some(&DeliveryTime::Minutes(90))), "1h 30m");
    assert_eq!(format_delivery_time(Some(&DeliveryTime::Minutes(120))), "2 hours");
    assert_eq!(format_delivery_time(Some(&DeliveryTime::Minutes(1440))), "1 day");
    assert_eq!(format_delivery_time(Some(&DeliveryTime::Minutes(4000))), "2 days");
}
