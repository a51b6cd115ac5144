use super::*;

const BASE: &str = "https://localhost:7154/api/order";

#[test]
fn endpoints_format_expected_paths() {
    assert_eq!(booking_endpoint(BASE), "https://localhost:7154/api/order/makeBooking");
    assert_eq!(order_endpoint(BASE, 77), "https://localhost:7154/api/order/77");
    assert_eq!(customer_orders_endpoint(BASE, 5), "https://localhost:7154/api/order/customer/5");
    assert_eq!(my_orders_endpoint(BASE, 5), "https://localhost:7154/api/order/myOrders/5");
    assert_eq!(all_orders_endpoint(BASE), "https://localhost:7154/api/order/all");
}
