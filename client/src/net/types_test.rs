use super::*;
use serde_json::json;

// =============================================================
// Session
// =============================================================

#[test]
fn session_role_ids_follow_user_type() {
    let customer = Session { id: 7, name: "Ada".to_owned(), user_type: UserType::Customer, role_id: None };
    assert_eq!(customer.customer_id(), Some(7));
    assert_eq!(customer.distributor_id(), None);

    let distributor = Session { user_type: UserType::Distributor, ..customer };
    assert_eq!(distributor.customer_id(), None);
    assert_eq!(distributor.distributor_id(), Some(7));
}

#[test]
fn session_serializes_with_camel_case_keys() {
    let session = Session { id: 3, name: "Bo".to_owned(), user_type: UserType::Distributor, role_id: Some(2) };
    let value = serde_json::to_value(&session).unwrap();
    assert_eq!(value, json!({ "id": 3, "name": "Bo", "userType": "distributor", "roleId": 2 }));
}

// =============================================================
// Lenient entity decoding
// =============================================================

#[test]
fn product_accepts_string_id_and_missing_optional_fields() {
    let product: Product = serde_json::from_value(json!({ "id": "12", "name": "Phone" })).unwrap();
    assert_eq!(product.id, 12);
    assert_eq!(product.name, "Phone");
    assert_eq!(product.description, "");
    assert_eq!(product.price, None);
    assert_eq!(product.image, None);
}

#[test]
fn product_price_parses_numeric_strings() {
    let product: Product = serde_json::from_value(json!({ "id": 1, "price": "19.50" })).unwrap();
    assert_eq!(product.price, Some(19.5));
}

#[test]
fn cart_item_reads_name_alias_and_defaults_quantity() {
    let item: CartItem = serde_json::from_value(json!({ "id": 4, "name": "Tablet", "status": "pending" })).unwrap();
    assert_eq!(item.item_name, "Tablet");
    assert_eq!(item.quantity, 1);
    assert_eq!(item.status, "pending");
}

#[test]
fn cart_item_keeps_unknown_status_verbatim() {
    let item: CartItem =
        serde_json::from_value(json!({ "id": 4, "itemName": "Tablet", "quantity": 2, "status": "On Hold" })).unwrap();
    assert_eq!(item.status, "On Hold");
}

#[test]
fn order_treats_non_numeric_price_as_absent() {
    let order: Order =
        serde_json::from_value(json!({ "id": 1, "status": "pending", "price": "tbd", "products": null })).unwrap();
    assert_eq!(order.price, None);
    assert!(order.products.is_empty());
}

#[test]
fn order_delivery_time_accepts_minutes_or_text() {
    let minutes: Order = serde_json::from_value(json!({ "id": 1, "deliveryTime": 90 })).unwrap();
    assert_eq!(minutes.delivery_time, Some(DeliveryTime::Minutes(90)));

    let text: Order = serde_json::from_value(json!({ "id": 2, "deliveryTime": "Tomorrow" })).unwrap();
    assert_eq!(text.delivery_time, Some(DeliveryTime::Text("Tomorrow".to_owned())));
}

#[test]
fn order_list_survives_odd_delivery_times() {
    let orders: Vec<Order> = decode_list(json!([
        { "id": 1, "status": "pending", "deliveryTime": 30 },
        { "id": 2, "status": "confirmed", "deliveryTime": 90.5 },
        { "id": 3, "status": "confirmed", "deliveryTime": { "days": 2 } },
        { "id": 4, "status": "confirmed", "deliveryTime": true }
    ]))
    .unwrap();
    let times: Vec<Option<DeliveryTime>> = orders.into_iter().map(|o| o.delivery_time).collect();
    assert_eq!(
        times,
        vec![Some(DeliveryTime::Minutes(30)), Some(DeliveryTime::Minutes(90)), None, None]
    );
}

#[test]
fn quotation_requires_distributor_and_item_ids() {
    let err = serde_json::from_value::<Quotation>(json!({ "orderItemId": 5 }));
    assert!(err.is_err());

    let quote: Quotation = serde_json::from_value(json!({
        "distributorId": 9,
        "orderItemId": 5,
        "price": 120.0,
        "quantity": 3,
        "estimatedDeliveryTime": "2026-11-01",
        "status": "approved"
    }))
    .unwrap();
    assert_eq!(quote.distributor_id, 9);
    assert_eq!(quote.order_item_id, 5);
    assert_eq!(quote.price, Some(120.0));
    assert_eq!(quote.status, "approved");
}

// =============================================================
// Request payloads
// =============================================================

#[test]
fn add_to_cart_request_uses_backend_field_names() {
    let body = AddToCartRequest { customer_id: 1, product_id: 2, quantity: 1 };
    assert_eq!(serde_json::to_value(body).unwrap(), json!({ "customerId": 1, "productId": 2, "quantity": 1 }));
}

#[test]
fn quotation_request_uses_backend_field_names() {
    let body = QuotationRequest {
        price: 10.5,
        estimated_delivery_time: "2026-12-01".to_owned(),
        quantity: 4,
        distributor_id: 8,
        order_item_id: 33,
    };
    assert_eq!(
        serde_json::to_value(body).unwrap(),
        json!({
            "price": 10.5,
            "estimatedDeliveryTime": "2026-12-01",
            "quantity": 4,
            "distributorId": 8,
            "orderItemId": 33
        })
    );
}

#[test]
fn registration_omits_absent_optional_fields() {
    let body = Registration {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "pw".to_owned(),
        phone: None,
        address: None,
    };
    assert_eq!(
        serde_json::to_value(body).unwrap(),
        json!({ "name": "Ada", "email": "ada@example.com", "password": "pw" })
    );
}

// =============================================================
// Response helpers
// =============================================================

#[test]
fn auth_response_prefers_role_specific_id() {
    let resp: AuthResponse =
        serde_json::from_value(json!({ "customerId": 11, "id": 99, "name": "Ada" })).unwrap();
    let session = resp.into_session(UserType::Customer, "fallback").unwrap();
    assert_eq!(session.id, 11);
    assert_eq!(session.name, "Ada");
    assert_eq!(session.user_type, UserType::Customer);
}

#[test]
fn auth_response_reads_pascal_case_distributor_id() {
    let resp: AuthResponse = serde_json::from_value(json!({ "DistributorId": "5", "Name": "Acme" })).unwrap();
    let session = resp.into_session(UserType::Distributor, "fallback").unwrap();
    assert_eq!(session.id, 5);
    assert_eq!(session.name, "Acme");
}

#[test]
fn auth_response_without_id_yields_no_session() {
    let resp: AuthResponse = serde_json::from_value(json!({ "name": "Ada" })).unwrap();
    assert!(resp.into_session(UserType::Customer, "x").is_none());
}

#[test]
fn auth_response_falls_back_to_supplied_name() {
    let resp: AuthResponse = serde_json::from_value(json!({ "id": 2 })).unwrap();
    let session = resp.into_session(UserType::Customer, "ada@example.com").unwrap();
    assert_eq!(session.name, "ada@example.com");
}

#[test]
fn extract_order_id_checks_known_keys() {
    assert_eq!(extract_order_id(&json!({ "id": 41 })), Some(41));
    assert_eq!(extract_order_id(&json!({ "orderId": "42" })), Some(42));
    assert_eq!(extract_order_id(&json!({ "message": "ok" })), None);
    assert_eq!(extract_order_id(&serde_json::Value::Null), None);
}

#[test]
fn decode_list_treats_null_as_empty() {
    let items: Vec<Product> = decode_list(serde_json::Value::Null).unwrap();
    assert!(items.is_empty());
}

#[test]
fn decode_list_rejects_non_list_body() {
    assert!(decode_list::<Product>(json!({ "id": 1 })).is_err());
}
