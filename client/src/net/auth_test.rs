use super::*;
use serde_json::json;

const BASE: &str = "http://localhost:5129/api/auth";

#[test]
fn register_endpoint_depends_on_role() {
    assert_eq!(register_endpoint(BASE, UserType::Customer), "http://localhost:5129/api/auth/register");
    assert_eq!(
        register_endpoint(BASE, UserType::Distributor),
        "http://localhost:5129/api/auth/register-distributor"
    );
}

#[test]
fn login_endpoint_depends_on_role() {
    assert_eq!(login_endpoint(BASE, UserType::Customer), "http://localhost:5129/api/auth/login");
    assert_eq!(login_endpoint(BASE, UserType::Distributor), "http://localhost:5129/api/auth/login-distributor");
}

#[test]
fn logout_endpoint_formats_expected_path() {
    assert_eq!(logout_endpoint(BASE), "http://localhost:5129/api/auth/logout");
}

#[test]
fn session_from_body_reads_flat_response() {
    let session = session_from_body(json!({ "customerId": 3, "name": "Ada" }), UserType::Customer, "x").unwrap();
    assert_eq!(session.id, 3);
    assert_eq!(session.user_type, UserType::Customer);
}

#[test]
fn session_from_body_unwraps_user_envelope() {
    let body = json!({ "message": "ok", "user": { "distributorId": 8, "name": "Acme" } });
    let session = session_from_body(body, UserType::Distributor, "x").unwrap();
    assert_eq!(session.id, 8);
    assert_eq!(session.name, "Acme");
}

#[test]
fn session_from_body_rejects_plain_acknowledgement() {
    assert!(session_from_body(json!("Registered"), UserType::Customer, "x").is_none());
    assert!(session_from_body(serde_json::Value::Null, UserType::Customer, "x").is_none());
}
