use super::*;

fn session(user_type: UserType) -> Session {
    Session { id: 9, name: "Dana".to_owned(), user_type, role_id: Some(2) }
}

#[test]
fn default_state_is_unrestored_and_anonymous() {
    let state = SessionState::default();
    assert!(!state.restored);
    assert!(state.session.is_none());
    assert_eq!(state.user_type(), None);
    assert_eq!(state.display_name(), None);
}

#[test]
fn customer_session_exposes_only_customer_id() {
    let state = SessionState { session: Some(session(UserType::Customer)), restored: true };
    assert_eq!(state.customer_id(), Some(9));
    assert_eq!(state.distributor_id(), None);
    assert_eq!(state.display_name(), Some("Dana"));
}

#[test]
fn distributor_session_exposes_only_distributor_id() {
    let state = SessionState { session: Some(session(UserType::Distributor)), restored: true };
    assert_eq!(state.customer_id(), None);
    assert_eq!(state.distributor_id(), Some(9));
    assert_eq!(state.user_type(), Some(UserType::Distributor));
}

#[test]
fn session_round_trips_through_storage_format() {
    let original = session(UserType::Customer);
    let raw = serde_json::to_string(&original).unwrap();
    assert!(raw.contains("\"userType\":\"customer\""));
    let back: Session = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, original);
}
