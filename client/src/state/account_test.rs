use super::*;

fn register_form() -> RegisterForm {
    RegisterForm {
        user_type: UserType::Distributor,
        name: " Ari ".to_owned(),
        email: "ari@example.com".to_owned(),
        password: "secret1".to_owned(),
        confirm_password: "secret1".to_owned(),
        phone: "  ".to_owned(),
        address: "5 Depot Rd".to_owned(),
    }
}

#[test]
fn login_requires_both_fields() {
    let form = LoginForm { email: "a@b.c".to_owned(), ..LoginForm::default() };
    assert!(form.to_credentials().is_err());
    let form = LoginForm { email: " a@b.c ".to_owned(), password: "pw".to_owned(), ..LoginForm::default() };
    assert_eq!(form.to_credentials().unwrap().email, "a@b.c");
}

#[test]
fn login_defaults_to_customer() {
    assert_eq!(LoginForm::default().user_type, UserType::Customer);
}

#[test]
fn registration_trims_and_drops_blank_optionals() {
    let registration = register_form().to_registration().unwrap();
    assert_eq!(registration.name, "Ari");
    assert_eq!(registration.phone, None);
    assert_eq!(registration.address.as_deref(), Some("5 Depot Rd"));
}

#[test]
fn registration_rejects_mismatched_passwords() {
    let form = RegisterForm { confirm_password: "other".to_owned(), ..register_form() };
    assert_eq!(form.to_registration(), Err("Passwords do not match."));
}

#[test]
fn registration_rejects_short_password_and_bad_email() {
    let short = RegisterForm { password: "abc".to_owned(), confirm_password: "abc".to_owned(), ..register_form() };
    assert_eq!(short.to_registration(), Err("Password must be at least 6 characters."));
    let bad_email = RegisterForm { email: "nope".to_owned(), ..register_form() };
    assert_eq!(bad_email.to_registration(), Err("Enter a valid email address."));
}
