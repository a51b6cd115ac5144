use super::*;

const BASE: &str = "http://localhost:5129/api/product";

#[test]
fn endpoints_format_expected_paths() {
    assert_eq!(list_endpoint(BASE), "http://localhost:5129/api/product/all");
    assert_eq!(search_endpoint(BASE), "http://localhost:5129/api/product/search");
    assert_eq!(product_endpoint(BASE, 9), "http://localhost:5129/api/product/9");
    assert_eq!(create_endpoint(BASE), "http://localhost:5129/api/product/add");
    assert_eq!(update_endpoint(BASE, 9), "http://localhost:5129/api/product/update/9");
}

#[test]
fn draft_form_fields_include_price_when_present() {
    let draft = ProductDraft { name: "Phone".to_owned(), description: "Smart".to_owned(), price: Some(199.5) };
    assert_eq!(
        draft_form_fields(&draft),
        vec![
            ("name", "Phone".to_owned()),
            ("description", "Smart".to_owned()),
            ("price", "199.5".to_owned())
        ]
    );
}

#[test]
fn draft_form_fields_skip_absent_price() {
    let draft = ProductDraft { name: "Cable".to_owned(), description: String::new(), price: None };
    assert_eq!(draft_form_fields(&draft).len(), 2);
}
