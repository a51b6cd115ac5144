use super::*;

fn product(id: Id, name: &str, description: &str) -> Product {
    Product { id, name: name.to_owned(), description: description.to_owned(), price: Some(10.0), image: None }
}

fn catalog() -> Vec<Product> {
    vec![
        product(1, "Smartphone X", "Flagship phone"),
        product(2, "Laptop Pro", "Thin and light"),
        product(3, "Headset", "Pairs with any PHONE"),
    ]
}

#[test]
fn local_filter_matches_name_or_description_ignoring_case() {
    let hits = filter_products_locally(&catalog(), "Phone");
    let ids: Vec<Id> = hits.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn local_filter_blank_term_returns_everything() {
    assert_eq!(filter_products_locally(&catalog(), "   ").len(), 3);
}

#[test]
fn load_shows_all_products_without_term() {
    let mut state = CatalogState::default();
    state.products_loaded(catalog());
    assert_eq!(state.results.len(), 3);
    assert!(!state.products.loading);
}

#[test]
fn load_respects_active_term() {
    let mut state = CatalogState::default();
    state.set_search_term("laptop".to_owned());
    state.products_loaded(catalog());
    assert_eq!(state.results.len(), 1);
}

#[test]
fn clearing_term_restores_full_list() {
    let mut state = CatalogState::default();
    state.products_loaded(catalog());
    state.set_search_term("phone".to_owned());
    state.search_succeeded(vec![product(1, "Smartphone X", "")]);
    state.set_search_term(String::new());
    assert_eq!(state.results.len(), 3);
}

#[test]
fn failed_search_falls_back_to_local_match() {
    let mut state = CatalogState::default();
    state.products_loaded(catalog());
    state.set_search_term("light".to_owned());
    state.search_failed();
    let ids: Vec<Id> = state.results.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![2]);
}

#[test]
fn reload_keeps_server_search_results_for_current_term() {
    let mut state = CatalogState::default();
    state.set_search_term("phone".to_owned());
    state.search_succeeded(vec![product(4, "Phone Case", "Server-side match")]);
    state.products_loaded(catalog());
    assert_eq!(state.results.iter().map(|p| p.id).collect::<Vec<_>>(), vec![4]);

    state.products_failed(LoadKind::Manual, "Network error".to_owned());
    assert_eq!(state.results.iter().map(|p| p.id).collect::<Vec<_>>(), vec![4]);
}

#[test]
fn new_term_drops_previous_server_results_on_reload() {
    let mut state = CatalogState::default();
    state.set_search_term("phone".to_owned());
    state.search_succeeded(vec![product(4, "Phone Case", "")]);
    state.set_search_term("laptop".to_owned());
    state.products_loaded(catalog());
    assert_eq!(state.results.iter().map(|p| p.id).collect::<Vec<_>>(), vec![2]);
}

#[test]
fn empty_search_message_differs_from_empty_catalog() {
    let mut state = CatalogState::default();
    state.products_loaded(Vec::new());
    assert_eq!(state.empty_message().1, "No products available at the moment.");

    state.set_search_term("phone".to_owned());
    state.search_succeeded(Vec::new());
    assert!(state.results.is_empty());
    assert_eq!(state.empty_message().1, "Try adjusting your search terms.");
}

#[test]
fn current_term_comparison_ignores_padding() {
    let mut state = CatalogState::default();
    state.set_search_term("phone ".to_owned());
    assert!(state.is_current_term("phone"));
    assert!(!state.is_current_term("phon"));
}

#[test]
fn adding_flags_are_per_product() {
    let mut state = CatalogState::default();
    state.adding.insert(2);
    assert!(state.is_adding(2));
    assert!(!state.is_adding(1));
}

#[test]
fn mount_failure_empties_results_but_retry_failure_keeps_them() {
    let mut state = CatalogState::default();
    state.products_failed(LoadKind::Mount, "down".to_owned());
    assert!(state.results.is_empty());
    assert_eq!(state.products.error.as_deref(), Some("down"));

    state.products_loaded(catalog());
    state.products.begin();
    state.products_failed(LoadKind::Manual, "still down".to_owned());
    assert_eq!(state.results.len(), 3);
}
