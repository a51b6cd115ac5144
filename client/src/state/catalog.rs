//! Catalog page state: product list, search results, add-to-cart busy flags.
//!
//! DESIGN
//! ======
//! `products` is the authoritative list from the last full load. `results`
//! is what the grid renders: the full list for a blank term, otherwise the
//! latest server search (or a local substring match when search fails).

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::collections::HashSet;

use super::view::{ListView, LoadKind};
use crate::net::types::{Id, Product};

/// Shown when an anonymous visitor or a distributor presses "Add to Cart".
pub const LOGIN_TO_ADD_MESSAGE: &str = "Please login as a customer to add items to cart";

#[derive(Clone, Debug, Default)]
pub struct CatalogState {
    pub products: ListView<Product>,
    pub results: Vec<Product>,
    pub search_term: String,
    /// `results` holds a successful server search for `search_term`.
    pub searched: bool,
    /// Products with an add-to-cart request in flight.
    pub adding: HashSet<Id>,
    /// Add-to-cart failure, shown apart from load errors.
    pub cart_error: Option<String>,
}

impl CatalogState {
    /// Apply a completed full load and re-derive the visible results.
    pub fn products_loaded(&mut self, products: Vec<Product>) {
        self.products.succeed(products);
        self.refresh_results();
    }

    /// Apply a failed full load. Results follow whatever the list kept.
    pub fn products_failed(&mut self, kind: LoadKind, message: String) {
        self.products.fail(kind, message);
        self.refresh_results();
    }

    /// Server search results for the current term outrank the local match.
    fn refresh_results(&mut self) {
        if !self.searched || self.search_term.trim().is_empty() {
            self.results = filter_products_locally(&self.products.items, &self.search_term);
        }
    }

    pub fn set_search_term(&mut self, term: String) {
        if !self.is_current_term(&term) {
            self.searched = false;
        }
        if term.trim().is_empty() {
            self.results = self.products.items.clone();
        }
        self.search_term = term;
    }

    /// Whether `term` still matches what the user has typed.
    pub fn is_current_term(&self, term: &str) -> bool {
        self.search_term.trim() == term.trim()
    }

    pub fn search_succeeded(&mut self, results: Vec<Product>) {
        self.results = results;
        self.searched = true;
    }

    /// Server search failed: match locally against the loaded catalog.
    pub fn search_failed(&mut self) {
        self.searched = false;
        self.results = filter_products_locally(&self.products.items, &self.search_term);
    }

    pub fn is_adding(&self, product_id: Id) -> bool {
        self.adding.contains(&product_id)
    }

    /// Heading and hint for an empty grid.
    pub fn empty_message(&self) -> (&'static str, &'static str) {
        if self.search_term.trim().is_empty() {
            ("No Products Found", "No products available at the moment.")
        } else {
            ("No Products Found", "Try adjusting your search terms.")
        }
    }
}

/// Case-insensitive substring match over name and description.
/// A blank term matches everything.
pub fn filter_products_locally(products: &[Product], term: &str) -> Vec<Product> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return products.to_vec();
    }
    products
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&needle) || p.description.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
