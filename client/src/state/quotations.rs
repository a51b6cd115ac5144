//! Distributor dashboard state: confirmed items and per-item quotations.
//!
//! DESIGN
//! ======
//! Each confirmed item's quotations are fetched by an independent request.
//! Responses can land in any order, so results are stored by item id and a
//! failure for one item only empties that item's entry. Responses for ids
//! that are no longer on the dashboard are dropped.

#[cfg(test)]
#[path = "quotations_test.rs"]
mod quotations_test;

use std::collections::HashMap;

use super::view::ListView;
use crate::net::types::{CartItem, Id, Quotation, QuotationRequest};

/// This distributor's standing on one item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuotationStatus {
    NotSubmitted,
    Pending,
    Approved,
    Rejected,
}

impl QuotationStatus {
    /// Status of the first quotation submitted by `distributor_id`.
    ///
    /// Uniqueness per distributor is not assumed; later matches are ignored.
    pub fn for_distributor(quotations: &[Quotation], distributor_id: Id) -> Self {
        let Some(mine) = quotations.iter().find(|q| q.distributor_id == distributor_id) else {
            return Self::NotSubmitted;
        };
        match mine.status.trim().to_ascii_lowercase().as_str() {
            "approved" => Self::Approved,
            "rejected" => Self::Rejected,
            _ => Self::Pending,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::NotSubmitted => "Not submitted",
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}

/// Quotation list for one item.
#[derive(Clone, Debug, PartialEq)]
pub enum ItemQuotations {
    Loading,
    Loaded(Vec<Quotation>),
}

#[derive(Clone, Debug, Default)]
pub struct DashboardState {
    pub items: ListView<CartItem>,
    pub quotations: HashMap<Id, ItemQuotations>,
    /// Item whose quotation form is open.
    pub selected: Option<Id>,
    pub submitting: bool,
    /// Submission failure; never blocks the item list.
    pub submit_error: Option<String>,
}

impl DashboardState {
    /// Apply the confirmed-item list and mark every item's quotations loading.
    pub fn items_loaded(&mut self, items: Vec<CartItem>) {
        self.quotations = items.iter().map(|item| (item.id, ItemQuotations::Loading)).collect();
        if self.selected.is_some_and(|id| !self.quotations.contains_key(&id)) {
            self.selected = None;
        }
        self.items.succeed(items);
    }

    /// Record one item's quotation fetch. A failed fetch reads as no quotations.
    pub fn quotations_loaded(&mut self, item_id: Id, result: Result<Vec<Quotation>, String>) {
        let Some(slot) = self.quotations.get_mut(&item_id) else {
            return;
        };
        *slot = ItemQuotations::Loaded(result.unwrap_or_default());
    }

    /// Mark one item's quotations as being fetched again, if still listed.
    pub fn quotations_reloading(&mut self, item_id: Id) {
        if let Some(slot) = self.quotations.get_mut(&item_id) {
            *slot = ItemQuotations::Loading;
        }
    }

    pub fn status_for(&self, item_id: Id, distributor_id: Option<Id>) -> Option<QuotationStatus> {
        match self.quotations.get(&item_id)? {
            ItemQuotations::Loading => None,
            ItemQuotations::Loaded(list) => Some(match distributor_id {
                Some(id) => QuotationStatus::for_distributor(list, id),
                None => QuotationStatus::NotSubmitted,
            }),
        }
    }

    pub fn selected_item(&self) -> Option<&CartItem> {
        let id = self.selected?;
        self.items.items.iter().find(|item| item.id == id)
    }
}

/// Raw input from the quotation form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuotationForm {
    pub price: String,
    pub quantity: String,
    /// `YYYY-MM-DD` from the date input.
    pub delivery_date: String,
}

impl QuotationForm {
    /// Validate the form into a submission for `order_item_id`.
    ///
    /// # Errors
    ///
    /// Returns the message to show next to the form.
    pub fn to_request(&self, distributor_id: Id, order_item_id: Id) -> Result<QuotationRequest, &'static str> {
        let price = self
            .price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|price| price.is_finite() && *price >= 0.0)
            .ok_or("Enter a valid price.")?;
        let quantity = self
            .quantity
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|quantity| *quantity > 0)
            .ok_or("Enter a quantity of at least 1.")?;
        let date = self.delivery_date.trim();
        if date.is_empty() {
            return Err("Choose an estimated delivery date.");
        }
        Ok(QuotationRequest {
            price,
            estimated_delivery_time: format!("{date}T00:00:00.000Z"),
            quantity,
            distributor_id,
            order_item_id,
        })
    }
}
