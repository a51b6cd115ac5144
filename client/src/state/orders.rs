//! Order-history aggregates.

#[cfg(test)]
#[path = "orders_test.rs"]
mod orders_test;

use super::session::SessionState;
use crate::net::types::{Id, Order};
use crate::util::status::OrderStatus;

/// Shown instead of fetching when no customer is signed in.
pub const NO_CUSTOMER_MESSAGE: &str = "No customer ID found. Please log in again.";

/// What the order-history page should do for the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryRequest {
    /// Session not yet read from storage; do nothing.
    Pending,
    Fetch(Id),
    /// Fail with [`NO_CUSTOMER_MESSAGE`] and issue no request.
    NoCustomer,
}

impl HistoryRequest {
    pub fn for_session(state: &SessionState) -> Self {
        if !state.restored {
            return Self::Pending;
        }
        state.customer_id().map_or(Self::NoCustomer, Self::Fetch)
    }
}

/// Retrying cannot clear the missing-customer error; only signing in can.
pub fn offers_retry(error: &str) -> bool {
    error != NO_CUSTOMER_MESSAGE
}

/// Figures for the summary panel, recomputed from the loaded list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrderSummary {
    pub total_orders: usize,
    pub confirmed: usize,
    pub processing: usize,
    pub total_items: usize,
    /// Sum of order prices; unknown prices count as zero.
    pub total_value: f64,
}

impl OrderSummary {
    pub fn from_orders(orders: &[Order]) -> Self {
        orders.iter().fold(Self::default(), |mut summary, order| {
            let status = OrderStatus::parse(&order.status);
            summary.total_orders += 1;
            summary.confirmed += usize::from(status == OrderStatus::Confirmed);
            summary.processing += usize::from(status == OrderStatus::Processing);
            summary.total_items += order.products.len();
            summary.total_value += order.price.unwrap_or(0.0);
            summary
        })
    }
}

/// Only confirmed orders offer the "Track Order" action.
pub fn is_trackable_status(status: &str) -> bool {
    OrderStatus::parse(status) == OrderStatus::Confirmed
}
