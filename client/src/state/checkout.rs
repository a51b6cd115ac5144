//! Checkout form validation and the confirmation handed to the status page.

#[cfg(test)]
#[path = "checkout_test.rs"]
mod checkout_test;

use crate::net::types::{BookingRequest, Id};

pub const BOOKING_PLACED_MESSAGE: &str = "Order placed successfully! We will contact you with delivery details.";

pub const DEFAULT_CONFIRMATION_MESSAGE: &str = "Your order has been successfully placed. We will contact you with \
     delivery details once we receive quotations from our distributors.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeliveryForm {
    pub address: String,
    pub phone: String,
    pub notes: String,
}

impl DeliveryForm {
    /// Validate against the current cart and build the booking.
    ///
    /// # Errors
    ///
    /// Returns the banner message when the cart is empty or no address was given.
    pub fn to_booking(&self, customer_id: Id, cart_len: usize) -> Result<BookingRequest, &'static str> {
        if cart_len == 0 {
            return Err("Your cart is empty");
        }
        if self.address.trim().is_empty() {
            return Err("Please provide a delivery address");
        }
        Ok(BookingRequest {
            customer_id,
            address: self.address.trim().to_owned(),
            phone: self.phone.trim().to_owned(),
            notes: self.notes.trim().to_owned(),
        })
    }
}

/// Carried from checkout to the order-status page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrderConfirmation {
    pub message: Option<String>,
    pub order_id: Option<Id>,
}

impl OrderConfirmation {
    pub fn placed(order_id: Option<Id>) -> Self {
        Self { message: Some(BOOKING_PLACED_MESSAGE.to_owned()), order_id }
    }

    pub fn message_text(&self) -> &str {
        self.message
            .as_deref()
            .filter(|message| !message.trim().is_empty())
            .unwrap_or(DEFAULT_CONFIRMATION_MESSAGE)
    }
}

/// Parse an `?id=` query value.
pub fn parse_order_id(raw: Option<&str>) -> Option<Id> {
    raw.and_then(|value| value.trim().parse().ok())
}
