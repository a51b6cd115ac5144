//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are presentational: they render props and report user intent
//! through callbacks. Only `navbar` reads shared context (the session).

pub mod cart_drawer;
pub mod feedback;
pub mod navbar;
pub mod product_card;
pub mod role_toggle;
pub mod status_badge;
