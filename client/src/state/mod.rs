//! Page view state.
//!
//! DESIGN
//! ======
//! Everything here is plain data plus pure transitions. Pages hold these
//! structs in `RwSignal`s and drive them from async completions, which keeps
//! the loading/error/retry rules testable without a browser.

pub mod account;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod orders;
pub mod quotations;
pub mod session;
pub mod view;
