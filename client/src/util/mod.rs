//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and display rules
//! from page and component logic to improve reuse and testability.

pub mod auth;
pub mod format;
pub mod image;
pub mod request_guard;
pub mod status;
pub mod storage;
pub mod task;
