//! HTTP clients for the storefront's backend collaborators.
//!
//! SYSTEM CONTEXT
//! ==============
//! One module per remote resource (`auth`, `product`, `cart`, `order`,
//! `quotation`), all built on the shared `http` plumbing. `types` defines the
//! wire schema and `error` the failure taxonomy pages render.

pub mod auth;
pub mod cart;
pub mod error;
pub(crate) mod http;
pub mod order;
pub mod product;
pub mod quotation;
pub mod types;
