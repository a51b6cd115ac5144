//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration: it reads the session from
//! context, issues API calls behind a request guard, and folds the results
//! into `state` reducers. Rendering details are delegated to `components`.

pub mod cart;
pub mod checkout;
pub mod distributor_dashboard;
pub mod home;
pub mod landing;
pub mod login;
pub mod my_orders;
pub mod order_status;
pub mod register;
