//! Core, DOM-free primitives and helpers for the new tab page.
pub mod config;
pub mod defaults;
pub mod error;
pub mod link;
pub mod logging;
pub mod store;
