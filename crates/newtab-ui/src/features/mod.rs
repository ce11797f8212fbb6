//! Feature slices for the new tab page.
pub mod shortcuts;
