//! Shortcut tile feature wiring.
//!
//! # Design
//! - The in-memory ordered collection is the source of truth; views project it.
//! - Drag and edit sessions are owned by [`manager::ShortcutManager`], never global.
//! - Browser storage access stays behind [`persistence::ShortcutStorage`].

pub mod actions;
pub mod drag;
pub mod editor;
pub mod manager;
pub mod persistence;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod storage;
#[cfg(target_arch = "wasm32")]
pub(crate) mod editor_view;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
