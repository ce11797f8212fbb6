#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! New tab page front-end.
//!
//! Layout: `core` (config, errors, link normalization, app store),
//! `features::shortcuts` (tile state, drag/edit state machines, persistence)
//! and, on wasm32 only, the Yew views and entry point.

pub mod core;
pub mod features;

#[cfg(target_arch = "wasm32")]
mod app;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;

pub use crate::core::config::ShortcutsConfig;
pub use crate::core::error::{ShortcutError, ShortcutResult};
pub use crate::core::link::normalize_url;
pub use crate::features::shortcuts::manager::ShortcutManager;
pub use crate::features::shortcuts::persistence::{MemoryStorage, ShortcutStorage};
pub use crate::features::shortcuts::state::{Shortcut, ShortcutId, ShortcutsState};
