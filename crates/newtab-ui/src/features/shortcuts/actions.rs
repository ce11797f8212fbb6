//! Shortcut feature actions.
//!
//! # Design
//! - Capture user intent separate from rendering.
//! - Actions are applied to the manager by the app store; views only emit them.

use crate::features::shortcuts::drag::TileBox;
use crate::features::shortcuts::editor::SessionToken;
use crate::features::shortcuts::state::ShortcutId;

/// Outcome of clicking a tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TileClick {
    /// Let the browser follow the link.
    Navigate(String),
    /// The click was intercepted and the editor opened.
    OpenEditor,
    /// Unknown tile; nothing happened.
    Ignored,
}

/// High-level shortcut actions from the UI.
#[derive(Clone, Debug, PartialEq)]
pub enum ShortcutAction {
    /// Flip edit mode.
    ToggleEditMode,
    /// Tile clicked; the view only sends this while edit mode is on.
    TileClicked(ShortcutId),
    /// Drag gesture started on a tile.
    DragStart(ShortcutId),
    /// Pointer moved over the list during a drag.
    DragOver {
        /// Pointer Y in viewport coordinates.
        pointer_y: f64,
        /// Rendered tile boxes in document order.
        tiles: Vec<TileBox>,
    },
    /// Drag gesture ended.
    DragEnd,
    /// Name input changed.
    DraftName(String),
    /// Link input changed.
    DraftLink(String),
    /// Image URL input changed.
    DraftImageUrl(String),
    /// Image URL input committed.
    CommitImageUrl,
    /// Local image file finished loading.
    FileLoaded {
        /// Session that requested the read.
        token: SessionToken,
        /// File content as a data URL.
        data_url: String,
    },
    /// Save button pressed.
    Save,
    /// Cancel button, backdrop click, or Escape.
    Cancel,
}
