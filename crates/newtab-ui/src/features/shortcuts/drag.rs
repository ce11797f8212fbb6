//! Drag-reorder session state and hit-testing.
//!
//! # Design
//! - The dragged tile stays put while dragging; only the placeholder moves.
//! - Hit-testing ignores the dragged tile so its own box never wins.
//! - Geometry arrives as plain numbers so the logic runs outside the browser.

use crate::features::shortcuts::state::{Shortcut, ShortcutId, ShortcutsState};

/// Vertical extent of a rendered tile.
#[derive(Clone, Debug, PartialEq)]
pub struct TileBox {
    /// Tile the box belongs to.
    pub id: ShortcutId,
    /// Top edge in viewport coordinates.
    pub top: f64,
    /// Rendered height.
    pub height: f64,
}

impl TileBox {
    /// Vertical midpoint of the tile.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Where the placeholder currently sits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DropTarget {
    /// Immediately before this tile.
    Before(ShortcutId),
    /// After the last tile.
    End,
}

impl DropTarget {
    /// Tile the placeholder precedes, if any.
    #[must_use]
    pub const fn before(&self) -> Option<&ShortcutId> {
        match self {
            Self::Before(id) => Some(id),
            Self::End => None,
        }
    }
}

/// Drag session state machine.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// A tile is being dragged.
    Dragging {
        /// Tile being dragged.
        dragged: ShortcutId,
        /// Current placeholder position.
        target: DropTarget,
    },
}

impl DragState {
    /// Whether a drag is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Tile being dragged, if any.
    #[must_use]
    pub const fn dragged(&self) -> Option<&ShortcutId> {
        match self {
            Self::Dragging { dragged, .. } => Some(dragged),
            Self::Idle => None,
        }
    }

    /// Current placeholder position, if dragging.
    #[must_use]
    pub const fn target(&self) -> Option<&DropTarget> {
        match self {
            Self::Dragging { target, .. } => Some(target),
            Self::Idle => None,
        }
    }
}

/// Placeholder slot marking a tile's origin: right after it.
#[must_use]
pub fn origin_target(state: &ShortcutsState, dragged: &ShortcutId) -> DropTarget {
    state
        .position(dragged)
        .and_then(|index| state.order().get(index + 1))
        .map_or(DropTarget::End, |next| DropTarget::Before(next.clone()))
}

/// Nearest tile whose midpoint lies below the pointer, skipping the dragged
/// tile; ties resolve to the first tile in document order.
#[must_use]
pub fn drop_target(tiles: &[TileBox], dragged: &ShortcutId, pointer_y: f64) -> DropTarget {
    let mut closest: Option<(&TileBox, f64)> = None;
    for tile in tiles.iter().filter(|tile| &tile.id != dragged) {
        let offset = tile.midpoint() - pointer_y;
        if offset <= 0.0 {
            continue;
        }
        if closest.is_none_or(|(_, best)| offset < best) {
            closest = Some((tile, offset));
        }
    }
    closest.map_or(DropTarget::End, |(tile, _)| DropTarget::Before(tile.id.clone()))
}

/// Entry in the rendered tile list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DisplayItem {
    /// A shortcut tile.
    Tile {
        /// Shortcut content.
        shortcut: Shortcut,
        /// Whether this tile is the one being dragged.
        dragging: bool,
    },
    /// Pending drop slot.
    Placeholder,
}

impl DisplayItem {
    /// Stable list key; every item carries one so rendered tiles keep their
    /// DOM nodes while the placeholder moves.
    #[must_use]
    pub fn key(&self) -> String {
        match self {
            Self::Tile { shortcut, .. } => format!("tile-{}", shortcut.id),
            Self::Placeholder => "placeholder".to_string(),
        }
    }
}

/// Project the collection plus drag session into render order.
#[must_use]
pub fn display_items(state: &ShortcutsState, drag: &DragState) -> Vec<DisplayItem> {
    let mut items = Vec::with_capacity(state.len() + 1);
    let dragged = drag.dragged();
    let target = drag.target();
    for shortcut in state.iter() {
        if target.and_then(DropTarget::before) == Some(&shortcut.id) {
            items.push(DisplayItem::Placeholder);
        }
        items.push(DisplayItem::Tile {
            shortcut: shortcut.clone(),
            dragging: dragged == Some(&shortcut.id),
        });
    }
    if target == Some(&DropTarget::End) {
        items.push(DisplayItem::Placeholder);
    }
    items
}
