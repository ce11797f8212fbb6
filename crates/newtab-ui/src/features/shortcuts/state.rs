//! Shortcut records and the ordered collection they live in.

use crate::core::error::{ShortcutError, ShortcutResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Stable shortcut identifier, unique within a collection.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShortcutId(String);

impl ShortcutId {
    /// Wrap a raw identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ShortcutId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ShortcutId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for ShortcutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single shortcut tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shortcut {
    /// Stable identifier.
    pub id: ShortcutId,
    /// Display label.
    pub name: String,
    /// Destination URL.
    pub link: String,
    /// Icon image URL or `data:` URL.
    pub icon: String,
}

/// Content fields replaced by an edit; the id and position never change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortcutPatch {
    /// New display label.
    pub name: String,
    /// New destination URL.
    pub link: String,
    /// New icon source.
    pub icon: String,
}

/// Ordered shortcut collection; insertion order is display order.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ShortcutsState {
    by_id: HashMap<ShortcutId, Shortcut>,
    order: Vec<ShortcutId>,
}

impl ShortcutsState {
    /// Build a collection from shortcuts in display order.
    ///
    /// # Errors
    /// Returns [`ShortcutError::DuplicateId`] when two shortcuts share an id.
    pub fn from_shortcuts(shortcuts: Vec<Shortcut>) -> ShortcutResult<Self> {
        let mut state = Self::default();
        for shortcut in shortcuts {
            if state.by_id.contains_key(&shortcut.id) {
                return Err(ShortcutError::DuplicateId {
                    id: shortcut.id.to_string(),
                });
            }
            state.order.push(shortcut.id.clone());
            state.by_id.insert(shortcut.id.clone(), shortcut);
        }
        Ok(state)
    }

    /// Number of shortcuts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Look up a shortcut by id.
    #[must_use]
    pub fn get(&self, id: &ShortcutId) -> Option<&Shortcut> {
        self.by_id.get(id)
    }

    /// Whether a shortcut with this id exists.
    #[must_use]
    pub fn contains(&self, id: &ShortcutId) -> bool {
        self.by_id.contains_key(id)
    }

    /// Ids in display order.
    #[must_use]
    pub fn order(&self) -> &[ShortcutId] {
        &self.order
    }

    /// Display index of a shortcut.
    #[must_use]
    pub fn position(&self, id: &ShortcutId) -> Option<usize> {
        self.order.iter().position(|entry| entry == id)
    }

    /// Shortcuts in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Shortcut> {
        self.order.iter().filter_map(|id| self.by_id.get(id))
    }

    /// Move a shortcut to the end of the collection.
    pub fn move_to_end(&mut self, id: &ShortcutId) -> bool {
        self.move_before(id, None)
    }

    /// Move a shortcut so it sits immediately before `before`, or at the end
    /// when `before` is `None` or unknown. Returns `false` for unknown ids.
    pub fn move_before(&mut self, id: &ShortcutId, before: Option<&ShortcutId>) -> bool {
        if before == Some(id) {
            return self.contains(id);
        }
        let Some(from) = self.position(id) else {
            return false;
        };
        let moved = self.order.remove(from);
        match before.and_then(|target| self.position(target)) {
            Some(index) => self.order.insert(index, moved),
            None => self.order.push(moved),
        }
        true
    }

    /// Replace the content of one shortcut.
    ///
    /// # Errors
    /// Returns [`ShortcutError::UnknownShortcut`] when the id is not present.
    pub fn update(&mut self, id: &ShortcutId, patch: ShortcutPatch) -> ShortcutResult<()> {
        let Some(current) = self.by_id.get_mut(id) else {
            return Err(ShortcutError::UnknownShortcut { id: id.to_string() });
        };
        current.name = patch.name;
        current.link = patch.link;
        current.icon = patch.icon;
        Ok(())
    }
}

/// Read the shortcuts in display order.
#[must_use]
pub fn select_ordered(state: &ShortcutsState) -> Vec<Shortcut> {
    state.iter().cloned().collect()
}
