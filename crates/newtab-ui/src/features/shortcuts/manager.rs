//! Shortcut tile manager: owns the collection, edit mode, and the drag and
//! editor sessions, and persists after every state change.
//!
//! # Design
//! - All mutations run on one thread; no locking.
//! - Persistence happens before a mutating call returns.
//! - Storage failures are logged and never roll back in-memory state.

use crate::core::config::ShortcutsConfig;
use crate::features::shortcuts::actions::TileClick;
use crate::features::shortcuts::drag::{
    DisplayItem, DragState, TileBox, display_items, drop_target, origin_target,
};
use crate::features::shortcuts::editor::{EditDraft, EditSession, EditorState, SessionToken};
use crate::features::shortcuts::persistence::{self, ShortcutStorage};
use crate::features::shortcuts::state::{Shortcut, ShortcutId, ShortcutsState};
use tracing::{debug, warn};

/// Shortcut tile manager bound to a storage backend.
#[derive(Clone, Debug, PartialEq)]
pub struct ShortcutManager<S> {
    config: ShortcutsConfig,
    storage: S,
    shortcuts: ShortcutsState,
    edit_mode: bool,
    drag: DragState,
    editor: EditorState,
    next_token: SessionToken,
}

impl<S: ShortcutStorage> ShortcutManager<S> {
    /// Load the persisted collection over `defaults`.
    ///
    /// Defaults with duplicate ids are reduced to their first occurrence.
    #[must_use]
    pub fn load(storage: S, config: ShortcutsConfig, defaults: Vec<Shortcut>) -> Self {
        let defaults = ShortcutsState::from_shortcuts(defaults.clone()).unwrap_or_else(|err| {
            warn!(error = %err, "default shortcuts invalid; dropping duplicates");
            dedupe(defaults)
        });
        let shortcuts = persistence::load(&storage, &config, defaults);
        Self {
            config,
            storage,
            shortcuts,
            edit_mode: false,
            drag: DragState::Idle,
            editor: EditorState::Closed,
            next_token: SessionToken::default(),
        }
    }

    /// Current collection.
    #[must_use]
    pub const fn state(&self) -> &ShortcutsState {
        &self.shortcuts
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &ShortcutsConfig {
        &self.config
    }

    /// Storage backend.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Consume the manager, returning its storage backend.
    #[must_use]
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Whether edit mode is on.
    #[must_use]
    pub const fn edit_mode(&self) -> bool {
        self.edit_mode
    }

    /// Current drag session.
    #[must_use]
    pub const fn drag(&self) -> &DragState {
        &self.drag
    }

    /// Current editor state.
    #[must_use]
    pub const fn editor(&self) -> &EditorState {
        &self.editor
    }

    /// Render-order projection including the drag placeholder.
    #[must_use]
    pub fn display_items(&self) -> Vec<DisplayItem> {
        display_items(&self.shortcuts, &self.drag)
    }

    /// Flip edit mode and return the new value. An in-flight drag is left to
    /// finish on its own.
    pub fn toggle_edit_mode(&mut self) -> bool {
        self.edit_mode = !self.edit_mode;
        debug!(edit_mode = self.edit_mode, "edit mode toggled");
        self.edit_mode
    }

    /// Resolve a tile click: navigate outside edit mode, open the editor inside it.
    pub fn click_tile(&mut self, id: &ShortcutId) -> TileClick {
        let Some(shortcut) = self.shortcuts.get(id) else {
            return TileClick::Ignored;
        };
        if !self.edit_mode {
            return TileClick::Navigate(shortcut.link.clone());
        }
        if self.open_editor(id) {
            TileClick::OpenEditor
        } else {
            TileClick::Ignored
        }
    }

    /// Begin dragging a tile. Refused outside edit mode, while another drag
    /// is active, or for unknown ids.
    pub fn drag_start(&mut self, id: &ShortcutId) -> bool {
        if !self.edit_mode {
            debug!(id = %id, "drag start ignored outside edit mode");
            return false;
        }
        if self.drag.is_dragging() {
            debug!(id = %id, "drag start ignored; drag already active");
            return false;
        }
        if !self.shortcuts.contains(id) {
            return false;
        }
        let target = origin_target(&self.shortcuts, id);
        self.drag = DragState::Dragging {
            dragged: id.clone(),
            target,
        };
        debug!(id = %id, "drag started");
        true
    }

    /// Move the placeholder for the current pointer position. Returns whether
    /// the placeholder moved.
    pub fn drag_over(&mut self, pointer_y: f64, tiles: &[TileBox]) -> bool {
        let DragState::Dragging { dragged, target } = &mut self.drag else {
            return false;
        };
        let next = drop_target(tiles, dragged, pointer_y);
        if *target == next {
            return false;
        }
        *target = next;
        true
    }

    /// Drop the dragged tile at the placeholder and persist. Stray drag-end
    /// events with no active drag return `false`.
    pub fn drag_end(&mut self) -> bool {
        let DragState::Dragging { dragged, target } = std::mem::take(&mut self.drag) else {
            return false;
        };
        self.shortcuts.move_before(&dragged, target.before());
        debug!(id = %dragged, "drag finished");
        self.persist();
        true
    }

    /// Open the editor for a shortcut with a fresh draft.
    pub fn open_editor(&mut self, id: &ShortcutId) -> bool {
        let Some(shortcut) = self.shortcuts.get(id) else {
            return false;
        };
        let token = self.next_token;
        self.next_token = token.next();
        self.editor = EditorState::Open(EditSession {
            target: id.clone(),
            token,
            draft: EditDraft::from_shortcut(shortcut),
        });
        debug!(id = %id, "editor opened");
        true
    }

    /// Update the draft name.
    pub fn set_draft_name(&mut self, value: impl Into<String>) {
        if let Some(session) = self.editor.session_mut() {
            session.draft.name = value.into();
        }
    }

    /// Update the draft link.
    pub fn set_draft_link(&mut self, value: impl Into<String>) {
        if let Some(session) = self.editor.session_mut() {
            session.draft.link = value.into();
        }
    }

    /// Update the image URL input without touching the preview.
    pub fn set_draft_image_url(&mut self, value: impl Into<String>) {
        if let Some(session) = self.editor.session_mut() {
            session.draft.image_url = value.into();
        }
    }

    /// Commit the image URL input into the preview when it is not blank.
    pub fn commit_image_url(&mut self) -> bool {
        self.editor
            .session_mut()
            .is_some_and(|session| session.draft.commit_image_url())
    }

    /// Apply a completed file read. Results for a closed or replaced session
    /// are dropped.
    pub fn apply_file_preview(&mut self, token: SessionToken, data_url: String) -> bool {
        match self.editor.session_mut() {
            Some(session) if session.token == token => {
                session.draft.apply_file(data_url);
                true
            }
            _ => {
                debug!("discarding file preview for stale editor session");
                false
            }
        }
    }

    /// Commit the draft onto its shortcut, persist, and close the editor.
    /// Returns the saved id, or `None` when nothing was open.
    pub fn save_editor(&mut self) -> Option<ShortcutId> {
        let EditorState::Open(session) = std::mem::take(&mut self.editor) else {
            return None;
        };
        let current = self.shortcuts.get(&session.target)?;
        let patch = session
            .draft
            .to_patch(&current.link, &self.config.default_label);
        if let Err(err) = self.shortcuts.update(&session.target, patch) {
            warn!(error = %err, "editor target vanished before save");
            return None;
        }
        debug!(id = %session.target, "editor saved");
        self.persist();
        Some(session.target)
    }

    /// Discard the draft and close the editor.
    pub fn cancel_editor(&mut self) -> bool {
        let was_open = self.editor.is_open();
        self.editor = EditorState::Closed;
        was_open
    }

    fn persist(&mut self) {
        if let Err(err) = persistence::save(&mut self.storage, &self.config, &self.shortcuts) {
            warn!(error = %err, key = %self.config.storage_key, "failed to persist shortcuts");
        }
    }
}

fn dedupe(shortcuts: Vec<Shortcut>) -> ShortcutsState {
    let mut unique: Vec<Shortcut> = Vec::with_capacity(shortcuts.len());
    for shortcut in shortcuts {
        if !unique.iter().any(|existing| existing.id == shortcut.id) {
            unique.push(shortcut);
        }
    }
    ShortcutsState::from_shortcuts(unique).unwrap_or_default()
}
