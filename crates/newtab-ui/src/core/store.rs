//! App-wide yewdux store.
//!
//! # Design
//! - Keep shared UI state in one store to avoid ad-hoc contexts.
//! - Views dispatch [`ShortcutAction`]s; the reducer below is the only writer.

use crate::core::config::ShortcutsConfig;
use crate::core::defaults::default_shortcuts;
use crate::features::shortcuts::actions::{ShortcutAction, TileClick};
use crate::features::shortcuts::manager::ShortcutManager;
use yewdux::store::Store;

/// Storage backend used by the page.
#[cfg(target_arch = "wasm32")]
pub type PageStorage = crate::features::shortcuts::storage::BrowserStorage;
/// Storage backend used by the page.
#[cfg(not(target_arch = "wasm32"))]
pub type PageStorage = crate::features::shortcuts::persistence::MemoryStorage;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Store)]
pub struct AppStore {
    /// Shortcut tiles plus their edit and drag sessions.
    pub shortcuts: ShortcutManager<PageStorage>,
}

impl Default for AppStore {
    fn default() -> Self {
        Self {
            shortcuts: ShortcutManager::load(
                PageStorage::default(),
                ShortcutsConfig::default(),
                default_shortcuts(),
            ),
        }
    }
}

/// Result of applying a shortcut action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    /// State changed and should re-render.
    Applied,
    /// The action had no effect.
    Ignored,
    /// The browser should follow this link.
    Navigate(String),
}

impl ActionOutcome {
    const fn from_changed(changed: bool) -> Self {
        if changed { Self::Applied } else { Self::Ignored }
    }
}

/// Apply a shortcut action to the app store.
pub fn apply_shortcut_action(store: &mut AppStore, action: ShortcutAction) -> ActionOutcome {
    let manager = &mut store.shortcuts;
    match action {
        ShortcutAction::ToggleEditMode => {
            manager.toggle_edit_mode();
            ActionOutcome::Applied
        }
        ShortcutAction::TileClicked(id) => match manager.click_tile(&id) {
            TileClick::Navigate(link) => ActionOutcome::Navigate(link),
            TileClick::OpenEditor => ActionOutcome::Applied,
            TileClick::Ignored => ActionOutcome::Ignored,
        },
        ShortcutAction::DragStart(id) => ActionOutcome::from_changed(manager.drag_start(&id)),
        ShortcutAction::DragOver { pointer_y, tiles } => {
            ActionOutcome::from_changed(manager.drag_over(pointer_y, &tiles))
        }
        ShortcutAction::DragEnd => ActionOutcome::from_changed(manager.drag_end()),
        ShortcutAction::DraftName(value) => {
            manager.set_draft_name(value);
            ActionOutcome::Applied
        }
        ShortcutAction::DraftLink(value) => {
            manager.set_draft_link(value);
            ActionOutcome::Applied
        }
        ShortcutAction::DraftImageUrl(value) => {
            manager.set_draft_image_url(value);
            ActionOutcome::Applied
        }
        ShortcutAction::CommitImageUrl => ActionOutcome::from_changed(manager.commit_image_url()),
        ShortcutAction::FileLoaded { token, data_url } => {
            ActionOutcome::from_changed(manager.apply_file_preview(token, data_url))
        }
        ShortcutAction::Save => ActionOutcome::from_changed(manager.save_editor().is_some()),
        ShortcutAction::Cancel => ActionOutcome::from_changed(manager.cancel_editor()),
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::{ActionOutcome, AppStore, apply_shortcut_action};
    use crate::features::shortcuts::actions::ShortcutAction;
    use crate::features::shortcuts::state::ShortcutId;

    #[test]
    fn tile_click_navigates_outside_edit_mode() {
        let mut store = AppStore::default();
        let outcome = apply_shortcut_action(&mut store, ShortcutAction::TileClicked("3".into()));
        assert_eq!(outcome, ActionOutcome::Navigate("https://github.com".to_string()));
    }

    #[test]
    fn editor_round_trip_through_actions() {
        let mut store = AppStore::default();
        apply_shortcut_action(&mut store, ShortcutAction::ToggleEditMode);
        assert_eq!(
            apply_shortcut_action(&mut store, ShortcutAction::TileClicked("1".into())),
            ActionOutcome::Applied
        );
        apply_shortcut_action(&mut store, ShortcutAction::DraftName("Mail".to_string()));
        apply_shortcut_action(&mut store, ShortcutAction::DraftLink("//mail.example".to_string()));
        assert_eq!(
            apply_shortcut_action(&mut store, ShortcutAction::Save),
            ActionOutcome::Applied
        );
        let saved = store
            .shortcuts
            .state()
            .get(&ShortcutId::from("1"))
            .expect("tile 1");
        assert_eq!(saved.name, "Mail");
        assert_eq!(saved.link, "https://mail.example");
        assert!(store.shortcuts.storage().get("shortcutsData").is_some());
    }

    #[test]
    fn stray_actions_are_ignored() {
        let mut store = AppStore::default();
        assert_eq!(
            apply_shortcut_action(&mut store, ShortcutAction::DragEnd),
            ActionOutcome::Ignored
        );
        assert_eq!(
            apply_shortcut_action(&mut store, ShortcutAction::Cancel),
            ActionOutcome::Ignored
        );
        assert_eq!(
            apply_shortcut_action(&mut store, ShortcutAction::Save),
            ActionOutcome::Ignored
        );
    }
}
