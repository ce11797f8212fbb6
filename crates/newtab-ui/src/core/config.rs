//! Shortcut manager configuration.
//!
//! # Design
//! - Defaults match the storage layout already written by deployed pages.
//! - Overrides are builder-style so tests can isolate their storage keys.

/// Storage key holding the serialized shortcut list.
pub const DEFAULT_STORAGE_KEY: &str = "shortcutsData";
/// Label used when a shortcut is saved with a blank name.
pub const DEFAULT_LABEL: &str = "Shortcut";

/// Settings consumed by the shortcut manager and persistence layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortcutsConfig {
    /// Storage key for the persisted shortcut array.
    pub storage_key: String,
    /// Fallback display label for blank names.
    pub default_label: String,
}

impl Default for ShortcutsConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            default_label: DEFAULT_LABEL.to_string(),
        }
    }
}

impl ShortcutsConfig {
    /// Override the storage key.
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Override the blank-name fallback label.
    #[must_use]
    pub fn with_default_label(mut self, label: impl Into<String>) -> Self {
        self.default_label = label.into();
        self
    }
}
