//! Shortcut persistence against a key/value storage backend.
//!
//! # Design
//! - One JSON array under one key; each element is `{id, name, link, img}`.
//! - Loading never fails: unreadable data degrades to the baked-in defaults.
//! - Saving overwrites the whole record; last writer wins.

use crate::core::config::ShortcutsConfig;
use crate::core::error::{ShortcutError, ShortcutResult};
use crate::features::shortcuts::state::{Shortcut, ShortcutId, ShortcutPatch, ShortcutsState};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Key/value storage holding serialized shortcut records.
pub trait ShortcutStorage {
    /// Read the raw value stored under `key`.
    fn read(&self, key: &str) -> Option<String>;

    /// Overwrite the value stored under `key`.
    ///
    /// # Errors
    /// Returns [`ShortcutError::StorageWrite`] when the backend rejects the write.
    fn write(&mut self, key: &str, value: &str) -> ShortcutResult<()>;
}

/// In-memory storage used on native targets and in tests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    /// Storage pre-populated with one entry.
    #[must_use]
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.into(), value.into());
        Self { entries }
    }

    /// Borrow a stored value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl ShortcutStorage for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> ShortcutResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Persisted form of one shortcut.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredShortcut {
    /// Shortcut id matched against the default set on load. Numeric ids are
    /// read as their decimal text.
    #[serde(deserialize_with = "stored_id")]
    pub id: ShortcutId,
    /// Display label; absent keeps the current label.
    #[serde(default)]
    pub name: Option<String>,
    /// Destination URL; absent keeps the current link.
    #[serde(default)]
    pub link: Option<String>,
    /// Icon source; absent keeps the current icon.
    #[serde(default)]
    pub img: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredId {
    Text(String),
    Number(Number),
}

fn stored_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ShortcutId, D::Error> {
    Ok(match StoredId::deserialize(deserializer)? {
        StoredId::Text(id) => ShortcutId::new(id),
        StoredId::Number(id) => ShortcutId::new(id.to_string()),
    })
}

impl From<&Shortcut> for StoredShortcut {
    fn from(value: &Shortcut) -> Self {
        Self {
            id: value.id.clone(),
            name: Some(value.name.clone()),
            link: Some(value.link.clone()),
            img: Some(value.icon.clone()),
        }
    }
}

/// Parse a stored record. Returns `None` when the value is not a JSON array;
/// array elements that are not valid records are dropped.
#[must_use]
pub fn decode(raw: &str) -> Option<Vec<StoredShortcut>> {
    let value: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(err) => {
            warn!(error = %err, "stored shortcuts are not valid JSON");
            return None;
        }
    };
    let Value::Array(elements) = value else {
        warn!("stored shortcuts are not an array");
        return None;
    };
    let entries = elements
        .into_iter()
        .enumerate()
        .filter_map(|(index, element)| match serde_json::from_value(element) {
            Ok(entry) => Some(entry),
            Err(err) => {
                warn!(index, error = %err, "skipping malformed stored shortcut");
                None
            }
        })
        .collect();
    Some(entries)
}

/// Overlay stored entries onto a collection: matching ids take the stored
/// content and move to the end in stored order; unknown ids are skipped.
pub fn apply_stored(state: &mut ShortcutsState, entries: Vec<StoredShortcut>) {
    for entry in entries {
        let Some(current) = state.get(&entry.id) else {
            debug!(id = %entry.id, "stored shortcut has no matching tile");
            continue;
        };
        let patch = ShortcutPatch {
            name: entry.name.unwrap_or_else(|| current.name.clone()),
            link: entry.link.unwrap_or_else(|| current.link.clone()),
            icon: entry.img.unwrap_or_else(|| current.icon.clone()),
        };
        if state.update(&entry.id, patch).is_ok() {
            state.move_to_end(&entry.id);
        }
    }
}

/// Load the persisted collection, falling back to `defaults`.
#[must_use]
pub fn load<S: ShortcutStorage>(
    storage: &S,
    config: &ShortcutsConfig,
    defaults: ShortcutsState,
) -> ShortcutsState {
    let Some(raw) = storage.read(&config.storage_key) else {
        debug!(key = %config.storage_key, "no stored shortcuts; using defaults");
        return defaults;
    };
    let Some(entries) = decode(&raw) else {
        return defaults;
    };
    let mut state = defaults;
    apply_stored(&mut state, entries);
    debug!(count = state.len(), "loaded stored shortcuts");
    state
}

/// Serialize the collection in display order.
///
/// # Errors
/// Returns [`ShortcutError::Encode`] when serialization fails.
pub fn encode(state: &ShortcutsState) -> ShortcutResult<String> {
    let entries: Vec<StoredShortcut> = state.iter().map(StoredShortcut::from).collect();
    serde_json::to_string(&entries).map_err(|source| ShortcutError::Encode { source })
}

/// Overwrite the stored collection.
///
/// # Errors
/// Returns an error when encoding or the storage write fails.
pub fn save<S: ShortcutStorage>(
    storage: &mut S,
    config: &ShortcutsConfig,
    state: &ShortcutsState,
) -> ShortcutResult<()> {
    let encoded = encode(state)?;
    storage.write(&config.storage_key, &encoded)
}

#[cfg(test)]
mod tests {
    use super::{MemoryStorage, StoredShortcut, decode, encode, load, save};
    use crate::core::config::ShortcutsConfig;
    use crate::features::shortcuts::state::{Shortcut, ShortcutId, ShortcutsState};

    fn defaults() -> ShortcutsState {
        ShortcutsState::from_shortcuts(
            ["a", "b", "c"]
                .iter()
                .map(|id| Shortcut {
                    id: ShortcutId::from(*id),
                    name: id.to_uppercase(),
                    link: format!("https://{id}.example"),
                    icon: format!("https://{id}.example/icon.png"),
                })
                .collect(),
        )
        .expect("defaults")
    }

    fn order(state: &ShortcutsState) -> Vec<&str> {
        state.order().iter().map(ShortcutId::as_str).collect()
    }

    #[test]
    fn missing_record_uses_defaults() {
        let state = load(&MemoryStorage::default(), &ShortcutsConfig::default(), defaults());
        assert_eq!(state, defaults());
    }

    #[test]
    fn malformed_record_uses_defaults() {
        let config = ShortcutsConfig::default();
        for raw in ["{not json", "{\"id\":\"a\"}", "null", "42"] {
            let storage = MemoryStorage::with_entry(config.storage_key.clone(), raw);
            assert_eq!(load(&storage, &config, defaults()), defaults(), "raw {raw}");
        }
    }

    #[test]
    fn stored_entries_overlay_and_reorder() {
        let config = ShortcutsConfig::default();
        let raw = r#"[
            {"id":"c","name":"Calendar","link":"https://cal.example","img":"data:image/png;base64,AA"},
            {"id":"zzz","name":"Ghost","link":"https://ghost.example","img":""},
            {"id":"a","name":"A","link":"https://a.example","img":"https://a.example/icon.png"}
        ]"#;
        let storage = MemoryStorage::with_entry(config.storage_key.clone(), raw);
        let state = load(&storage, &config, defaults());
        assert_eq!(order(&state), ["b", "c", "a"]);
        let c = state.get(&ShortcutId::from("c")).expect("c");
        assert_eq!(c.name, "Calendar");
        assert_eq!(c.icon, "data:image/png;base64,AA");
        assert!(state.get(&ShortcutId::from("zzz")).is_none());
    }

    #[test]
    fn malformed_elements_are_skipped() {
        let entries = decode(r#"[{"name":"no id"},{"id":"b","link":null},7]"#).expect("array");
        assert_eq!(
            entries,
            vec![StoredShortcut {
                id: ShortcutId::from("b"),
                name: None,
                link: None,
                img: None,
            }]
        );
    }

    #[test]
    fn numeric_ids_match_text_ids() {
        let config = ShortcutsConfig::default();
        let storage = MemoryStorage::with_entry(
            config.storage_key.clone(),
            r#"[{"id":2,"name":"Mail"},{"id":1.5}]"#,
        );
        let tiles = ShortcutsState::from_shortcuts(vec![
            Shortcut {
                id: ShortcutId::from("1"),
                name: "One".to_string(),
                link: "https://one.example".to_string(),
                icon: String::new(),
            },
            Shortcut {
                id: ShortcutId::from("2"),
                name: "Two".to_string(),
                link: "https://two.example".to_string(),
                icon: String::new(),
            },
        ])
        .expect("tiles");
        let state = load(&storage, &config, tiles);
        assert_eq!(order(&state), ["1", "2"]);
        let two = state.get(&ShortcutId::from("2")).expect("2");
        assert_eq!(two.name, "Mail");
        assert_eq!(two.link, "https://two.example");
    }

    #[test]
    fn partial_entries_keep_current_fields() {
        let config = ShortcutsConfig::default();
        let storage = MemoryStorage::with_entry(
            config.storage_key.clone(),
            r#"[{"id":"a","name":"Alpha"}]"#,
        );
        let state = load(&storage, &config, defaults());
        let a = state.get(&ShortcutId::from("a")).expect("a");
        assert_eq!(a.name, "Alpha");
        assert_eq!(a.link, "https://a.example");
        assert_eq!(order(&state), ["b", "c", "a"]);
    }

    #[test]
    fn save_then_load_round_trips() {
        let config = ShortcutsConfig::default();
        let mut storage = MemoryStorage::default();
        let mut state = defaults();
        state.move_to_end(&ShortcutId::from("a"));
        save(&mut storage, &config, &state).expect("save");
        let reloaded = load(&storage, &config, defaults());
        assert_eq!(reloaded, state);
    }

    #[test]
    fn encoded_record_uses_img_field() {
        let encoded = encode(&defaults()).expect("encode");
        let value: serde_json::Value = serde_json::from_str(&encoded).expect("json");
        assert_eq!(value[0]["id"], "a");
        assert_eq!(value[0]["img"], "https://a.example/icon.png");
        assert_eq!(value.as_array().map(Vec::len), Some(3));
    }
}
