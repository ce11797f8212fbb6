//! Browser local-storage backend for shortcut persistence.

use crate::core::error::{ShortcutError, ShortcutResult};
use crate::features::shortcuts::persistence::ShortcutStorage;
use gloo::console;
use gloo::storage::{LocalStorage, Storage};

/// `window.localStorage`, read and written as raw strings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserStorage;

impl ShortcutStorage for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        match LocalStorage::raw().get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log_storage_error("get", key, &format!("{err:?}"));
                None
            }
        }
    }

    fn write(&mut self, key: &str, value: &str) -> ShortcutResult<()> {
        LocalStorage::raw().set_item(key, value).map_err(|err| {
            let detail = format!("{err:?}");
            log_storage_error("set", key, &detail);
            ShortcutError::StorageWrite {
                key: key.to_string(),
                detail,
            }
        })
    }
}

fn log_storage_error(operation: &'static str, key: &str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}
