//! Error types for shortcut operations.

use thiserror::Error;

/// Primary error type for shortcut state and persistence.
#[derive(Debug, Error)]
pub enum ShortcutError {
    /// Two shortcuts in one collection share an id.
    #[error("duplicate shortcut id")]
    DuplicateId {
        /// Offending identifier.
        id: String,
    },
    /// Operation referenced an id with no matching shortcut.
    #[error("unknown shortcut id")]
    UnknownShortcut {
        /// Identifier that failed the lookup.
        id: String,
    },
    /// Shortcut list could not be encoded for storage.
    #[error("failed to encode shortcuts")]
    Encode {
        /// Serializer failure.
        #[source]
        source: serde_json::Error,
    },
    /// Storage backend rejected a write.
    #[error("storage write failed")]
    StorageWrite {
        /// Storage key being written.
        key: String,
        /// Backend-specific failure detail.
        detail: String,
    },
}

/// Convenience alias for shortcut results.
pub type ShortcutResult<T> = Result<T, ShortcutError>;
