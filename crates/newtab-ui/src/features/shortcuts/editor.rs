//! Shortcut editor modal state.
//!
//! # Design
//! - Keep form inputs as strings for lossless editing.
//! - Convert to a [`ShortcutPatch`] only on save.
//! - Each open session carries a token so late file reads cannot leak into a
//!   different session.

use crate::core::link::normalize_url;
use crate::features::shortcuts::state::{Shortcut, ShortcutId, ShortcutPatch};

/// Which input last supplied the preview image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreviewSource {
    /// The shortcut's current icon.
    Existing,
    /// A local file read as a data URL.
    File,
    /// A typed image URL.
    Url,
}

/// Mutable editor form state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditDraft {
    /// Name input.
    pub name: String,
    /// Link input.
    pub link: String,
    /// Image URL input, committed into the preview on change.
    pub image_url: String,
    /// Image that will be saved as the icon.
    pub preview: String,
    /// Origin of the current preview.
    pub preview_source: PreviewSource,
}

impl EditDraft {
    /// Build a draft from an existing shortcut.
    #[must_use]
    pub fn from_shortcut(shortcut: &Shortcut) -> Self {
        Self {
            name: shortcut.name.clone(),
            link: shortcut.link.clone(),
            image_url: String::new(),
            preview: shortcut.icon.clone(),
            preview_source: PreviewSource::Existing,
        }
    }

    /// Use the typed image URL as the preview when it is not blank.
    pub fn commit_image_url(&mut self) -> bool {
        let url = self.image_url.trim();
        if url.is_empty() {
            return false;
        }
        self.preview = url.to_string();
        self.preview_source = PreviewSource::Url;
        true
    }

    /// Use a loaded file's data URL as the preview.
    pub fn apply_file(&mut self, data_url: String) {
        self.preview = data_url;
        self.preview_source = PreviewSource::File;
    }

    /// Convert the draft into the content written on save.
    ///
    /// Blank names fall back to `default_label`; a link that normalizes to
    /// nothing keeps `current_link`.
    #[must_use]
    pub fn to_patch(&self, current_link: &str, default_label: &str) -> ShortcutPatch {
        let name = self.name.trim();
        let name = if name.is_empty() { default_label } else { name };
        let link = normalize_url(&self.link);
        let link = if link.is_empty() {
            current_link.to_string()
        } else {
            link
        };
        ShortcutPatch {
            name: name.to_string(),
            link,
            icon: self.preview.clone(),
        }
    }
}

/// Token identifying one open editor session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SessionToken(u64);

impl SessionToken {
    /// Token following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl Default for SessionToken {
    fn default() -> Self {
        Self(1)
    }
}

/// An open editor bound to one shortcut.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditSession {
    /// Shortcut being edited.
    pub target: ShortcutId,
    /// Session token for async completions.
    pub token: SessionToken,
    /// Current form values.
    pub draft: EditDraft,
}

/// Editor modal state machine.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum EditorState {
    /// Modal hidden.
    #[default]
    Closed,
    /// Modal visible with an active session.
    Open(EditSession),
}

impl EditorState {
    /// Whether the modal is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    /// Active session, if open.
    #[must_use]
    pub const fn session(&self) -> Option<&EditSession> {
        match self {
            Self::Open(session) => Some(session),
            Self::Closed => None,
        }
    }

    /// Mutable access to the active session.
    pub const fn session_mut(&mut self) -> Option<&mut EditSession> {
        match self {
            Self::Open(session) => Some(session),
            Self::Closed => None,
        }
    }
}

/// Semantic outcome of a key press while the editor is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorKeyOutcome {
    /// Discard the draft and close.
    Cancel,
}

/// Map a key press inside the editor to an outcome.
#[must_use]
pub fn interpret_editor_key(key: &str) -> Option<EditorKeyOutcome> {
    match key {
        "Escape" | "Esc" => Some(EditorKeyOutcome::Cancel),
        _ => None,
    }
}

/// Whether a click landed on the modal backdrop itself rather than inside
/// the dialog box.
///
/// Delegated listeners see the app root as `currentTarget`, so the event
/// target is compared against the backdrop node instead.
#[must_use]
pub fn is_backdrop_click<T: PartialEq>(target: Option<&T>, backdrop: Option<&T>) -> bool {
    matches!((target, backdrop), (Some(target), Some(backdrop)) if target == backdrop)
}
