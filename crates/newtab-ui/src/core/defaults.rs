//! Baked-in shortcut tiles shown before anything is persisted.
//!
//! # Design
//! - Ids are stable strings; persisted entries are matched against them.
//! - Links are stored fully qualified so they survive normalization unchanged.

use crate::features::shortcuts::state::{Shortcut, ShortcutId};

const DEFAULTS: [(&str, &str, &str); 6] = [
    ("1", "Gmail", "https://mail.google.com"),
    ("2", "YouTube", "https://www.youtube.com"),
    ("3", "GitHub", "https://github.com"),
    ("4", "Reddit", "https://www.reddit.com"),
    ("5", "Wikipedia", "https://en.wikipedia.org"),
    ("6", "Maps", "https://maps.google.com"),
];

/// Default shortcut set in display order.
#[must_use]
pub fn default_shortcuts() -> Vec<Shortcut> {
    DEFAULTS
        .iter()
        .map(|(id, name, link)| Shortcut {
            id: ShortcutId::from(*id),
            name: (*name).to_string(),
            link: (*link).to_string(),
            icon: favicon_for(link),
        })
        .collect()
}

/// Favicon service URL for a link's host.
#[must_use]
pub fn favicon_for(link: &str) -> String {
    let host = link
        .split_once("://")
        .map_or(link, |(_, rest)| rest)
        .split('/')
        .next()
        .unwrap_or_default();
    format!("https://www.google.com/s2/favicons?domain={host}&sz=64")
}

#[cfg(test)]
mod tests {
    use super::{default_shortcuts, favicon_for};
    use std::collections::HashSet;

    #[test]
    fn default_ids_are_unique() {
        let shortcuts = default_shortcuts();
        let ids: HashSet<_> = shortcuts.iter().map(|s| s.id.clone()).collect();
        assert_eq!(ids.len(), shortcuts.len());
    }

    #[test]
    fn favicon_uses_host_only() {
        assert_eq!(
            favicon_for("https://en.wikipedia.org/wiki/Main_Page"),
            "https://www.google.com/s2/favicons?domain=en.wikipedia.org&sz=64"
        );
        assert_eq!(
            favicon_for("github.com"),
            "https://www.google.com/s2/favicons?domain=github.com&sz=64"
        );
    }
}
