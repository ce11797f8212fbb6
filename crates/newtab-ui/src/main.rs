#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! New tab page entry point.
//!
//! On wasm32 this mounts the page. Natively it prints the storage record the
//! page writes for its baked-in tiles, which is handy for seeding or diffing
//! `localStorage`.

#[cfg(target_arch = "wasm32")]
fn main() {
    newtab_ui::run_app();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::io::Result<()> {
    let mut stdout = std::io::stdout().lock();
    write_default_record(&mut stdout)
}

#[cfg(not(target_arch = "wasm32"))]
fn write_default_record(out: &mut impl std::io::Write) -> std::io::Result<()> {
    use newtab_ui::core::defaults::default_shortcuts;
    use newtab_ui::features::shortcuts::persistence::encode;
    use newtab_ui::{ShortcutsConfig, ShortcutsState};

    let state = ShortcutsState::from_shortcuts(default_shortcuts()).map_err(std::io::Error::other)?;
    let record = encode(&state).map_err(std::io::Error::other)?;
    writeln!(out, "{}={record}", ShortcutsConfig::default().storage_key)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::write_default_record;

    #[test]
    fn default_record_is_keyed_json() {
        let mut out = Vec::new();
        write_default_record(&mut out).expect("write");
        let text = String::from_utf8(out).expect("utf8");
        let (key, record) = text.trim_end().split_once('=').expect("key=value");
        assert_eq!(key, "shortcutsData");
        let value: serde_json::Value = serde_json::from_str(record).expect("json");
        assert_eq!(value.as_array().map(Vec::len), Some(6));
        assert_eq!(value[0]["id"], "1");
    }
}
