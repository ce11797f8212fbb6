//! End-to-end shortcut flows against in-memory storage.

use newtab_ui::features::shortcuts::drag::TileBox;
use newtab_ui::features::shortcuts::persistence;
use newtab_ui::{
    MemoryStorage, Shortcut, ShortcutId, ShortcutManager, ShortcutStorage, ShortcutsConfig,
    normalize_url,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("newtab_ui=debug")
        .with_test_writer()
        .try_init();
}

fn defaults() -> Vec<Shortcut> {
    [("a", "Alpha"), ("b", "Blog"), ("c", "Calendar")]
        .iter()
        .map(|(id, name)| Shortcut {
            id: ShortcutId::from(*id),
            name: (*name).to_string(),
            link: format!("https://{id}.example"),
            icon: format!("https://{id}.example/icon.png"),
        })
        .collect()
}

fn open(storage: MemoryStorage) -> ShortcutManager<MemoryStorage> {
    ShortcutManager::load(storage, ShortcutsConfig::default(), defaults())
}

fn order<S: ShortcutStorage>(manager: &ShortcutManager<S>) -> Vec<String> {
    manager.state().order().iter().map(ToString::to_string).collect()
}

fn boxes<S: ShortcutStorage>(manager: &ShortcutManager<S>) -> Vec<TileBox> {
    manager
        .state()
        .order()
        .iter()
        .zip(0_u32..)
        .map(|(id, row)| TileBox {
            id: id.clone(),
            top: f64::from(row) * 96.0,
            height: 72.0,
        })
        .collect()
}

#[test]
fn unmodified_collection_round_trips() {
    init_tracing();
    let config = ShortcutsConfig::default();
    let first = open(MemoryStorage::default());
    let mut storage = first.storage().clone();
    persistence::save(&mut storage, &config, first.state()).expect("save");
    let reloaded = open(storage);
    assert_eq!(reloaded.state(), first.state());
}

#[test]
fn reorder_survives_reload() {
    init_tracing();
    let mut manager = open(MemoryStorage::default());
    manager.toggle_edit_mode();
    assert!(manager.drag_start(&ShortcutId::from("a")));
    let boxes = boxes(&manager);
    // Between B (midpoint 132) and C (midpoint 228).
    manager.drag_over(180.0, &boxes);
    assert!(manager.drag_end());
    assert_eq!(order(&manager), ["b", "a", "c"]);

    let reloaded = open(manager.into_storage());
    assert_eq!(order(&reloaded), ["b", "a", "c"]);
}

#[test]
fn blank_link_keeps_existing_link() {
    init_tracing();
    let mut manager = open(MemoryStorage::default());
    manager.toggle_edit_mode();
    manager.click_tile(&ShortcutId::from("b"));
    manager.set_draft_name("News");
    manager.set_draft_link("");
    assert_eq!(manager.save_editor(), Some(ShortcutId::from("b")));

    let reloaded = open(manager.into_storage());
    let b = reloaded.state().get(&ShortcutId::from("b")).expect("b");
    assert_eq!(b.name, "News");
    assert_eq!(b.link, "https://b.example");
    assert_eq!(order(&reloaded), ["a", "b", "c"]);
}

#[test]
fn cancel_leaves_shortcut_untouched() {
    init_tracing();
    let mut manager = open(MemoryStorage::default());
    manager.toggle_edit_mode();
    let before = manager
        .state()
        .get(&ShortcutId::from("c"))
        .cloned()
        .expect("c");
    manager.click_tile(&ShortcutId::from("c"));
    manager.set_draft_name("Changed");
    manager.set_draft_link("changed.example");
    manager.set_draft_image_url("https://changed.example/icon.png");
    manager.commit_image_url();
    assert!(manager.cancel_editor());
    assert_eq!(manager.state().get(&ShortcutId::from("c")), Some(&before));
    assert!(manager.storage().get("shortcutsData").is_none());

    manager.click_tile(&ShortcutId::from("c"));
    let draft = &manager.editor().session().expect("reopened").draft;
    assert!(draft.image_url.is_empty());
    assert_eq!(draft.preview, before.icon);
}

#[test]
fn corrupt_storage_falls_back_to_defaults() {
    init_tracing();
    let storage = MemoryStorage::with_entry("shortcutsData", "[{\"id\":");
    let manager = open(storage);
    assert_eq!(order(&manager), ["a", "b", "c"]);
}

#[test]
fn saved_links_are_absolute() {
    init_tracing();
    let mut manager = open(MemoryStorage::default());
    manager.open_editor(&ShortcutId::from("a"));
    manager.set_draft_link("/docs.example/start");
    manager.save_editor();
    let a = manager.state().get(&ShortcutId::from("a")).expect("a");
    assert_eq!(a.link, "https://docs.example/start");
    assert_eq!(normalize_url(&a.link), a.link);
}
