//! Shortcut tile grid and edit-mode toggle.
//!
//! # Design
//! - Render straight from the store projection; never read state back from the DOM.
//! - The DOM is only queried for tile geometry during a drag.
//! - Outside edit mode, tile clicks are left to the browser.
//! - Drag start is applied one tick late so the browser captures the drag
//!   image before the tile restyles.

use crate::core::store::{AppStore, apply_shortcut_action};
use crate::features::shortcuts::actions::ShortcutAction;
use crate::features::shortcuts::drag::{DisplayItem, TileBox};
use crate::features::shortcuts::state::{Shortcut, ShortcutId};
use gloo::console;
use gloo::timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{DragEvent, Element, MouseEvent};
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_store};

const DRAG_MIME: &str = "text/plain";

#[function_component(ShortcutGrid)]
pub(crate) fn shortcut_grid() -> Html {
    let (store, dispatch) = use_store::<AppStore>();
    let list_ref = use_node_ref();
    let pending_start = use_mut_ref(|| None as Option<Timeout>);
    let edit_mode = store.shortcuts.edit_mode();

    let on_toggle = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| {
            dispatch.reduce_mut(|store| {
                apply_shortcut_action(store, ShortcutAction::ToggleEditMode);
            });
        })
    };

    let on_drag_over = {
        let dispatch = dispatch.clone();
        let list_ref = list_ref.clone();
        Callback::from(move |event: DragEvent| {
            event.prevent_default();
            if !dispatch.get().shortcuts.drag().is_dragging() {
                return;
            }
            let Some(list) = list_ref.cast::<Element>() else {
                return;
            };
            let tiles = measure_tiles(&list);
            let pointer_y = f64::from(event.client_y());
            dispatch.reduce_mut(move |store| {
                apply_shortcut_action(store, ShortcutAction::DragOver { pointer_y, tiles });
            });
        })
    };

    let on_drag_end = {
        let dispatch = dispatch.clone();
        let pending_start = pending_start.clone();
        Callback::from(move |_: DragEvent| {
            // A drag released before its start was applied never begins.
            drop(pending_start.borrow_mut().take());
            dispatch.reduce_mut(|store| {
                apply_shortcut_action(store, ShortcutAction::DragEnd);
            });
        })
    };

    let on_drop = Callback::from(|event: DragEvent| event.prevent_default());

    html! {
        <section class="shortcuts">
            <div class="shortcuts-header">
                <button
                    id="edit-shortcuts"
                    type="button"
                    class={classes!("m3-icon-button", edit_mode.then_some("active"))}
                    aria-pressed={if edit_mode { "true" } else { "false" }}
                    title="Edit shortcuts"
                    onclick={on_toggle}>
                    {if edit_mode { "Done" } else { "Edit" }}
                </button>
            </div>
            <div
                id="shortcuts-list"
                ref={list_ref}
                class={classes!("shortcuts-list", edit_mode.then_some("editing"))}
                ondragover={on_drag_over}
                ondragend={on_drag_end}
                ondrop={on_drop}>
                {for store.shortcuts.display_items().into_iter().map(|item| {
                    let key = item.key();
                    match item {
                        DisplayItem::Tile { shortcut, dragging } => render_tile(
                            &shortcut,
                            TileView { key, edit_mode, dragging },
                            &dispatch,
                            &pending_start,
                        ),
                        DisplayItem::Placeholder => html! {
                            <div key={key} class="shortcut-placeholder" aria-hidden="true"></div>
                        },
                    }
                })}
            </div>
        </section>
    }
}

struct TileView {
    key: String,
    edit_mode: bool,
    dragging: bool,
}

fn render_tile(
    shortcut: &Shortcut,
    view: TileView,
    dispatch: &Dispatch<AppStore>,
    pending_start: &Rc<RefCell<Option<Timeout>>>,
) -> Html {
    let TileView {
        key,
        edit_mode,
        dragging,
    } = view;
    let on_drag_start = {
        let dispatch = dispatch.clone();
        let pending_start = pending_start.clone();
        let id = shortcut.id.clone();
        Callback::from(move |event: DragEvent| {
            if let Some(transfer) = event.data_transfer() {
                // Firefox only starts a drag once data is set.
                if let Err(err) = transfer.set_data(DRAG_MIME, id.as_str()) {
                    console::error!("drag data transfer failed", id.as_str(), err);
                }
            }
            let dispatch = dispatch.clone();
            let id = id.clone();
            let start = Timeout::new(0, move || {
                dispatch.reduce_mut(move |store| {
                    apply_shortcut_action(store, ShortcutAction::DragStart(id));
                });
            });
            *pending_start.borrow_mut() = Some(start);
        })
    };

    let on_click = {
        let dispatch = dispatch.clone();
        let id = shortcut.id.clone();
        Callback::from(move |event: MouseEvent| {
            if !dispatch.get().shortcuts.edit_mode() {
                return;
            }
            event.prevent_default();
            let id = id.clone();
            dispatch.reduce_mut(move |store| {
                apply_shortcut_action(store, ShortcutAction::TileClicked(id));
            });
        })
    };

    html! {
        <a
            key={key}
            class={classes!(
                "shortcut",
                edit_mode.then_some("editing"),
                dragging.then_some("dragging")
            )}
            href={shortcut.link.clone()}
            data-id={shortcut.id.to_string()}
            draggable={if edit_mode { "true" } else { "false" }}
            ondragstart={on_drag_start}
            onclick={on_click}>
            <img src={shortcut.icon.clone()} alt={shortcut.name.clone()} />
            <span class="shortcut-name">{shortcut.name.clone()}</span>
        </a>
    }
}

/// Read tile boxes in document order; the placeholder carries no id and is skipped.
fn measure_tiles(list: &Element) -> Vec<TileBox> {
    let children = list.children();
    (0..children.length())
        .filter_map(|index| children.item(index))
        .filter_map(|child| {
            let id = child.get_attribute("data-id")?;
            let rect = child.get_bounding_client_rect();
            Some(TileBox {
                id: ShortcutId::new(id),
                top: rect.top(),
                height: rect.height(),
            })
        })
        .collect()
}

