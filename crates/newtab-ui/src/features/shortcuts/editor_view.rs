//! Shortcut editor modal.
//!
//! # Design
//! - Inputs are controlled by the draft held in the store.
//! - The modal unmounts its inputs on close, so file and URL fields start clean.
//! - File reads are tagged with the session token that started them.

use crate::core::store::{AppStore, apply_shortcut_action};
use crate::features::shortcuts::actions::ShortcutAction;
use crate::features::shortcuts::editor::{
    EditorKeyOutcome, SessionToken, interpret_editor_key, is_backdrop_click,
};
use gloo::console;
use gloo::events::EventListener;
use gloo::file::callbacks::{FileReader, read_as_data_url};
use gloo::utils::document;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, HtmlElement, HtmlInputElement, KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_store};

#[function_component(ShortcutEditor)]
pub(crate) fn shortcut_editor() -> Html {
    let (store, dispatch) = use_store::<AppStore>();
    let name_ref = use_node_ref();
    let backdrop_ref = use_node_ref();
    let pending_read = use_mut_ref(|| None as Option<FileReader>);
    let session = store.shortcuts.editor().session().cloned();
    let token = session.as_ref().map(|session| session.token);

    {
        let name_ref = name_ref.clone();
        use_effect_with_deps(
            move |token: &Option<SessionToken>| {
                if token.is_some() {
                    if let Some(input) = name_ref.cast::<HtmlElement>() {
                        if let Err(err) = input.focus() {
                            console::error!("shortcut editor focus failed", err);
                        }
                    }
                }
                || ()
            },
            token,
        );
    }
    {
        let dispatch = dispatch.clone();
        use_effect_with_deps(
            move |open: &bool| {
                let listener = open.then(|| {
                    EventListener::new(&document(), "keydown", move |event| {
                        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                            return;
                        };
                        if interpret_editor_key(&event.key()) == Some(EditorKeyOutcome::Cancel) {
                            send(&dispatch, ShortcutAction::Cancel);
                        }
                    })
                });
                move || drop(listener)
            },
            token.is_some(),
        );
    }

    let Some(session) = session else {
        return html! {};
    };
    let draft = session.draft;
    let token = session.token;

    let on_backdrop = {
        let dispatch = dispatch.clone();
        let backdrop_ref = backdrop_ref.clone();
        Callback::from(move |event: MouseEvent| {
            let target = event.target().map(JsValue::from);
            let backdrop = backdrop_ref.get().map(JsValue::from);
            if is_backdrop_click(target.as_ref(), backdrop.as_ref()) {
                send(&dispatch, ShortcutAction::Cancel);
            }
        })
    };
    let on_name = {
        let dispatch = dispatch.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                send(&dispatch, ShortcutAction::DraftName(input.value()));
            }
        })
    };
    let on_link = {
        let dispatch = dispatch.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                send(&dispatch, ShortcutAction::DraftLink(input.value()));
            }
        })
    };
    let on_image_url = {
        let dispatch = dispatch.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                send(&dispatch, ShortcutAction::DraftImageUrl(input.value()));
            }
        })
    };
    let on_image_url_commit = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: Event| send(&dispatch, ShortcutAction::CommitImageUrl))
    };
    let on_file_change = {
        let dispatch = dispatch.clone();
        let pending_read = pending_read.clone();
        Callback::from(move |event: Event| {
            let Some(input) = event
                .target()
                .and_then(|node| node.dyn_into::<HtmlInputElement>().ok())
            else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            let file = gloo::file::File::from(file);
            let dispatch = dispatch.clone();
            let reader = read_as_data_url(&file, move |result| match result {
                Ok(data_url) => send(&dispatch, ShortcutAction::FileLoaded { token, data_url }),
                Err(err) => console::error!("shortcut icon read failed", err.to_string()),
            });
            *pending_read.borrow_mut() = Some(reader);
        })
    };
    let on_save = {
        let dispatch = dispatch.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            send(&dispatch, ShortcutAction::Save);
        })
    };
    let on_cancel = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| send(&dispatch, ShortcutAction::Cancel))
    };

    html! {
        <div
            id="shortcut-editor"
            ref={backdrop_ref}
            class="modal"
            role="dialog"
            aria-modal="true"
            aria-hidden="false"
            onclick={on_backdrop}>
            <form class="modal-box">
                <h3>{"Edit shortcut"}</h3>
                <img id="edit-preview" class="preview" src={draft.preview.clone()} alt={draft.name.clone()} />
                <label>
                    <span>{"Name"}</span>
                    <input id="edit-name" ref={name_ref} value={draft.name.clone()} oninput={on_name} />
                </label>
                <label>
                    <span>{"Link"}</span>
                    <input id="edit-link" value={draft.link.clone()} placeholder="example.com" oninput={on_link} />
                </label>
                <label>
                    <span>{"Image URL"}</span>
                    <input
                        id="edit-img-url"
                        value={draft.image_url.clone()}
                        placeholder="https://example.com/icon.png"
                        oninput={on_image_url}
                        onchange={on_image_url_commit} />
                </label>
                <label class="custom-file-upload">
                    <span>{"Upload image"}</span>
                    <input id="edit-file" type="file" accept="image/*" onchange={on_file_change} />
                </label>
                <div class="modal-actions">
                    <button id="editor-cancel" type="button" class="ghost" onclick={on_cancel}>
                        {"Cancel"}
                    </button>
                    <button id="editor-save" type="submit" class="solid" onclick={on_save}>
                        {"Save"}
                    </button>
                </div>
            </form>
        </div>
    }
}

fn send(dispatch: &Dispatch<AppStore>, action: ShortcutAction) {
    dispatch.reduce_mut(move |store| {
        apply_shortcut_action(store, action);
    });
}
