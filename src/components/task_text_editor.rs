//! Task Text Editor Component
//!
//! Inline editor for one task's text; saves on focus loss.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::console;

use crate::context::AppContext;
use crate::dialog;
use crate::models::TaskMutation;
use crate::validate::{plan_rename, RenamePlan};

/// Inline text input bound to one task
///
/// `deleting` is set by the row while its delete is in flight; a blur fired
/// during removal must not turn into a rename request.
#[component]
pub fn TaskTextEditor(
    task_id: u32,
    initial_text: String,
    deleting: ReadSignal<bool>,
) -> impl IntoView {
    let client = use_context::<AppContext>()
        .expect("AppContext should be provided")
        .client;

    // Last text the server accepted; edits are diffed against this
    let (saved_text, set_saved_text) = signal(initial_text.clone());
    let (text, set_text) = signal(initial_text);

    let save = move |_| {
        if deleting.get_untracked() {
            return;
        }
        let edited = text.get_untracked();
        let new_text = match plan_rename(&saved_text.get_untracked(), &edited) {
            RenamePlan::Unchanged => return,
            RenamePlan::Invalid(err) => {
                dialog::alert(err.message());
                return;
            }
            RenamePlan::Send(new_text) => new_text,
        };
        let client = client.clone();
        spawn_local(async move {
            match client.update(task_id, &TaskMutation::Rename(new_text.clone())).await {
                Ok(resp) => {
                    if let Some(url) = resp.redirect {
                        navigate(&url);
                        return;
                    }
                    console::log_1(&format!("[TASK] renamed #{}", task_id).into());
                    set_saved_text.set(new_text);
                }
                Err(err) => {
                    console::error_1(&format!("[TASK] rename #{} failed: {}", task_id, err).into());
                }
            }
        });
    };

    view! {
        <input
            type="text"
            class="task-text-input"
            prop:value=move || text.get()
            on:input=move |ev| {
                let target = ev.target().unwrap();
                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                set_text.set(input.value());
            }
            on:blur=save
            on:keydown=move |ev: web_sys::KeyboardEvent| {
                // Enter neither inserts a line nor saves; only blur saves
                if ev.key() == "Enter" {
                    ev.prevent_default();
                }
            }
        />
    }
}

/// Follow a server-issued redirect
fn navigate(url: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(url);
    }
}
