//! Task Row Component
//!
//! One task in the list: done checkbox, inline text editor, delete button.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::console;

use crate::components::TaskTextEditor;
use crate::context::AppContext;
use crate::dialog;
use crate::models::{Task, TaskMutation};

/// A single task row
#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = task.id;
    let done = task.done;
    let text = task.task_text.clone();
    let selected = ctx.selected_task;

    // Set while a delete is in flight so the editor ignores the blur that
    // fires when the row goes away
    let (deleting, set_deleting) = signal(false);

    let toggle_client = ctx.client.clone();
    let toggle_done = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let checked = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap().checked();
        let client = toggle_client.clone();
        spawn_local(async move {
            // Server is the source of truth; the row is left alone either way
            match client.update(id, &TaskMutation::ToggleDone(checked)).await {
                Ok(resp) => {
                    console::log_1(&format!("[TASK] toggled #{}: {:?}", id, resp.status).into());
                }
                Err(err) => {
                    console::error_1(&format!("[TASK] toggle #{} failed: {}", id, err).into());
                }
            }
        });
    };

    let delete_ctx = ctx.clone();
    let delete_task = move |ev: web_sys::MouseEvent| {
        // A click on the delete control must not also select the row
        ev.stop_propagation();
        if !dialog::confirm("Delete this task?") {
            return;
        }
        set_deleting.set(true);
        let ctx = delete_ctx.clone();
        spawn_local(async move {
            match ctx.client.update(id, &TaskMutation::Delete).await {
                Ok(resp) if resp.is_success() => ctx.remove_task(id),
                Ok(resp) => {
                    dialog::alert(&resp.failure_message());
                    set_deleting.set(false);
                }
                Err(err) => {
                    console::error_1(&format!("[TASK] delete #{} failed: {}", id, err).into());
                    set_deleting.set(false);
                }
            }
        });
    };

    let row_class = move || {
        let mut class = String::from("task-row");
        if done {
            class.push_str(" done");
        }
        if selected.get() == Some(id) {
            class.push_str(" selected");
        }
        class
    };

    let select_ctx = ctx;
    view! {
        <li class=row_class on:click=move |_| select_ctx.select_task(id)>
            <input type="checkbox" class="task-checkbox" checked=done on:change=toggle_done />
            <TaskTextEditor task_id=id initial_text=text deleting=deleting />
            <button class="delete-btn" on:click=delete_task>"×"</button>
        </li>
    }
}
