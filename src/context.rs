//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::TaskClient;
use crate::models::Task;

/// App-wide handles provided via context
#[derive(Clone)]
pub struct AppContext {
    /// Shared update-endpoint client
    pub client: TaskClient,
    /// Task list - write (rows leave the DOM through here on delete)
    set_tasks: WriteSignal<Vec<Task>>,
    /// Currently selected row - read
    pub selected_task: ReadSignal<Option<u32>>,
    /// Currently selected row - write
    set_selected_task: WriteSignal<Option<u32>>,
}

impl AppContext {
    pub fn new(
        client: TaskClient,
        set_tasks: WriteSignal<Vec<Task>>,
        selected_task: (ReadSignal<Option<u32>>, WriteSignal<Option<u32>>),
    ) -> Self {
        Self {
            client,
            set_tasks,
            selected_task: selected_task.0,
            set_selected_task: selected_task.1,
        }
    }

    /// Drop a task's row from the list
    pub fn remove_task(&self, id: u32) {
        self.set_tasks.update(|tasks| tasks.retain(|t| t.id != id));
    }

    /// Mark a row as the selected one
    pub fn select_task(&self, id: u32) {
        self.set_selected_task.set(Some(id));
    }
}
