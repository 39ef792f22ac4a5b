//! Todolist Frontend App
//!
//! Root component rendering today's task list.

use leptos::prelude::*;

use crate::api::TaskClient;
use crate::components::TaskRow;
use crate::config::PageConfig;
use crate::context::AppContext;

#[component]
pub fn App(config: PageConfig) -> impl IntoView {
    // State
    let (tasks, set_tasks) = signal(config.tasks);
    let (selected_task, set_selected_task) = signal::<Option<u32>>(None);

    // Provide context to all children
    provide_context(AppContext::new(
        TaskClient::new(config.endpoint),
        set_tasks,
        (selected_task, set_selected_task),
    ));

    let open_count = move || tasks.get().iter().filter(|t| !t.done).count();

    view! {
        <div class="task-app">
            <h1>"Today's Tasks"</h1>

            <ul class="task-list">
                {move || {
                    tasks
                        .get()
                        .into_iter()
                        .map(|task| view! { <TaskRow task=task /> })
                        .collect_view()
                }}
            </ul>

            <p class="task-count">
                {move || format!("{} tasks, {} open", tasks.get().len(), open_count())}
            </p>
        </div>
    }
}
