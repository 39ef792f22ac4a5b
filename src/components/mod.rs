//! UI Components
//!
//! Leptos components for the task list.

mod task_row;
mod task_text_editor;

pub use task_row::TaskRow;
pub use task_text_editor::TaskTextEditor;
