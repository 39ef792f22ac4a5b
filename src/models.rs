//! Task Models
//!
//! Data structures matching the server's task records and the update
//! endpoint's wire formats.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

/// One task as rendered in the list (matches the server record)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub task_text: String,
    pub done: bool,
}

/// A single mutation against one task
///
/// Exactly one of the three payload shapes goes on the wire; the task id is
/// supplied when the request is sent.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskMutation {
    ToggleDone(bool),
    Delete,
    Rename(String),
}

impl TaskMutation {
    /// Short name used in request logs
    pub fn kind(&self) -> &'static str {
        match self {
            TaskMutation::ToggleDone(_) => "toggle",
            TaskMutation::Delete => "delete",
            TaskMutation::Rename(_) => "rename",
        }
    }

    /// Encode as an `application/x-www-form-urlencoded` body
    ///
    /// The server compares `done` and `delete` against the literal string
    /// "true", so the flags are spelled out rather than serialized.
    pub fn form_body(&self, task_id: u32) -> String {
        match self {
            TaskMutation::ToggleDone(done) => {
                format!("task_id={}&done={}", task_id, if *done { "true" } else { "false" })
            }
            TaskMutation::Delete => format!("task_id={}&delete=true", task_id),
            TaskMutation::Rename(text) => {
                format!("task_id={}&task_text={}", task_id, utf8_percent_encode(text, NON_ALPHANUMERIC))
            }
        }
    }
}

/// JSON envelope returned by the update endpoint
///
/// Every field is optional: toggle responses carry `status` plus echoed task
/// fields, delete responses carry `status` and `message`, rename responses
/// may carry only `redirect`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UpdateResponse {
    pub status: Option<String>,
    pub message: Option<String>,
    pub redirect: Option<String>,
}

impl UpdateResponse {
    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some("success")
    }

    /// Server-provided failure message, with a fallback when absent
    pub fn failure_message(&self) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| String::from("Could not update task."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_body_carries_done_flag_only() {
        assert_eq!(TaskMutation::ToggleDone(true).form_body(3), "task_id=3&done=true");
        assert_eq!(TaskMutation::ToggleDone(false).form_body(3), "task_id=3&done=false");
    }

    #[test]
    fn delete_body_carries_delete_flag_only() {
        assert_eq!(TaskMutation::Delete.form_body(7), "task_id=7&delete=true");
    }

    #[test]
    fn plain_rename_text_passes_through() {
        let body = TaskMutation::Rename("groceries".to_string()).form_body(1);
        assert_eq!(body, "task_id=1&task_text=groceries");
    }

    #[test]
    fn rename_body_percent_encodes_text() {
        let body = TaskMutation::Rename("buy milk & eggs".to_string()).form_body(12);
        assert_eq!(body, "task_id=12&task_text=buy%20milk%20%26%20eggs");
    }

    #[test]
    fn success_envelope_ignores_echoed_fields() {
        let resp: UpdateResponse =
            serde_json::from_str(r#"{"status":"success","task_id":3,"done":true}"#).unwrap();
        assert!(resp.is_success());
        assert_eq!(resp.message, None);
    }

    #[test]
    fn failure_message_prefers_server_text() {
        let resp: UpdateResponse =
            serde_json::from_str(r#"{"status":"error","message":"Task not found"}"#).unwrap();
        assert!(!resp.is_success());
        assert_eq!(resp.failure_message(), "Task not found");
    }

    #[test]
    fn failure_message_falls_back_when_absent() {
        let resp = UpdateResponse {
            status: Some("error".to_string()),
            ..Default::default()
        };
        assert_eq!(resp.failure_message(), "Could not update task.");
    }

    #[test]
    fn redirect_only_envelope_is_not_success() {
        let resp: UpdateResponse = serde_json::from_str(r#"{"redirect":"/login/"}"#).unwrap();
        assert_eq!(resp.redirect.as_deref(), Some("/login/"));
        assert!(!resp.is_success());
    }
}
