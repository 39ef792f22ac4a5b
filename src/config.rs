//! Host Page Configuration
//!
//! The server template embeds the update endpoint URL and today's tasks as
//! `json_script` elements; both are read once at startup.

use web_sys::console;

use crate::models::Task;

const ENDPOINT_ELEMENT_ID: &str = "update-task-url";
const TASKS_ELEMENT_ID: &str = "task-data";
const DEFAULT_ENDPOINT: &str = "/update_task/";

/// Values handed over by the hosting page
#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    pub endpoint: String,
    pub tasks: Vec<Task>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            tasks: Vec::new(),
        }
    }
}

/// Parse the embedded JSON payloads
///
/// Anything missing or malformed falls back field by field.
pub fn parse(endpoint_json: Option<&str>, tasks_json: Option<&str>) -> PageConfig {
    let endpoint = endpoint_json
        .and_then(|json| serde_json::from_str::<String>(json).ok())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
    let tasks = tasks_json
        .and_then(|json| serde_json::from_str::<Vec<Task>>(json).ok())
        .unwrap_or_default();
    PageConfig { endpoint, tasks }
}

/// Read the configuration embedded in the current document
pub fn from_host_page() -> PageConfig {
    let endpoint_json = read_json_script(ENDPOINT_ELEMENT_ID);
    let tasks_json = read_json_script(TASKS_ELEMENT_ID);
    if endpoint_json.is_none() {
        console::warn_1(
            &format!("[CONFIG] #{} missing, using {}", ENDPOINT_ELEMENT_ID, DEFAULT_ENDPOINT).into(),
        );
    }
    if tasks_json.is_none() {
        console::warn_1(&format!("[CONFIG] #{} missing, starting empty", TASKS_ELEMENT_ID).into());
    }
    parse(endpoint_json.as_deref(), tasks_json.as_deref())
}

fn read_json_script(id: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(id)?;
    element.text_content()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_nothing_is_embedded() {
        let config = parse(None, None);
        assert_eq!(config.endpoint, "/update_task/");
        assert!(config.tasks.is_empty());
    }

    #[test]
    fn reads_the_endpoint_json_string() {
        let config = parse(Some(r#""/todo/update_task/""#), None);
        assert_eq!(config.endpoint, "/todo/update_task/");
    }

    #[test]
    fn reads_the_embedded_task_array() {
        let tasks = r#"[{"id":1,"task_text":"Test task","done":false},{"id":2,"task_text":"Other","done":true}]"#;
        let config = parse(None, Some(tasks));
        assert_eq!(config.tasks.len(), 2);
        assert_eq!(config.tasks[0].task_text, "Test task");
        assert!(config.tasks[1].done);
    }

    #[test]
    fn malformed_payloads_fall_back() {
        let config = parse(Some("not json"), Some("[{"));
        assert_eq!(config, PageConfig::default());
    }
}
