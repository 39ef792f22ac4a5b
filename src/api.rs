//! Update Endpoint Client
//!
//! Frontend binding to the server's task update endpoint.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{console, Request, RequestInit, Response};

use crate::csrf;
use crate::models::{TaskMutation, UpdateResponse};

/// Client for the task update endpoint
///
/// Holds the endpoint URL handed over by the host page; one instance is
/// shared with every row through `AppContext`.
#[derive(Clone)]
pub struct TaskClient {
    endpoint: String,
}

impl TaskClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    /// POST one mutation for one task
    ///
    /// `Ok` means the server answered with its JSON envelope, whatever the
    /// HTTP status; failure envelopes arrive with 4xx codes. `Err` covers
    /// network failures and non-envelope bodies. No retries, no timeout, no
    /// in-flight tracking.
    pub async fn update(&self, task_id: u32, mutation: &TaskMutation) -> Result<UpdateResponse, String> {
        let token = csrf::token();
        console::log_1(
            &format!(
                "[API] POST {} task_id={} action={} csrftoken={:?}",
                self.endpoint,
                task_id,
                mutation.kind(),
                token
            )
            .into(),
        );

        let init = RequestInit::new();
        init.set_method("POST");
        init.set_body(&JsValue::from_str(&mutation.form_body(task_id)));

        let request =
            Request::new_with_str_and_init(&self.endpoint, &init).map_err(|e| format!("{:?}", e))?;
        let headers = request.headers();
        headers
            .set("Content-Type", "application/x-www-form-urlencoded")
            .map_err(|e| format!("{:?}", e))?;
        if let Some(token) = &token {
            headers.set("X-CSRFToken", token).map_err(|e| format!("{:?}", e))?;
        }

        let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| format!("{:?}", e))?;
        let resp: Response = resp_value
            .dyn_into()
            .map_err(|_| "fetch did not yield a Response".to_string())?;

        let ok = resp.ok();
        let status = resp.status();
        let body = JsFuture::from(resp.json().map_err(|e| format!("{:?}", e))?).await;
        match body {
            Ok(value) => serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string()),
            Err(err) if ok => Err(format!("malformed response body: {:?}", err)),
            Err(_) => Err(format!("HTTP {}", status)),
        }
    }
}
