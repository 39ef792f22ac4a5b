//! Todolist Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod csrf;
mod dialog;
mod models;
mod validate;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = config::from_host_page();
    mount_to_body(move || view! { <App config=config /> });
}
