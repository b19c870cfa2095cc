//! Browser-side behavior for the to-do list web application.
//!
//! Each server-rendered page calls one of the exported `init*` functions once
//! it has loaded. They accept an optional JSON string that overrides parts of
//! [`PageConfig`].

use wasm_bindgen::prelude::*;

mod bindings;
mod operations;
mod utils;

pub mod config;
pub mod effects;
pub mod error;
pub mod events;
pub mod forms;
pub mod page;
pub mod traits;
pub mod validation;
pub mod visibility;

pub use config::PageConfig;
pub use error::Error;
pub use page::{start, Page};
pub use utils::EventListener;
pub use visibility::{ClassForm, FormVisibility, FormVisibilityController};

#[wasm_bindgen(start)]
pub fn main_js() {
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { tracing::Level::DEBUG } else { tracing::Level::INFO };

    tracing_wasm::set_as_global_default_with_config(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(level)
            .build(),
    );
}

fn run(page: Page, config: Option<String>) -> Result<(), JsValue> {
    let config = PageConfig::from_json(config.as_deref())?;
    start(page, &config)?;
    Ok(())
}

#[wasm_bindgen(js_name = initHome)]
pub fn init_home(config: Option<String>) -> Result<(), JsValue> {
    run(Page::Home, config)
}

#[wasm_bindgen(js_name = initLogin)]
pub fn init_login(config: Option<String>) -> Result<(), JsValue> {
    run(Page::Login, config)
}

#[wasm_bindgen(js_name = initRegister)]
pub fn init_register(config: Option<String>) -> Result<(), JsValue> {
    run(Page::Register, config)
}

#[wasm_bindgen(js_name = initDashboard)]
pub fn init_dashboard(config: Option<String>) -> Result<(), JsValue> {
    run(Page::Dashboard, config)
}
