//! NewsGPT App — WASM entry point.
//!
//! This crate is the composition root (DI wiring layer).
//! It restores configuration, builds the session client and hands it to
//! the egui UI.

mod app;
mod config;

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use newsgpt_core::event_bus::EventBus;
use newsgpt_core::session_client::SessionClient;
use newsgpt_platform::http::FetchHttp;
use newsgpt_platform::storage::{auto_detect_storage, open_storage};
use newsgpt_types::config::StorageBackendType;

/// WASM entry point — called from index.html
#[wasm_bindgen(start)]
pub async fn main() {
    // Initialize logging
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("NewsGPT client starting...");

    let mut storage = auto_detect_storage();
    let config = config::load_config(storage.as_ref()).await;

    if config.storage.backend != StorageBackendType::Auto {
        match open_storage(&config.storage) {
            Ok(configured) => storage = configured,
            Err(e) => log::warn!("Configured storage unavailable ({}), keeping {}", e, storage.backend_name()),
        }
    }

    let http = Rc::new(FetchHttp::from_config(&config));
    let client = Rc::new(SessionClient::restore(http, storage, config).await);
    let event_bus = EventBus::new();

    let web_options = eframe::WebOptions::default();

    // Get the canvas element by ID
    let document = web_sys::window()
        .expect("No window")
        .document()
        .expect("No document");
    let canvas = document
        .get_element_by_id("newsgpt_canvas")
        .expect("No canvas element with id 'newsgpt_canvas'")
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .expect("Element is not a canvas");

    wasm_bindgen_futures::spawn_local(async move {
        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(move |cc| Ok(Box::new(app::NewsGptApp::new(cc, client, event_bus)))),
            )
            .await
            .expect("Failed to start eframe");
    });
}
