pub mod api;
pub mod app;
pub mod config;
pub mod course;
pub mod dashboard;
pub mod data;
pub mod error;
pub mod games;
pub mod login;
pub mod model;
pub mod session;
pub mod ui;
pub mod view_models;
pub mod wallet;

pub use app::AcademyApp;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Browser entry point: mounts the app on the canvas with the given id.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn start(canvas_id: &str) -> Result<(), JsValue> {
    use wasm_bindgen::JsCast;

    wasm_logger::init(wasm_logger::Config::default());

    let canvas = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(canvas_id))
        .ok_or_else(|| JsValue::from_str("canvas not found"))?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str("element is not a canvas"))?;

    wasm_bindgen_futures::spawn_local(async move {
        let result = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|cc| Ok(Box::new(AcademyApp::from_creation_context(cc)))),
            )
            .await;
        if let Err(err) = result {
            log::error!("failed to start: {err:?}");
        }
    });
    Ok(())
}
