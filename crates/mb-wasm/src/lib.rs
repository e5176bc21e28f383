//! WASM bridge for Mandelbrot — exposes the canvas size adapter to the page.
//!
//! Compiled via `wasm-pack build --target web`. The fractal renderer asks for
//! the canvas size before every frame; any query may reallocate (and clear)
//! the canvas when its layout size changed.

pub mod console;
pub mod dom;

use dom::DomHost;
use mb_core::{AdapterConfig, CanvasSizeAdapter, SurfaceError};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// JS-facing handle on one named canvas.
///
/// The element is looked up on the first size query and kept afterwards.
#[wasm_bindgen]
pub struct CanvasAdapter {
    inner: CanvasSizeAdapter<DomHost>,
}

#[wasm_bindgen]
impl CanvasAdapter {
    /// Adapter for `element_id`, or for `"Canvas"` when omitted.
    #[wasm_bindgen(constructor)]
    pub fn new(element_id: Option<String>) -> Result<CanvasAdapter, JsValue> {
        let config = element_id.map_or_else(AdapterConfig::default, AdapterConfig::with_element_id);
        Self::build(config)
    }

    /// Build from a JSON config, e.g. `{"elementId":"Canvas","logLevel":"off"}`.
    pub fn from_config(json: &str) -> Result<CanvasAdapter, JsValue> {
        let config = AdapterConfig::from_json(json).map_err(to_js_error)?;
        Self::build(config)
    }

    /// Buffer width in pixels after syncing to layout.
    pub fn get_width(&mut self) -> Result<u32, JsValue> {
        self.inner.width().map_err(to_js_error)
    }

    /// Buffer height in pixels after syncing to layout.
    pub fn get_height(&mut self) -> Result<u32, JsValue> {
        self.inner.height().map_err(to_js_error)
    }

    /// Both dimensions from a single sync, as `{"width":..,"height":..}`.
    pub fn get_size(&mut self) -> Result<String, JsValue> {
        let size = self.inner.size().map_err(to_js_error)?;
        Ok(to_json(&size))
    }

    /// Sync and report `{"size":{..},"resized":bool}`. When `resized` is
    /// true the canvas was cleared and the frame must be redrawn.
    pub fn sync(&mut self) -> Result<String, JsValue> {
        let report = self.inner.sync().map_err(to_js_error)?;
        Ok(to_json(&report))
    }

    pub fn element_id(&self) -> String {
        self.inner.element_id().to_string()
    }
}

impl CanvasAdapter {
    fn build(config: AdapterConfig) -> Result<CanvasAdapter, JsValue> {
        console_error_panic_hook_setup();
        console::init(console::filter_for(config.log_level.to_level()));

        let host = DomHost::from_window()
            .ok_or_else(|| JsValue::from(js_sys::Error::new("no global `document`")))?;
        Ok(Self {
            inner: CanvasSizeAdapter::with_config(host, config),
        })
    }

    /// The underlying adapter, for Rust callers sharing the canvas.
    pub fn adapter(&mut self) -> &mut CanvasSizeAdapter<DomHost> {
        &mut self.inner
    }
}

fn to_js_error(err: SurfaceError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

fn to_json<T: Serialize>(value: &T) -> String {
    match serde_json::to_string(value) {
        Ok(json) => json,
        Err(e) => format!(r#"{{"error":"Serialization error: {e}"}}"#),
    }
}

// ─── Panic hook for WASM debugging ───────────────────────────────────────

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("Mandelbrot WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}
