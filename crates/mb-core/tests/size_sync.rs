//! Integration tests: headless document → size adapter → buffer state.
//!
//! Drives `CanvasSizeAdapter` the way the fractal renderer does: query sizes,
//! draw, relayout, query again.

use mb_core::{
    AdapterConfig, CanvasSizeAdapter, HeadlessCanvas, HeadlessDocument, Surface, SurfaceError,
    SurfaceSize, SyncLogLevel,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn page_with_canvas(width: u32, height: u32) -> (HeadlessDocument, HeadlessCanvas) {
    init_logging();
    let doc = HeadlessDocument::new();
    let canvas = HeadlessCanvas::new(width, height);
    doc.insert("Canvas", canvas.clone());
    (doc, canvas)
}

// ─── Page scenarios ─────────────────────────────────────────────────────

#[test]
fn first_width_query_sizes_buffer_to_layout() {
    let (doc, canvas) = page_with_canvas(800, 600);
    let mut adapter = CanvasSizeAdapter::new(doc);

    assert_eq!(adapter.width().unwrap(), 800);
    assert_eq!(canvas.buffer_size(), SurfaceSize::new(800, 600));
}

#[test]
fn repeated_height_query_does_not_touch_buffer() {
    let (doc, canvas) = page_with_canvas(800, 600);
    let mut adapter = CanvasSizeAdapter::new(doc);
    adapter.width().unwrap();
    let writes = canvas.resize_count();

    assert_eq!(adapter.height().unwrap(), 600);
    assert_eq!(canvas.resize_count(), writes);
}

#[test]
fn relayout_resizes_and_clears_drawing() {
    let (doc, canvas) = page_with_canvas(800, 600);
    let mut adapter = CanvasSizeAdapter::new(doc);
    adapter.size().unwrap();
    canvas.fill([12, 34, 56, 255]);

    canvas.set_layout_size(1024, 768);
    assert_eq!(adapter.width().unwrap(), 1024);
    assert_eq!(canvas.buffer_size(), SurfaceSize::new(1024, 768));
    assert!(canvas.is_blank());
}

#[test]
fn missing_canvas_is_an_error_not_a_default_size() {
    init_logging();
    let mut adapter = CanvasSizeAdapter::new(HeadlessDocument::new());

    let err = adapter.width().unwrap_err();
    assert!(matches!(err, SurfaceError::NotFound { ref id } if id == "Canvas"));
    assert!(adapter.height().is_err());
}

// ─── Sync properties ────────────────────────────────────────────────────

#[test]
fn back_to_back_queries_agree() {
    let (doc, canvas) = page_with_canvas(640, 480);
    let mut adapter = CanvasSizeAdapter::new(doc);

    let first = adapter.sync().unwrap();
    let second = adapter.sync().unwrap();
    assert!(first.resized);
    assert!(!second.resized);
    assert_eq!(first.size, second.size);
    assert_eq!(canvas.resize_count(), 2);
}

#[test]
fn buffer_matches_layout_after_every_query() {
    let (doc, canvas) = page_with_canvas(0, 0);
    let mut adapter = CanvasSizeAdapter::new(doc);

    for (w, h) in [(0, 0), (1, 0), (0, 1), (320, 240), (320, 241), (1920, 1080), (7, 7)] {
        canvas.set_layout_size(w, h);
        assert_eq!(adapter.size().unwrap(), SurfaceSize::new(w, h));
        assert_eq!(canvas.buffer_size(), canvas.layout_size());
    }
}

#[test]
fn zero_layout_needs_no_write_on_fresh_canvas() {
    let (doc, canvas) = page_with_canvas(0, 0);
    let mut adapter = CanvasSizeAdapter::new(doc);

    let report = adapter.sync().unwrap();
    assert!(!report.resized);
    assert_eq!(canvas.resize_count(), 0);
}

#[test]
fn resolved_handle_is_stable() {
    let (doc, canvas) = page_with_canvas(50, 50);
    let mut adapter = CanvasSizeAdapter::new(doc.clone());

    let first = adapter.resolve_and_sync().unwrap().clone();
    // Replacing the element in the document does not re-resolve.
    doc.insert("Canvas", HeadlessCanvas::new(10, 10));
    let second = adapter.resolve_and_sync().unwrap();

    assert!(first.ptr_eq(second));
    assert!(second.ptr_eq(&canvas));
    assert_eq!(adapter.height().unwrap(), 50);
}

#[test]
fn unchanged_size_keeps_drawing() {
    let (doc, canvas) = page_with_canvas(16, 16);
    let mut adapter = CanvasSizeAdapter::new(doc);
    adapter.size().unwrap();
    canvas.fill([255, 255, 255, 255]);

    adapter.size().unwrap();
    assert!(!canvas.is_blank());
}

// ─── Configuration ──────────────────────────────────────────────────────

#[test]
fn json_config_selects_element() {
    init_logging();
    let doc = HeadlessDocument::new();
    doc.insert("mandelbrot", HeadlessCanvas::new(300, 200));
    let config = AdapterConfig::from_json(r#"{"elementId":"mandelbrot","logLevel":"debug"}"#).unwrap();
    assert_eq!(config.log_level, SyncLogLevel::Debug);

    let mut adapter = CanvasSizeAdapter::with_config(doc, config);
    assert_eq!(adapter.size().unwrap(), SurfaceSize::new(300, 200));
}

#[test]
fn default_config_ignores_other_ids() {
    init_logging();
    let doc = HeadlessDocument::new();
    doc.insert("mandelbrot", HeadlessCanvas::new(300, 200));
    let mut adapter = CanvasSizeAdapter::new(doc);
    assert!(matches!(adapter.size(), Err(SurfaceError::NotFound { .. })));
}
