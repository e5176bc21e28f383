//! Canvas surface sizing for the Mandelbrot renderer.
//!
//! Keeps a named canvas's backing pixel buffer in step with its on-screen
//! layout size. Target-independent: the browser binding lives in `mb-wasm`,
//! and [`headless`] provides an in-memory host document.

pub mod adapter;
pub mod config;
pub mod error;
pub mod headless;
pub mod size;
pub mod surface;

pub use adapter::CanvasSizeAdapter;
pub use config::{AdapterConfig, DEFAULT_ELEMENT_ID, SyncLogLevel};
pub use error::{Result, SurfaceError};
pub use headless::{HeadlessCanvas, HeadlessDocument};
pub use size::{SurfaceSize, SyncReport};
pub use surface::{Surface, SurfaceHost};
