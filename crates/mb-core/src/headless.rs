//! In-memory host document for native renderers and tests.
//!
//! Mirrors the parts of the DOM the adapter touches: handles are shared
//! references, and writing a buffer dimension reallocates a zeroed RGBA grid.

use crate::error::{Result, SurfaceError};
use crate::size::SurfaceSize;
use crate::surface::{Surface, SurfaceHost};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

const BYTES_PER_PIXEL: usize = 4;

#[derive(Debug)]
struct CanvasState {
    layout: SurfaceSize,
    buffer: SurfaceSize,
    /// RGBA, row-major, `buffer.area() * 4` bytes.
    pixels: Vec<u8>,
    resize_count: usize,
}

impl CanvasState {
    fn reallocate(&mut self, buffer: SurfaceSize) {
        let len = grid_len(buffer)
            .unwrap_or_else(|| panic!("{buffer} buffer does not fit in memory"));
        self.buffer = buffer;
        self.pixels = vec![0; len];
        self.resize_count += 1;
    }
}

/// Byte length of an RGBA grid, `None` if it overflows `usize`.
fn grid_len(size: SurfaceSize) -> Option<usize> {
    usize::try_from(size.area())
        .ok()
        .and_then(|n| n.checked_mul(BYTES_PER_PIXEL))
}

/// Canvas handle. Clones refer to the same element.
#[derive(Debug, Clone)]
pub struct HeadlessCanvas(Rc<RefCell<CanvasState>>);

impl HeadlessCanvas {
    /// A canvas laid out at `width`×`height` with an empty 0×0 buffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self(Rc::new(RefCell::new(CanvasState {
            layout: SurfaceSize::new(width, height),
            buffer: SurfaceSize::default(),
            pixels: Vec::new(),
            resize_count: 0,
        })))
    }

    /// Simulate a relayout. The buffer is left alone.
    pub fn set_layout_size(&self, width: u32, height: u32) {
        self.0.borrow_mut().layout = SurfaceSize::new(width, height);
    }

    /// Paint every pixel with one RGBA color.
    pub fn fill(&self, rgba: [u8; 4]) {
        let mut state = self.0.borrow_mut();
        for px in state.pixels.chunks_exact_mut(BYTES_PER_PIXEL) {
            px.copy_from_slice(&rgba);
        }
    }

    pub fn pixels(&self) -> Vec<u8> {
        self.0.borrow().pixels.clone()
    }

    /// `true` if every byte of the buffer is zero (transparent black).
    pub fn is_blank(&self) -> bool {
        self.0.borrow().pixels.iter().all(|&b| b == 0)
    }

    /// How many times a buffer dimension has been written.
    pub fn resize_count(&self) -> usize {
        self.0.borrow().resize_count
    }

    /// Whether two handles refer to the same element.
    pub fn ptr_eq(&self, other: &HeadlessCanvas) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Surface for HeadlessCanvas {
    fn layout_size(&self) -> SurfaceSize {
        self.0.borrow().layout
    }

    fn buffer_size(&self) -> SurfaceSize {
        self.0.borrow().buffer
    }

    fn set_buffer_width(&self, width: u32) {
        let mut state = self.0.borrow_mut();
        let height = state.buffer.height;
        state.reallocate(SurfaceSize::new(width, height));
    }

    fn set_buffer_height(&self, height: u32) {
        let mut state = self.0.borrow_mut();
        let width = state.buffer.width;
        state.reallocate(SurfaceSize::new(width, height));
    }
}

/// Registry of canvases by element id. Clones share the registry.
#[derive(Debug, Clone, Default)]
pub struct HeadlessDocument {
    elements: Rc<RefCell<HashMap<String, HeadlessCanvas>>>,
}

impl HeadlessDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `canvas` under `id`, replacing any previous element.
    pub fn insert(&self, id: impl Into<String>, canvas: HeadlessCanvas) {
        self.elements.borrow_mut().insert(id.into(), canvas);
    }

    pub fn remove(&self, id: &str) -> Option<HeadlessCanvas> {
        self.elements.borrow_mut().remove(id)
    }
}

impl SurfaceHost for HeadlessDocument {
    type Surface = HeadlessCanvas;

    fn lookup(&self, id: &str) -> Result<HeadlessCanvas> {
        self.elements
            .borrow()
            .get(id)
            .cloned()
            .ok_or_else(|| SurfaceError::not_found(id))
    }
}
