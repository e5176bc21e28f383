//! Browser bindings for the surface seams.

use mb_core::{Result, Surface, SurfaceError, SurfaceHost, SurfaceSize};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement};

/// The page's `document`.
pub struct DomHost {
    document: Document,
}

impl DomHost {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Host for the current window's document, if there is one.
    pub fn from_window() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self::new(document))
    }
}

impl SurfaceHost for DomHost {
    type Surface = DomCanvas;

    fn lookup(&self, id: &str) -> Result<DomCanvas> {
        let element = self
            .document
            .get_element_by_id(id)
            .ok_or_else(|| SurfaceError::not_found(id))?;
        let canvas = element
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| SurfaceError::not_a_canvas(id))?;
        Ok(DomCanvas(canvas))
    }
}

/// A `<canvas>` element. Layout size is its offset box.
pub struct DomCanvas(HtmlCanvasElement);

impl DomCanvas {
    pub fn element(&self) -> &HtmlCanvasElement {
        &self.0
    }
}

impl Surface for DomCanvas {
    fn layout_size(&self) -> SurfaceSize {
        SurfaceSize::new(
            offset_to_pixels(self.0.offset_width()),
            offset_to_pixels(self.0.offset_height()),
        )
    }

    fn buffer_size(&self) -> SurfaceSize {
        SurfaceSize::new(self.0.width(), self.0.height())
    }

    fn set_buffer_width(&self, width: u32) {
        self.0.set_width(width);
    }

    fn set_buffer_height(&self, height: u32) {
        self.0.set_height(height);
    }
}

/// Offset dimensions are `long` in the DOM; detached elements report 0.
pub(crate) fn offset_to_pixels(offset: i32) -> u32 {
    u32::try_from(offset).unwrap_or(0)
}
