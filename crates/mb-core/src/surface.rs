//! Seams between the size adapter and whatever hosts the canvas.
//!
//! Handles follow DOM semantics: cloning one aliases the same element, and
//! buffer writes go through `&self`.

use crate::error::Result;
use crate::size::SurfaceSize;

/// A drawable surface with a layout size and a separate pixel buffer size.
pub trait Surface {
    /// Size the element is displayed at, as measured by page layout.
    fn layout_size(&self) -> SurfaceSize;

    /// Size of the backing pixel grid.
    fn buffer_size(&self) -> SurfaceSize;

    /// Reallocates the pixel grid, clearing its contents.
    fn set_buffer_width(&self, width: u32);

    /// Reallocates the pixel grid, clearing its contents.
    fn set_buffer_height(&self, height: u32);
}

/// A document that surfaces can be looked up in by identifier.
pub trait SurfaceHost {
    type Surface: Surface;

    fn lookup(&self, id: &str) -> Result<Self::Surface>;
}
