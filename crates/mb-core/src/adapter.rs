//! Lazily resolved, layout-synchronized canvas handle.
//!
//! The adapter owns the only reference to its surface. The surface is looked
//! up on the first size query rather than at construction, so an adapter can
//! be built before the page has finished loading.

use crate::config::AdapterConfig;
use crate::error::Result;
use crate::size::{SurfaceSize, SyncReport};
use crate::surface::{Surface, SurfaceHost};

pub struct CanvasSizeAdapter<H: SurfaceHost> {
    host: H,
    config: AdapterConfig,
    /// `None` until the first successful lookup, then fixed for good.
    surface: Option<H::Surface>,
}

impl<H: SurfaceHost> CanvasSizeAdapter<H> {
    /// Adapter for the default `"Canvas"` element.
    pub fn new(host: H) -> Self {
        Self::with_config(host, AdapterConfig::default())
    }

    pub fn with_config(host: H, config: AdapterConfig) -> Self {
        Self {
            host,
            config,
            surface: None,
        }
    }

    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    pub fn element_id(&self) -> &str {
        &self.config.element_id
    }

    /// The cached surface, without resolving or syncing it.
    pub fn surface(&self) -> Option<&H::Surface> {
        self.surface.as_ref()
    }

    /// Resolve the surface if needed, bring its buffer to its layout size,
    /// and return the handle.
    pub fn resolve_and_sync(&mut self) -> Result<&H::Surface> {
        let (surface, _) = self.sync_surface()?;
        Ok(surface)
    }

    /// Like [`resolve_and_sync`](Self::resolve_and_sync), reporting whether
    /// the buffer had to be reallocated.
    pub fn sync(&mut self) -> Result<SyncReport> {
        let (_, report) = self.sync_surface()?;
        Ok(report)
    }

    pub fn size(&mut self) -> Result<SurfaceSize> {
        Ok(self.sync()?.size)
    }

    pub fn width(&mut self) -> Result<u32> {
        Ok(self.size()?.width)
    }

    pub fn height(&mut self) -> Result<u32> {
        Ok(self.size()?.height)
    }

    fn sync_surface(&mut self) -> Result<(&H::Surface, SyncReport)> {
        let surface = match self.surface.take() {
            Some(surface) => surface,
            None => {
                let surface = self.host.lookup(&self.config.element_id)?;
                log::debug!("resolved surface `{}`", self.config.element_id);
                surface
            }
        };
        let surface: &H::Surface = self.surface.insert(surface);

        let report = sync_buffer(surface);
        if let Some(level) = self.config.log_level.to_level() {
            log::log!(level, "{}", report.size);
        }
        Ok((surface, report))
    }
}

/// Write each buffer dimension that disagrees with layout. Height first.
fn sync_buffer<S: Surface>(surface: &S) -> SyncReport {
    let layout = surface.layout_size();
    let buffer = surface.buffer_size();
    let mut resized = false;

    if buffer.height != layout.height {
        surface.set_buffer_height(layout.height);
        resized = true;
    }
    if buffer.width != layout.width {
        surface.set_buffer_width(layout.width);
        resized = true;
    }

    SyncReport {
        size: surface.buffer_size(),
        resized,
    }
}
