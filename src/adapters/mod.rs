// Adapters layer: concrete renderers and storage backends.

pub mod passthrough;
#[cfg(feature = "raster")]
pub mod raster;
pub mod storage;

use crate::domain::ports::Renderer;

/// Whether this build carries the PNG rasterizer.
pub const RASTER_AVAILABLE: bool = cfg!(feature = "raster");

/// Picks the renderer for the whole run.
pub fn select_renderer(svg_only: bool) -> Box<dyn Renderer> {
    #[cfg(feature = "raster")]
    if !svg_only {
        tracing::info!("Rasterizer available, emitting PNG icons");
        return Box::new(raster::RasterRenderer::with_system_fonts());
    }

    if svg_only {
        tracing::warn!("SVG-only mode requested, emitting SVG fallback icons");
    } else {
        tracing::warn!("Rasterizer not compiled in, emitting SVG fallback icons");
    }
    Box::new(passthrough::PassthroughWriter)
}
