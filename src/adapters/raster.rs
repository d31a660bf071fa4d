use crate::domain::model::ArtifactFormat;
use crate::domain::ports::Renderer;
use crate::utils::error::{IconError, Result};
use async_trait::async_trait;
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{self, fontdb};
use std::sync::Arc;

/// Rasterizes markup to PNG with resvg.
#[derive(Debug, Clone)]
pub struct RasterRenderer {
    fontdb: Arc<fontdb::Database>,
}

impl Default for RasterRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl RasterRenderer {
    pub fn new() -> Self {
        Self {
            fontdb: Arc::new(fontdb::Database::new()),
        }
    }

    /// Loads the system fonts so `<text>` in custom templates renders.
    pub fn with_system_fonts() -> Self {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        tracing::debug!("Loaded {} system font faces", db.len());
        Self { fontdb: Arc::new(db) }
    }
}

/// Renders `markup` into a `size`x`size` pixmap, stretching the document to fill it.
pub fn rasterize(markup: &str, size: u32, fontdb: Arc<fontdb::Database>) -> Result<Vec<u8>> {
    let mut opt = usvg::Options::default();
    opt.fontdb = fontdb;

    let tree = usvg::Tree::from_str(markup, &opt).map_err(|e| IconError::RenderError {
        size,
        message: e.to_string(),
    })?;

    let mut pixmap = Pixmap::new(size, size).ok_or_else(|| IconError::RenderError {
        size,
        message: "cannot allocate pixmap".to_string(),
    })?;

    let scale_x = size as f32 / tree.size().width();
    let scale_y = size as f32 / tree.size().height();
    resvg::render(
        &tree,
        Transform::from_scale(scale_x, scale_y),
        &mut pixmap.as_mut(),
    );

    pixmap.encode_png().map_err(|e| IconError::EncodeError {
        size,
        message: e.to_string(),
    })
}

#[async_trait]
impl Renderer for RasterRenderer {
    fn format(&self) -> ArtifactFormat {
        ArtifactFormat::Png
    }

    async fn render(&self, markup: &str, size: u32) -> Result<Vec<u8>> {
        let markup = markup.to_owned();
        let fontdb = Arc::clone(&self.fontdb);
        tokio::task::spawn_blocking(move || rasterize(&markup, size, fontdb)).await?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::template::IconTemplate;

    fn png_dimensions(bytes: &[u8]) -> (u32, u32) {
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
        let width = u32::from_be_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]);
        let height = u32::from_be_bytes([bytes[20], bytes[21], bytes[22], bytes[23]]);
        (width, height)
    }

    #[tokio::test]
    async fn test_renders_png_of_requested_size() {
        let renderer = RasterRenderer::new();
        let template = IconTemplate::default();

        for size in [72, 180] {
            let bytes = renderer.render(&template.render(size), size).await.unwrap();
            assert_eq!(png_dimensions(&bytes), (size, size));
        }
    }

    #[test]
    fn test_stretches_non_square_document() {
        let markup = r#"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="10"><rect width="20" height="10" fill="red"/></svg>"#;
        let bytes = rasterize(markup, 32, Arc::new(fontdb::Database::new())).unwrap();
        assert_eq!(png_dimensions(&bytes), (32, 32));
    }

    #[tokio::test]
    async fn test_malformed_markup_is_render_error() {
        let renderer = RasterRenderer::new();
        let err = renderer.render("<svg", 72).await.unwrap_err();
        assert!(matches!(err, IconError::RenderError { size: 72, .. }));
    }
}
