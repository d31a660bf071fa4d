use crate::domain::model::ArtifactFormat;
use crate::domain::ports::Renderer;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Fallback renderer: emits the substituted markup unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughWriter;

#[async_trait]
impl Renderer for PassthroughWriter {
    fn format(&self) -> ArtifactFormat {
        ArtifactFormat::Svg
    }

    async fn render(&self, markup: &str, _size: u32) -> Result<Vec<u8>> {
        Ok(markup.as_bytes().to_vec())
    }
}
