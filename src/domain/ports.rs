use crate::domain::model::ArtifactFormat;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;

pub trait Storage: Send + Sync {
    /// Creates the base location, including missing parents.
    fn prepare(&self) -> impl std::future::Future<Output = Result<()>> + Send;
    fn write_file(
        &self,
        name: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<PathBuf>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn output_dir(&self) -> &str;
    fn sizes(&self) -> &[u32];
    fn template_path(&self) -> Option<&str>;
    fn apple_touch(&self) -> bool;
    fn svg_only(&self) -> bool;
    fn write_manifest(&self) -> bool;
}

/// Turns substituted markup into the bytes of one artifact.
#[async_trait]
pub trait Renderer: Send + Sync {
    fn format(&self) -> ArtifactFormat;
    async fn render(&self, markup: &str, size: u32) -> Result<Vec<u8>>;
}
