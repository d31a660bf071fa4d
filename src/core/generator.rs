use crate::domain::model::{
    Artifact, ArtifactFormat, FailedArtifact, GenerationReport, ManifestIcon, APPLE_TOUCH_FILE_NAME,
    APPLE_TOUCH_SIZE, DEFAULT_SIZES, MANIFEST_FILE_NAME,
};
use crate::domain::ports::{ConfigProvider, Renderer, Storage};
use crate::domain::template::IconTemplate;
use crate::utils::error::{IconError, Result};
use crate::utils::validation;
use std::path::PathBuf;

/// Emits one icon per configured size, plus the apple touch icon when rasterizing.
pub struct IconGenerator<S: Storage> {
    storage: S,
    renderer: Box<dyn Renderer>,
    template: IconTemplate,
    sizes: Vec<u32>,
    apple_touch: bool,
    manifest: bool,
}

impl<S: Storage> IconGenerator<S> {
    pub fn new(storage: S, renderer: Box<dyn Renderer>, template: IconTemplate) -> Self {
        Self {
            storage,
            renderer,
            template,
            sizes: DEFAULT_SIZES.to_vec(),
            apple_touch: true,
            manifest: false,
        }
    }

    pub fn from_config<C: ConfigProvider>(
        storage: S,
        renderer: Box<dyn Renderer>,
        template: IconTemplate,
        config: &C,
    ) -> Self {
        Self::new(storage, renderer, template)
            .with_sizes(config.sizes().to_vec())
            .with_apple_touch(config.apple_touch())
            .with_manifest(config.write_manifest())
    }

    pub fn with_sizes(mut self, sizes: Vec<u32>) -> Self {
        self.sizes = sizes;
        self
    }

    pub fn with_apple_touch(mut self, enabled: bool) -> Self {
        self.apple_touch = enabled;
        self
    }

    pub fn with_manifest(mut self, enabled: bool) -> Self {
        self.manifest = enabled;
        self
    }

    pub fn format(&self) -> ArtifactFormat {
        self.renderer.format()
    }

    /// File names and sizes `run` will attempt, in order.
    pub fn plan(&self) -> Vec<(String, u32)> {
        let format = self.format();
        let mut plan: Vec<(String, u32)> = self
            .sizes
            .iter()
            .map(|&size| (format.icon_file_name(size), size))
            .collect();

        if self.emits_apple_touch() {
            plan.push((APPLE_TOUCH_FILE_NAME.to_string(), APPLE_TOUCH_SIZE));
        }
        plan
    }

    fn emits_apple_touch(&self) -> bool {
        self.apple_touch && self.format() == ArtifactFormat::Png
    }

    pub async fn run(&self) -> Result<GenerationReport> {
        tracing::info!(
            "Generating {} icons as {}",
            self.sizes.len(),
            self.format().extension()
        );

        // Failures here abort the whole run.
        validation::validate_sizes("sizes", &self.sizes)?;
        self.storage.prepare().await?;

        let mut report = GenerationReport::default();
        for (file_name, size) in self.plan() {
            self.emit(file_name, size, &mut report).await;
        }

        if self.manifest {
            self.write_manifest(&mut report).await;
        }

        if report.is_complete() {
            tracing::info!("Wrote {} icons", report.written.len());
        } else {
            tracing::warn!(
                "Wrote {} icons, {} failed",
                report.written.len(),
                report.failed.len()
            );
        }
        Ok(report)
    }

    async fn emit(&self, file_name: String, size: u32, report: &mut GenerationReport) {
        let markup = self.template.render(size);

        let outcome = async {
            let bytes = self.renderer.render(&markup, size).await?;
            let path = self.storage.write_file(&file_name, &bytes).await?;
            Ok::<_, IconError>((bytes.len(), path))
        }
        .await;

        match outcome {
            Ok((bytes, path)) => {
                tracing::info!("Created {} ({} bytes)", path.display(), bytes);
                report.written.push(Artifact {
                    file_name,
                    size,
                    format: self.format(),
                    bytes,
                });
            }
            Err(e) => {
                tracing::error!("Failed to create {}: {}", file_name, e);
                report.failed.push(FailedArtifact {
                    file_name,
                    size,
                    message: e.to_string(),
                });
            }
        }
    }

    async fn write_manifest(&self, report: &mut GenerationReport) {
        let icons: Vec<ManifestIcon> = report
            .written
            .iter()
            .filter(|a| a.file_name != APPLE_TOUCH_FILE_NAME)
            .map(ManifestIcon::from)
            .collect();

        match self.store_manifest(&icons).await {
            Ok(path) => {
                tracing::info!("Created {} with {} entries", path.display(), icons.len());
                report.manifest = Some(MANIFEST_FILE_NAME.to_string());
            }
            Err(e) => {
                tracing::error!("Failed to create {}: {}", MANIFEST_FILE_NAME, e);
                report.failed.push(FailedArtifact {
                    file_name: MANIFEST_FILE_NAME.to_string(),
                    size: 0,
                    message: e.to_string(),
                });
            }
        }
    }

    async fn store_manifest(&self, icons: &[ManifestIcon]) -> Result<PathBuf> {
        let json = serde_json::to_vec_pretty(icons)?;
        self.storage.write_file(MANIFEST_FILE_NAME, &json).await
    }
}
