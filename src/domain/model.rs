use serde::{Deserialize, Serialize};

/// Edge lengths emitted when no size list is configured.
pub const DEFAULT_SIZES: [u32; 8] = [72, 96, 128, 144, 152, 192, 384, 512];

pub const APPLE_TOUCH_SIZE: u32 = 180;
pub const APPLE_TOUCH_FILE_NAME: &str = "apple-touch-icon.png";
pub const MANIFEST_FILE_NAME: &str = "icons.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactFormat {
    Png,
    Svg,
}

impl ArtifactFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ArtifactFormat::Png => "png",
            ArtifactFormat::Svg => "svg",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ArtifactFormat::Png => "image/png",
            ArtifactFormat::Svg => "image/svg+xml",
        }
    }

    /// `icon-{size}x{size}.{ext}`
    pub fn icon_file_name(&self, size: u32) -> String {
        format!("icon-{size}x{size}.{}", self.extension())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifact {
    pub file_name: String,
    pub size: u32,
    pub format: ArtifactFormat,
    pub bytes: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedArtifact {
    pub file_name: String,
    pub size: u32,
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GenerationReport {
    pub written: Vec<Artifact>,
    pub failed: Vec<FailedArtifact>,
    pub manifest: Option<String>,
}

impl GenerationReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn contains(&self, file_name: &str) -> bool {
        self.written.iter().any(|a| a.file_name == file_name)
    }
}

/// One entry of the `icons` array in a web app manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestIcon {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    pub purpose: String,
}

impl From<&Artifact> for ManifestIcon {
    fn from(artifact: &Artifact) -> Self {
        Self {
            src: format!("/{}", artifact.file_name),
            sizes: format!("{0}x{0}", artifact.size),
            mime_type: artifact.format.mime_type().to_string(),
            purpose: "any maskable".to_string(),
        }
    }
}
