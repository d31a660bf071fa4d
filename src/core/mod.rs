pub mod generator;

pub use crate::domain::model::{Artifact, ArtifactFormat, GenerationReport};
pub use crate::domain::ports::{ConfigProvider, Renderer, Storage};
pub use crate::utils::error::Result;
