pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::{passthrough::PassthroughWriter, select_renderer, storage::LocalStorage};
#[cfg(feature = "raster")]
pub use adapters::raster::RasterRenderer;
pub use core::generator::IconGenerator;
pub use domain::template::IconTemplate;
pub use utils::error::{IconError, Result};
