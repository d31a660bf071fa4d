use crate::domain::model::DEFAULT_SIZES;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "pwa-icons")]
#[command(about = "Render an SVG template into Progressive Web App icons")]
pub struct CliConfig {
    #[arg(long, default_value = "public")]
    pub output_dir: String,

    /// SVG template containing the {{size}} placeholder
    #[arg(long)]
    pub template: Option<String>,

    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_SIZES)]
    pub sizes: Vec<u32>,

    /// Write the SVG fallback even when the rasterizer is available
    #[arg(long)]
    pub svg_only: bool,

    #[arg(long, help = "Skip apple-touch-icon.png")]
    pub no_apple_touch: bool,

    #[arg(long, help = "Also write icons.json for the web app manifest")]
    pub manifest: bool,

    /// Load settings from a TOML file instead of the flags above
    #[arg(short, long)]
    pub config: Option<String>,

    /// Show the artifacts that would be written and exit
    #[arg(long)]
    pub dry_run: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            output_dir: "public".to_string(),
            template: None,
            sizes: DEFAULT_SIZES.to_vec(),
            svg_only: false,
            no_apple_touch: false,
            manifest: false,
            config: None,
            dry_run: false,
            log_format: LogFormat::Compact,
            verbose: false,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn output_dir(&self) -> &str {
        &self.output_dir
    }

    fn sizes(&self) -> &[u32] {
        &self.sizes
    }

    fn template_path(&self) -> Option<&str> {
        self.template.as_deref()
    }

    fn apple_touch(&self) -> bool {
        !self.no_apple_touch
    }

    fn svg_only(&self) -> bool {
        self.svg_only
    }

    fn write_manifest(&self) -> bool {
        self.manifest
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("output_dir", &self.output_dir)?;
        validation::validate_sizes("sizes", &self.sizes)?;
        validation::validate_template_path("template", self.template.as_deref())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_gives_defaults() {
        let config = CliConfig::parse_from(["pwa-icons"]);

        assert_eq!(config.output_dir(), "public");
        assert_eq!(config.sizes(), &DEFAULT_SIZES);
        assert!(config.apple_touch());
        assert!(!config.svg_only());
        assert!(!config.write_manifest());
        assert!(config.template_path().is_none());
        assert_eq!(config.log_format, LogFormat::Compact);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = CliConfig::parse_from([
            "pwa-icons",
            "--output-dir",
            "dist/icons",
            "--sizes",
            "48,96",
            "--svg-only",
            "--no-apple-touch",
            "--log-format",
            "json",
        ]);

        assert_eq!(config.output_dir(), "dist/icons");
        assert_eq!(config.sizes(), &[48, 96]);
        assert!(config.svg_only());
        assert!(!config.apple_touch());
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_sizes_fail_validation() {
        let config = CliConfig::parse_from(["pwa-icons", "--sizes", "0,96"]);
        assert!(config.validate().is_err());
    }
}
