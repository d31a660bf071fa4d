use crate::domain::model::DEFAULT_SIZES;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{IconError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub icons: IconsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: String,
    #[serde(default)]
    pub manifest: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IconsConfig {
    #[serde(default = "default_sizes")]
    pub sizes: Vec<u32>,
    #[serde(default = "default_true")]
    pub apple_touch: bool,
    pub template: Option<String>,
    #[serde(default)]
    pub svg_only: bool,
}

fn default_output_dir() -> String {
    "public".to_string()
}

fn default_sizes() -> Vec<u32> {
    DEFAULT_SIZES.to_vec()
}

fn default_true() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            manifest: false,
        }
    }
}

impl Default for IconsConfig {
    fn default() -> Self {
        Self {
            sizes: default_sizes(),
            apple_touch: true,
            template: None,
            svg_only: false,
        }
    }
}

impl TomlConfig {
    /// Loads the configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|source| IconError::InputFileError {
                path: path.display().to_string(),
                source,
            })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| IconError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_RE
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }
}

impl ConfigProvider for TomlConfig {
    fn output_dir(&self) -> &str {
        &self.output.dir
    }

    fn sizes(&self) -> &[u32] {
        &self.icons.sizes
    }

    fn template_path(&self) -> Option<&str> {
        self.icons.template.as_deref()
    }

    fn apple_touch(&self) -> bool {
        self.icons.apple_touch
    }

    fn svg_only(&self) -> bool {
        self.icons.svg_only
    }

    fn write_manifest(&self) -> bool {
        self.output.manifest
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("output.dir", &self.output.dir)?;
        validation::validate_sizes("icons.sizes", &self.icons.sizes)?;
        validation::validate_template_path("icons.template", self.icons.template.as_deref())?;
        Ok(())
    }
}
