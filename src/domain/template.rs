use crate::utils::error::{IconError, Result};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Token replaced by the target edge length, e.g. `width="{{size}}"`.
pub const PLACEHOLDER: &str = "{{size}}";

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*size\s*\}\}").expect("placeholder pattern is valid"));

pub const DEFAULT_TEMPLATE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="{{size}}" height="{{size}}" viewBox="0 0 512 512">
  <defs>
    <linearGradient id="bg" x1="0" y1="0" x2="1" y2="1">
      <stop offset="0%" stop-color="#4f46e5"/>
      <stop offset="100%" stop-color="#7c3aed"/>
    </linearGradient>
  </defs>
  <rect width="512" height="512" rx="96" fill="url(#bg)"/>
  <path d="M160 352V160h112a64 64 0 0 1 0 128h-64v64z" fill="none" stroke="#ffffff" stroke-width="40" stroke-linejoin="round" stroke-linecap="round"/>
  <circle cx="352" cy="352" r="28" fill="#ffffff"/>
</svg>
"##;

/// Vector markup with a single size placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconTemplate {
    source: String,
}

impl Default for IconTemplate {
    fn default() -> Self {
        Self {
            source: DEFAULT_TEMPLATE.to_string(),
        }
    }
}

impl IconTemplate {
    pub fn new(source: impl Into<String>) -> Result<Self> {
        let source = source.into();
        if !PLACEHOLDER_RE.is_match(&source) {
            return Err(IconError::TemplateError {
                message: format!("template does not contain the {} placeholder", PLACEHOLDER),
            });
        }
        Ok(Self { source })
    }

    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let source = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| IconError::InputFileError {
                path: path.display().to_string(),
                source,
            })?;
        tracing::debug!("Loaded template from {}", path.display());
        Self::new(source)
    }

    pub fn render(&self, size: u32) -> String {
        PLACEHOLDER_RE
            .replace_all(&self.source, size.to_string().as_str())
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_placeholder(markup: &str) -> bool {
        PLACEHOLDER_RE.is_match(markup)
    }

    #[test]
    fn test_default_template_substitution() {
        let template = IconTemplate::default();
        for size in [1, 72, 180, 512, 4096] {
            let markup = template.render(size);
            assert!(markup.contains(&format!(r#"width="{size}" height="{size}""#)));
            assert!(!has_placeholder(&markup));
            assert!(!markup.contains("{{"));
        }
    }

    #[test]
    fn test_placeholder_tolerates_whitespace() {
        let template = IconTemplate::new(r#"<svg width="{{ size }}" height="{{size}}"/>"#).unwrap();
        assert_eq!(template.render(48), r#"<svg width="48" height="48"/>"#);
    }

    #[test]
    fn test_template_without_placeholder_is_rejected() {
        let err = IconTemplate::new(r#"<svg width="10" height="10"/>"#).unwrap_err();
        assert!(matches!(err, IconError::TemplateError { .. }));
    }

    #[tokio::test]
    async fn test_template_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("icon.svg");
        std::fs::write(&path, r#"<svg width="{{size}}" height="{{size}}"></svg>"#).unwrap();

        let template = IconTemplate::from_file(&path).await.unwrap();
        assert_eq!(template.render(96), r#"<svg width="96" height="96"></svg>"#);
    }

    #[tokio::test]
    async fn test_missing_template_file_exits_as_config_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = IconTemplate::from_file(dir.path().join("icon.svg"))
            .await
            .unwrap_err();

        assert!(matches!(err, IconError::InputFileError { .. }));
        assert_eq!(err.exit_code(), 1);
        assert!(err.user_friendly_message().contains("icon.svg"));
    }
}
