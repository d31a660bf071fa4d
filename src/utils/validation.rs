use crate::utils::error::{IconError, Result};
use std::collections::HashSet;

/// Largest edge length accepted for a generated icon.
pub const MAX_ICON_SIZE: u32 = 4096;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(IconError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(IconError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(IconError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_sizes(field_name: &str, sizes: &[u32]) -> Result<()> {
    if sizes.is_empty() {
        return Err(IconError::ConfigValidationError {
            field: field_name.to_string(),
            message: "At least one icon size is required".to_string(),
        });
    }

    let mut seen = HashSet::new();
    for &size in sizes {
        validate_range(field_name, size, 1, MAX_ICON_SIZE)?;
        if !seen.insert(size) {
            return Err(IconError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: size.to_string(),
                reason: "Duplicate size".to_string(),
            });
        }
    }

    Ok(())
}

pub fn validate_template_path(field_name: &str, path: Option<&str>) -> Result<()> {
    match path {
        Some(path) => validate_path(field_name, path),
        None => Ok(()),
    }
}
