use crate::utils::error::{ExplorerError, Result};
use chrono::format::{Item, StrftimeItems};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_not_empty(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ExplorerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty".to_string(),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ExplorerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ExplorerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// 資源名稱不含副檔名，也不能跳出資源目錄
pub fn validate_resource_name(field_name: &str, name: &str) -> Result<()> {
    validate_not_empty(field_name, name)?;

    if name.contains('/') || name.contains('\\') || name.contains("..") {
        return Err(ExplorerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "Resource name must not contain path separators".to_string(),
        });
    }

    if name.ends_with(".json") {
        return Err(ExplorerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "Give the resource name without the .json extension".to_string(),
        });
    }

    Ok(())
}

pub fn validate_date_pattern(field_name: &str, pattern: &str) -> Result<()> {
    validate_not_empty(field_name, pattern)?;

    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(ExplorerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: pattern.to_string(),
            reason: "Not a valid strftime pattern".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("resource_dir", "./resources").is_ok());
        assert!(validate_path("resource_dir", "").is_err());
        assert!(validate_path("resource_dir", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_resource_name() {
        assert!(validate_resource_name("catalog", "MovieList").is_ok());
        assert!(validate_resource_name("catalog", "").is_err());
        assert!(validate_resource_name("catalog", "../secret").is_err());
        assert!(validate_resource_name("catalog", "MovieList.json").is_err());
    }

    #[test]
    fn test_validate_date_pattern() {
        assert!(validate_date_pattern("display.list_date", "%Y.%m.%d").is_ok());
        assert!(validate_date_pattern("display.list_date", "%Y-%Q").is_err());
        assert!(validate_date_pattern("display.list_date", "").is_err());
    }
}
