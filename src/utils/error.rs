use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExplorerError {
    #[error("Resource not found: {path}")]
    ResourceNotFound { path: String },

    #[error("Failed to read resource {path}: {source}")]
    ReadFailure {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode catalog: {0}")]
    DecodeFailure(#[source] serde_json::Error),

    #[error("Selection out of range: group {group}, item {item}")]
    SelectionOutOfRange { group: usize, item: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Catalog,
    Selection,
    Configuration,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ExplorerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ResourceNotFound { .. } | Self::ReadFailure { .. } | Self::DecodeFailure(_) => {
                ErrorCategory::Catalog
            }
            Self::SelectionOutOfRange { .. } => ErrorCategory::Selection,
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) | Self::CsvError(_) | Self::SerializationError(_) => {
                ErrorCategory::Output
            }
        }
    }

    /// 選取索引越界代表呼叫端違反契約，視為最嚴重等級
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Catalog => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Output => ErrorSeverity::High,
            ErrorCategory::Selection => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的訊息 (會顯示在空清單畫面上)
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ResourceNotFound { path } => format!("Catalog file not found ({})", path),
            Self::ReadFailure { path, .. } => format!("Could not read the catalog ({})", path),
            Self::DecodeFailure(_) => "The catalog file could not be decoded".to_string(),
            Self::SelectionOutOfRange { group, item } => {
                format!("No movie at position {}:{}", group, item)
            }
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::ConfigValidationError { field, message } => {
                format!("Invalid configuration '{}': {}", field, message)
            }
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid configuration '{}': {}", field, reason)
            }
            Self::IoError(e) => format!("I/O failure: {}", e),
            Self::CsvError(_) | Self::SerializationError(_) => {
                "Failed to write the output".to_string()
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::ResourceNotFound { .. } => {
                "Check --resource-dir and --catalog, or omit them to use the bundled catalog"
            }
            Self::ReadFailure { .. } => "Check the file permissions of the catalog",
            Self::DecodeFailure(_) => "Make sure the catalog is valid JSON with the expected fields",
            Self::SelectionOutOfRange { .. } => {
                "Use a GROUP:ITEM pair taken from the last printed list"
            }
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => "Fix the configuration file or CLI flags",
            Self::IoError(_) | Self::CsvError(_) | Self::SerializationError(_) => {
                "Retry, or pick another --format"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ExplorerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_errors_share_category() {
        let not_found = ExplorerError::ResourceNotFound {
            path: "MovieList.json".to_string(),
        };
        let read = ExplorerError::ReadFailure {
            path: "MovieList.json".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };

        assert_eq!(not_found.category(), ErrorCategory::Catalog);
        assert_eq!(read.category(), ErrorCategory::Catalog);
        assert_eq!(not_found.severity(), ErrorSeverity::Medium);
        assert!(not_found.user_friendly_message().contains("MovieList.json"));
    }

    #[test]
    fn test_selection_is_critical() {
        let err = ExplorerError::SelectionOutOfRange { group: 3, item: 1 };
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.to_string(), "Selection out of range: group 3, item 1");
    }
}
