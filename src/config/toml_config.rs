use crate::adapters::repository::DEFAULT_CATALOG_NAME;
use crate::app::render::{ListLayout, OutputFormat};
use crate::core::format::DisplayFormat;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{ExplorerError, Result};
use crate::utils::validation::{validate_path, validate_resource_name, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub catalog: CatalogConfig,
    pub display: DisplayFormat,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub resource_dir: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub layout: ListLayout,
    pub format: OutputFormat,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| ExplorerError::ConfigError {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ExplorerError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${MOVIE_RESOURCES})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ExplorerError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 命令列參數優先於檔案設定
    #[cfg(feature = "cli")]
    pub fn apply_cli_overrides(&mut self, cli: &crate::config::CliConfig) {
        if let Some(dir) = &cli.resource_dir {
            self.catalog.resource_dir = Some(dir.clone());
            tracing::info!("🔧 Resource directory overridden to: {}", dir);
        }
        if let Some(name) = &cli.catalog {
            self.catalog.name = Some(name.clone());
            tracing::info!("🔧 Catalog overridden to: {}", name);
        }
        if let Some(layout) = cli.layout {
            self.output.layout = layout;
        }
        if let Some(format) = cli.format {
            self.output.format = format;
        }
    }
}

impl ConfigProvider for TomlConfig {
    fn resource_dir(&self) -> Option<&str> {
        self.catalog.resource_dir.as_deref()
    }

    fn catalog_name(&self) -> &str {
        self.catalog.name.as_deref().unwrap_or(DEFAULT_CATALOG_NAME)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(dir) = &self.catalog.resource_dir {
            validate_path("catalog.resource_dir", dir)?;
        }
        validate_resource_name("catalog.name", self.catalog_name())?;
        self.display.validate()
    }
}
