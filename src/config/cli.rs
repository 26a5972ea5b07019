use crate::adapters::repository::DEFAULT_CATALOG_NAME;
use crate::app::render::{ListLayout, OutputFormat};
use crate::domain::model::Selection;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_resource_name, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "movie-explorer")]
#[command(about = "Browse a bundled movie catalog grouped by release month")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Read the catalog from this directory instead of the bundled copy
    #[arg(long)]
    pub resource_dir: Option<String>,

    /// Catalog resource name, without the .json extension
    #[arg(long)]
    pub catalog: Option<String>,

    #[arg(long, value_enum)]
    pub layout: Option<ListLayout>,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Show the detail of GROUP:ITEM from the grouped list
    #[arg(long)]
    pub select: Option<Selection>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl ConfigProvider for CliConfig {
    fn resource_dir(&self) -> Option<&str> {
        self.resource_dir.as_deref()
    }

    fn catalog_name(&self) -> &str {
        self.catalog.as_deref().unwrap_or(DEFAULT_CATALOG_NAME)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(config) = &self.config {
            validate_path("--config", config)?;
        }
        if let Some(dir) = &self.resource_dir {
            validate_path("--resource-dir", dir)?;
        }
        if let Some(catalog) = &self.catalog {
            validate_resource_name("--catalog", catalog)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::parse_from(["movie-explorer"]);

        assert_eq!(config.resource_dir(), None);
        assert_eq!(config.catalog_name(), "MovieList");
        assert_eq!(config.layout, None);
        assert!(config.select.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_flags() {
        let config = CliConfig::parse_from([
            "movie-explorer",
            "--resource-dir",
            "./resources",
            "--catalog",
            "Festival",
            "--layout",
            "flat",
            "--format",
            "csv",
            "--select",
            "2:1",
            "-v",
        ]);

        assert_eq!(config.resource_dir(), Some("./resources"));
        assert_eq!(config.catalog_name(), "Festival");
        assert_eq!(config.layout, Some(ListLayout::Flat));
        assert_eq!(config.format, Some(OutputFormat::Csv));
        assert_eq!(config.select, Some(Selection { group: 2, item: 1 }));
        assert!(config.verbose);
    }

    #[test]
    fn test_bad_selection_is_rejected() {
        let parsed = CliConfig::try_parse_from(["movie-explorer", "--select", "two"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_validate_rejects_catalog_path() {
        let config = CliConfig::parse_from(["movie-explorer", "--catalog", "../MovieList"]);
        assert!(config.validate().is_err());
    }
}
