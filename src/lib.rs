pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::repository::{JsonMovieRepository, DEFAULT_CATALOG_NAME};
pub use crate::adapters::storage::{BundledStorage, LocalStorage};
pub use crate::app::presenters::{DetailPresenter, MovieListPresenter};
pub use crate::config::TomlConfig;
pub use crate::core::{catalog::CatalogService, format::DisplayFormat};
pub use crate::utils::error::{ExplorerError, Result};
