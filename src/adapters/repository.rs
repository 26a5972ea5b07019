use crate::adapters::json_loader::JsonLoader;
use crate::core::mapper::map_movie;
use crate::domain::model::{Movie, MovieResponse};
use crate::domain::ports::{ConfigProvider, MovieRepository, Storage};
use crate::utils::error::Result;
use async_trait::async_trait;

pub const DEFAULT_CATALOG_NAME: &str = "MovieList";

pub struct JsonMovieRepository<S: Storage> {
    loader: JsonLoader<S>,
    catalog_name: String,
}

impl<S: Storage> JsonMovieRepository<S> {
    pub fn new(storage: S, catalog_name: impl Into<String>) -> Self {
        Self {
            loader: JsonLoader::new(storage),
            catalog_name: catalog_name.into(),
        }
    }

    pub fn from_config<C: ConfigProvider>(storage: S, config: &C) -> Self {
        Self::new(storage, config.catalog_name())
    }

    pub fn catalog_name(&self) -> &str {
        &self.catalog_name
    }
}

#[async_trait]
impl<S: Storage> MovieRepository for JsonMovieRepository<S> {
    async fn fetch_data(&self) -> Result<Vec<Movie>> {
        let response: MovieResponse = self.loader.load(&self.catalog_name).await?;

        tracing::debug!(
            "Catalog '{}' page {}/{} ({} total results, status {}, at {})",
            self.catalog_name,
            response.page,
            response.total_pages,
            response.total_results,
            response.status,
            response.timestamp
        );

        Ok(response.movies.into_iter().map(map_movie).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::BundledStorage;
    use crate::utils::error::ExplorerError;

    #[tokio::test]
    async fn test_bundled_catalog_maps_every_record() {
        let repository = JsonMovieRepository::new(BundledStorage::new(), DEFAULT_CATALOG_NAME);

        let movies = repository.fetch_data().await.unwrap();

        assert_eq!(movies.len(), 10);
        assert_eq!(movies[0].id, 101);
        // "" and "2024-13-40" do not parse
        assert_eq!(movies.iter().filter(|m| m.date.is_none()).count(), 2);
    }

    #[tokio::test]
    async fn test_unknown_catalog_is_not_found() {
        let repository = JsonMovieRepository::new(BundledStorage::new(), "Elsewhere");

        let err = repository.fetch_data().await.unwrap_err();

        assert!(matches!(err, ExplorerError::ResourceNotFound { .. }));
    }
}
