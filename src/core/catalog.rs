use crate::domain::model::Movie;
use crate::domain::ports::{MovieRepository, MovieUsecase};
use crate::utils::error::Result;
use async_trait::async_trait;

/// 目錄服務：整份載入成功或整體失敗，不重試、不回傳部分結果
pub struct CatalogService<R: MovieRepository> {
    repository: R,
}

impl<R: MovieRepository> CatalogService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: MovieRepository> MovieUsecase for CatalogService<R> {
    async fn fetch_all(&self) -> Result<Vec<Movie>> {
        tracing::info!("🎬 Fetching movie catalog");

        match self.repository.fetch_data().await {
            Ok(movies) => {
                tracing::info!("✅ Loaded {} movies", movies.len());
                Ok(movies)
            }
            Err(e) => {
                tracing::error!("❌ Catalog fetch failed: {}", e);
                Err(e)
            }
        }
    }
}
