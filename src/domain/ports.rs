use crate::domain::model::Movie;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    /// `None` means the catalog compiled into the binary.
    fn resource_dir(&self) -> Option<&str>;
    fn catalog_name(&self) -> &str;
}

#[async_trait]
pub trait MovieRepository: Send + Sync {
    async fn fetch_data(&self) -> Result<Vec<Movie>>;
}

#[async_trait]
pub trait MovieUsecase: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<Movie>>;
}
