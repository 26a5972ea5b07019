pub mod catalog;
pub mod format;
pub mod mapper;

pub use crate::domain::model::{Movie, MovieDto, MovieResponse};
pub use crate::domain::ports::{ConfigProvider, MovieRepository, MovieUsecase, Storage};
pub use crate::utils::error::Result;
