// Adapters layer: concrete implementations of the domain ports (storage, json loading, repository).

pub mod json_loader;
pub mod repository;
pub mod storage;
