//! Reading-assistance backend: text segmentation, pronunciation feedback,
//! the book catalog, uploads and the HTTP API that exposes them.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod scoring;
pub mod service;
pub mod text;
pub mod upload;

#[cfg(test)]
mod tests;

pub use api::{ServerHandle, start_server};
pub use catalog::{BookRepository, InMemoryCatalog, SharedCatalog};
pub use config::AppConfig;
pub use error::{ConfigError, CoreError, ReadingError, ServerError};
