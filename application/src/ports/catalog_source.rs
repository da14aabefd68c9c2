//! Catalog source port
//!
//! Loads the three catalog documents (beans, types, questions) once at
//! startup. Implementations live in the infrastructure layer (local
//! directory, HTTP).

use async_trait::async_trait;
use beanquiz_domain::Catalog;
use thiserror::Error;

/// Errors raised while loading the catalog
#[derive(Error, Debug)]
pub enum CatalogLoadError {
    #[error("Failed to read {document}: {message}")]
    Read { document: String, message: String },

    #[error("Failed to parse {document}: {message}")]
    Parse { document: String, message: String },

    #[error("Catalog contains no beans")]
    Empty,
}

impl CatalogLoadError {
    pub fn read(document: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::Read {
            document: document.into(),
            message: err.to_string(),
        }
    }

    pub fn parse(document: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::Parse {
            document: document.into(),
            message: err.to_string(),
        }
    }
}

/// Port for loading the catalog
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Load and reference-check the catalog
    async fn load(&self) -> Result<Catalog, CatalogLoadError>;

    /// Human-readable origin for logs (path or URL)
    fn describe(&self) -> String;
}
