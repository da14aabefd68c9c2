//! Catalog documents fetched over HTTP

use super::{BEANS_DOCUMENT, QUESTIONS_DOCUMENT, TYPES_DOCUMENT, parse_catalog};
use async_trait::async_trait;
use beanquiz_application::{CatalogLoadError, CatalogSource};
use beanquiz_domain::Catalog;
use std::time::Duration;
use tracing::debug;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Fetches the three catalog documents relative to a base URL
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpCatalogSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    fn url(&self, document: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), document)
    }

    async fn fetch(&self, document: &str) -> Result<String, CatalogLoadError> {
        let url = self.url(document);
        debug!("Fetching {}", url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| CatalogLoadError::read(&url, e))?;
        response
            .text()
            .await
            .map_err(|e| CatalogLoadError::read(&url, e))
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn load(&self) -> Result<Catalog, CatalogLoadError> {
        let (beans, types, questions) = tokio::try_join!(
            self.fetch(BEANS_DOCUMENT),
            self.fetch(TYPES_DOCUMENT),
            self.fetch(QUESTIONS_DOCUMENT),
        )?;
        parse_catalog(&beans, &types, &questions)
    }

    fn describe(&self) -> String {
        self.base_url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_urls() {
        let source = HttpCatalogSource::new("https://example.com/data/");
        assert_eq!(source.url(BEANS_DOCUMENT), "https://example.com/data/beans.json");
    }
}
