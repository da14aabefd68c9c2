//! Catalog documents read from a local directory

use super::{BEANS_DOCUMENT, QUESTIONS_DOCUMENT, TYPES_DOCUMENT, parse_catalog};
use async_trait::async_trait;
use beanquiz_application::{CatalogLoadError, CatalogSource};
use beanquiz_domain::Catalog;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Loads `beans.json`, `types.json` and `questions.json` from one directory
#[derive(Debug, Clone)]
pub struct DirectoryCatalogSource {
    dir: PathBuf,
}

impl DirectoryCatalogSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    async fn read(&self, document: &str) -> Result<String, CatalogLoadError> {
        let path = self.dir.join(document);
        debug!("Reading {}", path.display());
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| CatalogLoadError::read(path.display().to_string(), e))
    }
}

#[async_trait]
impl CatalogSource for DirectoryCatalogSource {
    async fn load(&self) -> Result<Catalog, CatalogLoadError> {
        let (beans, types, questions) = tokio::try_join!(
            self.read(BEANS_DOCUMENT),
            self.read(TYPES_DOCUMENT),
            self.read(QUESTIONS_DOCUMENT),
        )?;
        parse_catalog(&beans, &types, &questions)
    }

    fn describe(&self) -> String {
        self.dir.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_catalog(dir: &Path) {
        fs::write(
            dir.join(BEANS_DOCUMENT),
            r#"[{"id": "brazil", "name": "ブラジル", "roastLabel": "中煎り"}]"#,
        )
        .unwrap();
        fs::write(
            dir.join(TYPES_DOCUMENT),
            r#"[{"id": "calm", "name": "おだやか", "recommendedBeanIds": ["brazil"]}]"#,
        )
        .unwrap();
        fs::write(
            dir.join(QUESTIONS_DOCUMENT),
            r#"[{"text": "Q", "choices": [{"text": "A", "scores": {"calm": 1}}]}]"#,
        )
        .unwrap();
    }

    #[tokio::test]
    async fn test_load_from_directory() {
        let temp = tempfile::tempdir().unwrap();
        write_catalog(temp.path());

        let source = DirectoryCatalogSource::new(temp.path());
        let catalog = source.load().await.unwrap();
        assert_eq!(catalog.beans().len(), 1);
        assert_eq!(catalog.types()[0].name, "おだやか");
        assert_eq!(catalog.questions().len(), 1);
    }

    #[tokio::test]
    async fn test_missing_document_is_a_read_error() {
        let temp = tempfile::tempdir().unwrap();
        write_catalog(temp.path());
        fs::remove_file(temp.path().join(TYPES_DOCUMENT)).unwrap();

        let err = DirectoryCatalogSource::new(temp.path())
            .load()
            .await
            .unwrap_err();
        match err {
            CatalogLoadError::Read { document, .. } => assert!(document.ends_with(TYPES_DOCUMENT)),
            other => panic!("unexpected error: {other}"),
        }
    }
}
