//! Catalog sources
//!
//! Both sources fetch the same three JSON documents and hand them to
//! [`parse_catalog`], which deserializes them and prunes dangling
//! references before the catalog is used.

mod directory;
#[cfg(feature = "remote-catalog")]
mod http;

pub use directory::DirectoryCatalogSource;
#[cfg(feature = "remote-catalog")]
pub use http::HttpCatalogSource;

use beanquiz_application::CatalogLoadError;
use beanquiz_domain::{Bean, Catalog, Persona, QuestionsDocument};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

pub const BEANS_DOCUMENT: &str = "beans.json";
pub const TYPES_DOCUMENT: &str = "types.json";
pub const QUESTIONS_DOCUMENT: &str = "questions.json";

/// Parse the three catalog documents and drop dangling references.
///
/// Every dropped reference is logged; an empty bean list is an error.
pub fn parse_catalog(beans: &str, types: &str, questions: &str) -> Result<Catalog, CatalogLoadError> {
    let beans: Vec<Bean> = parse_document(BEANS_DOCUMENT, beans)?;
    let types: Vec<Persona> = parse_document(TYPES_DOCUMENT, types)?;
    let questions = parse_document::<QuestionsDocument>(QUESTIONS_DOCUMENT, questions)?.into_questions();

    let (catalog, dropped) = Catalog::validated(beans, types, questions);
    for reference in &dropped {
        warn!("{}", reference);
    }

    if catalog.is_empty() {
        return Err(CatalogLoadError::Empty);
    }

    debug!(
        "Parsed catalog: {} beans, {} types, {} questions, {} dangling references dropped",
        catalog.beans().len(),
        catalog.types().len(),
        catalog.questions().len(),
        dropped.len()
    );
    Ok(catalog)
}

fn parse_document<T: DeserializeOwned>(document: &str, content: &str) -> Result<T, CatalogLoadError> {
    serde_json::from_str(content).map_err(|e| CatalogLoadError::parse(document, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BEANS: &str = r#"[
        {"id": "ethiopia", "name": "エチオピア", "roastLabel": "浅煎り",
         "scores": {"acidity": 5, "bitterness": 1, "body": 2, "aroma": 5, "sweetness": 3}},
        {"id": "house", "name": "ハウスブレンド", "type": "blend", "featured": true,
         "blend": {"concept": "毎日の一杯", "components": [
            {"beanId": "ethiopia", "role": "香り", "ratio": 40},
            {"beanId": "ghost", "role": "コク", "ratio": 60}
         ]}}
    ]"#;

    const TYPES: &str = r#"[
        {"id": "explorer", "name": "冒険家", "emoji": "🧭",
         "recommendedBeanIds": ["ethiopia", "missing"]}
    ]"#;

    const QUESTIONS_WRAPPED: &str = r#"{"questions": [
        {"text": "朝は？", "choices": [{"text": "すっきり", "scores": {"explorer": 2}}]}
    ]}"#;

    const QUESTIONS_BARE: &str = r#"[
        {"text": "朝は？", "choices": [{"text": "すっきり", "scores": {"explorer": 2}}]}
    ]"#;

    #[test]
    fn test_parse_prunes_dangling_references() {
        let catalog = parse_catalog(BEANS, TYPES, QUESTIONS_WRAPPED).unwrap();
        let house = catalog.bean_by_id("house").unwrap();
        assert!(house.is_blend());
        assert_eq!(house.blend.as_ref().unwrap().components.len(), 1);
        let explorer = catalog.type_by_id("explorer").unwrap();
        assert_eq!(explorer.recommended_bean_ids.len(), 1);
        assert_eq!(catalog.featured_bean().unwrap().id.as_str(), "house");
    }

    #[test]
    fn test_questions_accept_bare_array() {
        let wrapped = parse_catalog(BEANS, TYPES, QUESTIONS_WRAPPED).unwrap();
        let bare = parse_catalog(BEANS, TYPES, QUESTIONS_BARE).unwrap();
        assert_eq!(wrapped.questions(), bare.questions());
        assert_eq!(bare.questions()[0].choices[0].scores["explorer"], 2);
    }

    #[test]
    fn test_malformed_document_names_the_file() {
        let err = parse_catalog(BEANS, "{not json", QUESTIONS_BARE).unwrap_err();
        assert!(matches!(err, CatalogLoadError::Parse { ref document, .. } if document == TYPES_DOCUMENT));
    }

    #[test]
    fn test_empty_bean_list_is_rejected() {
        let err = parse_catalog("[]", TYPES, QUESTIONS_BARE).unwrap_err();
        assert!(matches!(err, CatalogLoadError::Empty));
    }
}
