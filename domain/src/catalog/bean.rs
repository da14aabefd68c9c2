//! Bean entity and blend composition

use super::score::ScoreVector;
use crate::core::ids::BeanId;
use serde::{Deserialize, Serialize};

/// Kind of bean as declared by the catalog `type` field
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BeanKind {
    Blend,
    #[default]
    Single,
    Other(String),
}

impl From<String> for BeanKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "blend" => BeanKind::Blend,
            "single" | "straight" | "" => BeanKind::Single,
            _ => BeanKind::Other(s),
        }
    }
}

impl From<BeanKind> for String {
    fn from(kind: BeanKind) -> Self {
        match kind {
            BeanKind::Blend => "blend".to_string(),
            BeanKind::Single => "single".to_string(),
            BeanKind::Other(s) => s,
        }
    }
}

/// One component of a blend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlendComponent {
    pub bean_id: BeanId,
    #[serde(default)]
    pub role: String,
    /// Share of the blend in percent (presentational only)
    #[serde(default)]
    pub ratio: Option<u32>,
}

/// Blend recipe
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BlendSpec {
    pub concept: Option<String>,
    pub components: Vec<BlendComponent>,
}

/// A coffee bean in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bean {
    pub id: BeanId,
    pub name: String,
    #[serde(default)]
    pub roast_label: String,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub roast: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub short_comment: Option<String>,
    #[serde(default)]
    pub flavor_notes: Vec<String>,
    #[serde(default)]
    pub scores: ScoreVector,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: BeanKind,
    #[serde(default)]
    pub blend: Option<BlendSpec>,
    #[serde(default)]
    pub featured: bool,
}

impl Bean {
    pub fn new(id: impl Into<BeanId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            roast_label: String::new(),
            origin: None,
            roast: None,
            description: String::new(),
            short_comment: None,
            flavor_notes: Vec::new(),
            scores: ScoreVector::default(),
            base_url: None,
            kind: BeanKind::Single,
            blend: None,
            featured: false,
        }
    }

    pub fn with_scores(mut self, scores: ScoreVector) -> Self {
        self.scores = scores;
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    pub fn as_blend(mut self, spec: BlendSpec) -> Self {
        self.kind = BeanKind::Blend;
        self.blend = Some(spec);
        self
    }

    /// True when the bean is typed as a blend and carries a recipe
    pub fn is_blend(&self) -> bool {
        self.kind == BeanKind::Blend && self.blend.is_some()
    }

    /// Shop URL, if it is set and not blank
    pub fn purchase_url(&self) -> Option<&str> {
        self.base_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// "roast label / origin" line, falling back to the roast name
    pub fn roast_line(&self) -> String {
        let origin = self
            .origin
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self.roast.as_deref())
            .unwrap_or("");
        format!("{} / {}", self.roast_label, origin)
    }

    /// Short gacha comment, falling back to the description
    pub fn comment(&self) -> &str {
        self.short_comment
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(&self.description)
    }
}
