//! Persona ("type") entity

use crate::core::ids::{BeanId, PersonaId};
use serde::{Deserialize, Serialize};

/// A persona the quiz can classify the user into
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Persona {
    pub id: PersonaId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub personality: Option<String>,
    #[serde(default)]
    pub emoji: Option<String>,
    /// Beans recommended for this persona, in catalog order
    #[serde(default)]
    pub recommended_bean_ids: Vec<BeanId>,
}

impl Persona {
    pub fn new(id: impl Into<PersonaId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            personality: None,
            emoji: None,
            recommended_bean_ids: Vec::new(),
        }
    }

    pub fn recommending<I, S>(mut self, bean_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<BeanId>,
    {
        self.recommended_bean_ids = bean_ids.into_iter().map(Into::into).collect();
        self
    }
}
