//! In-memory catalog with load-time reference validation

use super::bean::Bean;
use super::persona::Persona;
use super::question::Question;
use crate::core::ids::BeanId;
use crate::core::random::{RandomSource, pick};
use std::collections::HashSet;

/// Where a dangling bean reference was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DanglingReference {
    /// A blend component points at a missing bean
    BlendComponent { blend: BeanId, missing: BeanId },
    /// A persona recommends a missing bean
    Recommendation {
        persona: crate::core::ids::PersonaId,
        missing: BeanId,
    },
}

impl std::fmt::Display for DanglingReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DanglingReference::BlendComponent { blend, missing } => {
                write!(f, "Invalid beanId reference: {} in {}", missing, blend)
            }
            DanglingReference::Recommendation { persona, missing } => {
                write!(f, "Invalid recommendedBeanId: {} in type {}", missing, persona)
            }
        }
    }
}

/// Read-only catalog of beans, persona types and questions
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    beans: Vec<Bean>,
    types: Vec<Persona>,
    questions: Vec<Question>,
}

impl Catalog {
    /// Build a catalog as-is, without reference validation
    pub fn new(beans: Vec<Bean>, types: Vec<Persona>, questions: Vec<Question>) -> Self {
        Self {
            beans,
            types,
            questions,
        }
    }

    /// Build a catalog, dropping blend components and recommendations
    /// that reference unknown beans.
    ///
    /// Returns the pruned catalog together with every dropped reference.
    pub fn validated(
        mut beans: Vec<Bean>,
        mut types: Vec<Persona>,
        questions: Vec<Question>,
    ) -> (Self, Vec<DanglingReference>) {
        let known: HashSet<BeanId> = beans.iter().map(|b| b.id.clone()).collect();
        let mut dropped = Vec::new();

        for bean in &mut beans {
            let blend_id = bean.id.clone();
            if let Some(blend) = bean.blend.as_mut() {
                blend.components.retain(|c| {
                    let ok = known.contains(&c.bean_id);
                    if !ok {
                        dropped.push(DanglingReference::BlendComponent {
                            blend: blend_id.clone(),
                            missing: c.bean_id.clone(),
                        });
                    }
                    ok
                });
            }
        }

        for persona in &mut types {
            let persona_id = persona.id.clone();
            persona.recommended_bean_ids.retain(|id| {
                let ok = known.contains(id);
                if !ok {
                    dropped.push(DanglingReference::Recommendation {
                        persona: persona_id.clone(),
                        missing: id.clone(),
                    });
                }
                ok
            });
        }

        (Self::new(beans, types, questions), dropped)
    }

    pub fn beans(&self) -> &[Bean] {
        &self.beans
    }

    pub fn types(&self) -> &[Persona] {
        &self.types
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// True when no beans are loaded
    pub fn is_empty(&self) -> bool {
        self.beans.is_empty()
    }

    pub fn bean_by_id(&self, id: &str) -> Option<&Bean> {
        self.beans.iter().find(|b| b.id.as_str() == id)
    }

    pub fn type_by_id(&self, id: &str) -> Option<&Persona> {
        self.types.iter().find(|t| t.id.as_str() == id)
    }

    /// First bean flagged featured, else the first bean, else `None`
    pub fn featured_bean(&self) -> Option<&Bean> {
        self.beans
            .iter()
            .find(|b| b.featured)
            .or_else(|| self.beans.first())
    }

    /// Uniformly random bean, `None` for an empty catalog
    pub fn random_bean(&self, rng: &dyn RandomSource) -> Option<&Bean> {
        pick(&self.beans, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::bean::{BlendComponent, BlendSpec};
    use crate::core::random::testing::ScriptedRandom;

    fn blend(components: &[&str]) -> BlendSpec {
        BlendSpec {
            concept: None,
            components: components
                .iter()
                .map(|id| BlendComponent {
                    bean_id: BeanId::from(*id),
                    role: "role".to_string(),
                    ratio: None,
                })
                .collect(),
        }
    }

    #[test]
    fn test_validated_prunes_dangling_references() {
        let beans = vec![
            Bean::new("x", "X"),
            Bean::new("house", "House").as_blend(blend(&["x", "ghost"])),
        ];
        let types = vec![Persona::new("a", "A").recommending(["house", "missing", "x"])];

        let (catalog, dropped) = Catalog::validated(beans, types, vec![]);

        let house = catalog.bean_by_id("house").unwrap();
        assert_eq!(house.blend.as_ref().unwrap().components.len(), 1);
        assert_eq!(
            catalog.type_by_id("a").unwrap().recommended_bean_ids,
            vec![BeanId::from("house"), BeanId::from("x")]
        );
        assert_eq!(dropped.len(), 2);
        assert_eq!(
            dropped[0].to_string(),
            "Invalid beanId reference: ghost in house"
        );
    }

    #[test]
    fn test_featured_bean_prefers_flag() {
        let catalog = Catalog::new(
            vec![Bean::new("a", "A"), Bean::new("b", "B").featured()],
            vec![],
            vec![],
        );
        assert_eq!(catalog.featured_bean().unwrap().id.as_str(), "b");
    }

    #[test]
    fn test_featured_bean_falls_back_to_first() {
        let catalog = Catalog::new(vec![Bean::new("a", "A"), Bean::new("b", "B")], vec![], vec![]);
        assert_eq!(catalog.featured_bean().unwrap().id.as_str(), "a");
        assert!(Catalog::default().featured_bean().is_none());
    }

    #[test]
    fn test_random_bean() {
        let catalog = Catalog::new(vec![Bean::new("a", "A"), Bean::new("b", "B")], vec![], vec![]);
        let rng = ScriptedRandom::new([1]);
        assert_eq!(catalog.random_bean(&rng).unwrap().id.as_str(), "b");
        assert!(Catalog::default().random_bean(&rng).is_none());
    }
}
