//! Recommendation use case
//!
//! Turns a classification into a result card: a primary bean from the
//! winner's list, an optional alternate from the runner-up, plus the
//! omakase shortcut and the blend breakdown.

use crate::ports::catalog_store::CatalogStore;
use beanquiz_domain::core::random::pick;
use beanquiz_domain::{
    AlternatePick, Bean, BeanId, BlendBreakdown, Classification, Persona, PersonaCard,
    RandomSource, Recommendation, ResolvedComponent,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors raised while building a recommendation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecommendError {
    #[error("Catalog contains no beans")]
    EmptyCatalog,

    #[error("Unknown persona '{0}'")]
    UnknownPersona(String),
}

/// Use case for choosing beans to recommend
pub struct RecommendationSelector {
    catalog: Arc<dyn CatalogStore>,
    rng: Arc<dyn RandomSource>,
}

impl RecommendationSelector {
    pub fn new(catalog: Arc<dyn CatalogStore>, rng: Arc<dyn RandomSource>) -> Self {
        Self { catalog, rng }
    }

    /// Build the diagnosis result for a classification
    pub fn recommend(&self, classification: &Classification) -> Result<Recommendation, RecommendError> {
        let winner_id = classification.winner().persona.as_str();
        let winner = self
            .catalog
            .type_by_id(winner_id)
            .ok_or_else(|| RecommendError::UnknownPersona(winner_id.to_string()))?;
        let runner_up = classification
            .runner_up()
            .and_then(|r| self.catalog.type_by_id(r.persona.as_str()));

        self.recommend_for(winner, runner_up)
    }

    /// Build the diagnosis result for an explicit winner and runner-up
    pub fn recommend_for(
        &self,
        winner: &Persona,
        runner_up: Option<&Persona>,
    ) -> Result<Recommendation, RecommendError> {
        let primary = self.primary_bean(winner)?;
        let alternate = runner_up.and_then(|second| {
            self.alternate_bean(second, &primary.id)
                .map(|bean| AlternatePick {
                    bean,
                    from_persona: second.name.clone(),
                })
        });

        debug!(
            "Recommending {} for {}{}",
            primary.id,
            winner.id,
            alternate
                .as_ref()
                .map(|a| format!(" (alternate {})", a.bean.id))
                .unwrap_or_default()
        );

        Ok(Recommendation {
            persona_id: Some(winner.id.clone()),
            card: PersonaCard::from(winner),
            primary,
            alternate,
        })
    }

    /// Random recommended bean of `persona`.
    ///
    /// Falls back to the featured bean, then the first bean, when the
    /// persona recommends nothing resolvable.
    pub fn primary_bean(&self, persona: &Persona) -> Result<Bean, RecommendError> {
        let recommended = pick(&persona.recommended_bean_ids, self.rng.as_ref())
            .and_then(|id| self.catalog.bean_by_id(id.as_str()));

        if recommended.is_none() {
            warn!(
                "Persona '{}' has no resolvable recommendation, using featured bean",
                persona.id
            );
        }

        recommended
            .or_else(|| self.catalog.featured_bean())
            .cloned()
            .ok_or(RecommendError::EmptyCatalog)
    }

    /// First bean recommended by `persona` that resolves and differs from
    /// `primary`
    pub fn alternate_bean(&self, persona: &Persona, primary: &BeanId) -> Option<Bean> {
        persona
            .recommended_bean_ids
            .iter()
            .filter(|id| *id != primary)
            .find_map(|id| self.catalog.bean_by_id(id.as_str()))
            .cloned()
    }

    /// Omakase result for `bean`
    pub fn omakase(&self, bean: &Bean) -> Recommendation {
        Recommendation {
            persona_id: None,
            card: PersonaCard::omakase(),
            primary: bean.clone(),
            alternate: None,
        }
    }

    /// Omakase result for the featured bean
    pub fn omakase_featured(&self) -> Result<Recommendation, RecommendError> {
        let bean = self
            .catalog
            .featured_bean()
            .ok_or(RecommendError::EmptyCatalog)?;
        Ok(self.omakase(bean))
    }

    /// Blend broken down into its resolvable components.
    ///
    /// `None` when the bean is not a blend. Components whose bean is
    /// missing are skipped.
    pub fn blend_breakdown(&self, bean: &Bean) -> Option<BlendBreakdown> {
        if !bean.is_blend() {
            return None;
        }
        let spec = bean.blend.as_ref()?;

        let components = spec
            .components
            .iter()
            .filter_map(|component| {
                let resolved = self.catalog.bean_by_id(component.bean_id.as_str());
                if resolved.is_none() {
                    debug!(
                        "Skipping unresolved component {} of {}",
                        component.bean_id, bean.id
                    );
                }
                resolved.map(|b| ResolvedComponent {
                    role: component.role.clone(),
                    ratio: component.ratio,
                    bean: b.clone(),
                })
            })
            .collect();

        Some(BlendBreakdown {
            blend_name: bean.name.clone(),
            concept: spec.concept.clone().unwrap_or_default(),
            components,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::ScriptedRandom;
    use beanquiz_domain::{BlendComponent, BlendSpec, Catalog, PersonaId};

    fn selector(catalog: Catalog, rng: Vec<usize>) -> RecommendationSelector {
        RecommendationSelector::new(Arc::new(catalog), ScriptedRandom::new(rng))
    }

    fn classification(pairs: &[(&str, i64)]) -> Classification {
        let scores: Vec<(PersonaId, i64)> = pairs
            .iter()
            .map(|(id, s)| (PersonaId::from(*id), *s))
            .collect();
        Classification::rank(&scores, ScriptedRandom::new([]).as_ref()).unwrap()
    }

    fn beans(ids: &[&str]) -> Vec<Bean> {
        ids.iter().map(|id| Bean::new(*id, id.to_uppercase())).collect()
    }

    #[test]
    fn test_primary_is_drawn_from_recommended_list() {
        let catalog = Catalog::new(
            beans(&["x", "y", "z"]),
            vec![Persona::new("a", "A").recommending(["y", "z"])],
            vec![],
        );
        let s = selector(catalog, vec![1]);
        let rec = s.recommend(&classification(&[("a", 3)])).unwrap();
        assert_eq!(rec.primary.id.as_str(), "z");
        assert_eq!(rec.persona_id.unwrap().as_str(), "a");
        assert!(rec.alternate.is_none());
    }

    #[test]
    fn test_alternate_skips_primary() {
        let catalog = Catalog::new(
            beans(&["x", "z"]),
            vec![
                Persona::new("a", "A").recommending(["x"]),
                Persona::new("b", "Type B").recommending(["x", "z"]),
            ],
            vec![],
        );
        let s = selector(catalog, vec![]);
        let rec = s.recommend(&classification(&[("a", 5), ("b", 2)])).unwrap();
        assert_eq!(rec.primary.id.as_str(), "x");
        let alt = rec.alternate.unwrap();
        assert_eq!(alt.bean.id.as_str(), "z");
        assert_eq!(alt.from_persona, "Type B");
    }

    #[test]
    fn test_no_alternate_when_runner_up_only_has_primary() {
        let catalog = Catalog::new(
            beans(&["x"]),
            vec![
                Persona::new("a", "A").recommending(["x"]),
                Persona::new("b", "B").recommending(["x"]),
            ],
            vec![],
        );
        let rec = selector(catalog, vec![])
            .recommend(&classification(&[("a", 5), ("b", 2)]))
            .unwrap();
        assert!(rec.alternate.is_none());
    }

    #[test]
    fn test_alternate_skips_unresolved_ids() {
        let catalog = Catalog::new(
            beans(&["x", "z"]),
            vec![
                Persona::new("a", "A").recommending(["x"]),
                Persona::new("b", "B").recommending(["gone", "x", "z"]),
            ],
            vec![],
        );
        let rec = selector(catalog, vec![])
            .recommend(&classification(&[("a", 5), ("b", 2)]))
            .unwrap();
        assert_eq!(rec.alternate.unwrap().bean.id.as_str(), "z");
    }

    #[test]
    fn test_primary_falls_back_to_featured() {
        let catalog = Catalog::new(
            vec![Bean::new("x", "X"), Bean::new("y", "Y").featured()],
            vec![Persona::new("a", "A")],
            vec![],
        );
        let rec = selector(catalog, vec![])
            .recommend(&classification(&[("a", 1)]))
            .unwrap();
        assert_eq!(rec.primary.id.as_str(), "y");
    }

    #[test]
    fn test_primary_falls_back_to_first_bean() {
        let catalog = Catalog::new(beans(&["x", "y"]), vec![Persona::new("a", "A")], vec![]);
        let rec = selector(catalog, vec![])
            .recommend(&classification(&[("a", 1)]))
            .unwrap();
        assert_eq!(rec.primary.id.as_str(), "x");
    }

    #[test]
    fn test_primary_fails_on_empty_catalog() {
        let catalog = Catalog::new(vec![], vec![Persona::new("a", "A")], vec![]);
        let err = selector(catalog, vec![])
            .recommend(&classification(&[("a", 1)]))
            .unwrap_err();
        assert_eq!(err, RecommendError::EmptyCatalog);
    }

    #[test]
    fn test_unknown_winner_is_an_error() {
        let catalog = Catalog::new(beans(&["x"]), vec![], vec![]);
        let err = selector(catalog, vec![])
            .recommend(&classification(&[("ghost", 1)]))
            .unwrap_err();
        assert_eq!(err, RecommendError::UnknownPersona("ghost".to_string()));
    }

    #[test]
    fn test_omakase_uses_featured_bean_and_fixed_card() {
        let catalog = Catalog::new(
            vec![Bean::new("x", "X"), Bean::new("y", "Y").featured()],
            vec![],
            vec![],
        );
        let rec = selector(catalog, vec![]).omakase_featured().unwrap();
        assert!(rec.is_omakase());
        assert_eq!(rec.primary.id.as_str(), "y");
        assert_eq!(rec.card, PersonaCard::omakase());
        assert!(rec.alternate.is_none());
    }

    #[test]
    fn test_omakase_on_empty_catalog() {
        let err = selector(Catalog::default(), vec![])
            .omakase_featured()
            .unwrap_err();
        assert_eq!(err, RecommendError::EmptyCatalog);
    }

    #[test]
    fn test_blend_breakdown_skips_unresolved_components() {
        let blend = Bean::new("house", "House Blend").as_blend(BlendSpec {
            concept: Some("Balanced".to_string()),
            components: vec![
                BlendComponent {
                    bean_id: BeanId::from("x"),
                    role: "base".to_string(),
                    ratio: Some(60),
                },
                BlendComponent {
                    bean_id: BeanId::from("gone"),
                    role: "accent".to_string(),
                    ratio: Some(40),
                },
            ],
        });
        let catalog = Catalog::new(vec![Bean::new("x", "X"), blend.clone()], vec![], vec![]);
        let breakdown = selector(catalog, vec![]).blend_breakdown(&blend).unwrap();
        assert_eq!(breakdown.blend_name, "House Blend");
        assert_eq!(breakdown.concept, "Balanced");
        assert_eq!(breakdown.components.len(), 1);
        assert_eq!(breakdown.components[0].bean.id.as_str(), "x");
        assert_eq!(breakdown.components[0].ratio, Some(60));
    }

    #[test]
    fn test_single_origin_has_no_breakdown() {
        let bean = Bean::new("x", "X");
        let catalog = Catalog::new(vec![bean.clone()], vec![], vec![]);
        assert!(selector(catalog, vec![]).blend_breakdown(&bean).is_none());
    }
}
