//! Catalog store port
//!
//! Read-only access to beans, persona types and questions. The in-memory
//! [`Catalog`] implements it directly; tests swap in doubles.

use beanquiz_domain::core::random::pick;
use beanquiz_domain::{Bean, Catalog, Persona, Question, RandomSource};

/// Read-only catalog lookups used by the use cases
pub trait CatalogStore: Send + Sync {
    fn beans(&self) -> &[Bean];

    fn types(&self) -> &[Persona];

    fn questions(&self) -> &[Question];

    fn bean_by_id(&self, id: &str) -> Option<&Bean> {
        self.beans().iter().find(|b| b.id.as_str() == id)
    }

    fn type_by_id(&self, id: &str) -> Option<&Persona> {
        self.types().iter().find(|t| t.id.as_str() == id)
    }

    /// First featured bean, else the first bean, else `None`
    fn featured_bean(&self) -> Option<&Bean> {
        self.beans()
            .iter()
            .find(|b| b.featured)
            .or_else(|| self.beans().first())
    }

    /// Uniformly random bean, `None` when the catalog is empty
    fn random_bean(&self, rng: &dyn RandomSource) -> Option<&Bean> {
        pick(self.beans(), rng)
    }
}

impl CatalogStore for Catalog {
    fn beans(&self) -> &[Bean] {
        Catalog::beans(self)
    }

    fn types(&self) -> &[Persona] {
        Catalog::types(self)
    }

    fn questions(&self) -> &[Question] {
        Catalog::questions(self)
    }

    fn bean_by_id(&self, id: &str) -> Option<&Bean> {
        Catalog::bean_by_id(self, id)
    }

    fn type_by_id(&self, id: &str) -> Option<&Persona> {
        Catalog::type_by_id(self, id)
    }

    fn featured_bean(&self) -> Option<&Bean> {
        Catalog::featured_bean(self)
    }

    fn random_bean(&self, rng: &dyn RandomSource) -> Option<&Bean> {
        Catalog::random_bean(self, rng)
    }
}
