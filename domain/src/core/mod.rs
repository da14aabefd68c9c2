//! Core domain concepts shared across all subdomains.
//!
//! - [`ids::BeanId`] / [`ids::PersonaId`]: catalog identifiers
//! - [`random::RandomSource`]: injectable randomness
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod ids;
pub mod random;
