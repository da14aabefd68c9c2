//! Catalog domain
//!
//! Read-only catalog records: beans with their flavor profile, persona
//! types with their recommendations, and the quiz questions.

pub mod bean;
pub mod persona;
pub mod question;
pub mod score;
pub mod store;

pub use bean::{Bean, BeanKind, BlendComponent, BlendSpec};
pub use persona::Persona;
pub use question::{Choice, Question, QuestionsDocument};
pub use score::{FlavorAxis, MAX_SCORE, ScoreVector};
pub use store::{Catalog, DanglingReference};
