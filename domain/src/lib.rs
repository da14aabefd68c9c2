//! Domain layer for beanquiz
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Catalog
//!
//! Beans with a five-axis flavor profile, persona "types" that recommend
//! beans, and the diagnosis questions whose choices award persona points.
//!
//! ## Diagnosis
//!
//! - **Quiz session**: one answer per question, folded into a score board
//! - **Classification**: personas ranked by score, ties broken at random
//!
//! ## Radar chart
//!
//! Polar layout of the flavor profile: grid pentagons, spokes, data polygon
//! and axis labels.

pub mod catalog;
pub mod chart;
pub mod core;
pub mod quiz;
pub mod recommend;
pub mod screen;

// Re-export commonly used types
pub use catalog::{
    Bean, BeanKind, BlendComponent, BlendSpec, Catalog, Choice, DanglingReference, FlavorAxis,
    MAX_SCORE, Persona, Question, QuestionsDocument, ScoreVector,
};
pub use chart::{ChartOptions, ChartPalette, ChartStyleOverrides, Point, RadarGeometry};
pub use crate::core::{
    error::DomainError,
    ids::{BeanId, PersonaId},
    random::RandomSource,
};
pub use quiz::{
    AnswerProgress, Classification, QuestionTicket, QuizSession, QuizState, RankedPersona,
    ScoreBoard,
};
pub use recommend::{
    AlternatePick, BlendBreakdown, PersonaCard, PurchaseContext, PurchaseLink, Recommendation,
    ResolvedComponent, share_text,
};
pub use screen::Screen;
