//! Application layer for beanquiz
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::PacingParams;
pub use ports::{
    catalog_source::{CatalogLoadError, CatalogSource},
    catalog_store::CatalogStore,
    chart_sink::{ChartArtifact, ChartSink, ChartSinkError},
    drawing_surface::{DrawingSurface, TextAlign, TextBaseline},
    presenter::{ChartRequest, NoPresenter, QuestionView, QuizPresenter},
};
pub use use_cases::app_controller::{
    AppController, AppError, BLEND_CHART_SIZE, CatalogStatus, DiagnosisStep, GACHA_CHART,
    MAIN_CHART, blend_chart_target,
};
pub use use_cases::gacha::{GachaError, GachaMachine};
pub use use_cases::pacer::Pacer;
pub use use_cases::quiz_engine::{AnswerOutcome, QuizEngine, QuizError};
pub use use_cases::recommend::{RecommendError, RecommendationSelector};
pub use use_cases::render_chart::RadarChartRenderer;
