//! App controller
//!
//! Ties the use cases to a [`QuizPresenter`]: gates every flow on the
//! catalog being loaded, applies pacing between steps, switches screens and
//! asks for charts once a result is on screen.
//!
//! ```text
//! Top ──start──▶ Diagnosis ──last answer──▶ Result ──blend──▶ Blend
//!  │                                          ▲
//!  ├──omakase─────────────────────────────────┘
//!  └──gacha──▶ Gacha
//! ```

use super::gacha::{GachaError, GachaMachine};
use super::pacer::Pacer;
use super::quiz_engine::{AnswerOutcome, QuizEngine, QuizError};
use super::recommend::{RecommendError, RecommendationSelector};
use crate::config::PacingParams;
use crate::ports::catalog_source::CatalogSource;
use crate::ports::catalog_store::CatalogStore;
use crate::ports::presenter::{ChartRequest, QuestionView, QuizPresenter};
use beanquiz_domain::{
    Bean, BlendBreakdown, Catalog, ChartStyleOverrides, QuestionTicket, QuizState, RandomSource,
    Recommendation, Screen,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Chart target on the result screen
pub const MAIN_CHART: &str = "radar-chart-main";
/// Chart target on the gacha screen
pub const GACHA_CHART: &str = "radar-chart-gacha";
/// Edge length of the per-component charts on the blend screen
pub const BLEND_CHART_SIZE: f64 = 200.0;

const LOAD_FAILED_NOTICE: &str = "データの読み込みに失敗しました 😢";
const NO_BEANS_NOTICE: &str = "豆データが見つかりません 😢";

/// Chart target for one blend component
pub fn blend_chart_target(bean: &Bean) -> String {
    format!("blend-chart-{}", bean.id)
}

/// Errors surfaced by the controller
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Catalog is still loading")]
    Loading,

    #[error("Data unavailable: {0}")]
    DataUnavailable(String),

    #[error(transparent)]
    Quiz(#[from] QuizError),

    #[error(transparent)]
    Recommend(#[from] RecommendError),

    #[error(transparent)]
    Gacha(#[from] GachaError),

    #[error("Current result is not a blend")]
    NotABlend,
}

impl AppError {
    /// Check if this error means no flow can run on the current catalog
    pub fn is_data_unavailable(&self) -> bool {
        match self {
            AppError::Loading | AppError::DataUnavailable(_) => true,
            AppError::Quiz(e) => e.is_no_data(),
            AppError::Recommend(RecommendError::EmptyCatalog) => true,
            AppError::Gacha(GachaError::NoBeans) => true,
            _ => false,
        }
    }
}

/// Catalog lifecycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogStatus {
    Loading,
    Ready,
    Unavailable(String),
}

/// What a diagnosis answer led to
#[derive(Debug, Clone, PartialEq)]
pub enum DiagnosisStep {
    /// Next question is on screen
    Question(QuestionView),
    /// Result screen is showing this recommendation
    Finished(Recommendation),
    /// The user left before the cool-down ran out
    Cancelled,
}

struct Services {
    catalog: Arc<dyn CatalogStore>,
    engine: QuizEngine,
    selector: RecommendationSelector,
    gacha: GachaMachine,
}

/// Front-end agnostic driver of the whole app
pub struct AppController {
    presenter: Arc<dyn QuizPresenter>,
    rng: Arc<dyn RandomSource>,
    pacer: Pacer,
    status: CatalogStatus,
    services: Option<Services>,
    screen: Screen,
    last_result: Option<Recommendation>,
}

impl AppController {
    pub fn new(
        presenter: Arc<dyn QuizPresenter>,
        rng: Arc<dyn RandomSource>,
        pacing: PacingParams,
    ) -> Self {
        Self {
            presenter,
            rng,
            pacer: Pacer::new(pacing),
            status: CatalogStatus::Loading,
            services: None,
            screen: Screen::Top,
            last_result: None,
        }
    }

    pub fn status(&self) -> &CatalogStatus {
        &self.status
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Most recent diagnosis or omakase result
    pub fn last_result(&self) -> Option<&Recommendation> {
        self.last_result.as_ref()
    }

    pub fn quiz_state(&self) -> QuizState {
        self.services
            .as_ref()
            .map(|s| s.engine.state())
            .unwrap_or_default()
    }

    /// Catalog in use, once loaded
    pub fn catalog(&self) -> Option<Arc<dyn CatalogStore>> {
        self.services.as_ref().map(|s| Arc::clone(&s.catalog))
    }

    /// Load the catalog from `source`.
    ///
    /// A failure is reported as a notice and leaves every flow refusing to
    /// start.
    pub async fn load(&mut self, source: &dyn CatalogSource) -> Result<(), AppError> {
        info!("Loading catalog from {}", source.describe());
        match source.load().await {
            Ok(catalog) => self.install(catalog),
            Err(e) => {
                error!("Catalog load failed: {}", e);
                self.mark_unavailable(e.to_string());
                Err(AppError::DataUnavailable(e.to_string()))
            }
        }
    }

    /// Use an already loaded catalog
    pub fn install(&mut self, catalog: Catalog) -> Result<(), AppError> {
        if catalog.is_empty() {
            warn!("Catalog contains no beans");
            let reason = "catalog contains no beans".to_string();
            self.mark_unavailable(reason.clone());
            return Err(AppError::DataUnavailable(reason));
        }

        info!(
            "Catalog ready: {} beans, {} types, {} questions",
            catalog.beans().len(),
            catalog.types().len(),
            catalog.questions().len()
        );

        let catalog: Arc<dyn CatalogStore> = Arc::new(catalog);
        self.services = Some(Services {
            engine: QuizEngine::new(Arc::clone(&catalog), Arc::clone(&self.rng)),
            selector: RecommendationSelector::new(Arc::clone(&catalog), Arc::clone(&self.rng)),
            gacha: GachaMachine::new(
                Arc::clone(&catalog),
                Arc::clone(&self.rng),
                self.pacer.params().gacha_spin,
            ),
            catalog,
        });
        self.status = CatalogStatus::Ready;
        Ok(())
    }

    fn mark_unavailable(&mut self, reason: String) {
        self.services = None;
        self.status = CatalogStatus::Unavailable(reason);
        self.presenter.notify(LOAD_FAILED_NOTICE);
    }

    fn services(&self) -> Result<&Services, AppError> {
        match (&self.status, &self.services) {
            (CatalogStatus::Ready, Some(services)) => Ok(services),
            (CatalogStatus::Unavailable(reason), _) => Err(AppError::DataUnavailable(reason.clone())),
            _ => Err(AppError::Loading),
        }
    }

    fn services_mut(&mut self) -> Result<&mut Services, AppError> {
        match (&self.status, &mut self.services) {
            (CatalogStatus::Ready, Some(services)) => Ok(services),
            (CatalogStatus::Unavailable(reason), _) => Err(AppError::DataUnavailable(reason.clone())),
            _ => Err(AppError::Loading),
        }
    }

    fn go(&mut self, screen: Screen) {
        if self.screen != screen {
            debug!("Screen {} -> {}", self.screen, screen);
        }
        self.screen = screen;
        self.presenter.navigate(screen);
    }

    /// Leave for `screen`, dropping any diagnosis in progress and
    /// cancelling pending delays.
    pub fn navigate(&mut self, screen: Screen) {
        self.pacer.cancel();
        if let Some(services) = self.services.as_mut() {
            services.engine.abandon();
        }
        self.go(screen);
    }

    /// Go one screen back (Blend returns to Result, everything else to Top)
    pub fn back(&mut self) {
        let target = self.screen.back();
        self.navigate(target);
    }

    /// Start a diagnosis and show question 1
    pub fn start_diagnosis(&mut self) -> Result<QuestionView, AppError> {
        let view = match self.services_mut()?.engine.start() {
            Ok(view) => view,
            Err(e) => {
                if e.is_no_data() {
                    self.presenter.notify(LOAD_FAILED_NOTICE);
                }
                return Err(e.into());
            }
        };
        self.pacer.reset();
        self.go(Screen::Diagnosis);
        self.presenter.show_question(&view);
        Ok(view)
    }

    /// The question awaiting an answer, if a diagnosis is running
    pub fn current_question(&self) -> Option<QuestionView> {
        self.services.as_ref()?.engine.current_question()
    }

    /// Answer the question `ticket` was issued for.
    ///
    /// After the cool-down the next question, or the result, is shown.
    pub async fn answer(
        &mut self,
        ticket: QuestionTicket,
        choice: usize,
    ) -> Result<DiagnosisStep, AppError> {
        let outcome = self.services_mut()?.engine.answer(ticket, choice)?;

        if !self.pacer.answer_cooldown().await {
            return Ok(DiagnosisStep::Cancelled);
        }

        match outcome {
            AnswerOutcome::Next(view) => {
                self.presenter.show_question(&view);
                Ok(DiagnosisStep::Question(view))
            }
            AnswerOutcome::Complete(classification) => {
                let result = self.services()?.selector.recommend(&classification)?;
                self.go(Screen::Result);
                self.presenter.show_diagnosis(&result);
                self.last_result = Some(result.clone());
                self.draw_deferred(ChartRequest::new(MAIN_CHART, result.primary.scores.clone()))
                    .await;
                Ok(DiagnosisStep::Finished(result))
            }
        }
    }

    /// Skip the quiz and recommend the featured bean
    pub async fn omakase(&mut self) -> Result<Recommendation, AppError> {
        let result = self.services()?.selector.omakase_featured()?;
        self.navigate(Screen::Result);
        self.pacer.reset();
        self.presenter.show_omakase(&result);
        self.last_result = Some(result.clone());
        self.draw_deferred(ChartRequest::new(MAIN_CHART, result.primary.scores.clone()))
            .await;
        Ok(result)
    }

    /// Open the gacha screen
    pub fn enter_gacha(&mut self) -> Result<(), AppError> {
        self.services()?;
        self.navigate(Screen::Gacha);
        self.pacer.reset();
        Ok(())
    }

    /// Spin the gacha and show the revealed bean
    pub async fn pull_gacha(&mut self) -> Result<Bean, AppError> {
        if self.screen != Screen::Gacha {
            self.enter_gacha()?;
        }
        let services = self.services()?;
        self.presenter.gacha_spinning(true);
        let pulled = services.gacha.pull().await;
        self.presenter.gacha_spinning(false);

        let bean = match pulled {
            Ok(bean) => bean,
            Err(GachaError::NoBeans) => {
                self.presenter.notify(NO_BEANS_NOTICE);
                return Err(GachaError::NoBeans.into());
            }
            Err(e) => return Err(e.into()),
        };
        self.presenter.show_gacha(&bean);
        self.draw_deferred(ChartRequest::new(GACHA_CHART, bean.scores.clone()))
            .await;
        Ok(bean)
    }

    /// Break the current result's bean down into its components
    pub async fn show_blend_detail(&mut self) -> Result<BlendBreakdown, AppError> {
        let bean = self
            .last_result
            .as_ref()
            .map(|r| r.primary.clone())
            .ok_or(AppError::NotABlend)?;
        let breakdown = self
            .services()?
            .selector
            .blend_breakdown(&bean)
            .ok_or(AppError::NotABlend)?;

        self.pacer.reset();
        self.go(Screen::Blend);
        self.presenter.show_blend(&breakdown);

        if self.pacer.chart_defer().await {
            for component in &breakdown.components {
                self.presenter.render_chart(
                    &ChartRequest::new(blend_chart_target(&component.bean), component.bean.scores.clone())
                        .with_overrides(ChartStyleOverrides::sized(BLEND_CHART_SIZE)),
                );
            }
        }
        Ok(breakdown)
    }

    async fn draw_deferred(&self, request: ChartRequest) {
        if self.pacer.chart_defer().await {
            self.presenter.render_chart(&request);
        } else {
            debug!("Chart {} dropped: screen left", request.target);
        }
    }
}
