//! Gacha use case
//!
//! One pull spins for a fixed time and then reveals a uniformly random
//! bean. Only one pull may spin at a time.

use crate::ports::catalog_store::CatalogStore;
use beanquiz_domain::{Bean, RandomSource};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Errors raised by a gacha pull
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GachaError {
    #[error("A pull is already spinning")]
    AlreadySpinning,

    #[error("No beans to draw from")]
    NoBeans,
}

/// Clears the spinning flag however the pull ends
struct SpinGuard<'a>(&'a AtomicBool);

impl Drop for SpinGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Use case for gacha pulls
pub struct GachaMachine {
    catalog: Arc<dyn CatalogStore>,
    rng: Arc<dyn RandomSource>,
    spin: Duration,
    spinning: AtomicBool,
}

impl GachaMachine {
    pub fn new(catalog: Arc<dyn CatalogStore>, rng: Arc<dyn RandomSource>, spin: Duration) -> Self {
        Self {
            catalog,
            rng,
            spin,
            spinning: AtomicBool::new(false),
        }
    }

    pub fn is_spinning(&self) -> bool {
        self.spinning.load(Ordering::Acquire)
    }

    /// Spin, then reveal a random bean.
    ///
    /// A second pull while one is spinning is refused and changes nothing.
    pub async fn pull(&self) -> Result<Bean, GachaError> {
        if self.spinning.swap(true, Ordering::AcqRel) {
            debug!("Gacha pull ignored: already spinning");
            return Err(GachaError::AlreadySpinning);
        }
        let _guard = SpinGuard(&self.spinning);

        if self.catalog.beans().is_empty() {
            return Err(GachaError::NoBeans);
        }

        if !self.spin.is_zero() {
            tokio::time::sleep(self.spin).await;
        }

        let bean = self
            .catalog
            .random_bean(self.rng.as_ref())
            .cloned()
            .ok_or(GachaError::NoBeans)?;
        info!("Gacha revealed {}", bean.id);
        Ok(bean)
    }
}
