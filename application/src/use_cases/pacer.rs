//! Cancellable pacing delays
//!
//! Leaving a screen cancels whatever delay is pending for it, so a stale
//! timer can never push the flow forward afterwards.

use crate::config::PacingParams;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::trace;

/// Waits out pacing delays until cancelled
pub struct Pacer {
    params: PacingParams,
    token: CancellationToken,
}

impl Pacer {
    pub fn new(params: PacingParams) -> Self {
        Self {
            params,
            token: CancellationToken::new(),
        }
    }

    pub fn params(&self) -> &PacingParams {
        &self.params
    }

    /// Wait `delay`; `false` when cancelled first
    pub async fn wait(&self, delay: Duration) -> bool {
        if self.token.is_cancelled() {
            return false;
        }
        if delay.is_zero() {
            return true;
        }
        tokio::select! {
            _ = self.token.cancelled() => {
                trace!("Pacing delay cancelled");
                false
            }
            _ = tokio::time::sleep(delay) => true,
        }
    }

    pub async fn answer_cooldown(&self) -> bool {
        self.wait(self.params.answer_cooldown).await
    }

    pub async fn chart_defer(&self) -> bool {
        self.wait(self.params.chart_defer).await
    }

    /// Cancel every pending and future wait until [`Pacer::reset`]
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Start a fresh pacing scope
    pub fn reset(&mut self) {
        if self.token.is_cancelled() {
            self.token = CancellationToken::new();
        }
    }

    /// Handle for cancelling from another task
    pub fn cancellation_token(&self) -> CancellationToken {
        self.token.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_wait_completes() {
        let pacer = Pacer::new(PacingParams::immediate().with_answer_cooldown(Duration::from_millis(1)));
        assert!(pacer.answer_cooldown().await);
        assert!(pacer.chart_defer().await);
    }

    #[tokio::test]
    async fn test_cancel_interrupts_pending_wait() {
        let pacer = Pacer::new(PacingParams::default());
        let token = pacer.cancellation_token();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(5)).await;
            token.cancel();
        });
        assert!(!pacer.wait(Duration::from_secs(30)).await);
    }

    #[tokio::test]
    async fn test_reset_after_cancel() {
        let mut pacer = Pacer::new(PacingParams::immediate());
        pacer.cancel();
        assert!(!pacer.answer_cooldown().await);
        pacer.reset();
        assert!(pacer.answer_cooldown().await);
    }
}
