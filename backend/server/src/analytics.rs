//! # Analytics
//!
//! Best-effort event per saved feedback. The endpoint never waits on it and
//! callers never see its outcome.
//!
//! [`MockAnalytics`] stands in for a telemetry pipeline: fixed latency plus a
//! small random failure rate.
use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use thiserror::Error;
use tokio::time::sleep;
use tracing::info;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Analytics logging failed")]
    Failed,
}

#[async_trait]
pub trait AnalyticsLogger: Send + Sync {
    async fn log(&self, recipe_id: &str, feedback: &str) -> Result<(), AnalyticsError>;
}

pub struct MockAnalytics {
    latency: Duration,
    failure_rate: f64,
}

impl MockAnalytics {
    /// `failure_rate` is clamped to `0.0..=1.0`, NaN counts as never failing.
    pub fn new(latency: Duration, failure_rate: f64) -> Self {
        let failure_rate = if failure_rate.is_nan() {
            0.0
        } else {
            failure_rate.clamp(0.0, 1.0)
        };

        Self {
            latency,
            failure_rate,
        }
    }
}

#[async_trait]
impl AnalyticsLogger for MockAnalytics {
    async fn log(&self, recipe_id: &str, _feedback: &str) -> Result<(), AnalyticsError> {
        sleep(self.latency).await;

        let failed = rand::thread_rng().gen_bool(self.failure_rate);
        if failed {
            return Err(AnalyticsError::Failed);
        }

        info!("[Analytics] Feedback submitted for recipe {recipe_id}");

        Ok(())
    }
}
