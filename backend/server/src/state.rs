use std::sync::Arc;

use tracing::info;

use super::{
    analytics::{AnalyticsLogger, MockAnalytics},
    config::{Config, StoreKind},
    database::{FeedbackStore, MemoryStore, RedisStore, StoreError},
};

pub struct State {
    pub config: Config,
    pub store: Arc<dyn FeedbackStore>,
    pub analytics: Arc<dyn AnalyticsLogger>,
}

impl State {
    pub async fn new(config: Config) -> Result<Arc<Self>, StoreError> {
        let store: Arc<dyn FeedbackStore> = match config.store {
            StoreKind::Memory => {
                info!("Using in-memory feedback store");
                Arc::new(MemoryStore::new(config.store_latency))
            }
            StoreKind::Redis => {
                info!("Connecting to Redis at {}", config.redis_url);
                Arc::new(RedisStore::connect(&config.redis_url).await?)
            }
        };

        let analytics = Arc::new(MockAnalytics::new(
            config.analytics_latency,
            config.analytics_failure_rate,
        ));

        Ok(Self::with_collaborators(config, store, analytics))
    }

    pub fn with_collaborators(
        config: Config,
        store: Arc<dyn FeedbackStore>,
        analytics: Arc<dyn AnalyticsLogger>,
    ) -> Arc<Self> {
        Arc::new(Self {
            config,
            store,
            analytics,
        })
    }
}
