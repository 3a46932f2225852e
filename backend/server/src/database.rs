//! # Feedback Store
//!
//! Append-only feedback per recipe.
//!
//! ## Requirements
//!
//! - Insertion order preserved per recipe
//! - Concurrent appends from in-flight requests never lose an entry
//! - Failures distinguishable from success so the endpoint can answer 500
//!
//! ## Implementation
//!
//! - Memory: one `RwLock` around `recipeId -> Vec<feedback>`, writes serialized by the lock
//! - Redis: one list per recipe under `feedback:{recipeId}`
//! - `RPUSH` is atomic, so Redis serializes concurrent appends for us
//! - `LRANGE 0 -1` reads a recipe back in insertion order
//!
//! ## Tests
//!
//! The Redis round trip is `#[ignore]`d, run it with a live server:
//! ```sh
//! REDIS_URL=redis://127.0.0.1:6379 cargo test -p server -- --ignored
//! ```
use std::{collections::HashMap, time::Duration};

use async_trait::async_trait;
use redis::{
    AsyncCommands, Client, RedisError,
    aio::{ConnectionManager, ConnectionManagerConfig},
};
use thiserror::Error;
use tokio::{sync::RwLock, time::sleep};

pub const FEEDBACK_KEY_PREFIX: &str = "feedback";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Redis error: {0}")]
    Redis(#[from] RedisError),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait FeedbackStore: Send + Sync {
    async fn append(&self, recipe_id: &str, feedback: &str) -> Result<(), StoreError>;

    async fn entries(&self, recipe_id: &str) -> Result<Vec<String>, StoreError>;
}

#[derive(Default)]
pub struct MemoryStore {
    feedback: RwLock<HashMap<String, Vec<String>>>,
    latency: Duration,
}

impl MemoryStore {
    pub fn new(latency: Duration) -> Self {
        Self {
            feedback: RwLock::new(HashMap::new()),
            latency,
        }
    }
}

#[async_trait]
impl FeedbackStore for MemoryStore {
    async fn append(&self, recipe_id: &str, feedback: &str) -> Result<(), StoreError> {
        if !self.latency.is_zero() {
            sleep(self.latency).await;
        }

        self.feedback
            .write()
            .await
            .entry(recipe_id.to_string())
            .or_default()
            .push(feedback.to_string());

        Ok(())
    }

    async fn entries(&self, recipe_id: &str) -> Result<Vec<String>, StoreError> {
        Ok(self
            .feedback
            .read()
            .await
            .get(recipe_id)
            .cloned()
            .unwrap_or_default())
    }
}

pub struct RedisStore {
    connection: ConnectionManager,
}

impl RedisStore {
    pub async fn connect(redis_url: &str) -> Result<Self, StoreError> {
        let config = ConnectionManagerConfig::new()
            .set_number_of_retries(1)
            .set_connection_timeout(Duration::from_millis(100));

        let client = Client::open(redis_url)?;
        let connection = client.get_connection_manager_with_config(config).await?;

        Ok(Self { connection })
    }
}

#[async_trait]
impl FeedbackStore for RedisStore {
    async fn append(&self, recipe_id: &str, feedback: &str) -> Result<(), StoreError> {
        let mut connection = self.connection.clone();

        let _: usize = connection.rpush(feedback_key(recipe_id), feedback).await?;

        Ok(())
    }

    async fn entries(&self, recipe_id: &str) -> Result<Vec<String>, StoreError> {
        let mut connection = self.connection.clone();

        Ok(connection.lrange(feedback_key(recipe_id), 0, -1).await?)
    }
}

pub fn feedback_key(recipe_id: &str) -> String {
    format!("{FEEDBACK_KEY_PREFIX}:{recipe_id}")
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn test_feedback_key() {
        assert_eq!(feedback_key("pad-thai"), "feedback:pad-thai");
    }

    #[tokio::test]
    async fn test_append_preserves_order_per_recipe() {
        let store = MemoryStore::default();

        store.append("soup", "too salty").await.unwrap();
        store.append("cake", "perfect").await.unwrap();
        store.append("soup", "fixed it with lemon").await.unwrap();

        assert_eq!(
            store.entries("soup").await.unwrap(),
            vec!["too salty", "fixed it with lemon"]
        );
        assert_eq!(store.entries("cake").await.unwrap(), vec!["perfect"]);
        assert!(store.entries("bread").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_appends_are_not_lost() {
        let store = Arc::new(MemoryStore::new(Duration::from_millis(1)));

        let handles: Vec<_> = (0..50)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.append("stew", &format!("note {i}")).await })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let mut entries = store.entries("stew").await.unwrap();
        entries.sort();
        let mut expected: Vec<String> = (0..50).map(|i| format!("note {i}")).collect();
        expected.sort();

        assert_eq!(entries, expected);
    }

    #[tokio::test]
    async fn test_append_stores_text_verbatim() {
        let store = MemoryStore::default();
        let feedback = "  Spicy! 🌶️ \"really\" \n";

        store.append("curry", feedback).await.unwrap();

        assert_eq!(store.entries("curry").await.unwrap(), vec![feedback]);
    }

    #[tokio::test]
    async fn test_redis_rejects_bad_url() {
        assert!(matches!(
            RedisStore::connect("not a redis url").await,
            Err(StoreError::Redis(_))
        ));
    }

    #[tokio::test]
    #[ignore = "needs a running Redis at REDIS_URL"]
    async fn test_redis_append_preserves_order() {
        let redis_url =
            std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string());
        let store = RedisStore::connect(&redis_url).await.unwrap();

        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let recipe_id = format!("test-recipe-{nanos}");

        store.append(&recipe_id, "too salty").await.unwrap();
        store.append(&recipe_id, "  fixed it with lemon 🍋 ").await.unwrap();

        assert_eq!(
            store.entries(&recipe_id).await.unwrap(),
            vec!["too salty", "  fixed it with lemon 🍋 "]
        );

        let mut connection = store.connection.clone();
        let _: usize = connection.del(feedback_key(&recipe_id)).await.unwrap();
    }
}
