//! In-Memory Repository Implementations
//!
//! Thread-safe, in-memory implementations of the repository traits defined
//! in `domain::repositories`.
//!
//! # Features
//!
//! - **Thread-safe**: Uses `Arc<RwLock>` for concurrent access
//! - **Async**: All operations are async-ready
//! - **Testing**: Ideal for unit tests and development
//! - **Production**: Suitable for single-instance deployments
//!
//! # Limitations
//!
//! - Data is lost on application restart
//! - No persistence across multiple instances
//! - Limited by available RAM
//!
//! For durable storage, implement `PredictionRepository` and `MatchStore`
//! with PostgreSQL or similar.

use crate::domain::errors::PredictionError;
use crate::domain::matches::MatchInfo;
use crate::domain::prediction::Prediction;
use crate::domain::repositories::{MatchStore, PredictionRepository};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory implementation of PredictionRepository.
///
/// Predictions are kept in insertion order; saving an id that already
/// exists overwrites the stored entry in place, so ordering is stable
/// under re-saves.
pub struct InMemoryPredictionRepository {
    predictions: Arc<RwLock<Vec<Prediction>>>,
}

impl InMemoryPredictionRepository {
    pub fn new() -> Self {
        Self {
            predictions: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl Default for InMemoryPredictionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PredictionRepository for InMemoryPredictionRepository {
    async fn save(&self, prediction: &Prediction) -> Result<(), PredictionError> {
        let mut predictions = self.predictions.write().await;
        match predictions.iter_mut().find(|p| p.id == prediction.id) {
            Some(existing) => *existing = prediction.clone(),
            None => predictions.push(prediction.clone()),
        }
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Prediction>, PredictionError> {
        let predictions = self.predictions.read().await;
        Ok(predictions.iter().find(|p| p.id == id).cloned())
    }

    async fn find_recent(&self, limit: usize) -> Result<Vec<Prediction>, PredictionError> {
        let predictions = self.predictions.read().await;
        Ok(predictions.iter().rev().take(limit).cloned().collect())
    }

    async fn get_all(&self) -> Result<Vec<Prediction>, PredictionError> {
        Ok(self.predictions.read().await.clone())
    }

    async fn count(&self) -> Result<usize, PredictionError> {
        Ok(self.predictions.read().await.len())
    }
}

/// In-memory implementation of MatchStore.
///
/// Upserting an existing match id replaces the stored entry in place.
pub struct InMemoryMatchStore {
    matches: Arc<RwLock<Vec<MatchInfo>>>,
}

impl InMemoryMatchStore {
    pub fn new() -> Self {
        Self {
            matches: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl Default for InMemoryMatchStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MatchStore for InMemoryMatchStore {
    async fn upsert(&self, match_info: &MatchInfo) -> Result<(), PredictionError> {
        let mut matches = self.matches.write().await;
        match matches.iter_mut().find(|m| m.id == match_info.id) {
            Some(existing) => *existing = match_info.clone(),
            None => matches.push(match_info.clone()),
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<MatchInfo>, PredictionError> {
        let matches = self.matches.read().await;
        Ok(matches.iter().find(|m| m.id == id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<MatchInfo>, PredictionError> {
        Ok(self.matches.read().await.clone())
    }
}
