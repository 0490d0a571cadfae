//! Repository Pattern Abstractions
//!
//! This module defines the storage traits of the engine, keeping the scoring
//! logic independent from how matches and predictions are held.
//!
//! # Design
//!
//! Two abstractions cover the engine's state:
//! - `MatchStore`: the catalog of scoreable matches
//! - `PredictionRepository`: every prediction the engine has produced
//!
//! Both are injected into the service as `Arc<dyn ...>` trait objects; there
//! is no ambient global instance.
//!
//! # Current Implementation
//!
//! The `InMemory` implementations provide thread-safe, in-process storage
//! using `Arc<RwLock>` for concurrent access.
//!
//! # Future
//!
//! The traits are async so a database-backed implementation can slot in
//! without touching the scoring service.
//!
//! # Example
//!
//! ```rust,no_run
//! use formcast::infrastructure::InMemoryPredictionRepository;
//!
//! # async {
//! let repo = InMemoryPredictionRepository::new();
//! // repo.save(&prediction).await?;
//! // let recent = repo.find_recent(10).await?;
//! # };
//! ```

use crate::domain::errors::PredictionError;
use crate::domain::matches::MatchInfo;
use crate::domain::prediction::Prediction;
use async_trait::async_trait;
use uuid::Uuid;

/// Repository for storing and retrieving scored predictions
#[async_trait]
pub trait PredictionRepository: Send + Sync {
    /// Store a prediction
    async fn save(&self, prediction: &Prediction) -> Result<(), PredictionError>;

    /// Look up a single prediction by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Prediction>, PredictionError>;

    /// Most recently stored predictions, newest first
    async fn find_recent(&self, limit: usize) -> Result<Vec<Prediction>, PredictionError>;

    /// Every stored prediction, oldest first
    async fn get_all(&self) -> Result<Vec<Prediction>, PredictionError>;

    /// Count stored predictions
    async fn count(&self) -> Result<usize, PredictionError>;
}

/// Catalog of matches available for scoring
#[async_trait]
pub trait MatchStore: Send + Sync {
    /// Add a match to the catalog, replacing any entry with the same id
    async fn upsert(&self, info: &MatchInfo) -> Result<(), PredictionError>;

    /// Look up a match by id
    async fn find_by_id(&self, id: &str) -> Result<Option<MatchInfo>, PredictionError>;

    /// Every cataloged match, insertion order
    async fn get_all(&self) -> Result<Vec<MatchInfo>, PredictionError>;
}
