use crate::config::Config;
use crate::domain::errors::PredictionError;
use crate::domain::matches::MatchInfo;
use crate::domain::model::{self, custom, decision, distribution, features};
use crate::domain::ports::{InsightService, OddsSource};
use crate::domain::prediction::{CustomScore, Prediction};
use crate::domain::repositories::{MatchStore, PredictionRepository};
use crate::domain::stats::PredictionStats;
use crate::domain::validation::{DistributionAudit, confidence_in_range};
use crate::infrastructure::seed;
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

/// Orchestrates the full scoring pipeline: feature derivation, outcome
/// distribution, value assessment and persistence.
///
/// All collaborators come in through the constructor, so tests can swap the
/// odds feed or the insight backend without touching the pipeline.
pub struct PredictionService {
    match_store: Arc<dyn MatchStore>,
    repository: Arc<dyn PredictionRepository>,
    odds_source: Arc<dyn OddsSource>,
    insight: Arc<dyn InsightService>,
    config: Config,
}

impl PredictionService {
    pub fn new(
        match_store: Arc<dyn MatchStore>,
        repository: Arc<dyn PredictionRepository>,
        odds_source: Arc<dyn OddsSource>,
        insight: Arc<dyn InsightService>,
        config: Config,
    ) -> Self {
        Self {
            match_store,
            repository,
            odds_source,
            insight,
            config,
        }
    }

    /// Scores a fixture end to end and persists the result.
    ///
    /// Insight enrichment is best effort: an unavailable backend downgrades
    /// the prediction to `insight: None` instead of failing the call.
    pub async fn predict_match(
        &self,
        match_info: &MatchInfo,
    ) -> Result<Prediction, PredictionError> {
        let features = features::derive(match_info);
        let dist = distribution::outcome_distribution(&features);

        if !DistributionAudit::check(&dist) {
            warn!(
                "PredictionService: distribution audit failed for match {}",
                match_info.id
            );
        }

        let (outcome, max_prob) = dist.strongest();
        let confidence = max_prob * 100.0;
        if !confidence_in_range(confidence) {
            warn!(
                "PredictionService: confidence {} out of range for match {}",
                confidence, match_info.id
            );
        }

        let market_odds = self
            .odds_source
            .sample(self.config.odds_floor, self.config.odds_ceiling);
        let value = decision::assess_value(
            max_prob,
            market_odds,
            self.config.value_threshold,
            self.config.max_stake,
        );
        let risk = decision::classify_risk(dist.spread(), confidence);
        let advice = decision::advice(outcome, confidence, risk, &value);

        let mut prediction = Prediction {
            id: Uuid::new_v4(),
            match_id: match_info.id.clone(),
            home_team: match_info.home_team.clone(),
            away_team: match_info.away_team.clone(),
            league: match_info.league.clone(),
            predicted_outcome: outcome,
            confidence,
            probabilities: dist.as_percentages(),
            features: features.rounded(),
            value,
            risk,
            advice,
            insight: None,
            model_version: model::MATCH_MODEL_VERSION.to_string(),
            created_at: Utc::now(),
        };

        match self.insight.annotate(&prediction).await {
            Ok(note) => prediction.insight = Some(note),
            Err(e) => warn!(
                "PredictionService: insight unavailable for match {}: {}",
                match_info.id, e
            ),
        }

        self.repository.save(&prediction).await?;
        info!(
            "PredictionService: {} vs {} -> {} at {:.1}% confidence",
            prediction.home_team,
            prediction.away_team,
            prediction.predicted_outcome,
            prediction.confidence
        );

        Ok(prediction)
    }

    /// Looks up a stored fixture and scores it.
    pub async fn predict_by_id(&self, match_id: &str) -> Result<Prediction, PredictionError> {
        let match_info = self.match_store.find_by_id(match_id).await?.ok_or_else(|| {
            PredictionError::MatchNotFound {
                id: match_id.to_string(),
            }
        })?;

        self.predict_match(&match_info).await
    }

    /// Scores a caller-supplied feature vector with the lightweight model.
    ///
    /// The result is returned directly and never persisted; it carries no
    /// fixture identity to store it under.
    pub fn score_custom(&self, features: &[f64]) -> Result<CustomScore, PredictionError> {
        let parsed = custom::CustomFeatures::from_slice(features)?;
        Ok(custom::score(&parsed, self.odds_source.as_ref()))
    }

    /// Most recent predictions, newest first. `None` falls back to the
    /// configured default page size.
    pub async fn recent(&self, limit: Option<usize>) -> Result<Vec<Prediction>, PredictionError> {
        let limit = limit.unwrap_or(self.config.default_list_limit);
        self.repository.find_recent(limit).await
    }

    /// Fetches a single stored prediction.
    pub async fn find(&self, id: Uuid) -> Result<Prediction, PredictionError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(PredictionError::PredictionNotFound { id })
    }

    /// Aggregates over every stored prediction.
    pub async fn statistics(&self) -> Result<PredictionStats, PredictionError> {
        let all = self.repository.get_all().await?;
        Ok(PredictionStats::from_predictions(&all))
    }

    /// Loads the built-in fixture catalog into the match store. Returns the
    /// number of fixtures loaded; predictions are generated on demand.
    pub async fn seed_samples(&self) -> Result<usize, PredictionError> {
        let catalog = seed::sample_matches();
        for match_info in &catalog {
            self.match_store.upsert(match_info).await?;
        }

        info!(
            "PredictionService: seeded {} sample fixtures",
            catalog.len()
        );
        Ok(catalog.len())
    }

    /// Every fixture currently in the match store.
    pub async fn matches(&self) -> Result<Vec<MatchInfo>, PredictionError> {
        self.match_store.get_all().await
    }
}
