use crate::domain::errors::PredictionError;
use crate::domain::prediction::OutcomeDistribution;
use tracing::warn;

/// Slack allowed on probability bounds and the unit-sum check. The model is
/// closed-form, so anything beyond rounding noise means a real fault.
pub const AUDIT_TOLERANCE: f64 = 1e-9;

/// Audit for outcome distributions leaving the model.
///
/// The scoring path logs violations and carries on; tests and callers that
/// want a hard failure use [`DistributionAudit::ensure`].
pub struct DistributionAudit;

impl DistributionAudit {
    /// Checks a distribution. Returns true if sound, false otherwise.
    pub fn check(dist: &OutcomeDistribution) -> bool {
        Self::audit(dist).is_none()
    }

    /// Checks a distribution, promoting any violation to an error.
    pub fn ensure(dist: &OutcomeDistribution) -> Result<(), PredictionError> {
        match Self::audit(dist) {
            None => Ok(()),
            Some(detail) => Err(PredictionError::InvariantViolation { detail }),
        }
    }

    fn audit(dist: &OutcomeDistribution) -> Option<String> {
        let components = [
            ("home", dist.home),
            ("draw", dist.draw),
            ("away", dist.away),
        ];

        for (name, value) in components {
            if !value.is_finite() {
                warn!("Audit FAILED: {} probability is not finite: {}", name, value);
                return Some(format!("{name} probability is not finite: {value}"));
            }
            if !(-AUDIT_TOLERANCE..=1.0 + AUDIT_TOLERANCE).contains(&value) {
                warn!(
                    "Audit FAILED: {} probability out of bounds: {}",
                    name, value
                );
                return Some(format!("{name} probability out of bounds: {value}"));
            }
        }

        let sum = dist.sum();
        if (sum - 1.0).abs() > AUDIT_TOLERANCE {
            warn!("Audit FAILED: probabilities sum to {} instead of 1", sum);
            return Some(format!("probabilities sum to {sum} instead of 1"));
        }

        None
    }
}

/// Confidence lives on a 0..=100 scale. Returns false and logs when a value
/// escapes it.
pub fn confidence_in_range(confidence: f64) -> bool {
    let in_range = confidence.is_finite()
        && (-AUDIT_TOLERANCE..=100.0 + AUDIT_TOLERANCE).contains(&confidence);
    if !in_range {
        warn!("Audit FAILED: confidence out of range: {}", confidence);
    }
    in_range
}
