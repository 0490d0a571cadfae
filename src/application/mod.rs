// Scoring pipeline orchestrator
pub mod scoring;

// Best-effort prediction commentary
pub mod enrichment;

pub use scoring::PredictionService;
