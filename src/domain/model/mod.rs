// Feature derivation from raw match statistics
pub mod features;

// Win/draw/loss distribution
pub mod distribution;

// Value, risk and advice layer
pub mod decision;

// Raw-vector scoring path
pub mod custom;

/// Tag stamped on predictions produced by the match-based pipeline.
pub const MATCH_MODEL_VERSION: &str = "formcast-v3.0-match";
/// Tag stamped on results of the raw-vector path.
pub const CUSTOM_MODEL_VERSION: &str = "formcast-v3.0-custom";
