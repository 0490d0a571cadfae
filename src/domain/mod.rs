// Match catalog types
pub mod matches;

// Scoring model (features, distribution, decision layer, raw-vector path)
pub mod model;

// Port interfaces
pub mod ports;

// Prediction record types
pub mod prediction;

// Repository traits
pub mod repositories;

// Aggregate statistics projection
pub mod stats;

// Distribution invariant audit
pub mod validation;

// Domain-specific error types
pub mod errors;
