pub mod in_memory;
pub mod mock;
pub mod odds;
pub mod seed;

pub use in_memory::{InMemoryMatchStore, InMemoryPredictionRepository};
pub use odds::SimulatedOdds;
