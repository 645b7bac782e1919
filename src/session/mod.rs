pub mod config;
pub mod trainer;

pub use config::{SetupError, TrialConfig};
pub use trainer::{Outcome, RunSummary, TrainerSession};
