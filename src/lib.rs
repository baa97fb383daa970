pub mod math;
pub mod activation;
pub mod network;
pub mod loss;
pub mod error;
pub mod train;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::activation::ActivationFunction;
pub use error::EngineError;
pub use network::architecture::NetworkArchitecture;
pub use network::forward::{forward_pass, predict, ForwardPassResult};
pub use network::snapshot::{ModelMetadata, NetworkSnapshot};
pub use network::weights::NetworkWeights;
pub use loss::mse::MseLoss;
pub use train::config::TrainingConfig;
pub use train::dataset::{Dataset, TrainingExample};
pub use train::epoch_stats::EpochStats;
pub use train::evaluate::{evaluate, EvalMetrics};
pub use train::session::{SessionPhase, TrainingSession};
