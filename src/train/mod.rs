pub mod backprop;
pub mod batch;
pub mod config;
pub mod dataset;
pub mod epoch_stats;
pub mod evaluate;
pub mod session;

pub use backprop::{backpropagate, Gradients};
pub use batch::{train_batch, update_weights};
pub use config::TrainingConfig;
pub use dataset::{Dataset, TrainingExample};
pub use epoch_stats::EpochStats;
pub use evaluate::{evaluate, EvalMetrics, ACCURACY_TOLERANCE};
pub use session::{SessionPhase, TrainingSession};
