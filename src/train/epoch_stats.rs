use serde::{Deserialize, Serialize};

/// Per-epoch training statistics.
///
/// When a progress channel is passed to `TrainingSession::run`, one
/// `EpochStats` value is sent at the end of every completed epoch.
/// Receivers use this to drive live charts and progress indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Total epochs requested for this run.
    pub total_epochs: usize,
    /// Mean MSE over the full dataset after this epoch's updates.
    pub loss: f64,
    /// Fraction of examples with every output within the accuracy tolerance.
    pub accuracy: f64,
    /// Wall-clock duration of this single epoch in milliseconds.
    pub elapsed_ms: u64,
}
