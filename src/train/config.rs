use serde::{Deserialize, Serialize};

use crate::activation::ActivationFunction;
use crate::error::EngineError;

/// Hyperparameters for one training run.
///
/// # Fields
/// - `learning_rate` — SGD step size; must be positive and finite
/// - `batch_size`    — examples per gradient update; must fit the dataset
/// - `epochs`        — full passes over the dataset; at least 1
/// - `activation`    — hidden-layer activation (the output layer is always
///                     Sigmoid)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingConfig {
    pub learning_rate: f64,
    pub batch_size: usize,
    pub epochs: usize,
    pub activation: ActivationFunction,
}

impl TrainingConfig {
    pub fn new(
        learning_rate: f64,
        batch_size: usize,
        epochs: usize,
        activation: ActivationFunction,
    ) -> Self {
        TrainingConfig {
            learning_rate,
            batch_size,
            epochs,
            activation,
        }
    }

    /// Checks the dataset-independent hyperparameters.
    pub fn validate_hyperparameters(&self) -> Result<(), EngineError> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(EngineError::InvalidLearningRate {
                value: self.learning_rate,
            });
        }
        if self.epochs == 0 {
            return Err(EngineError::ZeroEpochs);
        }
        Ok(())
    }

    /// Full validation against a concrete dataset size.
    pub fn validate(&self, dataset_len: usize) -> Result<(), EngineError> {
        self.validate_hyperparameters()?;
        if dataset_len == 0 {
            return Err(EngineError::EmptyDataset);
        }
        if self.batch_size == 0 || self.batch_size > dataset_len {
            return Err(EngineError::InvalidBatchSize {
                batch_size: self.batch_size,
                dataset_len,
            });
        }
        Ok(())
    }
}

impl Default for TrainingConfig {
    fn default() -> Self {
        TrainingConfig {
            learning_rate: 0.01,
            batch_size: 5,
            epochs: 100,
            activation: ActivationFunction::ReLU,
        }
    }
}
