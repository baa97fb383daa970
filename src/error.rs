use thiserror::Error;

/// Error type for the training engine.
///
/// Numeric instability (NaN/∞ appearing mid-computation) is deliberately
/// absent from this enum: the math layer recovers it locally through
/// sanitize/clamp and never surfaces it as an error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("dimension mismatch in {operation}: {left:?} vs {right:?}")]
    DimensionMismatch {
        operation: &'static str,
        left: Vec<usize>,
        right: Vec<usize>,
    },

    #[error("layer {index} has zero width")]
    ZeroLayerWidth { index: usize },

    #[error("learning rate must be positive and finite, got {value}")]
    InvalidLearningRate { value: f64 },

    #[error("batch size must be between 1 and the dataset size {dataset_len}, got {batch_size}")]
    InvalidBatchSize {
        batch_size: usize,
        dataset_len: usize,
    },

    #[error("epoch count must be at least 1")]
    ZeroEpochs,

    #[error("dataset contains no examples")]
    EmptyDataset,

    #[error("cannot train on an empty batch")]
    EmptyBatch,

    #[error("example {index}: {field} length {actual} does not match expected {expected}")]
    ExampleShape {
        index: usize,
        field: &'static str,
        expected: usize,
        actual: usize,
    },
}
