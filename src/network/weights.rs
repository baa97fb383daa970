use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::math::{Matrix, Vector};
use crate::network::architecture::NetworkArchitecture;

/// All learned parameters of a network.
///
/// `weights[i]` has shape (layer_sizes[i+1], layer_sizes[i]); `biases[i]`
/// has length layer_sizes[i+1]. Training never mutates an existing value:
/// each update step produces a fresh `NetworkWeights`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkWeights {
    pub weights: Vec<Matrix>,
    pub biases: Vec<Vector>,
}

impl NetworkWeights {
    /// He-initialized weights and zero biases for the given architecture.
    pub fn initialize(architecture: &NetworkArchitecture) -> Result<NetworkWeights, EngineError> {
        architecture.validate()?;
        let sizes = architecture.layer_sizes();
        let mut weights = Vec::with_capacity(sizes.len() - 1);
        let mut biases = Vec::with_capacity(sizes.len() - 1);
        for pair in sizes.windows(2) {
            let (fan_in, fan_out) = (pair[0], pair[1]);
            weights.push(Matrix::he(fan_out, fan_in));
            biases.push(vec![0.0; fan_out]);
        }
        Ok(NetworkWeights { weights, biases })
    }

    pub fn layer_count(&self) -> usize {
        self.weights.len()
    }

    /// Checks that these parameters fit `architecture` exactly.
    pub fn validate_against(&self, architecture: &NetworkArchitecture) -> Result<(), EngineError> {
        let sizes = architecture.layer_sizes();
        if self.weights.len() != sizes.len() - 1 || self.biases.len() != sizes.len() - 1 {
            return Err(EngineError::DimensionMismatch {
                operation: "weights layer count",
                left: vec![self.weights.len(), self.biases.len()],
                right: vec![sizes.len() - 1],
            });
        }
        for (i, pair) in sizes.windows(2).enumerate() {
            let (fan_in, fan_out) = (pair[0], pair[1]);
            let w = &self.weights[i];
            if w.rows != fan_out || w.cols != fan_in || self.biases[i].len() != fan_out {
                return Err(EngineError::DimensionMismatch {
                    operation: "weights layer shape",
                    left: vec![w.rows, w.cols, self.biases[i].len()],
                    right: vec![fan_out, fan_in, fan_out],
                });
            }
        }
        Ok(())
    }
}
