use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Layer widths of a feedforward network, input to output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkArchitecture {
    pub input_size: usize,
    pub hidden_layers: Vec<usize>,
    pub output_size: usize,
}

impl NetworkArchitecture {
    pub fn new(input_size: usize, hidden_layers: Vec<usize>, output_size: usize) -> Self {
        NetworkArchitecture {
            input_size,
            hidden_layers,
            output_size,
        }
    }

    /// All layer widths, input first. Always has at least two entries.
    pub fn layer_sizes(&self) -> Vec<usize> {
        let mut sizes = Vec::with_capacity(self.hidden_layers.len() + 2);
        sizes.push(self.input_size);
        sizes.extend_from_slice(&self.hidden_layers);
        sizes.push(self.output_size);
        sizes
    }

    /// Number of weight layers (transitions between consecutive widths).
    pub fn transitions(&self) -> usize {
        self.hidden_layers.len() + 1
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        for (index, &width) in self.layer_sizes().iter().enumerate() {
            if width == 0 {
                return Err(EngineError::ZeroLayerWidth { index });
            }
        }
        Ok(())
    }
}
