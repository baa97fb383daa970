use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::math::Vector;

/// One supervised input/target pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingExample {
    pub input: Vector,
    pub target: Vector,
    /// Optional display label for this example.
    #[serde(default)]
    pub label: Option<String>,
}

impl TrainingExample {
    pub fn new(input: Vector, target: Vector) -> Self {
        TrainingExample {
            input,
            target,
            label: None,
        }
    }
}

/// A named collection of training examples with declared shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub description: String,
    pub input_size: usize,
    pub output_size: usize,
    pub examples: Vec<TrainingExample>,
}

impl Dataset {
    /// Checks that every example matches the declared input/output widths.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.examples.is_empty() {
            return Err(EngineError::EmptyDataset);
        }
        for (index, example) in self.examples.iter().enumerate() {
            if example.input.len() != self.input_size {
                return Err(EngineError::ExampleShape {
                    index,
                    field: "input",
                    expected: self.input_size,
                    actual: example.input.len(),
                });
            }
            if example.target.len() != self.output_size {
                return Err(EngineError::ExampleShape {
                    index,
                    field: "target",
                    expected: self.output_size,
                    actual: example.target.len(),
                });
            }
        }
        Ok(())
    }
}
