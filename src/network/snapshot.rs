use serde::{Deserialize, Serialize};

use crate::network::architecture::NetworkArchitecture;
use crate::network::weights::NetworkWeights;

/// Optional descriptive metadata attached to a saved model.
///
/// All fields are optional so snapshots written by older versions (or by
/// hand) still load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelMetadata {
    /// Free-form description of what the model was trained for.
    pub description: Option<String>,
    /// Human-readable label for each output neuron, in order.
    pub output_labels: Option<Vec<String>>,
}

/// A fully serializable trained model: architecture plus parameters.
///
/// `NetworkSnapshot` round-trips through JSON without loss, so a reloaded
/// model produces bit-identical predictions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkSnapshot {
    /// Human-readable name used as the model file stem.
    pub name: String,
    pub architecture: NetworkArchitecture,
    pub weights: NetworkWeights,
    /// Optional metadata (description, output labels).
    #[serde(default)]
    pub metadata: Option<ModelMetadata>,
}

impl NetworkSnapshot {
    /// Serializes the snapshot to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a `NetworkSnapshot` from a JSON file.
    pub fn load_json(path: &str) -> std::io::Result<NetworkSnapshot> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}
