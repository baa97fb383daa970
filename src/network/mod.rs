pub mod architecture;
pub mod forward;
pub mod snapshot;
pub mod weights;

pub use architecture::NetworkArchitecture;
pub use forward::{forward_pass, predict, ForwardPassResult, LayerActivation};
pub use snapshot::{ModelMetadata, NetworkSnapshot};
pub use weights::NetworkWeights;
