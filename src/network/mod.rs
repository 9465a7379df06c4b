pub mod builder;
pub mod layer;
pub mod network;
pub mod neuron;
pub mod serializer;

pub use builder::DEFAULT_BIAS;
pub use layer::Layer;
pub use network::{Network, TrainingTrace};
pub use neuron::Neuron;
