pub mod backprop;
pub mod record;

pub use backprop::{compute, mean};
pub use record::{Gradient, NeuronGradient};
