pub mod activation;
pub mod config;
pub mod error;
pub mod gradient;
pub mod loss;
pub mod network;
pub mod train;

// Convenience re-exports
pub use activation::Activation;
pub use config::NetworkConfig;
pub use error::{Error, Result};
pub use gradient::Gradient;
pub use loss::LossFunction;
pub use network::{Network, TrainingTrace};
pub use train::{
    composite_error, fixed_cycle_train, train_to_convergence, ConvergenceOptions,
    MiniBatchOptions, TrainReport, TrainingExample,
};
