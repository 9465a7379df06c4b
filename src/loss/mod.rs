pub mod cross_entropy;
pub mod loss_function;
pub mod square_difference;

pub use cross_entropy::CategoricalCrossEntropy;
pub use loss_function::LossFunction;
pub use square_difference::SquareDifference;
