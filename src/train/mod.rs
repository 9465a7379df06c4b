pub mod example;
pub mod metrics;
pub mod mini_batch;
pub mod report;
pub mod schedule;
pub mod trainer;

pub use example::TrainingExample;
pub use metrics::{composite_error, example_error, sampled_composite_error};
pub use mini_batch::{fixed_cycle_train, MiniBatchOptions};
pub use report::TrainReport;
pub use schedule::learning_rate;
pub use trainer::{train_to_convergence, ConvergenceOptions};
