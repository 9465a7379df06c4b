//! Fixed-cycle mini-batch training with a scheduled learning rate.

use std::time::{Duration, Instant};

use crate::error::Result;
use crate::gradient;
use crate::network::Network;
use crate::train::example::TrainingExample;
use crate::train::metrics::sampled_composite_error;
use crate::train::report::TrainReport;
use crate::train::schedule::learning_rate;

const LOG_INTERVAL: Duration = Duration::from_secs(10);

/// Hyperparameters for [`fixed_cycle_train`].
#[derive(Debug, Clone)]
pub struct MiniBatchOptions {
    /// Exact number of update cycles to run.
    pub cycles: usize,
    /// Examples per mini-batch.
    pub batch_size: usize,
    /// Sample size for the pre/post composite-error estimates.
    pub error_sample_size: usize,
}

impl MiniBatchOptions {
    pub fn new(cycles: usize) -> MiniBatchOptions {
        MiniBatchOptions {
            cycles,
            batch_size: 10,
            error_sample_size: 500,
        }
    }
}

/// Runs exactly `options.cycles` mini-batch updates.
///
/// Each cycle takes a contiguous window of `batch_size` examples starting at a
/// rotating offset that wraps modulo the dataset length — a deterministic
/// sweep, not random sampling — averages the window's gradients, and applies
/// them scaled by the two-segment learning-rate schedule. The pre/post errors
/// in the report are estimated on a random sample rather than the full set.
///
/// # Panics
/// Panics if `examples` is empty or `batch_size` is zero.
pub fn fixed_cycle_train(
    network: &mut Network,
    examples: &[TrainingExample],
    options: &MiniBatchOptions,
) -> Result<TrainReport> {
    assert!(!examples.is_empty(), "examples must not be empty");
    assert!(options.batch_size > 0, "batch_size must be at least 1");

    let start = Instant::now();
    let mut rng = rand::thread_rng();

    log::info!("estimating initial performance on a random sample...");
    let pre = sampled_composite_error(network, examples, options.error_sample_size, &mut rng)?;
    log::info!("initial composite error estimate: {pre:.6e}");

    let mut offset = 0;
    let mut last_log = Instant::now();

    for cycle in 0..options.cycles {
        let batch = (0..options.batch_size).map(|i| &examples[(offset + i) % examples.len()]);
        let mean = gradient::mean(network, batch)?;

        network.apply_gradient(&mean, learning_rate(cycle, options.cycles));
        offset = (offset + options.batch_size) % examples.len();

        if last_log.elapsed() > LOG_INTERVAL {
            last_log = Instant::now();
            log::info!(
                "{}s elapsed, {cycle} of {} cycles completed",
                start.elapsed().as_secs(),
                options.cycles
            );
        }
    }

    let post = sampled_composite_error(network, examples, options.error_sample_size, &mut rng)?;

    let report = TrainReport {
        pre,
        post,
        cycles: options.cycles,
        elapsed: start.elapsed(),
        history: Vec::new(),
    };
    log::info!(
        "fixed-cycle training finished: {} cycles in {:?}, error estimate {:.6e} -> {:.6e}",
        report.cycles,
        report.elapsed,
        report.pre,
        report.post
    );
    Ok(report)
}
