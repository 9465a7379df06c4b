//! Convergence-seeking training: full-set gradients with an error-proportional
//! step, repeated until progress stalls or the error floor is reached.

use std::time::{Duration, Instant};

use crate::error::Result;
use crate::gradient;
use crate::network::Network;
use crate::train::example::TrainingExample;
use crate::train::metrics::composite_error;
use crate::train::report::TrainReport;

const LOG_INTERVAL: Duration = Duration::from_secs(5);

/// Stop conditions for [`train_to_convergence`].
#[derive(Debug, Clone)]
pub struct ConvergenceOptions {
    /// Stop once the composite error drops below this value.
    pub error_floor: f64,
    /// Stop once a cycle improves the composite error by less than this.
    pub improvement_threshold: f64,
    /// Safety cap on cycles; the loop can otherwise run unbounded on a
    /// dataset it cannot fit. `None` disables the cap.
    pub max_cycles: Option<usize>,
}

impl Default for ConvergenceOptions {
    fn default() -> Self {
        ConvergenceOptions {
            error_floor: 1e-3,
            improvement_threshold: 1e-10,
            max_cycles: Some(100_000),
        }
    }
}

/// Trains until the composite error stops improving.
///
/// Each cycle computes the mean gradient over **every** example and applies it
/// scaled by `composite_error / 2` — an error-proportional step, not a fixed
/// learning rate, so updates shrink as the fit improves.
///
/// # Panics
/// Panics if `examples` is empty.
pub fn train_to_convergence(
    network: &mut Network,
    examples: &[TrainingExample],
    options: &ConvergenceOptions,
) -> Result<TrainReport> {
    assert!(!examples.is_empty(), "examples must not be empty");

    let start = Instant::now();
    let pre = composite_error(network, examples)?;
    log::info!("convergence training: initial composite error {pre:.6e}");

    let mut history = Vec::new();
    let mut prior = pre;
    let mut cycles = 0;
    let mut last_log = Instant::now();

    loop {
        if options.max_cycles.is_some_and(|cap| cycles >= cap) {
            log::warn!("stopping at the {cycles}-cycle safety cap");
            break;
        }

        let mean = gradient::mean(network, examples)?;
        network.apply_gradient(&mean, prior / 2.0);

        let post = composite_error(network, examples)?;
        cycles += 1;
        history.push(post);
        log::debug!("cycle {cycles}: composite error {post:.6e}");

        if last_log.elapsed() > LOG_INTERVAL {
            last_log = Instant::now();
            log::info!(
                "{}s elapsed, {cycles} cycles, composite error {post:.6e}",
                start.elapsed().as_secs()
            );
        }

        if post < options.error_floor {
            prior = post;
            break;
        }

        let improvement = prior - post;
        prior = post;
        if improvement < options.improvement_threshold {
            break;
        }
    }

    let report = TrainReport {
        pre,
        post: prior,
        cycles,
        elapsed: start.elapsed(),
        history,
    };
    log::info!(
        "convergence training finished: {} cycles, error {:.6e} -> {:.6e}",
        report.cycles,
        report.pre,
        report.post
    );
    Ok(report)
}
