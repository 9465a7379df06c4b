//! Composite-error estimation for the training loops.
//!
//! Error reporting always uses the squared-difference per-example loss, no
//! matter which loss function drives the gradients.

use rand::Rng;

use crate::error::Result;
use crate::loss::SquareDifference;
use crate::network::Network;
use crate::train::example::TrainingExample;

/// The squared-difference loss of the network on one example.
pub fn example_error(network: &Network, example: &TrainingExample) -> Result<f64> {
    let actual = network.run(&example.inputs)?;
    Ok(SquareDifference::loss(&actual, &example.outputs))
}

/// Mean per-example loss over the full training set.
///
/// # Panics
/// Panics if `examples` is empty.
pub fn composite_error(network: &Network, examples: &[TrainingExample]) -> Result<f64> {
    assert!(!examples.is_empty(), "examples must not be empty");

    let mut total = 0.0;
    for example in examples {
        total += example_error(network, example)?;
    }
    Ok(total / examples.len() as f64)
}

/// Estimates the composite error on `sample_size` examples drawn uniformly
/// with replacement — cheaper than the full set on large datasets, at the
/// cost of sampling noise.
///
/// # Panics
/// Panics if `examples` is empty or `sample_size` is zero.
pub fn sampled_composite_error<R: Rng>(
    network: &Network,
    examples: &[TrainingExample],
    sample_size: usize,
    rng: &mut R,
) -> Result<f64> {
    assert!(!examples.is_empty(), "examples must not be empty");
    assert!(sample_size > 0, "sample_size must be at least 1");

    let mut total = 0.0;
    for _ in 0..sample_size {
        let example = &examples[rng.gen_range(0..examples.len())];
        total += example_error(network, example)?;
    }
    Ok(total / sample_size as f64)
}
