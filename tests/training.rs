//! Training-loop regression guards.

use assert_approx_eq::assert_approx_eq;

use lamina_nn::{
    composite_error, fixed_cycle_train, train_to_convergence, ConvergenceOptions,
    MiniBatchOptions, Network, TrainingExample,
};

fn xor_examples() -> Vec<TrainingExample> {
    vec![
        TrainingExample::new(vec![0.0, 0.0], vec![0.0]),
        TrainingExample::new(vec![0.0, 1.0], vec![1.0]),
        TrainingExample::new(vec![1.0, 0.0], vec![1.0]),
        TrainingExample::new(vec![1.0, 1.0], vec![0.0]),
    ]
}

#[test]
fn fixed_cycle_training_reduces_xor_error() {
    // Exact convergence to XOR is not guaranteed for gradient descent on this
    // architecture, so this only asserts that training helped.
    let mut network =
        Network::from_json(r#"{"inputs": 2, "layers": [{"neurons": 2}, {"neurons": 1}]}"#).unwrap();
    let examples = xor_examples();

    let pre = composite_error(&network, &examples).unwrap();

    let mut options = MiniBatchOptions::new(4000);
    options.batch_size = 4;
    fixed_cycle_train(&mut network, &examples, &options).unwrap();

    let post = composite_error(&network, &examples).unwrap();
    assert!(post < pre, "composite error did not fall: {pre} -> {post}");
}

#[test]
fn convergence_training_is_monotone_on_a_smooth_problem() {
    // Two identity neurons fitting two linear targets.
    let mut network = Network::from_json(
        r#"{
            "inputs": 2,
            "type": "identity",
            "layers": [[
                {"weights": [0.4, 0.1], "bias": 0},
                {"weights": [-0.2, 0.3], "bias": 0}
            ]]
        }"#,
    )
    .unwrap();
    let examples = vec![
        TrainingExample::new(vec![1.0, 0.0], vec![1.0, 0.0]),
        TrainingExample::new(vec![0.0, 1.0], vec![0.0, 1.0]),
    ];

    let report =
        train_to_convergence(&mut network, &examples, &ConvergenceOptions::default()).unwrap();

    assert!(report.post < report.pre);
    let mut prior = report.pre;
    for &error in &report.history {
        assert!(
            error <= prior,
            "composite error rose from {prior} to {error}"
        );
        prior = error;
    }
}

#[test]
fn binary_neurons_cannot_learn() {
    // The binary activation has a zero derivative everywhere, so every
    // gradient is zero and convergence training stops after one fruitless
    // cycle with the error unchanged.
    let mut network = Network::from_json(
        r#"{"inputs": 2, "layers": [[[0.5, 0.5]]], "type": "binary", "bias": 0}"#,
    )
    .unwrap();
    let examples = xor_examples();

    let report =
        train_to_convergence(&mut network, &examples, &ConvergenceOptions::default()).unwrap();

    assert_eq!(1, report.cycles);
    assert_approx_eq!(report.pre, report.post);
}
