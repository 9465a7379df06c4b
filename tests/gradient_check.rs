//! The primary correctness property of the gradient engine: every analytic
//! partial must match a central finite-difference estimate of the per-example
//! error.

use lamina_nn::config::{
    LayerConfig, LayerDetail, LayersConfig, NetworkConfig, NeuronConfig, NeuronDetail,
    NeuronsConfig,
};
use lamina_nn::train::example_error;
use lamina_nn::{gradient, Activation, Network, TrainingExample};

const EPS: f64 = 1e-5;
const TOLERANCE: f64 = 1e-4;

/// Per-neuron parameters: (activation, bias, weights).
type LayerParams = Vec<(Activation, f64, Vec<f64>)>;

fn build(inputs: usize, params: &[LayerParams]) -> Network {
    let layers = params
        .iter()
        .map(|layer| {
            LayerConfig::Detailed(LayerDetail {
                neurons: NeuronsConfig::List(
                    layer
                        .iter()
                        .map(|(activation, bias, weights)| {
                            NeuronConfig::Detailed(NeuronDetail {
                                activation: Some(*activation),
                                bias: Some(*bias),
                                weights: weights.clone(),
                            })
                        })
                        .collect(),
                ),
                activation: None,
                bias: None,
            })
        })
        .collect();

    Network::build(&NetworkConfig {
        inputs,
        layers: LayersConfig::List(layers),
        activation: None,
        bias: None,
        loss_function: None,
    })
    .unwrap()
}

/// Checks every bias and weight partial of `params` against a central finite
/// difference of the per-example error.
fn check_gradient(inputs: usize, params: Vec<LayerParams>, example: &TrainingExample) {
    let network = build(inputs, &params);
    let analytic = gradient::compute(&network, example).unwrap();

    for (i, layer) in params.iter().enumerate() {
        for (j, (_, _, weights)) in layer.iter().enumerate() {
            // Bias partial.
            let estimate = {
                let mut up = params.clone();
                let mut down = params.clone();
                up[i][j].1 += EPS;
                down[i][j].1 -= EPS;
                central_difference(inputs, up, down, example)
            };
            let bias_partial = analytic.layers[i][j].bias;
            assert!(
                (bias_partial - estimate).abs() < TOLERANCE,
                "bias partial at layer {i}, neuron {j}: analytic {bias_partial}, estimate {estimate}"
            );

            // Weight partials.
            for k in 0..weights.len() {
                let estimate = {
                    let mut up = params.clone();
                    let mut down = params.clone();
                    up[i][j].2[k] += EPS;
                    down[i][j].2[k] -= EPS;
                    central_difference(inputs, up, down, example)
                };
                let weight_partial = analytic.layers[i][j].weights[k];
                assert!(
                    (weight_partial - estimate).abs() < TOLERANCE,
                    "weight partial at layer {i}, neuron {j}, weight {k}: \
                     analytic {weight_partial}, estimate {estimate}"
                );
            }
        }
    }
}

fn central_difference(
    inputs: usize,
    up: Vec<LayerParams>,
    down: Vec<LayerParams>,
    example: &TrainingExample,
) -> f64 {
    let up_error = example_error(&build(inputs, &up), example).unwrap();
    let down_error = example_error(&build(inputs, &down), example).unwrap();
    (up_error - down_error) / (2.0 * EPS)
}

#[test]
fn sigmoid_network_gradient_matches_finite_differences() {
    let params = vec![
        vec![
            (Activation::Sigmoid, -1.0, vec![0.6, -0.4]),
            (Activation::Sigmoid, 0.5, vec![-0.3, 0.8]),
            (Activation::Sigmoid, 0.1, vec![0.2, 0.7]),
        ],
        vec![(Activation::Sigmoid, -0.2, vec![1.1, -0.9, 0.4])],
    ];
    let example = TrainingExample::new(vec![0.3, -0.7], vec![1.0]);

    check_gradient(2, params, &example);
}

#[test]
fn mixed_activation_gradient_matches_finite_differences() {
    // Negative totals in the hidden layer exercise the elu and leakyRelu
    // branches away from their kink at zero.
    let params = vec![
        vec![
            (Activation::Elu, -1.5, vec![0.2, 0.1]),
            (Activation::LeakyRelu, -2.0, vec![0.3, -0.2]),
        ],
        vec![
            (Activation::Identity, 0.4, vec![0.9, -1.2]),
            (Activation::Sigmoid, -0.1, vec![0.5, 0.6]),
        ],
    ];
    let example = TrainingExample::new(vec![0.8, 0.2], vec![0.0, 1.0]);

    check_gradient(2, params, &example);
}

#[test]
fn multi_output_gradient_matches_finite_differences() {
    let params = vec![vec![
        (Activation::Sigmoid, 0.0, vec![1.0]),
        (Activation::Identity, -0.5, vec![-2.0]),
        (Activation::Elu, 0.3, vec![0.7]),
    ]];
    let example = TrainingExample::new(vec![0.9], vec![0.2, 0.4, 0.6]);

    check_gradient(1, params, &example);
}
