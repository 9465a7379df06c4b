pub struct SquareDifference;

impl SquareDifference {
    /// Per-example loss: the sum of squared differences over the output layer.
    ///
    /// The sum form (not the mean over outputs) is what `output_deltas` is the
    /// exact derivative of; the finite-difference gradient test relies on the
    /// two staying consistent.
    pub fn loss(actual: &[f64], expected: &[f64]) -> f64 {
        actual
            .iter()
            .zip(expected.iter())
            .map(|(a, e)| (a - e).powi(2))
            .sum()
    }

    /// ∂Error/∂Output per output neuron: `2 · (actual - expected)`.
    pub fn output_deltas(actual: &[f64], expected: &[f64]) -> Vec<f64> {
        actual
            .iter()
            .zip(expected.iter())
            .map(|(a, e)| 2.0 * (a - e))
            .collect()
    }
}
