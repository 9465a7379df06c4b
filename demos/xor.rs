use lamina_nn::{fixed_cycle_train, MiniBatchOptions, Network, TrainingExample};

fn main() -> lamina_nn::Result<()> {
    env_logger::init();

    // Fresh random 2-2-1 sigmoid network.
    let mut network = Network::from_json(
        r#"{"inputs": 2, "layers": [{"neurons": 2}, {"neurons": 1}]}"#,
    )?;

    let examples = vec![
        TrainingExample::new(vec![0.0, 0.0], vec![0.0]),
        TrainingExample::new(vec![0.0, 1.0], vec![1.0]),
        TrainingExample::new(vec![1.0, 0.0], vec![1.0]),
        TrainingExample::new(vec![1.0, 1.0], vec![0.0]),
    ];

    let mut options = MiniBatchOptions::new(20_000);
    options.batch_size = 4;
    let report = fixed_cycle_train(&mut network, &examples, &options)?;

    println!(
        "Trained {} cycles in {:?}: composite error {:.6} -> {:.6}",
        report.cycles, report.elapsed, report.pre, report.post
    );
    for example in &examples {
        let output = network.run(&example.inputs)?[0];
        println!("{:?} -> {:.4}", example.inputs, output);
    }

    println!("\nConfig round-trip:\n{}", network.to_json()?);
    Ok(())
}
