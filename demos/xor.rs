use ferrite_backprop::{Network, TrainConfig};

fn main() {
    let mut network = Network::new(2, &[4], 1).expect("valid topology");
    network.randomize_weights(-1.5, 1.5);

    let inputs = vec![
        vec![1.0, 0.0],
        vec![1.0, 1.0],
        vec![0.0, 1.0],
        vec![0.0, 0.0],
    ];
    let expected_outputs = vec![
        vec![1.0],
        vec![0.0],
        vec![1.0],
        vec![0.0],
    ];

    let config = TrainConfig::new(1.0, 20000, 0.0005);
    let report = network
        .train(&inputs, &expected_outputs, &config)
        .expect("training set matches the network");

    println!(
        "Stopped after {} epochs ({:?}): error {:.6} -> {:.6}",
        report.epochs_run, report.stop_reason, report.first_error, report.final_error
    );

    for input in &inputs {
        let output = network.propagate(input).expect("input width matches")[0];
        println!("Input: {:?} -> Output: {:.4}", input, output);
    }
}
