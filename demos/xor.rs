use axon_nn::{
    ActivationFunction, NetworkArchitecture, SessionPhase, TrainingConfig, TrainingExample,
    TrainingSession,
};

fn main() {
    let architecture = NetworkArchitecture::new(2, vec![3], 1);
    let config = TrainingConfig::new(0.5, 2, 5000, ActivationFunction::Sigmoid);

    let examples = vec![
        TrainingExample::new(vec![1.0, 0.0], vec![1.0]),
        TrainingExample::new(vec![1.0, 1.0], vec![0.0]),
        TrainingExample::new(vec![0.0, 1.0], vec![1.0]),
        TrainingExample::new(vec![0.0, 0.0], vec![0.0]),
    ];

    let mut session = TrainingSession::new(architecture, config).expect("valid setup");
    session.initialize().expect("initialization");
    session.start();

    while session.phase() == SessionPhase::Training {
        let stats = session
            .step_epoch(&examples)
            .expect("epoch")
            .expect("session is training");
        if stats.epoch % 500 == 0 {
            println!(
                "Epoch {}/{}: loss = {:.6}, accuracy = {:.2}",
                stats.epoch, stats.total_epochs, stats.loss, stats.accuracy
            );
        }
    }

    let weights = session.weights().expect("trained weights");
    for example in &examples {
        let output = axon_nn::predict(&example.input, weights, ActivationFunction::Sigmoid)
            .expect("prediction");
        println!("Input: {:?} -> Output: {:.4}", example.input, output[0]);
    }
}
