//! End-to-end training behavior: the convergence scenario, session
//! lifecycle rules, and snapshot persistence.

use axon_nn::{
    predict, ActivationFunction, ModelMetadata, NetworkArchitecture, NetworkSnapshot,
    SessionPhase, TrainingConfig, TrainingExample, TrainingSession,
};

fn scenario_examples() -> Vec<TrainingExample> {
    vec![
        TrainingExample::new(vec![0.0, 0.0, 1.0], vec![0.0]),
        TrainingExample::new(vec![0.0, 1.0, 1.0], vec![1.0]),
        TrainingExample::new(vec![1.0, 0.0, 1.0], vec![1.0]),
        TrainingExample::new(vec![1.0, 1.0, 1.0], vec![0.0]),
    ]
}

#[test]
fn loss_decreases_over_two_hundred_epochs() {
    let architecture = NetworkArchitecture::new(3, vec![4], 1);
    let config = TrainingConfig::new(0.1, 2, 200, ActivationFunction::Sigmoid);
    let examples = scenario_examples();

    let mut session = TrainingSession::new(architecture, config).unwrap();
    session.initialize().unwrap();
    session.start();
    session.run(&examples, None, None).unwrap();

    assert_eq!(session.phase(), SessionPhase::Stopped);
    assert_eq!(session.history().len(), 200);
    let first = session.history().first().unwrap().loss;
    let last = session.history().last().unwrap().loss;
    assert!(
        last < first,
        "loss did not improve: first {first}, last {last}"
    );
    assert!(last.is_finite());
}

#[test]
fn stepping_while_stopped_is_a_no_op() {
    let architecture = NetworkArchitecture::new(2, vec![3], 1);
    let config = TrainingConfig::new(0.1, 2, 1, ActivationFunction::ReLU);
    let examples = vec![
        TrainingExample::new(vec![0.0, 1.0], vec![1.0]),
        TrainingExample::new(vec![1.0, 0.0], vec![1.0]),
    ];

    let mut session = TrainingSession::new(architecture, config).unwrap();
    session.initialize().unwrap();
    session.start();
    session.step_epoch(&examples).unwrap();
    assert_eq!(session.phase(), SessionPhase::Stopped);

    let weights_before = session.weights().unwrap().clone();
    assert_eq!(session.step_epoch(&examples).unwrap(), None);
    assert_eq!(session.weights().unwrap(), &weights_before);
    assert_eq!(session.epoch(), 1);
}

#[test]
fn reset_returns_to_uninitialized_and_discards_everything() {
    let architecture = NetworkArchitecture::new(2, vec![3], 1);
    let config = TrainingConfig::new(0.1, 1, 5, ActivationFunction::Tanh);
    let examples = vec![TrainingExample::new(vec![0.5, 0.5], vec![0.5])];

    let mut session = TrainingSession::new(architecture, config).unwrap();
    session.initialize().unwrap();
    session.start();
    session.step_epoch(&examples).unwrap();
    session.reset();

    assert_eq!(session.phase(), SessionPhase::Uninitialized);
    assert!(session.weights().is_none());
    assert_eq!(session.epoch(), 0);
    assert!(session.history().is_empty());

    // A reset session can be initialized and trained again.
    session.initialize().unwrap();
    session.start();
    assert!(session.step_epoch(&examples).unwrap().is_some());
}

#[test]
fn snapshot_round_trip_reproduces_bit_identical_predictions() {
    let architecture = NetworkArchitecture::new(3, vec![4], 1);
    let config = TrainingConfig::new(0.1, 2, 20, ActivationFunction::LeakyReLU);
    let examples = scenario_examples();

    let mut session = TrainingSession::new(architecture.clone(), config).unwrap();
    session.initialize().unwrap();
    session.start();
    session.run(&examples, None, None).unwrap();

    let snapshot = NetworkSnapshot {
        name: "round-trip".to_string(),
        architecture,
        weights: session.weights().unwrap().clone(),
        metadata: Some(ModelMetadata {
            description: Some("persistence check".to_string()),
            output_labels: None,
        }),
    };

    let dir = std::env::temp_dir().join("axon-nn-snapshot-test");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("round-trip.json");
    let path = path.to_str().unwrap();
    snapshot.save_json(path).unwrap();
    let loaded = NetworkSnapshot::load_json(path).unwrap();
    std::fs::remove_file(path).unwrap();

    for example in &examples {
        let before = predict(
            &example.input,
            &snapshot.weights,
            ActivationFunction::LeakyReLU,
        )
        .unwrap();
        let after = predict(
            &example.input,
            &loaded.weights,
            ActivationFunction::LeakyReLU,
        )
        .unwrap();
        assert_eq!(before, after);
    }
}
