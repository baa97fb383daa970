//! Black-box behavior of the engine surface: forward-pass bounds, the
//! evaluation metric, robustness to adversarial inputs, and error surfacing.

use axon_nn::train::{evaluate, train_batch};
use axon_nn::{
    forward_pass, predict, ActivationFunction, EngineError, Matrix, NetworkArchitecture,
    NetworkWeights, TrainingConfig, TrainingExample,
};

const ALL_ACTIVATIONS: [ActivationFunction; 5] = [
    ActivationFunction::ReLU,
    ActivationFunction::LeakyReLU,
    ActivationFunction::Sigmoid,
    ActivationFunction::Tanh,
    ActivationFunction::Identity,
];

#[test]
fn initialization_produces_the_documented_shapes() {
    let arch = NetworkArchitecture::new(4, vec![7, 5], 2);
    let weights = NetworkWeights::initialize(&arch).unwrap();
    let sizes = arch.layer_sizes();
    assert_eq!(weights.weights.len(), sizes.len() - 1);
    for (i, pair) in sizes.windows(2).enumerate() {
        assert_eq!(weights.weights[i].shape(), [pair[1], pair[0]]);
        assert_eq!(weights.biases[i].len(), pair[1]);
        assert!(weights.biases[i].iter().all(|&b| b == 0.0));
    }
}

#[test]
fn forward_output_is_sigmoid_bounded_for_every_hidden_activation() {
    let arch = NetworkArchitecture::new(3, vec![6, 4], 2);
    let weights = NetworkWeights::initialize(&arch).unwrap();
    for activation in ALL_ACTIVATIONS {
        let result = forward_pass(&[0.7, -1.3, 2.9], &weights, activation).unwrap();
        assert_eq!(result.predictions.len(), 2);
        for &p in &result.predictions {
            assert!(
                (0.0..=1.0).contains(&p),
                "{activation:?} produced out-of-range output {p}"
            );
        }
    }
}

/// Zero weights and biases make the single sigmoid output exactly 0.5.
fn constant_half_network(inputs: usize) -> NetworkWeights {
    NetworkWeights {
        weights: vec![Matrix::zeros(1, inputs)],
        biases: vec![vec![0.0]],
    }
}

#[test]
fn accuracy_is_one_when_predictions_equal_targets() {
    let weights = constant_half_network(2);
    let config = TrainingConfig::new(0.1, 1, 1, ActivationFunction::ReLU);
    let examples = [
        TrainingExample::new(vec![0.0, 0.0], vec![0.5]),
        TrainingExample::new(vec![3.0, -1.0], vec![0.5]),
    ];
    let metrics = evaluate(&examples, &weights, &config).unwrap();
    assert_eq!(metrics.loss, 0.0);
    assert_eq!(metrics.accuracy, 1.0);
}

#[test]
fn accuracy_is_zero_when_every_dimension_misses_by_more_than_the_tolerance() {
    let weights = constant_half_network(2);
    let config = TrainingConfig::new(0.1, 1, 1, ActivationFunction::ReLU);
    let examples = [
        TrainingExample::new(vec![0.0, 0.0], vec![0.99]),
        TrainingExample::new(vec![1.0, 1.0], vec![0.01]),
    ];
    let metrics = evaluate(&examples, &weights, &config).unwrap();
    assert_eq!(metrics.accuracy, 0.0);
}

#[test]
fn one_failing_dimension_fails_the_whole_example() {
    let weights = NetworkWeights {
        weights: vec![Matrix::zeros(2, 2)],
        biases: vec![vec![0.0, 0.0]],
    };
    let config = TrainingConfig::new(0.1, 1, 1, ActivationFunction::ReLU);
    // Both outputs are 0.5: first dimension within tolerance, second not.
    let examples = [TrainingExample::new(vec![0.0, 0.0], vec![0.5, 0.9])];
    let metrics = evaluate(&examples, &weights, &config).unwrap();
    assert_eq!(metrics.accuracy, 0.0);
}

#[test]
fn training_on_adversarial_inputs_keeps_every_parameter_finite() {
    let arch = NetworkArchitecture::new(2, vec![4], 2);
    let mut weights = NetworkWeights::initialize(&arch).unwrap();
    let config = TrainingConfig::new(0.5, 2, 1, ActivationFunction::ReLU);
    let batch = [
        TrainingExample::new(vec![1e9, -1e9], vec![1.0, 0.0]),
        TrainingExample::new(vec![f64::MAX / 2.0, 1e12], vec![0.0, 1.0]),
    ];
    for _ in 0..5 {
        weights = train_batch(&batch, &weights, &config).unwrap();
    }
    for w in &weights.weights {
        for row in &w.data {
            assert!(row.iter().all(|x| x.is_finite()));
        }
    }
    for b in &weights.biases {
        assert!(b.iter().all(|x| x.is_finite()));
    }
}

#[test]
fn mismatched_input_width_surfaces_as_dimension_mismatch() {
    let arch = NetworkArchitecture::new(3, vec![2], 1);
    let weights = NetworkWeights::initialize(&arch).unwrap();
    let err = predict(&[1.0, 2.0], &weights, ActivationFunction::ReLU).unwrap_err();
    assert!(matches!(err, EngineError::DimensionMismatch { .. }));
}

#[test]
fn invalid_configurations_are_refused_before_any_arithmetic() {
    let config = TrainingConfig::new(0.0, 2, 10, ActivationFunction::ReLU);
    assert!(matches!(
        config.validate(4).unwrap_err(),
        EngineError::InvalidLearningRate { .. }
    ));

    let config = TrainingConfig::new(0.1, 0, 10, ActivationFunction::ReLU);
    assert!(matches!(
        config.validate(4).unwrap_err(),
        EngineError::InvalidBatchSize { .. }
    ));

    let config = TrainingConfig::new(0.1, 2, 10, ActivationFunction::ReLU);
    assert_eq!(config.validate(0).unwrap_err(), EngineError::EmptyDataset);

    let arch = NetworkArchitecture::new(2, vec![3], 1);
    let weights = NetworkWeights::initialize(&arch).unwrap();
    assert_eq!(
        train_batch(&[], &weights, &config).unwrap_err(),
        EngineError::EmptyBatch
    );
}
