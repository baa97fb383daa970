use axon_nn::{
    ActivationFunction, Dataset, ModelMetadata, NetworkArchitecture, NetworkSnapshot,
    TrainingConfig, TrainingExample, TrainingSession,
};

fn labeled(input: Vec<f64>, target: Vec<f64>, label: &str) -> TrainingExample {
    TrainingExample {
        input,
        target,
        label: Some(label.to_string()),
    }
}

/// Toy multi-output dataset: six site profiles mapped to three outcome scores.
fn site_outcomes() -> Dataset {
    Dataset {
        description: "Site profiles mapped to outcome scores".to_string(),
        input_size: 5,
        output_size: 3,
        examples: vec![
            labeled(
                vec![1.0, 0.8, 0.9, 0.7, 0.6],
                vec![0.9, 0.7, 0.6],
                "well-resourced site",
            ),
            labeled(
                vec![0.3, 0.4, 0.5, 0.8, 0.7],
                vec![0.6, 0.4, 0.3],
                "under-resourced site",
            ),
            labeled(
                vec![0.7, 0.9, 0.8, 0.6, 0.9],
                vec![0.8, 0.8, 0.9],
                "high-engagement site",
            ),
            labeled(
                vec![0.9, 0.7, 0.6, 0.5, 0.8],
                vec![0.9, 0.6, 0.5],
                "oversight-heavy site",
            ),
            labeled(
                vec![0.6, 0.4, 0.5, 0.6, 0.3],
                vec![0.5, 0.5, 0.4],
                "struggling site",
            ),
            labeled(
                vec![0.2, 0.3, 0.2, 0.4, 0.2],
                vec![0.3, 0.2, 0.2],
                "minimal-activity site",
            ),
        ],
    }
}

fn main() {
    let dataset = site_outcomes();
    dataset.validate().expect("well-formed dataset");

    let architecture = NetworkArchitecture::new(dataset.input_size, vec![8, 6], dataset.output_size);
    let config = TrainingConfig::new(0.1, 3, 2000, ActivationFunction::LeakyReLU);

    let mut session = TrainingSession::new(architecture.clone(), config).expect("valid setup");
    session.initialize().expect("initialization");
    session.start();
    session.run(&dataset.examples, None, None).expect("training");

    let last = session.history().last().expect("at least one epoch");
    println!(
        "Finished after {} epochs: loss = {:.6}, accuracy = {:.2}",
        last.epoch, last.loss, last.accuracy
    );

    let snapshot = NetworkSnapshot {
        name: "site-outcomes".to_string(),
        architecture,
        weights: session.weights().expect("trained weights").clone(),
        metadata: Some(ModelMetadata {
            description: Some(dataset.description.clone()),
            output_labels: Some(vec![
                "safety".to_string(),
                "opportunity".to_string(),
                "sustainability".to_string(),
            ]),
        }),
    };
    snapshot
        .save_json("site-outcomes.json")
        .expect("snapshot written");
    println!("Saved trained model to site-outcomes.json");
}
