use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::time::Instant;

use log::{debug, info};
use rand::seq::SliceRandom;

use crate::error::EngineError;
use crate::network::architecture::NetworkArchitecture;
use crate::network::weights::NetworkWeights;
use crate::train::batch::train_batch;
use crate::train::config::TrainingConfig;
use crate::train::dataset::TrainingExample;
use crate::train::epoch_stats::EpochStats;
use crate::train::evaluate::evaluate;

/// Lifecycle phase of a [`TrainingSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No parameters exist yet.
    Uninitialized,
    /// Fresh parameters exist; no epoch has run.
    Initialized,
    /// Epochs may be stepped.
    Training,
    /// Epoch stepping is suspended; `resume` re-enters `Training`.
    Paused,
    /// The epoch budget is spent or the caller stopped the run. Parameters
    /// and history remain readable; `initialize` starts over.
    Stopped,
}

/// Owns the mutable state of one training lifecycle: current parameters,
/// epoch counter, and per-epoch history.
///
/// The engine functions stay pure; all mutation lives here, and each epoch
/// replaces the parameter value wholesale, so callers can hold onto any
/// previously returned `NetworkWeights` without seeing it change.
pub struct TrainingSession {
    architecture: NetworkArchitecture,
    config: TrainingConfig,
    phase: SessionPhase,
    weights: Option<NetworkWeights>,
    epoch: usize,
    history: Vec<EpochStats>,
}

impl TrainingSession {
    /// Creates a session in the `Uninitialized` phase.
    ///
    /// The architecture and the dataset-independent hyperparameters are
    /// validated here; batch size is checked against the concrete dataset
    /// on every epoch step.
    pub fn new(
        architecture: NetworkArchitecture,
        config: TrainingConfig,
    ) -> Result<TrainingSession, EngineError> {
        architecture.validate()?;
        config.validate_hyperparameters()?;
        Ok(TrainingSession {
            architecture,
            config,
            phase: SessionPhase::Uninitialized,
            weights: None,
            epoch: 0,
            history: Vec::new(),
        })
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn architecture(&self) -> &NetworkArchitecture {
        &self.architecture
    }

    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// Current parameters, `None` while `Uninitialized`.
    pub fn weights(&self) -> Option<&NetworkWeights> {
        self.weights.as_ref()
    }

    /// Number of completed epochs in the current run.
    pub fn epoch(&self) -> usize {
        self.epoch
    }

    pub fn history(&self) -> &[EpochStats] {
        &self.history
    }

    /// Replaces the hyperparameters. Only allowed between runs, never while
    /// an epoch loop is active.
    pub fn set_config(&mut self, config: TrainingConfig) -> Result<(), EngineError> {
        config.validate_hyperparameters()?;
        self.config = config;
        Ok(())
    }

    /// Creates fresh He-initialized parameters, zeroes the epoch counter,
    /// clears the history, and moves to `Initialized`.
    pub fn initialize(&mut self) -> Result<(), EngineError> {
        self.weights = Some(NetworkWeights::initialize(&self.architecture)?);
        self.epoch = 0;
        self.history.clear();
        self.phase = SessionPhase::Initialized;
        info!(
            "session initialized: layers {:?}, activation {:?}",
            self.architecture.layer_sizes(),
            self.config.activation
        );
        Ok(())
    }

    /// `Initialized → Training`. A no-op in any other phase.
    pub fn start(&mut self) {
        if self.phase == SessionPhase::Initialized {
            self.phase = SessionPhase::Training;
        }
    }

    /// `Training → Paused`. Takes effect between epochs only: an in-flight
    /// `step_epoch` always completes its batches.
    pub fn pause(&mut self) {
        if self.phase == SessionPhase::Training {
            self.phase = SessionPhase::Paused;
        }
    }

    /// `Paused → Training`. A no-op in any other phase.
    pub fn resume(&mut self) {
        if self.phase == SessionPhase::Paused {
            self.phase = SessionPhase::Training;
        }
    }

    /// Ends the run, keeping parameters, epoch counter, and history for
    /// inspection.
    pub fn stop(&mut self) {
        match self.phase {
            SessionPhase::Training | SessionPhase::Paused => {
                self.phase = SessionPhase::Stopped;
            }
            _ => {}
        }
    }

    /// Discards parameters, epoch counter, and history; returns to
    /// `Uninitialized`.
    pub fn reset(&mut self) {
        self.weights = None;
        self.epoch = 0;
        self.history.clear();
        self.phase = SessionPhase::Uninitialized;
    }

    /// Runs one epoch: shuffles the example order, trains batch by batch,
    /// evaluates over the full example list, and records the result.
    ///
    /// Returns `Ok(None)` without touching any state when the session is
    /// not in the `Training` phase. Reaching the configured epoch budget
    /// moves the session to `Stopped`.
    pub fn step_epoch(
        &mut self,
        examples: &[TrainingExample],
    ) -> Result<Option<EpochStats>, EngineError> {
        if self.phase != SessionPhase::Training {
            return Ok(None);
        }
        self.config.validate(examples.len())?;

        let weights = self
            .weights
            .take()
            .expect("Training phase is unreachable without initialized weights");
        let t_start = Instant::now();

        let mut indices: Vec<usize> = (0..examples.len()).collect();
        indices.shuffle(&mut rand::thread_rng());

        // Final chunk may be shorter than batch_size.
        let mut current = weights;
        for chunk in indices.chunks(self.config.batch_size) {
            let batch: Vec<TrainingExample> =
                chunk.iter().map(|&idx| examples[idx].clone()).collect();
            current = train_batch(&batch, &current, &self.config)?;
        }

        let metrics = evaluate(examples, &current, &self.config)?;
        let elapsed_ms = t_start.elapsed().as_millis() as u64;
        self.weights = Some(current);
        self.epoch += 1;

        let stats = EpochStats {
            epoch: self.epoch,
            total_epochs: self.config.epochs,
            loss: metrics.loss,
            accuracy: metrics.accuracy,
            elapsed_ms,
        };
        debug!(
            "epoch {}/{}: loss {:.6}, accuracy {:.3}, {} ms",
            stats.epoch, stats.total_epochs, stats.loss, stats.accuracy, stats.elapsed_ms
        );
        self.history.push(stats.clone());

        if self.epoch >= self.config.epochs {
            self.phase = SessionPhase::Stopped;
        }
        Ok(Some(stats))
    }

    /// Drives `step_epoch` until the epoch budget is spent or the run is
    /// interrupted.
    ///
    /// One `EpochStats` is sent per completed epoch when `progress` is
    /// present; a dropped receiver ends the run cleanly. The `stop_flag` is
    /// checked between epochs only, so an in-flight epoch always completes
    /// its batches. Both interruptions leave the session `Stopped`.
    pub fn run(
        &mut self,
        examples: &[TrainingExample],
        progress: Option<mpsc::Sender<EpochStats>>,
        stop_flag: Option<Arc<AtomicBool>>,
    ) -> Result<(), EngineError> {
        while self.phase == SessionPhase::Training {
            if let Some(ref flag) = stop_flag {
                if flag.load(Ordering::Relaxed) {
                    self.stop();
                    break;
                }
            }

            let stats = match self.step_epoch(examples)? {
                Some(stats) => stats,
                None => break,
            };

            if let Some(ref tx) = progress {
                if tx.send(stats).is_err() {
                    self.stop();
                    break;
                }
            }
        }
        Ok(())
    }
}
