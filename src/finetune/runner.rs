//! Mock training run as an explicit state machine.
//!
//! A run moves through `Idle -> Parsing -> Simulating(percent) -> Finalizing
//! -> Generating(index) -> Done`. Each call to [`MockTrainingRunner::step`]
//! performs one transition and reports how long the caller should wait before
//! the next one, so the same run can be driven by the egui frame loop or by the
//! blocking [`run`] helper.

use std::time::Duration;

use super::clock::{DEFAULT_TIME_UNIT, Pause, Scheduler};
use super::dataset::{DatasetRecord, parse_dataset};
use super::metrics::MetricsSnapshot;
use super::prediction::{EvaluationSet, PredictionRecord};

/// Percentage added per progress checkpoint.
pub const CHECKPOINT_STEP: u8 = 10;
/// Message shown once the progress bar reaches 100%.
pub const FINALIZING_MESSAGE: &str = "Finalizing fine-tuning process...";

/// Progress bar value plus its status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunProgress {
    pub percent: u8,
    pub message: String,
}

impl RunProgress {
    fn starting() -> Self {
        Self {
            percent: 0,
            message: String::new(),
        }
    }

    fn checkpoint(&mut self, percent: u8) {
        self.percent = percent.min(100);
        self.message = format!("Processing... {}% complete", self.percent);
    }

    fn finalizing(&mut self) {
        self.message = FINALIZING_MESSAGE.to_string();
    }

    /// Completion in `[0.0, 1.0]` for progress widgets.
    pub fn fraction(&self) -> f32 {
        f32::from(self.percent.min(100)) / 100.0
    }
}

/// Current position of a run in its state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    Idle,
    Parsing,
    Simulating { percent: u8 },
    Finalizing,
    Generating { index: usize },
    Done,
}

/// What a single transition produced.
#[derive(Debug, Clone, PartialEq)]
pub enum RunEvent {
    Started,
    Parsed { records: usize, fallback: bool },
    Checkpoint(RunProgress),
    Finalizing(RunProgress),
    Generated { index: usize, total: usize },
    Completed(RunOutcome),
}

/// One transition and the wait that must follow it.
#[derive(Debug, Clone, PartialEq)]
pub struct RunStep {
    pub event: RunEvent,
    pub pause: Pause,
    pub wait: Duration,
}

/// Result of a finished run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    pub predictions: Vec<PredictionRecord>,
    pub evaluation: EvaluationSet,
    pub metrics: MetricsSnapshot,
    pub used_fallback: bool,
}

impl RunOutcome {
    pub fn record_count(&self) -> usize {
        self.predictions.len()
    }
}

/// Drives one mock fine-tuning run over an uploaded dataset.
#[derive(Debug)]
pub struct MockTrainingRunner {
    phase: RunPhase,
    dataset: Vec<u8>,
    time_unit: Duration,
    records: Vec<DatasetRecord>,
    used_fallback: bool,
    predictions: Vec<PredictionRecord>,
    progress: RunProgress,
    outcome: Option<RunOutcome>,
}

impl MockTrainingRunner {
    pub fn new(dataset: Vec<u8>) -> Self {
        Self::with_time_unit(dataset, DEFAULT_TIME_UNIT)
    }

    pub fn with_time_unit(dataset: Vec<u8>, time_unit: Duration) -> Self {
        Self {
            phase: RunPhase::Idle,
            dataset,
            time_unit,
            records: Vec::new(),
            used_fallback: false,
            predictions: Vec::new(),
            progress: RunProgress::starting(),
            outcome: None,
        }
    }

    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    pub fn progress(&self) -> &RunProgress {
        &self.progress
    }

    pub fn is_done(&self) -> bool {
        self.phase == RunPhase::Done
    }

    /// Number of validation records; zero until parsing has happened.
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn predictions(&self) -> &[PredictionRecord] {
        &self.predictions
    }

    /// Perform exactly one transition.
    pub fn step(&mut self) -> RunStep {
        let (event, pause) = match self.phase {
            RunPhase::Idle => {
                self.phase = RunPhase::Parsing;
                (RunEvent::Started, Pause::None)
            }
            RunPhase::Parsing => self.parse(),
            RunPhase::Simulating { percent } => {
                self.progress.checkpoint(percent);
                self.phase = if percent >= 100 {
                    RunPhase::Finalizing
                } else {
                    RunPhase::Simulating {
                        percent: percent + CHECKPOINT_STEP,
                    }
                };
                (RunEvent::Checkpoint(self.progress.clone()), Pause::Checkpoint)
            }
            RunPhase::Finalizing => {
                self.progress.finalizing();
                self.phase = RunPhase::Generating { index: 0 };
                (RunEvent::Finalizing(self.progress.clone()), Pause::Finalize)
            }
            RunPhase::Generating { index } => self.generate(index),
            RunPhase::Done => (RunEvent::Completed(self.finish()), Pause::None),
        };
        RunStep {
            event,
            pause,
            wait: pause.duration(self.time_unit),
        }
    }

    fn parse(&mut self) -> (RunEvent, Pause) {
        let parsed = parse_dataset(&self.dataset);
        self.used_fallback = parsed.used_fallback();
        self.records = parsed.into_records();
        self.dataset = Vec::new();
        self.phase = RunPhase::Simulating { percent: 0 };
        (
            RunEvent::Parsed {
                records: self.records.len(),
                fallback: self.used_fallback,
            },
            Pause::None,
        )
    }

    fn generate(&mut self, index: usize) -> (RunEvent, Pause) {
        let total = self.records.len();
        let Some(record) = self.records.get(index) else {
            self.phase = RunPhase::Done;
            return (RunEvent::Completed(self.finish()), Pause::None);
        };
        self.predictions.push(PredictionRecord::from_record(record));
        self.phase = if index + 1 < total {
            RunPhase::Generating { index: index + 1 }
        } else {
            RunPhase::Done
        };
        (RunEvent::Generated { index, total }, Pause::Generation)
    }

    fn finish(&mut self) -> RunOutcome {
        if let Some(outcome) = &self.outcome {
            return outcome.clone();
        }
        let outcome = RunOutcome {
            predictions: self.predictions.clone(),
            evaluation: EvaluationSet::from_records(&self.records),
            metrics: MetricsSnapshot::fixed(),
            used_fallback: self.used_fallback,
        };
        self.outcome = Some(outcome.clone());
        outcome
    }
}

/// Run to completion, waiting through `scheduler` and reporting each
/// checkpoint and the finalizing status to `on_progress`.
pub fn run<S, F>(
    dataset: &[u8],
    time_unit: Duration,
    scheduler: &mut S,
    mut on_progress: F,
) -> RunOutcome
where
    S: Scheduler,
    F: FnMut(&RunProgress),
{
    let mut runner = MockTrainingRunner::with_time_unit(dataset.to_vec(), time_unit);
    loop {
        let step = runner.step();
        match step.event {
            RunEvent::Checkpoint(progress) | RunEvent::Finalizing(progress) => {
                on_progress(&progress)
            }
            RunEvent::Completed(outcome) => return outcome,
            _ => {}
        }
        scheduler.wait(step.wait);
    }
}
