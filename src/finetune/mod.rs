//! Core of the mock fine-tuning workflow, free of UI types.

pub mod chat;
pub mod clock;
pub mod dataset;
pub mod hyperparams;
pub mod metrics;
pub mod prediction;
pub mod request;
pub mod runner;

pub use clock::{Clock, ManualClock, Pause, Scheduler, SystemClock, ThreadScheduler};
pub use dataset::{DatasetRecord, ParsedDataset, UploadedDataset};
pub use hyperparams::{Hyperparameters, ModelChoice};
pub use metrics::MetricsSnapshot;
pub use prediction::PredictionRecord;
pub use request::{FineTuneRequest, LaunchError};
pub use runner::{MockTrainingRunner, RunEvent, RunOutcome, RunPhase, RunProgress, run};
