use super::*;
use crate::logging;
use crate::finetune::{RunEvent, RunOutcome};
use std::time::Duration;

const STARTING_NOTICE: &str = "Initiating fine-tuning pipeline...";
const GENERATING_NOTICE: &str = "Generating predictions and evaluating model...";
const COMPLETE_NOTICE: &str = "Fine-tuning complete. Model evaluated successfully.";

impl EguiController {
    pub fn is_running(&self) -> bool {
        self.active_run.is_some()
    }

    /// Validate the form and begin a mock run. Returns whether a run started.
    pub fn start_fine_tuning(&mut self) -> bool {
        if self.is_running() {
            self.set_status("Fine-tuning already running", StatusTone::Info);
            return false;
        }
        let (model, params, file_name, bytes) = match self.ui.form.validate() {
            Ok(plan) => (
                plan.model,
                plan.hyperparameters,
                plan.dataset.file_name().to_string(),
                plan.dataset.bytes().to_vec(),
            ),
            Err(err) => {
                tracing::info!("Fine-tuning blocked: {err:?}");
                let message = err.to_string();
                self.ui.run.reset();
                self.ui.results = None;
                self.ui.launch_error = Some(message.clone());
                self.set_status(message, StatusTone::Error);
                return false;
            }
        };

        let id = Uuid::new_v4();
        let span = logging::run_span(&id.to_string());
        let _entered = span.enter();
        tracing::info!(
            model = %model,
            dataset = %file_name,
            batch_size = params.batch_size,
            learning_rate = params.learning_rate,
            epochs = params.epochs,
            "Starting mock fine-tuning run"
        );
        let now = self.clock.now();
        self.ui.launch_error = None;
        self.ui.results = None;
        self.ui.run.begin(id.to_string(), now);
        self.ui.run.push_notice(NoticeTone::Info, STARTING_NOTICE);
        self.active_run = Some(ActiveRun {
            runner: MockTrainingRunner::with_time_unit(bytes, self.settings.time_unit()),
            next_step_at: now,
            span: span.clone(),
        });
        self.set_status(format!("Fine-tuning {model} on {file_name}"), StatusTone::Busy);
        true
    }

    /// Advance the active run as far as the clock allows.
    ///
    /// Returns how long until the next step is due, or `None` when idle.
    pub fn tick(&mut self) -> Option<Duration> {
        let now = self.clock.now();
        loop {
            let active = self.active_run.as_mut()?;
            if now < active.next_step_at {
                return Some(active.next_step_at - now);
            }
            let step = active.runner.step();
            active.next_step_at = now + step.wait;
            let span = active.span.clone();
            let _entered = span.enter();
            self.apply_run_event(step.event, now);
        }
    }

    fn apply_run_event(&mut self, event: RunEvent, now: Instant) {
        match event {
            RunEvent::Started => {}
            RunEvent::Parsed { records, fallback } => {
                tracing::debug!(records, fallback, "Validation records ready");
            }
            RunEvent::Checkpoint(progress) => {
                tracing::debug!(percent = progress.percent, "Checkpoint");
                self.ui.run.set_progress(&progress, now);
            }
            RunEvent::Finalizing(progress) => {
                self.ui.run.set_progress(&progress, now);
            }
            RunEvent::Generated { index, total } => {
                if index == 0 {
                    self.ui.run.push_notice(NoticeTone::Info, GENERATING_NOTICE);
                }
                self.set_status(
                    format!("Generating predictions {}/{total}", index + 1),
                    StatusTone::Busy,
                );
            }
            RunEvent::Completed(outcome) => self.finish_run(outcome),
        }
    }

    fn finish_run(&mut self, outcome: RunOutcome) {
        if self.active_run.take().is_some() {
            tracing::info!(
                predictions = outcome.record_count(),
                "Mock fine-tuning run complete"
            );
        }
        self.ui.run.push_notice(NoticeTone::Success, COMPLETE_NOTICE);
        self.set_status(
            format!("Evaluated {} prediction(s)", outcome.record_count()),
            StatusTone::Success,
        );
        self.ui.results = Some(outcome);
    }
}
