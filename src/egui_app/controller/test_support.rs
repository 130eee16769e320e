use super::*;
use crate::config::{AppSettings, TimingSettings};
use crate::finetune::{ManualClock, ModelChoice, UploadedDataset};
use std::time::Duration;

pub(super) const TEST_UNIT: Duration = Duration::from_millis(100);

pub(super) fn dummy_controller() -> (EguiController, ManualClock) {
    let clock = ManualClock::new();
    let mut controller = EguiController::new(Box::new(clock.clone()));
    controller.apply_settings(AppSettings {
        timing: TimingSettings {
            time_unit_ms: TEST_UNIT.as_millis() as u64,
        },
        ..AppSettings::default()
    });
    (controller, clock)
}

pub(super) fn ndjson(essays: &[&str]) -> Vec<u8> {
    essays
        .iter()
        .map(|essay| format!("{{\"essay\":\"{essay}\",\"description\":\"ref {essay}\"}}\n"))
        .collect::<String>()
        .into_bytes()
}

/// Controller with every required field filled in.
pub(super) fn ready_controller(essays: &[&str]) -> (EguiController, ManualClock) {
    let (mut controller, clock) = dummy_controller();
    controller.ui.form.token = "hf_test".into();
    controller.ui.form.model = ModelChoice::Llama3;
    controller.ui.form.dataset =
        Some(UploadedDataset::new("val.jsonl", ndjson(essays)).expect("valid extension"));
    (controller, clock)
}

/// Tick until the controller goes idle, advancing the clock by each requested wait.
pub(super) fn drive_to_completion(controller: &mut EguiController, clock: &ManualClock) -> usize {
    let mut ticks = 0;
    while let Some(wait) = controller.tick() {
        clock.advance(wait);
        ticks += 1;
        assert!(ticks < 1_000, "run did not finish");
    }
    ticks
}
