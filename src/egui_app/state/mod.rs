//! Shared state types for the egui UI.

mod chat;
mod progress;
mod status;

pub use chat::*;
pub use progress::*;
pub use status::*;

use crate::finetune::{FineTuneRequest, RunOutcome};

/// Top-level UI model consumed by the egui renderer.
///
/// Lives for one session only; nothing here is written to disk.
#[derive(Clone, Debug)]
pub struct UiState {
    pub status: StatusBarState,
    /// Sidebar and form inputs.
    pub form: FineTuneRequest,
    /// Blocking message raised by the last start attempt.
    pub launch_error: Option<String>,
    /// Progress card for the active or last run.
    pub run: RunPanelState,
    /// Evaluation of the last completed run.
    pub results: Option<RunOutcome>,
    pub chat: ChatState,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            status: StatusBarState::idle(),
            form: FineTuneRequest::default(),
            launch_error: None,
            run: RunPanelState::default(),
            results: None,
            chat: ChatState::default(),
        }
    }
}
