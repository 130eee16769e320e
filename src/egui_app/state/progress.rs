use std::time::Instant;

use crate::finetune::RunProgress;

/// Tone of a banner shown in the run card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeTone {
    Info,
    Success,
    Error,
}

/// One banner line in the run card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub tone: NoticeTone,
    pub text: String,
}

/// UI state for the progress card of the current (or last) run.
#[derive(Clone, Debug, Default)]
pub struct RunPanelState {
    /// Whether the card is shown.
    pub visible: bool,
    /// Identifier of the run driving the card, for log correlation.
    pub run_id: Option<String>,
    /// Progress bar value in percent.
    pub percent: u8,
    /// Status line under the progress bar.
    pub status_text: String,
    /// Banners in the order they were raised.
    pub notices: Vec<Notice>,
    /// When the run started.
    pub started_at: Option<Instant>,
    /// When the progress bar last moved.
    pub last_progress_at: Option<Instant>,
}

impl RunPanelState {
    /// Show the card for a fresh run.
    pub fn begin(&mut self, run_id: impl Into<String>, now: Instant) {
        *self = Self {
            visible: true,
            run_id: Some(run_id.into()),
            started_at: Some(now),
            last_progress_at: Some(now),
            ..Self::default()
        };
    }

    /// Hide the card and forget the previous run.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn set_progress(&mut self, progress: &RunProgress, now: Instant) {
        if self.percent != progress.percent {
            self.last_progress_at = Some(now);
        }
        self.percent = progress.percent;
        self.status_text = progress.message.clone();
    }

    pub fn push_notice(&mut self, tone: NoticeTone, text: impl Into<String>) {
        self.notices.push(Notice {
            tone,
            text: text.into(),
        });
    }

    /// Return completion in the range `[0.0, 1.0]`.
    pub fn fraction(&self) -> f32 {
        (f32::from(self.percent) / 100.0).clamp(0.0, 1.0)
    }
}
