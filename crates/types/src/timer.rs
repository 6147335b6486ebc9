//! Live timer state consumed by the watchface renderer

use serde::{Deserialize, Serialize};

/// Timer status as shown by status components
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum TimerStatus {
    #[serde(rename = "ready")]
    #[default]
    Ready,
    #[serde(rename = "running")]
    Running,
    #[serde(rename = "paused")]
    Paused,
    #[serde(rename = "finished")]
    Finished,
}

impl TimerStatus {
    /// Derive the status from raw timer flags.
    ///
    /// A finished timer wins over every flag, then paused, then running.
    pub fn derive(remaining: u64, is_running: bool, is_paused: bool) -> Self {
        if remaining == 0 {
            TimerStatus::Finished
        } else if is_paused {
            TimerStatus::Paused
        } else if is_running {
            TimerStatus::Running
        } else {
            TimerStatus::Ready
        }
    }

    /// Upper-case label used in status text
    pub fn label(&self) -> &'static str {
        match self {
            TimerStatus::Ready => "READY",
            TimerStatus::Running => "RUNNING",
            TimerStatus::Paused => "PAUSED",
            TimerStatus::Finished => "FINISHED",
        }
    }
}

/// Timer snapshot as delivered by the timer backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerUpdate {
    /// Session length in seconds
    pub duration: u64,
    /// Seconds left in the session
    pub remaining: u64,
    pub is_running: bool,
    pub is_paused: bool,
    #[serde(default)]
    pub session_name: Option<String>,
}

/// Props handed to the renderer for one frame
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchFaceProps {
    pub duration: u64,
    pub remaining: u64,
    /// Elapsed share of the session, 0-100
    pub progress: f64,
    pub is_running: bool,
    pub is_paused: bool,
    #[serde(default)]
    pub session_name: Option<String>,
}

impl WatchFaceProps {
    pub fn status(&self) -> TimerStatus {
        TimerStatus::derive(self.remaining, self.is_running, self.is_paused)
    }

    /// Whether the timer is actively counting down
    pub fn is_ticking(&self) -> bool {
        self.is_running && !self.is_paused
    }
}

impl From<&TimerUpdate> for WatchFaceProps {
    fn from(update: &TimerUpdate) -> Self {
        let progress = if update.duration > 0 {
            let elapsed = update.duration.saturating_sub(update.remaining);
            elapsed as f64 / update.duration as f64 * 100.0
        } else {
            0.0
        };

        Self {
            duration: update.duration,
            remaining: update.remaining,
            progress,
            is_running: update.is_running,
            is_paused: update.is_paused,
            session_name: update.session_name.clone(),
        }
    }
}

impl From<TimerUpdate> for WatchFaceProps {
    fn from(update: TimerUpdate) -> Self {
        Self::from(&update)
    }
}
