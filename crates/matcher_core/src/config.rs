use std::time::Duration;

use serde::Deserialize;

/// Largest resume upload accepted by the server (16 MiB).
pub const MAX_FILE_BYTES: u64 = 16 * 1024 * 1024;
/// Minimum trimmed length of a useful job description.
pub const MIN_DESCRIPTION_CHARS: usize = 50;

/// Everything the page controller can be tuned with.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub rules: PageRules,
    pub timings: Timings,
    pub behaviour: Behaviour,
}

/// Input constraints enforced before anything reaches the server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageRules {
    /// Expected resume extension, compared case-insensitively.
    pub resume_extension: String,
    /// Alert shown when the resume has the wrong extension.
    pub resume_type_message: String,
    pub max_file_bytes: u64,
    pub min_description_chars: usize,
    /// Upper bound of the simulated processing progress, in percent.
    pub progress_cap_percent: u8,
}

impl Default for PageRules {
    fn default() -> Self {
        Self {
            resume_extension: "pdf".to_string(),
            resume_type_message: "Resume must be a PDF file".to_string(),
            max_file_bytes: MAX_FILE_BYTES,
            min_description_chars: MIN_DESCRIPTION_CHARS,
            progress_cap_percent: 90,
        }
    }
}

/// Delays and durations, all in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Timings {
    pub alert_auto_hide_ms: u64,
    pub bar_animation_delay_ms: u64,
    pub bar_animation_duration_ms: u64,
    pub tooltip_ms: u64,
    pub copy_feedback_ms: u64,
    pub processing_tick_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            alert_auto_hide_ms: 5_000,
            bar_animation_delay_ms: 100,
            bar_animation_duration_ms: 1_500,
            tooltip_ms: 3_000,
            copy_feedback_ms: 1_000,
            processing_tick_ms: 500,
        }
    }
}

impl Timings {
    pub fn alert_auto_hide(&self) -> Duration {
        Duration::from_millis(self.alert_auto_hide_ms)
    }

    pub fn bar_animation_delay(&self) -> Duration {
        Duration::from_millis(self.bar_animation_delay_ms)
    }

    pub fn tooltip(&self) -> Duration {
        Duration::from_millis(self.tooltip_ms)
    }

    pub fn copy_feedback(&self) -> Duration {
        Duration::from_millis(self.copy_feedback_ms)
    }

    pub fn processing_tick(&self) -> Duration {
        Duration::from_millis(self.processing_tick_ms)
    }

    /// CSS transition applied when a progress bar grows to its target width.
    pub fn bar_transition(&self) -> String {
        let seconds = self.bar_animation_duration_ms as f64 / 1000.0;
        format!("width {seconds}s ease-in-out")
    }
}

/// Optional interactions on the results page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Behaviour {
    /// Show a classification tooltip when a keyword badge is clicked.
    pub badge_tooltips: bool,
    /// Copy the keyword to the clipboard when a badge is clicked.
    pub badge_copy: bool,
}

impl Default for Behaviour {
    fn default() -> Self {
        Self {
            badge_tooltips: true,
            badge_copy: true,
        }
    }
}
