use crate::{AlertId, BadgeId, BarId, ExistingAlert, KeyPress, SelectedFile, TimerId};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Document finished parsing; describes what the page contains.
    PageLoaded(PageSnapshot),
    /// The resume input changed. `None` when the selection was cleared.
    FileSelected(Option<SelectedFile>),
    /// User typed in the job description field.
    DescriptionEdited(String),
    /// User submitted the upload form.
    FormSubmitted {
        file: Option<SelectedFile>,
        description: String,
    },
    /// User clicked a keyword badge.
    BadgeClicked {
        badge: BadgeId,
        /// Text content of the badge.
        label: String,
        classes: Vec<String>,
        /// Current inner markup, restored after copy feedback.
        content: String,
    },
    KeyPressed(KeyPress),
    /// User clicked a link; only in-page `#` links are handled.
    AnchorClicked { href: String },
    /// User closed an alert with its close control.
    AlertDismissed(AlertId),
    /// A timer scheduled through `Effect::ScheduleTimer` elapsed.
    TimerFired(TimerId),
    /// The processing ticker elapsed; `increment` is drawn by the host.
    ProcessingTick { increment: f64 },
    /// Window `load` event.
    WindowLoaded { elapsed_ms: f64 },
}

/// What the controller needs to know about the document at load time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageSnapshot {
    /// `job_description` exists and is a textarea.
    pub description_is_textarea: bool,
    pub progress_bars: Vec<ProgressBarSnapshot>,
    pub alerts: Vec<ExistingAlert>,
    /// Badges inside `.keyword-cloud`, in document order.
    pub badges: Vec<BadgeId>,
    /// `href` of the first link pointing at the upload page.
    pub upload_link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressBarSnapshot {
    pub bar: BarId,
    /// Inline `style.width`, if any.
    pub width: Option<String>,
}
