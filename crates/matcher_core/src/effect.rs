use std::time::Duration;

use crate::{AlertId, AlertLevel, BadgeId, BarId, TimerId};

/// Form fields that can carry an inline validation note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Resume,
    JobDescription,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteLevel {
    Success,
    Warning,
}

/// Document commands produced by `update`; the host applies them in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Insert a dismissible alert as the first child of the main container.
    ShowAlert {
        id: AlertId,
        level: AlertLevel,
        message: String,
    },
    /// Remove an alert if it is still attached.
    RemoveAlert(AlertId),
    /// Reset the value of a field.
    ClearInput(Field),
    /// Remove the success/warning note next to a field.
    RemoveNote(Field),
    ShowNote {
        field: Field,
        level: NoteLevel,
        text: String,
    },
    SetBarWidth {
        bar: BarId,
        width: String,
        transition: Option<String>,
    },
    /// Fire `Msg::TimerFired(timer)` once after `delay`.
    ScheduleTimer { timer: TimerId, delay: Duration },
    /// Fire `Msg::ProcessingTick` every `period` until stopped.
    StartProcessingTicker { period: Duration },
    StopProcessingTicker,
    /// Cancel the default action of the event being handled.
    PreventDefault,
    /// Disable the submit button and replace its label.
    SetSubmitBusy { label: String },
    ShowProgressContainer,
    SetProcessingWidth { percent: f64 },
    ShowTooltip { badge: BadgeId, text: String },
    HideTooltip { badge: BadgeId },
    /// Pointer cursor and a title hint on a badge.
    MarkBadgeCopyable { badge: BadgeId, title: String },
    CopyToClipboard(String),
    SetBadgeContent { badge: BadgeId, html: String },
    Navigate { href: String },
    /// Smoothly scroll the element with this id to the top of the viewport.
    ScrollIntoView { target: String },
    ReportLoadTime { elapsed_ms: f64 },
}
