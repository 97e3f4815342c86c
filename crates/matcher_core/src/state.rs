use std::collections::BTreeMap;
use std::time::Duration;

use crate::view_model::{AlertView, AppViewModel, NoteView};
use crate::{
    AlertId, AlertLevel, BadgeId, BarId, Effect, ExistingAlert, Field, NoteLevel, PageConfig,
    PageSnapshot, ProcessingProgress,
};

/// Identifies a one-shot timer handed to the host.
pub type TimerId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TimerAction {
    ExpireAlert(AlertId),
    AnimateBar(BarId),
    HideTooltip(BadgeId),
    RestoreBadge(BadgeId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct AlertEntry {
    /// `None` for alerts rendered by the server.
    level: Option<AlertLevel>,
    message: Option<String>,
    permanent: bool,
    closable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CopyFeedback {
    original: String,
    /// Keyword copied by the first click; the badge shows feedback text meanwhile.
    keyword: String,
    restore_timer: TimerId,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    config: PageConfig,
    dirty: bool,
    next_timer_id: TimerId,
    next_alert_id: u64,
    timers: BTreeMap<TimerId, TimerAction>,
    alerts: BTreeMap<AlertId, AlertEntry>,
    notes: BTreeMap<Field, NoteView>,
    bars: BTreeMap<BarId, String>,
    tooltips: BTreeMap<BadgeId, TimerId>,
    copy_feedback: BTreeMap<BadgeId, CopyFeedback>,
    processing: ProcessingProgress,
    submit_busy: bool,
    description_is_textarea: bool,
    upload_link: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: PageConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            alerts: self
                .alerts
                .iter()
                .map(|(id, entry)| AlertView {
                    id: *id,
                    level: entry.level,
                    message: entry.message.clone(),
                    permanent: entry.permanent,
                })
                .collect(),
            notes: self
                .notes
                .iter()
                .map(|(field, note)| (*field, note.clone()))
                .collect(),
            processing_percent: self.processing.percent(),
            processing_capped: self.processing.is_capped(),
            submit_busy: self.submit_busy,
            pending_timers: self.timers.len(),
            dirty: self.dirty,
        }
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Returns whether anything changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn apply_snapshot(&mut self, snapshot: &PageSnapshot) {
        self.description_is_textarea = snapshot.description_is_textarea;
        self.upload_link = snapshot.upload_link.clone();
    }

    pub(crate) fn description_is_textarea(&self) -> bool {
        self.description_is_textarea
    }

    pub(crate) fn upload_link(&self) -> Option<&str> {
        self.upload_link.as_deref()
    }

    pub(crate) fn schedule(&mut self, action: TimerAction, delay: Duration) -> (TimerId, Effect) {
        self.next_timer_id += 1;
        let timer = self.next_timer_id;
        self.timers.insert(timer, action);
        (timer, Effect::ScheduleTimer { timer, delay })
    }

    pub(crate) fn take_timer(&mut self, timer: TimerId) -> Option<TimerAction> {
        self.timers.remove(&timer)
    }

    /// Records a server-rendered alert; ids shown later never collide with it.
    pub(crate) fn register_existing_alert(&mut self, alert: &ExistingAlert) {
        self.next_alert_id = self.next_alert_id.max(alert.id.0);
        self.alerts.insert(
            alert.id,
            AlertEntry {
                level: None,
                message: None,
                permanent: alert.permanent,
                closable: alert.closable,
            },
        );
    }

    /// Shows a new alert and schedules its removal.
    pub(crate) fn show_alert(&mut self, level: AlertLevel, message: String) -> Vec<Effect> {
        self.next_alert_id += 1;
        let id = AlertId(self.next_alert_id);
        self.alerts.insert(
            id,
            AlertEntry {
                level: Some(level),
                message: Some(message.clone()),
                permanent: false,
                closable: true,
            },
        );
        let delay = self.config.timings.alert_auto_hide();
        let (_, expire) = self.schedule(TimerAction::ExpireAlert(id), delay);
        vec![Effect::ShowAlert { id, level, message }, expire]
    }

    /// Forgets an alert. Returns false when it was already gone.
    pub(crate) fn forget_alert(&mut self, id: AlertId) -> bool {
        self.alerts.remove(&id).is_some()
    }

    pub(crate) fn closable_alerts(&self) -> Vec<AlertId> {
        self.alerts
            .iter()
            .filter(|(_, entry)| entry.closable)
            .map(|(id, _)| *id)
            .collect()
    }

    pub(crate) fn set_note(&mut self, field: Field, level: NoteLevel, text: String) -> Effect {
        self.notes.insert(
            field,
            NoteView {
                level,
                text: text.clone(),
            },
        );
        Effect::ShowNote { field, level, text }
    }

    /// Removes the note on `field`, if there is one.
    pub(crate) fn clear_note(&mut self, field: Field) -> Option<Effect> {
        self.notes
            .remove(&field)
            .map(|_| Effect::RemoveNote(field))
    }

    pub(crate) fn set_bar_target(&mut self, bar: BarId, target: String) {
        self.bars.insert(bar, target);
    }

    pub(crate) fn take_bar_target(&mut self, bar: BarId) -> Option<String> {
        self.bars.remove(&bar)
    }

    pub(crate) fn set_tooltip_timer(&mut self, badge: BadgeId, timer: TimerId) {
        self.tooltips.insert(badge, timer);
    }

    /// True when `timer` is the latest tooltip timer for `badge`.
    pub(crate) fn finish_tooltip(&mut self, badge: BadgeId, timer: TimerId) -> bool {
        if self.tooltips.get(&badge) == Some(&timer) {
            self.tooltips.remove(&badge);
            true
        } else {
            false
        }
    }

    /// Keyword of a badge whose copy feedback is still showing.
    pub(crate) fn copied_keyword(&self, badge: BadgeId) -> Option<&str> {
        self.copy_feedback
            .get(&badge)
            .map(|feedback| feedback.keyword.as_str())
    }

    /// Starts or extends copy feedback; the first captured content is kept.
    pub(crate) fn begin_copy_feedback(
        &mut self,
        badge: BadgeId,
        keyword: String,
        content: String,
        timer: TimerId,
    ) {
        self.copy_feedback
            .entry(badge)
            .and_modify(|feedback| feedback.restore_timer = timer)
            .or_insert(CopyFeedback {
                original: content,
                keyword,
                restore_timer: timer,
            });
    }

    /// Returns the original badge content when `timer` is the latest restore.
    pub(crate) fn finish_copy_feedback(&mut self, badge: BadgeId, timer: TimerId) -> Option<String> {
        match self.copy_feedback.get(&badge) {
            Some(feedback) if feedback.restore_timer == timer => self
                .copy_feedback
                .remove(&badge)
                .map(|feedback| feedback.original),
            _ => None,
        }
    }

    pub(crate) fn processing_mut(&mut self) -> &mut ProcessingProgress {
        &mut self.processing
    }

    pub(crate) fn set_submit_busy(&mut self) {
        self.submit_busy = true;
    }
}
