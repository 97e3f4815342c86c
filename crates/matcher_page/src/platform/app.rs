use std::time::Duration;

use matcher_core::{
    update, AlertId, AppState, AppViewModel, BadgeId, Effect, ExistingAlert, KeyPress, Msg,
    PageConfig, PageSnapshot, ProgressBarSnapshot, SelectedFile, MAX_PROGRESS_STEP,
};
use matcher_logging::{matcher_debug, matcher_info, matcher_warn, set_page_clock_ms};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::clipboard::{copy_to_clipboard, Clipboard};
use super::dom::{Document, NodeId};
use super::timers::{Due, TimerWheel};
use super::ui;
use super::ui::render::Bindings;

/// Outcome of dispatching one user event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventOutcome {
    pub default_prevented: bool,
}

/// A loaded page: document, controller state and the host services the
/// controller's effects need.
pub struct PageApp {
    document: Document,
    state: AppState,
    bindings: Bindings,
    timers: TimerWheel,
    clipboard: Option<Box<dyn Clipboard>>,
    rng: SmallRng,
}

impl PageApp {
    /// Attaches the controller to `document` and runs the load-time behaviour.
    pub fn load(document: Document, config: PageConfig) -> Self {
        Self::load_with_rng(document, config, SmallRng::from_os_rng())
    }

    pub fn load_with_rng(document: Document, config: PageConfig, rng: SmallRng) -> Self {
        let (bindings, snapshot) = scan_document(&document);
        matcher_info!(
            "Page {} loaded: {} progress bars, {} alerts, {} badges",
            document.location(),
            snapshot.progress_bars.len(),
            snapshot.alerts.len(),
            snapshot.badges.len()
        );
        let mut app = Self {
            document,
            state: AppState::with_config(config),
            bindings,
            timers: TimerWheel::new(),
            clipboard: None,
            rng,
        };
        set_page_clock_ms(0);
        app.dispatch_msg(Msg::PageLoaded(snapshot));
        app
    }

    /// Seeded variant for reproducible processing animations.
    pub fn load_seeded(document: Document, config: PageConfig, seed: u64) -> Self {
        Self::load_with_rng(document, config, SmallRng::seed_from_u64(seed))
    }

    /// Makes the platform clipboard API available to the page.
    pub fn with_clipboard(mut self, clipboard: Box<dyn Clipboard>) -> Self {
        self.clipboard = Some(clipboard);
        self
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn clipboard(&self) -> Option<&dyn Clipboard> {
        self.clipboard.as_deref()
    }

    pub fn view(&self) -> AppViewModel {
        self.state.view()
    }

    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.pending()
    }

    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    /// User picked a resume (or cleared the picker).
    pub fn select_file(&mut self, file: Option<SelectedFile>) -> EventOutcome {
        let Some(input) = self.document.element_by_id(ui::constants::INPUT_RESUME) else {
            matcher_warn!("Page has no resume input");
            return EventOutcome::default();
        };
        self.document.get_mut(input).files = file.iter().cloned().collect();
        self.dispatch_msg(Msg::FileSelected(file))
    }

    /// User typed into the job description field, leaving `text` as its value.
    pub fn type_description(&mut self, text: &str) -> EventOutcome {
        let Some(field) = self
            .document
            .element_by_id(ui::constants::INPUT_JOB_DESCRIPTION)
        else {
            matcher_warn!("Page has no job description field");
            return EventOutcome::default();
        };
        self.document.get_mut(field).value = text.to_string();
        self.dispatch_msg(Msg::DescriptionEdited(text.to_string()))
    }

    /// Submits the upload form. Returns true when the submission goes through.
    pub fn submit_form(&mut self) -> bool {
        if self
            .document
            .element_by_id(ui::constants::FORM_UPLOAD)
            .is_none()
        {
            matcher_warn!("Page has no upload form");
            return false;
        }
        let file = self
            .document
            .element_by_id(ui::constants::INPUT_RESUME)
            .and_then(|input| self.document.get(input).files.first().cloned());
        let description = self
            .document
            .element_by_id(ui::constants::INPUT_JOB_DESCRIPTION)
            .map(|field| self.document.get(field).value.clone())
            .unwrap_or_default();

        let outcome = self.dispatch_msg(Msg::FormSubmitted { file, description });
        !outcome.default_prevented
    }

    /// Clicks the `index`-th badge of the keyword cloud.
    pub fn click_badge(&mut self, badge: BadgeId) -> EventOutcome {
        let Some(node) = self.bindings.badges.get(badge).copied() else {
            matcher_warn!("No keyword badge {}", badge);
            return EventOutcome::default();
        };
        let element = self.document.get(node);
        let msg = Msg::BadgeClicked {
            badge,
            label: self.document.text_content(node),
            classes: element.classes.clone(),
            content: element.inner_html.clone(),
        };
        self.dispatch_msg(msg)
    }

    pub fn press_key(&mut self, key: KeyPress) -> EventOutcome {
        self.dispatch_msg(Msg::KeyPressed(key))
    }

    /// Clicks a link element.
    pub fn click_link(&mut self, link: NodeId) -> EventOutcome {
        let Some(href) = self
            .document
            .try_get(link)
            .and_then(|element| element.attr("href"))
            .map(ToOwned::to_owned)
        else {
            matcher_warn!("Clicked node is not a link on this page");
            return EventOutcome::default();
        };
        let outcome = self.dispatch_msg(Msg::AnchorClicked { href: href.clone() });
        if !outcome.default_prevented {
            self.navigate(&href);
        }
        outcome
    }

    /// Clicks the close control of an alert.
    pub fn close_alert(&mut self, alert: AlertId) -> EventOutcome {
        if let Some(node) = self.bindings.alerts.remove(&alert) {
            self.document.remove(node);
        }
        self.dispatch_msg(Msg::AlertDismissed(alert))
    }

    /// Window `load`; navigation started when the clock was at zero.
    pub fn window_loaded(&mut self) -> EventOutcome {
        let elapsed_ms = self.timers.now().as_secs_f64() * 1000.0;
        self.dispatch_msg(Msg::WindowLoaded { elapsed_ms })
    }

    /// Advances virtual time by `dt`, firing every timer that falls due.
    pub fn advance(&mut self, dt: Duration) {
        let until = self.timers.now() + dt;
        while let Some(due) = self.timers.pop_due(until) {
            set_page_clock_ms(self.clock_ms());
            let msg = match due {
                Due::Timer(timer) => Msg::TimerFired(timer),
                Due::ProcessingTick => Msg::ProcessingTick {
                    increment: self.rng.random_range(0.0..MAX_PROGRESS_STEP),
                },
            };
            self.dispatch_msg(msg);
        }
        self.timers.settle(until);
        set_page_clock_ms(self.clock_ms());
    }

    fn clock_ms(&self) -> u64 {
        u64::try_from(self.timers.now().as_millis()).unwrap_or(u64::MAX)
    }

    fn dispatch_msg(&mut self, msg: Msg) -> EventOutcome {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            matcher_debug!("Applying {} effects", effects.len());
        }
        self.state = state;

        let mut outcome = EventOutcome::default();
        for effect in &effects {
            self.apply_effect(effect, &mut outcome);
        }
        outcome
    }

    fn apply_effect(&mut self, effect: &Effect, outcome: &mut EventOutcome) {
        match effect {
            Effect::ScheduleTimer { timer, delay } => self.timers.schedule_once(*timer, *delay),
            Effect::StartProcessingTicker { period } => self.timers.start_ticker(*period),
            Effect::StopProcessingTicker => {
                self.timers.stop_ticker();
            }
            Effect::PreventDefault => outcome.default_prevented = true,
            Effect::CopyToClipboard(text) => {
                copy_to_clipboard(&mut self.document, self.clipboard.as_deref_mut(), text)
            }
            Effect::Navigate { href } => self.navigate(href),
            Effect::ReportLoadTime { elapsed_ms } => {
                matcher_info!("Page loaded in {:.2}ms", elapsed_ms);
            }
            Effect::ShowAlert { level, message, .. } => {
                matcher_info!("Alert ({}): {}", level.as_str(), message);
                ui::render::render(&mut self.document, &mut self.bindings, effect);
            }
            _ => ui::render::render(&mut self.document, &mut self.bindings, effect),
        }
    }

    fn navigate(&mut self, href: &str) {
        match self.document.navigate(href) {
            Ok(location) => matcher_info!("Navigating to {}", location),
            Err(err) => matcher_warn!("Cannot navigate to {:?}: {}", href, err),
        }
    }
}

/// Collects what the controller must know about a freshly parsed document.
fn scan_document(document: &Document) -> (Bindings, PageSnapshot) {
    use ui::constants::*;

    let mut bindings = Bindings::default();
    let mut snapshot = PageSnapshot {
        description_is_textarea: document
            .element_by_id(INPUT_JOB_DESCRIPTION)
            .is_some_and(|field| document.get(field).tag == "textarea"),
        ..PageSnapshot::default()
    };

    for (bar, node) in document.query_class(CLASS_PROGRESS_BAR).into_iter().enumerate() {
        bindings.bars.push(node);
        snapshot.progress_bars.push(ProgressBarSnapshot {
            bar,
            width: document.get(node).style.width.clone(),
        });
    }

    for (index, node) in document.query_class(CLASS_ALERT).into_iter().enumerate() {
        let id = AlertId(index as u64 + 1);
        bindings.alerts.insert(id, node);
        snapshot.alerts.push(ExistingAlert {
            id,
            permanent: document.get(node).has_class(CLASS_ALERT_PERMANENT),
            closable: !document
                .find_in(node, |element| element.has_class(CLASS_CLOSE))
                .is_empty(),
        });
    }

    for cloud in document.query_class(CLASS_KEYWORD_CLOUD) {
        for badge in document.find_in(cloud, |element| element.has_class(CLASS_BADGE)) {
            snapshot.badges.push(bindings.badges.len());
            bindings.badges.push(badge);
        }
    }

    snapshot.upload_link = document
        .find_in(document.body(), |element| {
            element.tag == "a" && element.attr("href").is_some_and(|href| href.contains("upload"))
        })
        .first()
        .and_then(|link| document.get(*link).attr("href"))
        .map(ToOwned::to_owned);

    (bindings, snapshot)
}
