use crate::state::TimerAction;
use crate::{
    describe_badge, strip_markers, validate_file, validate_submission, validate_text, AlertLevel,
    AppState, BadgeCategory, BadgeId, Effect, Field, Msg, NoteLevel, PageSnapshot, ProgressStep,
    SelectedFile, Shortcut, TextRejection, TimerId, COPIED_MARKUP,
};

const BUSY_LABEL: &str = r#"<i class="fas fa-spinner fa-spin me-2"></i>Processing..."#;
const COPY_HINT: &str = "Click to copy";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::PageLoaded(snapshot) => page_loaded(&mut state, &snapshot),
        Msg::FileSelected(file) => file_selected(&mut state, file.as_ref()),
        Msg::DescriptionEdited(text) => {
            if state.description_is_textarea() {
                description_edited(&mut state, &text)
            } else {
                Vec::new()
            }
        }
        Msg::FormSubmitted { file, description } => {
            form_submitted(&mut state, file.as_ref(), &description)
        }
        Msg::BadgeClicked {
            badge,
            label,
            classes,
            content,
        } => badge_clicked(&mut state, badge, &label, &classes, content),
        Msg::KeyPressed(key) => match key.shortcut() {
            Some(Shortcut::NewAnalysis) => {
                let mut effects = vec![Effect::PreventDefault];
                if let Some(href) = state.upload_link() {
                    effects.push(Effect::Navigate {
                        href: href.to_string(),
                    });
                }
                effects
            }
            Some(Shortcut::DismissAlerts) => state
                .closable_alerts()
                .into_iter()
                .filter(|id| state.forget_alert(*id))
                .map(Effect::RemoveAlert)
                .collect(),
            None => Vec::new(),
        },
        Msg::AnchorClicked { href } => match href.strip_prefix('#') {
            Some(target) => {
                let mut effects = vec![Effect::PreventDefault];
                if !target.is_empty() {
                    effects.push(Effect::ScrollIntoView {
                        target: target.to_string(),
                    });
                }
                effects
            }
            None => Vec::new(),
        },
        Msg::AlertDismissed(id) => {
            // The close control already detached the node; the pending expiry
            // timer will find nothing to do.
            if state.forget_alert(id) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::TimerFired(timer) => timer_fired(&mut state, timer),
        Msg::ProcessingTick { increment } => {
            let cap = f64::from(state.config().rules.progress_cap_percent);
            match state.processing_mut().tick(increment, cap) {
                ProgressStep::Ignored => Vec::new(),
                ProgressStep::Advanced(percent) => {
                    vec![Effect::SetProcessingWidth { percent }]
                }
                ProgressStep::Capped(percent) => vec![
                    Effect::StopProcessingTicker,
                    Effect::SetProcessingWidth { percent },
                ],
            }
        }
        Msg::WindowLoaded { elapsed_ms } => vec![Effect::ReportLoadTime { elapsed_ms }],
    };

    if !effects.is_empty() {
        state.mark_dirty();
    }
    (state, effects)
}

fn page_loaded(state: &mut AppState, snapshot: &PageSnapshot) -> Vec<Effect> {
    state.apply_snapshot(snapshot);
    let timings = state.config().timings.clone();
    let mut effects = Vec::new();

    for bar in &snapshot.progress_bars {
        let Some(target) = bar.width.as_ref().filter(|width| !width.is_empty()) else {
            continue;
        };
        state.set_bar_target(bar.bar, target.clone());
        effects.push(Effect::SetBarWidth {
            bar: bar.bar,
            width: "0%".to_string(),
            transition: None,
        });
        let (_, animate) = state.schedule(
            TimerAction::AnimateBar(bar.bar),
            timings.bar_animation_delay(),
        );
        effects.push(animate);
    }

    if state.config().behaviour.badge_copy {
        effects.extend(snapshot.badges.iter().map(|badge| Effect::MarkBadgeCopyable {
            badge: *badge,
            title: COPY_HINT.to_string(),
        }));
    }

    for alert in &snapshot.alerts {
        state.register_existing_alert(alert);
        if alert.closable && !alert.permanent {
            let (_, expire) = state.schedule(
                TimerAction::ExpireAlert(alert.id),
                timings.alert_auto_hide(),
            );
            effects.push(expire);
        }
    }

    effects
}

fn file_selected(state: &mut AppState, file: Option<&SelectedFile>) -> Vec<Effect> {
    match validate_file(file, &state.config().rules) {
        Ok(None) => Vec::new(),
        Ok(Some(accepted)) => {
            let mut effects: Vec<Effect> = state.clear_note(Field::Resume).into_iter().collect();
            effects.push(state.set_note(Field::Resume, NoteLevel::Success, accepted.note_text()));
            effects
        }
        Err(rejection) => {
            let mut effects = state.show_alert(AlertLevel::Danger, rejection.to_string());
            effects.push(Effect::ClearInput(Field::Resume));
            effects.extend(state.clear_note(Field::Resume));
            effects
        }
    }
}

fn description_edited(state: &mut AppState, text: &str) -> Vec<Effect> {
    let mut effects: Vec<Effect> = state
        .clear_note(Field::JobDescription)
        .into_iter()
        .collect();
    match validate_text(text, &state.config().rules) {
        Ok(chars) => effects.push(state.set_note(
            Field::JobDescription,
            NoteLevel::Success,
            format!("Job description looks good! ({chars} characters)"),
        )),
        Err(TextRejection::Empty) => {}
        Err(rejection @ TextRejection::TooShort { .. }) => effects.push(state.set_note(
            Field::JobDescription,
            NoteLevel::Warning,
            rejection.to_string(),
        )),
    }
    effects
}

fn form_submitted(
    state: &mut AppState,
    file: Option<&SelectedFile>,
    description: &str,
) -> Vec<Effect> {
    if let Err(rejection) = validate_submission(file, description, &state.config().rules) {
        let mut effects = vec![Effect::PreventDefault];
        effects.extend(state.show_alert(AlertLevel::Warning, rejection.to_string()));
        return effects;
    }

    if !state.processing_mut().start() {
        return Vec::new();
    }
    state.set_submit_busy();
    vec![
        Effect::SetSubmitBusy {
            label: BUSY_LABEL.to_string(),
        },
        Effect::ShowProgressContainer,
        Effect::StartProcessingTicker {
            period: state.config().timings.processing_tick(),
        },
    ]
}

fn badge_clicked(
    state: &mut AppState,
    badge: BadgeId,
    label: &str,
    classes: &[String],
    content: String,
) -> Vec<Effect> {
    let keyword = match state.copied_keyword(badge) {
        Some(keyword) => keyword.to_string(),
        None => strip_markers(label),
    };
    let behaviour = state.config().behaviour.clone();
    let timings = state.config().timings.clone();
    let mut effects = Vec::new();

    if behaviour.badge_tooltips {
        let category = BadgeCategory::from_classes(classes);
        effects.push(Effect::ShowTooltip {
            badge,
            text: describe_badge(&keyword, category),
        });
        let (timer, hide) = state.schedule(TimerAction::HideTooltip(badge), timings.tooltip());
        state.set_tooltip_timer(badge, timer);
        effects.push(hide);
    }

    if behaviour.badge_copy {
        effects.push(Effect::CopyToClipboard(keyword.clone()));
        effects.push(Effect::SetBadgeContent {
            badge,
            html: COPIED_MARKUP.to_string(),
        });
        let (timer, restore) =
            state.schedule(TimerAction::RestoreBadge(badge), timings.copy_feedback());
        state.begin_copy_feedback(badge, keyword, content, timer);
        effects.push(restore);
    }

    effects
}

fn timer_fired(state: &mut AppState, timer: TimerId) -> Vec<Effect> {
    let Some(action) = state.take_timer(timer) else {
        return Vec::new();
    };
    match action {
        TimerAction::ExpireAlert(id) => {
            if state.forget_alert(id) {
                vec![Effect::RemoveAlert(id)]
            } else {
                Vec::new()
            }
        }
        TimerAction::AnimateBar(bar) => match state.take_bar_target(bar) {
            Some(width) => vec![Effect::SetBarWidth {
                bar,
                width,
                transition: Some(state.config().timings.bar_transition()),
            }],
            None => Vec::new(),
        },
        TimerAction::HideTooltip(badge) => {
            if state.finish_tooltip(badge, timer) {
                vec![Effect::HideTooltip { badge }]
            } else {
                Vec::new()
            }
        }
        TimerAction::RestoreBadge(badge) => match state.finish_copy_feedback(badge, timer) {
            Some(html) => vec![Effect::SetBadgeContent { badge, html }],
            None => Vec::new(),
        },
    }
}
