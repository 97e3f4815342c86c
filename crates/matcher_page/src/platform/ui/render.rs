use std::collections::BTreeMap;

use matcher_core::{AlertId, AlertLevel, BadgeId, BarId, Effect, Field, NoteLevel};
use matcher_logging::{matcher_debug, matcher_warn};

use super::constants::*;
use crate::platform::dom::{Document, Element, NodeId};

/// Links core identifiers to document nodes.
#[derive(Debug, Default, Clone)]
pub struct Bindings {
    pub alerts: BTreeMap<AlertId, NodeId>,
    pub bars: Vec<NodeId>,
    pub badges: Vec<NodeId>,
    tooltips: BTreeMap<BadgeId, NodeId>,
}

impl Bindings {
    pub fn tooltip(&self, badge: BadgeId) -> Option<NodeId> {
        self.tooltips.get(&badge).copied()
    }
}

/// Applies a document-level effect. Effects handled by the page host itself
/// (timers, clipboard, navigation, event flags) are ignored here.
pub fn render(document: &mut Document, bindings: &mut Bindings, effect: &Effect) {
    match effect {
        Effect::ShowAlert { id, level, message } => {
            let node = show_alert(document, *level, message);
            bindings.alerts.insert(*id, node);
        }
        Effect::RemoveAlert(id) => {
            if let Some(node) = bindings.alerts.remove(id) {
                if !document.remove(node) {
                    matcher_debug!("{} already detached", id);
                }
            }
        }
        Effect::ClearInput(field) => {
            if let Some(input) = document.element_by_id(field_element_id(*field)) {
                let element = document.get_mut(input);
                element.value.clear();
                element.files.clear();
            }
        }
        Effect::RemoveNote(field) => {
            for note in field_notes(document, *field) {
                document.remove(note);
            }
        }
        Effect::ShowNote { field, level, text } => show_note(document, *field, *level, text),
        Effect::SetBarWidth {
            bar,
            width,
            transition,
        } => set_bar_width(document, bindings, *bar, width, transition.as_deref()),
        Effect::SetSubmitBusy { label } => {
            if let Some(button) = document.element_by_id(BUTTON_SUBMIT) {
                let element = document.get_mut(button);
                element.disabled = true;
                element.inner_html = label.clone();
            }
        }
        Effect::ShowProgressContainer => {
            if let Some(panel) = document.element_by_id(PANEL_PROGRESS) {
                document.get_mut(panel).style.display = Some("block".to_string());
            }
        }
        Effect::SetProcessingWidth { percent } => {
            let Some(panel) = document.element_by_id(PANEL_PROGRESS) else {
                return;
            };
            let bars = document.find_in(panel, |element| element.has_class(CLASS_PROGRESS_BAR));
            if let Some(bar) = bars.first() {
                document.get_mut(*bar).style.width = Some(format!("{percent}%"));
            }
        }
        Effect::ShowTooltip { badge, text } => {
            if let Some(old) = bindings.tooltips.remove(badge) {
                document.remove(old);
            }
            let body = document.body();
            let tooltip = document.append(
                body,
                Element::new("div")
                    .with_class("tooltip bs-tooltip-top show")
                    .with_attr("role", CLASS_TOOLTIP)
                    .with_html(text),
            );
            bindings.tooltips.insert(*badge, tooltip);
        }
        Effect::HideTooltip { badge } => {
            if let Some(tooltip) = bindings.tooltips.remove(badge) {
                document.remove(tooltip);
            }
        }
        Effect::MarkBadgeCopyable { badge, title } => {
            if let Some(node) = bindings.badges.get(*badge).copied() {
                let element = document.get_mut(node);
                element.style.cursor = Some("pointer".to_string());
                element.attrs.insert("title".to_string(), title.clone());
            }
        }
        Effect::SetBadgeContent { badge, html } => {
            if let Some(node) = bindings.badges.get(*badge).copied() {
                document.get_mut(node).inner_html = html.clone();
            }
        }
        Effect::ScrollIntoView { target } => match document.element_by_id(target) {
            Some(node) => document.smooth_scroll_into_view(node),
            None => matcher_debug!("Anchor target #{} not found", target),
        },
        Effect::ScheduleTimer { .. }
        | Effect::StartProcessingTicker { .. }
        | Effect::StopProcessingTicker
        | Effect::PreventDefault
        | Effect::CopyToClipboard(_)
        | Effect::Navigate { .. }
        | Effect::ReportLoadTime { .. } => {}
    }
}

fn show_alert(document: &mut Document, level: AlertLevel, message: &str) -> NodeId {
    let mut element = Element::new("div").with_html(message);
    element.classes.extend(level.class_list());
    element.classes.push("show".to_string());
    let alert = document.create(element);
    document.append(
        alert,
        Element::new("button")
            .with_class(CLASS_CLOSE)
            .with_attr("type", "button")
            .with_attr("data-bs-dismiss", "alert"),
    );

    let container = document
        .query_class(CLASS_CONTAINER)
        .first()
        .copied()
        .unwrap_or_else(|| document.body());
    document.insert_first(container, alert);
    alert
}

/// Success/warning notes next to `field`.
fn field_notes(document: &Document, field: Field) -> Vec<NodeId> {
    let Some(parent) = document
        .element_by_id(field_element_id(field))
        .and_then(|input| document.parent(input))
    else {
        return Vec::new();
    };
    document
        .children(parent)
        .iter()
        .copied()
        .filter(|child| {
            let element = document.get(*child);
            element.has_class(CLASS_FORM_TEXT)
                && (element.has_class("text-success") || element.has_class("text-warning"))
        })
        .collect()
}

fn show_note(document: &mut Document, field: Field, level: NoteLevel, text: &str) {
    let Some(parent) = document
        .element_by_id(field_element_id(field))
        .and_then(|input| document.parent(input))
    else {
        matcher_warn!("No parent for {:?} note", field);
        return;
    };
    let (class, icon) = match level {
        NoteLevel::Success => ("form-text text-success", "fa-check-circle"),
        NoteLevel::Warning => ("form-text text-warning", "fa-exclamation-triangle"),
    };
    document.append(
        parent,
        Element::new("small")
            .with_class(class)
            .with_html(&format!(r#"<i class="fas {icon} me-1"></i>{text}"#)),
    );
}

fn set_bar_width(
    document: &mut Document,
    bindings: &Bindings,
    bar: BarId,
    width: &str,
    transition: Option<&str>,
) {
    let Some(node) = bindings.bars.get(bar).copied() else {
        matcher_warn!("Unknown progress bar {}", bar);
        return;
    };
    let style = &mut document.get_mut(node).style;
    if let Some(transition) = transition {
        style.transition = Some(transition.to_string());
    }
    style.width = Some(width.to_string());
}
