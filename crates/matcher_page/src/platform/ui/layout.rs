//! Server-rendered page skeletons the controller attaches to.

use url::Url;

use super::constants::*;
use crate::platform::dom::{Document, Element};

/// Match status the server renders into a keyword badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordStatus {
    Matched,
    Missing,
    Extra,
}

impl KeywordStatus {
    fn badge_class(self) -> &'static str {
        match self {
            KeywordStatus::Matched => "badge bg-success",
            KeywordStatus::Missing => "badge bg-warning text-dark",
            KeywordStatus::Extra => "badge bg-secondary",
        }
    }

    fn marker(self) -> &'static str {
        match self {
            KeywordStatus::Matched => " ✓",
            KeywordStatus::Missing => " !",
            KeywordStatus::Extra => "",
        }
    }
}

fn navbar(document: &mut Document) {
    let body = document.body();
    let nav = document.append(body, Element::new("nav").with_class("navbar"));
    document.append(
        nav,
        Element::new("a")
            .with_class("navbar-brand")
            .with_attr("href", "/")
            .with_html("Resume Matcher"),
    );
    document.append(
        nav,
        Element::new("a")
            .with_class("nav-link")
            .with_attr("href", "/upload")
            .with_html("New Analysis"),
    );
}

/// Upload form with a flash message from the previous request.
pub fn upload_page(location: Url) -> Document {
    let mut document = Document::new(location);
    navbar(&mut document);
    let body = document.body();
    let container = document.append(body, Element::new("div").with_class(CLASS_CONTAINER));

    let flash = document.append(
        container,
        Element::new("div")
            .with_class("alert alert-info alert-dismissible fade show")
            .with_html("Welcome back! Upload a resume to start a new analysis."),
    );
    document.append(
        flash,
        Element::new("button")
            .with_class(CLASS_CLOSE)
            .with_attr("data-bs-dismiss", "alert"),
    );

    let form = document.append(
        container,
        Element::new("form")
            .with_id(FORM_UPLOAD)
            .with_attr("method", "post")
            .with_attr("enctype", "multipart/form-data"),
    );
    let resume_group = document.append(form, Element::new("div").with_class("mb-3"));
    document.append(
        resume_group,
        Element::new("input")
            .with_id(INPUT_RESUME)
            .with_class("form-control")
            .with_attr("type", "file")
            .with_attr("accept", ".pdf"),
    );
    let description_group = document.append(form, Element::new("div").with_class("mb-3"));
    document.append(
        description_group,
        Element::new("textarea")
            .with_id(INPUT_JOB_DESCRIPTION)
            .with_class("form-control")
            .with_attr("rows", "8"),
    );
    document.append(
        form,
        Element::new("button")
            .with_id(BUTTON_SUBMIT)
            .with_class("btn btn-primary")
            .with_attr("type", "submit")
            .with_html("Analyze Match"),
    );

    let mut progress_panel = Element::new("div").with_id(PANEL_PROGRESS).with_class("mt-3");
    progress_panel.style.display = Some("none".to_string());
    let progress_panel = document.append(form, progress_panel);
    let track = document.append(progress_panel, Element::new("div").with_class("progress"));
    document.append(
        track,
        Element::new("div")
            .with_class("progress-bar progress-bar-striped progress-bar-animated")
            .with_width("0%"),
    );

    document
}

/// Results view: overall score bar, keyword cloud and a permanent notice.
pub fn results_page(location: Url, score: u8, keywords: &[(&str, KeywordStatus)]) -> Document {
    let mut document = Document::new(location);
    navbar(&mut document);
    let body = document.body();
    let container = document.append(body, Element::new("div").with_class(CLASS_CONTAINER));

    document.append(
        container,
        Element::new("div")
            .with_class("alert alert-secondary alert-permanent")
            .with_html("Scores are estimates based on keyword overlap."),
    );
    document.append(
        container,
        Element::new("a")
            .with_class("btn btn-link")
            .with_attr("href", "#keywords")
            .with_html("Jump to keywords"),
    );

    let track = document.append(container, Element::new("div").with_class("progress"));
    document.append(
        track,
        Element::new("div")
            .with_class(CLASS_PROGRESS_BAR)
            .with_width(&format!("{score}%"))
            .with_html(&format!("{score}%")),
    );

    let cloud = document.append(
        container,
        Element::new("div")
            .with_id("keywords")
            .with_class(CLASS_KEYWORD_CLOUD),
    );
    for (keyword, status) in keywords {
        document.append(
            cloud,
            Element::new("span")
                .with_class(status.badge_class())
                .with_html(&format!("{keyword}{}", status.marker())),
        );
    }

    document
}
