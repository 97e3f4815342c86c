use std::sync::Once;
use std::time::Duration;

use matcher_core::{AlertId, KeyPress, PageConfig, SelectedFile};
use matcher_page::platform::dom::{Document, NodeId};
use matcher_page::platform::ui::layout::upload_page;
use matcher_page::platform::PageApp;
use pretty_assertions::assert_eq;
use url::Url;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(matcher_logging::initialize_for_tests);
}

fn open_upload_page() -> PageApp {
    init_logging();
    let location = Url::parse("http://localhost:5000/upload").unwrap();
    PageApp::load_seeded(upload_page(location), PageConfig::default(), 7)
}

fn by_id(document: &Document, id: &str) -> NodeId {
    document.element_by_id(id).expect("element present")
}

fn alerts(page: &PageApp) -> Vec<NodeId> {
    page.document().query_class("alert")
}

fn notes_next_to(page: &PageApp, id: &str, class: &str) -> Vec<String> {
    let doc = page.document();
    let parent = doc.parent(by_id(doc, id)).expect("input has a parent");
    doc.children(parent)
        .iter()
        .filter(|node| {
            let element = doc.get(**node);
            element.has_class("form-text") && element.has_class(class)
        })
        .map(|node| doc.text_content(*node))
        .collect()
}

fn long_description() -> String {
    "We are hiring a backend engineer with Rust, SQL and cloud experience. ".repeat(2)
}

#[test]
fn wrong_type_clears_input_and_shows_danger_alert() {
    let mut page = open_upload_page();
    page.select_file(Some(SelectedFile::new("resume.docx", 10_000)));

    let doc = page.document();
    assert!(doc.get(by_id(doc, "resume")).files.is_empty());
    let shown = alerts(&page);
    // The flash message from the server plus the new danger alert.
    assert_eq!(shown.len(), 2);
    let first = doc.get(shown[0]);
    assert!(first.has_class("alert-danger"));
    assert_eq!(doc.text_content(shown[0]).trim(), "Resume must be a PDF file");
}

#[test]
fn alert_is_inserted_first_in_container() {
    let mut page = open_upload_page();
    page.select_file(Some(SelectedFile::new("big.pdf", 16 * 1024 * 1024 + 1)));

    let doc = page.document();
    let container = doc.query_class("container")[0];
    let first_child = doc.children(container)[0];
    assert!(doc.get(first_child).has_class("alert-danger"));
    assert_eq!(
        doc.text_content(first_child).trim(),
        "File size must be less than 16MB"
    );
}

#[test]
fn valid_pdf_shows_exactly_one_note() {
    let mut page = open_upload_page();
    page.select_file(Some(SelectedFile::new("resume.pdf", 2048)));
    page.select_file(Some(SelectedFile::new("resume-v2.pdf", 5 * 1024 * 1024)));

    assert_eq!(
        notes_next_to(&page, "resume", "text-success"),
        vec!["File selected: resume-v2.pdf (5 MB)".to_string()]
    );
}

#[test]
fn description_feedback_tracks_typing() {
    let mut page = open_upload_page();

    page.type_description("");
    assert!(notes_next_to(&page, "job_description", "text-warning").is_empty());
    assert!(notes_next_to(&page, "job_description", "text-success").is_empty());

    page.type_description(&"a".repeat(49));
    assert_eq!(notes_next_to(&page, "job_description", "text-warning").len(), 1);

    page.type_description(&"a".repeat(50));
    assert!(notes_next_to(&page, "job_description", "text-warning").is_empty());
    assert_eq!(
        notes_next_to(&page, "job_description", "text-success"),
        vec!["Job description looks good! (50 characters)".to_string()]
    );
}

#[test]
fn empty_description_blocks_submit_with_one_warning() {
    let mut page = open_upload_page();
    page.select_file(Some(SelectedFile::new("resume.pdf", 2048)));

    assert!(!page.submit_form());

    let doc = page.document();
    let warnings: Vec<_> = alerts(&page)
        .into_iter()
        .filter(|node| doc.get(*node).has_class("alert-warning"))
        .collect();
    assert_eq!(warnings.len(), 1);
    assert!(!doc.get(by_id(doc, "submitBtn")).disabled);
    assert_eq!(
        doc.get(by_id(doc, "progressContainer")).style.display.as_deref(),
        Some("none")
    );
    assert_eq!(page.view().processing_percent, None);
}

#[test]
fn submit_runs_processing_indicator_up_to_cap() {
    let mut page = open_upload_page();
    page.select_file(Some(SelectedFile::new("resume.pdf", 2048)));
    page.type_description(&long_description());

    assert!(page.submit_form());
    {
        let doc = page.document();
        let button = doc.get(by_id(doc, "submitBtn"));
        assert!(button.disabled);
        assert_eq!(doc.text_content(by_id(doc, "submitBtn")), "Processing...");
        assert_eq!(
            doc.get(by_id(doc, "progressContainer")).style.display.as_deref(),
            Some("block")
        );
    }

    let bar = page.document().query_class("progress-bar")[0];
    let mut last = 0.0_f64;
    for _ in 0..200 {
        page.advance(Duration::from_millis(500));
        let width = page.document().get(bar).style.width.clone().unwrap();
        let percent: f64 = width.trim_end_matches('%').parse().unwrap();
        assert!(percent <= 90.0, "width {width} passed the cap");
        assert!(percent >= last);
        last = percent;
    }

    assert_eq!(last, 90.0);
    assert!(page.view().processing_capped);
    // Every one-shot timer has fired and the ticker is stopped.
    assert_eq!(page.pending_timers(), 0);
}

#[test]
fn alerts_disappear_after_five_seconds() {
    let mut page = open_upload_page();
    page.select_file(Some(SelectedFile::new("notes.txt", 10)));
    assert_eq!(alerts(&page).len(), 2);

    page.advance(Duration::from_millis(4_999));
    assert_eq!(alerts(&page).len(), 2);

    // Both the server flash and the danger alert expire at 5 s.
    page.advance(Duration::from_millis(1));
    assert!(alerts(&page).is_empty());
}

#[test]
fn manual_close_then_expiry_is_harmless() {
    let mut page = open_upload_page();
    page.close_alert(AlertId(1));
    assert!(alerts(&page).is_empty());

    page.advance(Duration::from_secs(6));
    assert!(alerts(&page).is_empty());
    assert_eq!(page.view().alerts.len(), 0);
}

#[test]
fn escape_closes_visible_alerts() {
    let mut page = open_upload_page();
    page.select_file(Some(SelectedFile::new("cv.odt", 10)));
    assert_eq!(alerts(&page).len(), 2);

    let outcome = page.press_key(KeyPress::plain("Escape"));
    assert!(!outcome.default_prevented);
    assert!(alerts(&page).is_empty());
}

#[test]
fn load_time_uses_virtual_clock() {
    let mut page = open_upload_page();
    page.advance(Duration::from_millis(42));
    page.window_loaded();

    assert_eq!(page.now(), Duration::from_millis(42));
}
