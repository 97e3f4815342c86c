use std::sync::Once;
use std::time::Duration;

use matcher_core::{
    update, AlertId, AlertLevel, AppState, Effect, Field, Msg, NoteLevel, PageSnapshot,
    SelectedFile,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(matcher_logging::initialize_for_tests);
}

fn upload_page() -> AppState {
    let (state, _) = update(
        AppState::new(),
        Msg::PageLoaded(PageSnapshot {
            description_is_textarea: true,
            ..PageSnapshot::default()
        }),
    );
    state
}

#[test]
fn no_file_selected_is_silent() {
    init_logging();
    let (next, effects) = update(upload_page(), Msg::FileSelected(None));

    assert!(effects.is_empty());
    assert!(next.view().notes.is_empty());
}

#[test]
fn wrong_extension_alerts_and_clears_input() {
    init_logging();
    let (next, effects) = update(
        upload_page(),
        Msg::FileSelected(Some(SelectedFile::new("resume.docx", 2_000))),
    );

    assert_eq!(
        effects,
        vec![
            Effect::ShowAlert {
                id: AlertId(1),
                level: AlertLevel::Danger,
                message: "Resume must be a PDF file".to_string(),
            },
            Effect::ScheduleTimer {
                timer: 1,
                delay: Duration::from_millis(5_000),
            },
            Effect::ClearInput(Field::Resume),
        ]
    );
    assert!(next.view().note(Field::Resume).is_none());
}

#[test]
fn extension_compare_ignores_case() {
    init_logging();
    let (next, _) = update(
        upload_page(),
        Msg::FileSelected(Some(SelectedFile::new("CV.PDF", 500))),
    );

    let note = next.view().note(Field::Resume).cloned().expect("note");
    assert_eq!(note.level, NoteLevel::Success);
    assert_eq!(note.text, "File selected: CV.PDF (500 Bytes)");
}

#[test]
fn oversized_pdf_is_rejected() {
    init_logging();
    let (next, effects) = update(
        upload_page(),
        Msg::FileSelected(Some(SelectedFile::new("big.pdf", 16 * 1024 * 1024 + 1))),
    );

    assert!(effects.contains(&Effect::ShowAlert {
        id: AlertId(1),
        level: AlertLevel::Danger,
        message: "File size must be less than 16MB".to_string(),
    }));
    assert!(effects.contains(&Effect::ClearInput(Field::Resume)));
    assert_eq!(next.view().alerts.len(), 1);
}

#[test]
fn file_exactly_at_limit_is_accepted() {
    init_logging();
    let (_, effects) = update(
        upload_page(),
        Msg::FileSelected(Some(SelectedFile::new("max.pdf", 16 * 1024 * 1024))),
    );

    assert_eq!(
        effects,
        vec![Effect::ShowNote {
            field: Field::Resume,
            level: NoteLevel::Success,
            text: "File selected: max.pdf (16 MB)".to_string(),
        }]
    );
}

#[test]
fn reselecting_replaces_previous_note() {
    init_logging();
    let (state, _) = update(
        upload_page(),
        Msg::FileSelected(Some(SelectedFile::new("first.pdf", 2048))),
    );
    let (next, effects) = update(
        state,
        Msg::FileSelected(Some(SelectedFile::new("second.pdf", 5 * 1024 * 1024))),
    );

    assert_eq!(
        effects,
        vec![
            Effect::RemoveNote(Field::Resume),
            Effect::ShowNote {
                field: Field::Resume,
                level: NoteLevel::Success,
                text: "File selected: second.pdf (5 MB)".to_string(),
            },
        ]
    );
    assert_eq!(next.view().notes.len(), 1);
}

#[test]
fn rejected_file_drops_stale_selection_note() {
    init_logging();
    let (state, _) = update(
        upload_page(),
        Msg::FileSelected(Some(SelectedFile::new("ok.pdf", 2048))),
    );
    let (next, effects) = update(
        state,
        Msg::FileSelected(Some(SelectedFile::new("notes.txt", 10))),
    );

    assert_eq!(effects.last(), Some(&Effect::RemoveNote(Field::Resume)));
    assert!(next.view().note(Field::Resume).is_none());
}

#[test]
fn description_thresholds() {
    init_logging();

    let (state, effects) = update(upload_page(), Msg::DescriptionEdited("   ".to_string()));
    assert!(effects.is_empty());
    assert!(state.view().note(Field::JobDescription).is_none());

    let (state, effects) = update(state, Msg::DescriptionEdited("x".repeat(49)));
    assert_eq!(
        effects,
        vec![Effect::ShowNote {
            field: Field::JobDescription,
            level: NoteLevel::Warning,
            text: "Job description seems too short. Please provide more details for better analysis."
                .to_string(),
        }]
    );

    let (state, effects) = update(state, Msg::DescriptionEdited(format!("  {}  ", "x".repeat(50))));
    assert_eq!(
        effects,
        vec![
            Effect::RemoveNote(Field::JobDescription),
            Effect::ShowNote {
                field: Field::JobDescription,
                level: NoteLevel::Success,
                text: "Job description looks good! (50 characters)".to_string(),
            },
        ]
    );

    // Clearing the field removes the note and shows nothing new.
    let (state, effects) = update(state, Msg::DescriptionEdited(String::new()));
    assert_eq!(effects, vec![Effect::RemoveNote(Field::JobDescription)]);
    assert!(state.view().notes.is_empty());
}

#[test]
fn description_feedback_requires_textarea() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::PageLoaded(PageSnapshot::default()));
    let (_, effects) = update(state, Msg::DescriptionEdited("x".repeat(60)));

    assert!(effects.is_empty());
}
