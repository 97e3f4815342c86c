//! Resume matcher page core: pure state machine, validators and view-model helpers.
mod alert;
mod badge;
mod config;
mod effect;
mod keys;
mod msg;
mod progress;
mod state;
mod update;
mod validate;
mod view_model;

pub use alert::{AlertId, AlertLevel, ExistingAlert};
pub use badge::{describe_badge, strip_markers, BadgeCategory, BadgeId, COPIED_MARKUP};
pub use config::{Behaviour, PageConfig, PageRules, Timings, MAX_FILE_BYTES, MIN_DESCRIPTION_CHARS};
pub use effect::{Effect, Field, NoteLevel};
pub use keys::{KeyPress, Shortcut};
pub use msg::{Msg, PageSnapshot, ProgressBarSnapshot};
pub use progress::{BarId, ProcessingProgress, ProgressStep, MAX_PROGRESS_CAP, MAX_PROGRESS_STEP};
pub use state::{AppState, TimerId};
pub use update::update;
pub use validate::{
    format_file_size, validate_file, validate_submission, validate_text, FileAccepted,
    FileRejection, SelectedFile, SubmitRejection, TextRejection,
};
pub use view_model::{AlertView, AppViewModel, NoteView};
