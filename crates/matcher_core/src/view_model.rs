use crate::{AlertId, AlertLevel, Field, NoteLevel};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub alerts: Vec<AlertView>,
    pub notes: Vec<(Field, NoteView)>,
    pub processing_percent: Option<f64>,
    pub processing_capped: bool,
    pub submit_busy: bool,
    pub pending_timers: usize,
    pub dirty: bool,
}

impl AppViewModel {
    pub fn note(&self, field: Field) -> Option<&NoteView> {
        self.notes
            .iter()
            .find(|(candidate, _)| *candidate == field)
            .map(|(_, note)| note)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertView {
    pub id: AlertId,
    /// `None` for alerts rendered by the server.
    pub level: Option<AlertLevel>,
    pub message: Option<String>,
    pub permanent: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteView {
    pub level: NoteLevel,
    pub text: String,
}
