use matcher_core::Field;

pub const INPUT_RESUME: &str = "resume";
pub const INPUT_JOB_DESCRIPTION: &str = "job_description";
pub const FORM_UPLOAD: &str = "uploadForm";
pub const BUTTON_SUBMIT: &str = "submitBtn";
pub const PANEL_PROGRESS: &str = "progressContainer";

pub const CLASS_CONTAINER: &str = "container";
pub const CLASS_PROGRESS_BAR: &str = "progress-bar";
pub const CLASS_KEYWORD_CLOUD: &str = "keyword-cloud";
pub const CLASS_BADGE: &str = "badge";
pub const CLASS_ALERT: &str = "alert";
pub const CLASS_ALERT_PERMANENT: &str = "alert-permanent";
pub const CLASS_CLOSE: &str = "btn-close";
pub const CLASS_FORM_TEXT: &str = "form-text";
pub const CLASS_TOOLTIP: &str = "tooltip";

pub fn field_element_id(field: Field) -> &'static str {
    match field {
        Field::Resume => INPUT_RESUME,
        Field::JobDescription => INPUT_JOB_DESCRIPTION,
    }
}
