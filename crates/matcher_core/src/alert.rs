use std::fmt;

/// Identifies one alert on the page, whether rendered by the server or shown
/// by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AlertId(pub u64);

impl fmt::Display for AlertId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "alert#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertLevel {
    Danger,
    Warning,
    Success,
    Info,
}

impl AlertLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            AlertLevel::Danger => "danger",
            AlertLevel::Warning => "warning",
            AlertLevel::Success => "success",
            AlertLevel::Info => "info",
        }
    }

    /// Full class list of a dismissible alert at this level.
    pub fn class_list(self) -> [String; 4] {
        [
            "alert".to_string(),
            format!("alert-{}", self.as_str()),
            "alert-dismissible".to_string(),
            "fade".to_string(),
        ]
    }
}

/// An alert already present in the document when the page loads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExistingAlert {
    pub id: AlertId,
    /// Marked `alert-permanent`; never auto-hidden.
    pub permanent: bool,
    /// Has a `.btn-close` control.
    pub closable: bool,
}
