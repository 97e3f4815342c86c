/// A key press as reported by the document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyPress {
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
}

impl KeyPress {
    pub fn plain(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    pub fn with_ctrl(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ctrl: true,
            meta: false,
        }
    }

    pub fn shortcut(&self) -> Option<Shortcut> {
        if (self.ctrl || self.meta) && self.key == "n" {
            return Some(Shortcut::NewAnalysis);
        }
        if self.key == "Escape" {
            return Some(Shortcut::DismissAlerts);
        }
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Ctrl/Cmd + N: go to the upload page.
    NewAnalysis,
    /// Escape: close every dismissible alert.
    DismissAlerts,
}
