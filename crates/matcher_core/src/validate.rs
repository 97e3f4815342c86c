//! Input validation, kept free of any document access so the decisions can be
//! checked directly.

use thiserror::Error;

use crate::PageRules;

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// A file picked in the resume input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }

    /// Lower-cased text after the last dot; the whole name when there is no dot.
    pub fn extension(&self) -> String {
        self.name
            .rsplit('.')
            .next()
            .unwrap_or_default()
            .to_lowercase()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileAccepted {
    pub name: String,
    pub size_label: String,
}

impl FileAccepted {
    pub fn note_text(&self) -> String {
        format!("File selected: {} ({})", self.name, self.size_label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileRejection {
    #[error("{message}")]
    WrongType { extension: String, message: String },
    #[error("File size must be less than {limit}")]
    TooLarge { size: u64, limit: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextRejection {
    #[error("Job description is empty")]
    Empty,
    #[error("Job description seems too short. Please provide more details for better analysis.")]
    TooShort { chars: usize, min: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitRejection {
    #[error("Please select a resume file and provide job description text")]
    MissingInput,
    #[error("Job description is too short. Please provide more details for accurate analysis.")]
    DescriptionTooShort { chars: usize },
}

/// Checks the file picked in the resume input.
///
/// `Ok(None)` means nothing was selected, which is not an error. The extension
/// is checked before the size.
pub fn validate_file(
    file: Option<&SelectedFile>,
    rules: &PageRules,
) -> Result<Option<FileAccepted>, FileRejection> {
    let Some(file) = file else {
        return Ok(None);
    };

    let extension = file.extension();
    if extension != rules.resume_extension.to_lowercase() {
        return Err(FileRejection::WrongType {
            extension,
            message: rules.resume_type_message.clone(),
        });
    }

    if file.size > rules.max_file_bytes {
        return Err(FileRejection::TooLarge {
            size: file.size,
            limit: format_file_size(rules.max_file_bytes).replace(' ', ""),
        });
    }

    Ok(Some(FileAccepted {
        name: file.name.clone(),
        size_label: format_file_size(file.size),
    }))
}

/// Checks a job description; returns the trimmed length in characters.
pub fn validate_text(text: &str, rules: &PageRules) -> Result<usize, TextRejection> {
    let chars = text.trim().chars().count();
    if chars == 0 {
        return Err(TextRejection::Empty);
    }
    if chars < rules.min_description_chars {
        return Err(TextRejection::TooShort {
            chars,
            min: rules.min_description_chars,
        });
    }
    Ok(chars)
}

/// Decides whether the upload form may be submitted.
pub fn validate_submission(
    file: Option<&SelectedFile>,
    description: &str,
    rules: &PageRules,
) -> Result<(), SubmitRejection> {
    let description = description.trim();
    if file.is_none() || description.is_empty() {
        return Err(SubmitRejection::MissingInput);
    }
    let chars = description.chars().count();
    if chars < rules.min_description_chars {
        return Err(SubmitRejection::DescriptionTooShort { chars });
    }
    Ok(())
}

/// Human-readable size in binary units, rounded to two decimals with trailing
/// zeros dropped (`1536` is `"1.5 KB"`, `2048` is `"2 KB"`).
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    let rounded = (value * 100.0).round() / 100.0;
    format!("{rounded} {}", SIZE_UNITS[unit])
}
