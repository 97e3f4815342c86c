/// Index of a keyword badge within the keyword cloud.
pub type BadgeId = usize;

/// Decorations the server appends to badge labels.
const BADGE_MARKERS: [char; 2] = ['✓', '!'];

/// Badge content shown briefly after a keyword was copied.
pub const COPIED_MARKUP: &str = r#"<i class="fas fa-check"></i> Copied!"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeCategory {
    /// In both the resume and the job description.
    Matched,
    /// Required by the job, absent from the resume.
    Missing,
    /// In the resume, not asked for by the job.
    Extra,
}

impl BadgeCategory {
    pub fn from_classes<S: AsRef<str>>(classes: &[S]) -> Self {
        let has = |name: &str| classes.iter().any(|class| class.as_ref() == name);
        if has("bg-success") {
            BadgeCategory::Matched
        } else if has("bg-warning") {
            BadgeCategory::Missing
        } else {
            BadgeCategory::Extra
        }
    }
}

/// The bare keyword of a badge label.
pub fn strip_markers(label: &str) -> String {
    label
        .trim()
        .chars()
        .filter(|c| !BADGE_MARKERS.contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}

pub fn describe_badge(keyword: &str, category: BadgeCategory) -> String {
    let detail = match category {
        BadgeCategory::Matched => "Found in both resume and job description ✓",
        BadgeCategory::Missing => "Missing from resume. Consider adding this skill!",
        BadgeCategory::Extra => "Present in resume but not required for this job",
    };
    format!("Keyword: \"{keyword}\" - {detail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers_are_stripped_and_label_trimmed() {
        assert_eq!(strip_markers("  Python ✓ "), "Python");
        assert_eq!(strip_markers("Docker!"), "Docker");
        assert_eq!(strip_markers("C++"), "C++");
    }

    #[test]
    fn category_follows_background_class() {
        assert_eq!(
            BadgeCategory::from_classes(&["badge", "bg-success"]),
            BadgeCategory::Matched
        );
        assert_eq!(
            BadgeCategory::from_classes(&["badge", "bg-warning"]),
            BadgeCategory::Missing
        );
        assert_eq!(
            BadgeCategory::from_classes(&["badge", "bg-secondary"]),
            BadgeCategory::Extra
        );
    }
}
