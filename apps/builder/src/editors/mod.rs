// Section editors: validate and normalize a step's draft before the wizard
// commits it. A rejection is a plain value, never an error.

pub mod objective;
pub mod personal;
pub mod photo;
pub mod sections;

use serde::Serialize;

pub use objective::{choose_one, suggest_objective, ObjectiveEditor};
pub use personal::PersonalInfoEditor;
pub use photo::read_photo;
pub use sections::{
    CertificationsEditor, EducationEditor, ExperienceEditor, ProjectsEditor, SkillsEditor,
    TemplateEditor,
};

/// One field that kept a draft from being accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldProblem {
    /// Row within a list section; `None` for singleton sections.
    pub row: Option<usize>,
    pub field: &'static str,
    pub reason: String,
}

impl FieldProblem {
    pub fn required(row: Option<usize>, field: &'static str) -> Self {
        FieldProblem {
            row,
            field,
            reason: format!("{field} is required"),
        }
    }
}

/// Why a draft was not accepted. Carries every failing field at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    pub section: &'static str,
    pub problems: Vec<FieldProblem>,
}

impl Rejection {
    pub fn new(section: &'static str, problems: Vec<FieldProblem>) -> Self {
        Rejection { section, problems }
    }

    pub fn mentions(&self, field: &str) -> bool {
        self.problems.iter().any(|p| p.field == field)
    }
}

/// Validates a draft and hands back its normalized value.
pub trait SectionEditor {
    type Draft;
    type Value;

    const SECTION: &'static str;

    fn submit(&self, draft: Self::Draft) -> Result<Self::Value, Rejection>;
}

/// Turns a problem list into the editor's verdict.
pub(crate) fn verdict<T>(
    section: &'static str,
    value: T,
    problems: Vec<FieldProblem>,
) -> Result<T, Rejection> {
    if problems.is_empty() {
        Ok(value)
    } else {
        Err(Rejection::new(section, problems))
    }
}

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub(crate) fn trimmed(value: &str) -> String {
    value.trim().to_string()
}

/// Trims an optional field and folds blank values into `None`.
pub(crate) fn trimmed_opt(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
