use std::path::Path;

use tracing::{info, warn};

use crate::editors::{
    read_photo, CertificationsEditor, EducationEditor, ExperienceEditor, FieldProblem,
    ObjectiveEditor, PersonalInfoEditor, ProjectsEditor, Rejection, SectionEditor, SkillsEditor,
    TemplateEditor,
};
use crate::errors::BuilderError;
use crate::export::{self, ExportArtifact};
use crate::models::{
    Certification, Document, Education, PersonalInfo, ProfessionalObjective, Project, Skill,
    WorkExperience,
};
use crate::render::{self, html, Layout, TemplateId};
use crate::wizard::steps::{Step, StepStatus, WizardVariant};

/// What the user filled in on the current step.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionDraft {
    PersonalInfo(PersonalInfo),
    Objective(ProfessionalObjective),
    WorkExperience(Vec<WorkExperience>),
    Projects(Vec<Project>),
    Education(Vec<Education>),
    Skills(Vec<Skill>),
    Certifications(Vec<Certification>),
    Template(String),
    Preview,
}

impl SectionDraft {
    pub fn step(&self) -> Step {
        match self {
            SectionDraft::PersonalInfo(_) => Step::PersonalInfo,
            SectionDraft::Objective(_) => Step::Objective,
            SectionDraft::WorkExperience(_) => Step::WorkExperience,
            SectionDraft::Projects(_) => Step::Projects,
            SectionDraft::Education(_) => Step::Education,
            SectionDraft::Skills(_) => Step::Skills,
            SectionDraft::Certifications(_) => Step::Certifications,
            SectionDraft::Template(_) => Step::Template,
            SectionDraft::Preview => Step::Preview,
        }
    }
}

/// Drives one résumé through its steps.
///
/// The wizard owns the document. A step's draft is committed only when its
/// editor accepts it; a rejected draft leaves both the document and the step
/// where they were.
#[derive(Debug, Clone)]
pub struct Wizard {
    variant: WizardVariant,
    /// 1-based, always within `1..=variant.len()`.
    step: usize,
    document: Document,
}

impl Wizard {
    pub fn new(variant: WizardVariant, default_template: TemplateId) -> Self {
        Self::resume(variant, Document::default().with_template(default_template))
    }

    /// Starts on the first step with an existing document. Repeated entry
    /// ids in it are re-minted.
    pub fn resume(variant: WizardVariant, document: Document) -> Self {
        Wizard {
            variant,
            step: 1,
            document: document.with_unique_ids(),
        }
    }

    pub fn variant(&self) -> WizardVariant {
        self.variant
    }

    pub fn step_index(&self) -> usize {
        self.step
    }

    pub fn current_step(&self) -> Step {
        self.variant
            .step_at(self.step)
            .unwrap_or(Step::Preview)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    pub fn steps(&self) -> Vec<StepStatus> {
        self.variant
            .steps()
            .iter()
            .enumerate()
            .map(|(i, step)| StepStatus {
                index: i + 1,
                title: step.title(),
                completed: i + 1 < self.step,
                current: i + 1 == self.step,
            })
            .collect()
    }

    /// The current step's data as a draft, for pre-filling its form.
    pub fn current_draft(&self) -> SectionDraft {
        let doc = &self.document;
        match self.current_step() {
            Step::PersonalInfo => SectionDraft::PersonalInfo(doc.personal_info.clone()),
            Step::Objective => SectionDraft::Objective(
                doc.professional_objective.clone().unwrap_or_default(),
            ),
            Step::WorkExperience => SectionDraft::WorkExperience(doc.work_experience.clone()),
            Step::Projects => SectionDraft::Projects(doc.projects.clone()),
            Step::Education => SectionDraft::Education(doc.education.clone()),
            Step::Skills => SectionDraft::Skills(doc.skills.clone()),
            Step::Certifications => SectionDraft::Certifications(doc.certifications.clone()),
            Step::Template => SectionDraft::Template(doc.template.as_str().to_string()),
            Step::Preview => SectionDraft::Preview,
        }
    }

    /// Validates `draft` against the current step, commits it and advances.
    ///
    /// Returns the step the wizard is on afterwards. The last step accepts
    /// its draft and stays put.
    pub fn next(&mut self, draft: SectionDraft) -> Result<Step, Rejection> {
        let current = self.current_step();
        if draft.step() != current {
            warn!(
                expected = current.title(),
                got = draft.step().title(),
                "Draft does not belong to the current step"
            );
            return Err(Rejection::new(
                "wizard",
                vec![FieldProblem {
                    row: None,
                    field: "step",
                    reason: format!("expected a {} draft", current.title()),
                }],
            ));
        }

        self.document = commit(self.document.clone(), draft).map_err(|rejection| {
            info!(
                step = current.title(),
                problems = rejection.problems.len(),
                "Step rejected"
            );
            rejection
        })?;

        if self.step < self.variant.len() {
            self.step += 1;
        }
        let now = self.current_step();
        info!(from = current.title(), to = now.title(), index = self.step, "Step committed");
        Ok(now)
    }

    /// Goes back one step without committing anything. Stays on the first step.
    pub fn back(&mut self) -> Step {
        if self.step > 1 {
            self.step -= 1;
            info!(to = self.current_step().title(), index = self.step, "Step back");
        }
        self.current_step()
    }

    /// Loads a photo into the personal info. On failure the current photo is
    /// kept and the error returned.
    pub async fn attach_photo(&mut self, path: &Path) -> Result<(), BuilderError> {
        match read_photo(path).await {
            Ok(uri) => {
                let info = self.document.personal_info.clone().with_photo(uri);
                self.document = std::mem::take(&mut self.document).with_personal_info(info);
                info!(path = %path.display(), "Photo attached");
                Ok(())
            }
            Err(e) => {
                warn!(path = %path.display(), "Keeping current photo: {e}");
                Err(e)
            }
        }
    }

    pub fn preview(&self) -> Layout {
        render::render(&self.document)
    }

    pub fn preview_html(&self) -> String {
        html::to_html(&self.preview())
    }

    pub fn export(&self) -> Result<ExportArtifact, BuilderError> {
        export::export(&self.document)
    }
}

fn commit(doc: Document, draft: SectionDraft) -> Result<Document, Rejection> {
    Ok(match draft {
        SectionDraft::PersonalInfo(d) => doc.with_personal_info(PersonalInfoEditor.submit(d)?),
        SectionDraft::Objective(d) => doc.with_objective(ObjectiveEditor.submit(d)?),
        SectionDraft::WorkExperience(d) => doc.with_section(ExperienceEditor.submit(d)?),
        SectionDraft::Projects(d) => doc.with_section(ProjectsEditor.submit(d)?),
        SectionDraft::Education(d) => doc.with_section(EducationEditor.submit(d)?),
        SectionDraft::Skills(d) => doc.with_section(SkillsEditor.submit(d)?),
        SectionDraft::Certifications(d) => doc.with_section(CertificationsEditor.submit(d)?),
        SectionDraft::Template(d) => doc.with_template(TemplateEditor.submit(d)?),
        SectionDraft::Preview => doc,
    })
}
