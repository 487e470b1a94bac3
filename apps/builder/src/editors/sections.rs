//! Editors for the list sections and the template step.
//!
//! | Section        | Blocks progress when                                       |
//! |----------------|------------------------------------------------------------|
//! | experience     | never                                                      |
//! | projects       | never                                                      |
//! | education      | the list is empty, or a row lacks degree, institution or a date |
//! | skills         | the list is empty, or a skill has no name                  |
//! | certifications | never                                                      |
//! | template       | never; unknown ids resolve to the default                  |

use crate::editors::{
    is_blank, trimmed, trimmed_opt, verdict, FieldProblem, Rejection, SectionEditor,
};
use crate::models::{Certification, Education, Project, Skill, WorkExperience};
use crate::render::template::TemplateId;

pub struct ExperienceEditor;

impl SectionEditor for ExperienceEditor {
    type Draft = Vec<WorkExperience>;
    type Value = Vec<WorkExperience>;

    const SECTION: &'static str = "work_experience";

    fn submit(&self, draft: Vec<WorkExperience>) -> Result<Self::Value, Rejection> {
        Ok(draft
            .into_iter()
            .map(|exp| WorkExperience {
                job_title: trimmed(&exp.job_title),
                company: trimmed(&exp.company),
                location: trimmed(&exp.location),
                start_date: trimmed(&exp.start_date),
                // A current position has no end date.
                end_date: if exp.current {
                    String::new()
                } else {
                    trimmed(&exp.end_date)
                },
                responsibilities: exp
                    .responsibilities
                    .iter()
                    .filter(|r| !is_blank(r))
                    .map(|r| trimmed(r))
                    .collect(),
                ..exp
            })
            .collect())
    }
}

pub struct ProjectsEditor;

impl SectionEditor for ProjectsEditor {
    type Draft = Vec<Project>;
    type Value = Vec<Project>;

    const SECTION: &'static str = "projects";

    fn submit(&self, draft: Vec<Project>) -> Result<Self::Value, Rejection> {
        Ok(draft
            .into_iter()
            .map(|project| Project {
                title: trimmed(&project.title),
                description: trimmed(&project.description),
                // Duplicates are kept on purpose; only empty tags go.
                technologies: project
                    .technologies
                    .iter()
                    .filter(|t| !is_blank(t))
                    .map(|t| trimmed(t))
                    .collect(),
                start_date: trimmed(&project.start_date),
                end_date: trimmed(&project.end_date),
                github_url: trimmed_opt(project.github_url.clone()),
                live_url: trimmed_opt(project.live_url.clone()),
                role: trimmed(&project.role),
                ..project
            })
            .collect())
    }
}

pub struct EducationEditor;

impl SectionEditor for EducationEditor {
    type Draft = Vec<Education>;
    type Value = Vec<Education>;

    const SECTION: &'static str = "education";

    /// Every row must be complete at the same time; problems from all rows
    /// are reported together.
    fn submit(&self, draft: Vec<Education>) -> Result<Self::Value, Rejection> {
        let mut problems = Vec::new();
        if draft.is_empty() {
            problems.push(FieldProblem {
                row: None,
                field: "education",
                reason: "add at least one education entry".to_string(),
            });
        }
        for (row, edu) in draft.iter().enumerate() {
            for (field, value) in [
                ("degree", &edu.degree),
                ("institution", &edu.institution),
                ("start_date", &edu.start_date),
                ("end_date", &edu.end_date),
            ] {
                if is_blank(value) {
                    problems.push(FieldProblem::required(Some(row), field));
                }
            }
        }

        let value = draft
            .into_iter()
            .map(|edu| Education {
                degree: trimmed(&edu.degree),
                institution: trimmed(&edu.institution),
                location: trimmed(&edu.location),
                start_date: trimmed(&edu.start_date),
                end_date: trimmed(&edu.end_date),
                grade: trimmed(&edu.grade),
                ..edu
            })
            .collect();
        verdict(Self::SECTION, value, problems)
    }
}

pub struct SkillsEditor;

impl SectionEditor for SkillsEditor {
    type Draft = Vec<Skill>;
    type Value = Vec<Skill>;

    const SECTION: &'static str = "skills";

    fn submit(&self, draft: Vec<Skill>) -> Result<Self::Value, Rejection> {
        let mut problems = Vec::new();
        if draft.is_empty() {
            problems.push(FieldProblem {
                row: None,
                field: "skills",
                reason: "add at least one skill".to_string(),
            });
        }
        for (row, skill) in draft.iter().enumerate() {
            if is_blank(&skill.name) {
                problems.push(FieldProblem::required(Some(row), "name"));
            }
        }

        let value = draft
            .into_iter()
            .map(|skill| Skill {
                name: trimmed(&skill.name),
                ..skill
            })
            .collect();
        verdict(Self::SECTION, value, problems)
    }
}

pub struct CertificationsEditor;

impl SectionEditor for CertificationsEditor {
    type Draft = Vec<Certification>;
    type Value = Vec<Certification>;

    const SECTION: &'static str = "certifications";

    fn submit(&self, draft: Vec<Certification>) -> Result<Self::Value, Rejection> {
        Ok(draft
            .into_iter()
            .map(|cert| Certification {
                title: trimmed(&cert.title),
                organization: trimmed(&cert.organization),
                date_obtained: trimmed(&cert.date_obtained),
                expiry_date: trimmed_opt(cert.expiry_date.clone()),
                credential_id: trimmed_opt(cert.credential_id.clone()),
                ..cert
            })
            .collect())
    }
}

pub struct TemplateEditor;

impl SectionEditor for TemplateEditor {
    type Draft = String;
    type Value = TemplateId;

    const SECTION: &'static str = "template";

    fn submit(&self, draft: String) -> Result<TemplateId, Rejection> {
        Ok(TemplateId::parse(&draft))
    }
}
