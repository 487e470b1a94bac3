//! Preview renderer: maps a `Document` to a layout tree.
//!
//! # Rules
//! - Header always renders; the name falls back to `"Your Name"`, contact rows
//!   appear only for non-empty fields.
//! - Optional sections render in a fixed order and only when they have data.
//!   An omitted section loses its heading too.
//! - Skills are grouped by category in `SkillCategory::ALL` order; empty
//!   categories are dropped.
//!
//! Rendering is a pure function of the document: same input, same tree.

use serde::Serialize;

use crate::models::{
    Certification, Document, Education, EntryId, PersonalInfo, Project, Skill, SkillCategory,
    WorkExperience,
};
use crate::render::dates::{date_range, format_date};
use crate::render::template::TemplateStyle;
use crate::render::tier::LevelTier;

pub const NAME_PLACEHOLDER: &str = "Your Name";
pub const FOOTER: &str = "Generated by Resume Builder";

// ────────────────────────────────────────────────────────────────────────────
// Layout tree
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub style: TemplateStyle,
    pub header: HeaderBlock,
    pub sections: Vec<SectionBlock>,
    pub footer: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderBlock {
    pub photo: Option<String>,
    pub name: String,
    pub contacts: Vec<ContactRow>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactKind {
    Email,
    Phone,
    LinkedIn,
    GitHub,
    Portfolio,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactRow {
    pub kind: ContactKind,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Objective,
    Experience,
    Projects,
    Education,
    Skills,
    Certifications,
}

impl SectionKind {
    /// Fixed render order.
    pub const ORDER: [SectionKind; 6] = [
        SectionKind::Objective,
        SectionKind::Experience,
        SectionKind::Projects,
        SectionKind::Education,
        SectionKind::Skills,
        SectionKind::Certifications,
    ];

    pub fn heading(&self) -> &'static str {
        match self {
            SectionKind::Objective => "Professional Objective",
            SectionKind::Experience => "Work Experience",
            SectionKind::Projects => "Projects",
            SectionKind::Education => "Education",
            SectionKind::Skills => "Skills & Technologies",
            SectionKind::Certifications => "Certifications",
        }
    }

    /// True when the document has nothing to show for this section.
    pub fn is_empty_in(&self, doc: &Document) -> bool {
        match self {
            SectionKind::Objective => doc.objective_summary().is_none(),
            SectionKind::Experience => doc.work_experience.is_empty(),
            SectionKind::Projects => doc.projects.is_empty(),
            SectionKind::Education => doc.education.is_empty(),
            SectionKind::Skills => doc.skills.is_empty(),
            SectionKind::Certifications => doc.certifications.is_empty(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "body", rename_all = "snake_case")]
pub enum SectionBlock {
    Objective(String),
    Experience(Vec<ExperienceItem>),
    Projects(Vec<ProjectItem>),
    Education(Vec<EducationItem>),
    Skills(Vec<SkillGroup>),
    Certifications(Vec<CertificationItem>),
}

impl SectionBlock {
    pub fn kind(&self) -> SectionKind {
        match self {
            SectionBlock::Objective(_) => SectionKind::Objective,
            SectionBlock::Experience(_) => SectionKind::Experience,
            SectionBlock::Projects(_) => SectionKind::Projects,
            SectionBlock::Education(_) => SectionKind::Education,
            SectionBlock::Skills(_) => SectionKind::Skills,
            SectionBlock::Certifications(_) => SectionKind::Certifications,
        }
    }

    pub fn heading(&self) -> &'static str {
        self.kind().heading()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperienceItem {
    pub id: EntryId,
    pub job_title: String,
    pub company: String,
    pub location: Option<String>,
    pub date_range: String,
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    GitHub,
    Live,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectLink {
    pub kind: LinkKind,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectItem {
    pub id: EntryId,
    pub title: String,
    pub links: Vec<ProjectLink>,
    pub role: Option<String>,
    pub date_range: String,
    pub description: String,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EducationItem {
    pub id: EntryId,
    pub degree: String,
    pub institution: String,
    pub location: Option<String>,
    pub date_range: String,
    pub grade: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillBadge {
    pub id: EntryId,
    pub label: String,
    pub tier: LevelTier,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillGroup {
    pub category: SkillCategory,
    pub skills: Vec<SkillBadge>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CertificationItem {
    pub id: EntryId,
    pub title: String,
    pub organization: String,
    pub obtained: String,
    pub expires: Option<String>,
    pub credential_id: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Rendering
// ────────────────────────────────────────────────────────────────────────────

/// Renders the document with the template it carries.
pub fn render(doc: &Document) -> Layout {
    let sections = SectionKind::ORDER
        .iter()
        .filter(|kind| !kind.is_empty_in(doc))
        .map(|kind| render_section(*kind, doc))
        .collect();

    Layout {
        style: doc.template.style(),
        header: render_header(&doc.personal_info),
        sections,
        footer: FOOTER,
    }
}

fn render_header(info: &PersonalInfo) -> HeaderBlock {
    let name = if info.full_name.trim().is_empty() {
        NAME_PLACEHOLDER.to_string()
    } else {
        info.full_name.clone()
    };

    let contacts = [
        (ContactKind::Email, &info.email),
        (ContactKind::Phone, &info.phone),
        (ContactKind::LinkedIn, &info.linkedin),
        (ContactKind::GitHub, &info.github),
        (ContactKind::Portfolio, &info.portfolio),
    ]
    .into_iter()
    .filter_map(|(kind, value)| {
        non_empty(value).map(|value| ContactRow { kind, value })
    })
    .collect();

    HeaderBlock {
        photo: info.photo.clone().filter(|p| !p.is_empty()),
        name,
        contacts,
    }
}

fn render_section(kind: SectionKind, doc: &Document) -> SectionBlock {
    match kind {
        SectionKind::Objective => {
            SectionBlock::Objective(doc.objective_summary().unwrap_or_default().to_string())
        }
        SectionKind::Experience => {
            SectionBlock::Experience(doc.work_experience.iter().map(experience_item).collect())
        }
        SectionKind::Projects => {
            SectionBlock::Projects(doc.projects.iter().map(project_item).collect())
        }
        SectionKind::Education => {
            SectionBlock::Education(doc.education.iter().map(education_item).collect())
        }
        SectionKind::Skills => SectionBlock::Skills(group_skills(&doc.skills)),
        SectionKind::Certifications => SectionBlock::Certifications(
            doc.certifications.iter().map(certification_item).collect(),
        ),
    }
}

fn experience_item(exp: &WorkExperience) -> ExperienceItem {
    ExperienceItem {
        id: exp.id.clone(),
        job_title: exp.job_title.clone(),
        company: exp.company.clone(),
        location: non_empty(&exp.location),
        date_range: date_range(&exp.start_date, &exp.end_date, exp.current),
        responsibilities: exp.responsibilities.clone(),
    }
}

fn project_item(project: &Project) -> ProjectItem {
    let links = [
        (LinkKind::GitHub, &project.github_url),
        (LinkKind::Live, &project.live_url),
    ]
    .into_iter()
    .filter_map(|(kind, url)| {
        url.as_deref()
            .and_then(non_empty)
            .map(|url| ProjectLink { kind, url })
    })
    .collect();

    ProjectItem {
        id: project.id.clone(),
        title: project.title.clone(),
        links,
        role: non_empty(&project.role),
        date_range: date_range(&project.start_date, &project.end_date, false),
        description: project.description.clone(),
        technologies: project.technologies.clone(),
    }
}

fn education_item(edu: &Education) -> EducationItem {
    EducationItem {
        id: edu.id.clone(),
        degree: edu.degree.clone(),
        institution: edu.institution.clone(),
        location: non_empty(&edu.location),
        date_range: date_range(&edu.start_date, &edu.end_date, false),
        grade: non_empty(&edu.grade),
    }
}

fn certification_item(cert: &Certification) -> CertificationItem {
    CertificationItem {
        id: cert.id.clone(),
        title: cert.title.clone(),
        organization: cert.organization.clone(),
        obtained: format_date(&cert.date_obtained),
        expires: cert
            .expiry_date
            .as_deref()
            .and_then(non_empty)
            .map(|d| format_date(&d)),
        credential_id: cert.credential_id.as_deref().and_then(non_empty),
    }
}

/// Groups skills by category, keeping insertion order inside each group.
pub fn group_skills(skills: &[Skill]) -> Vec<SkillGroup> {
    SkillCategory::ALL
        .iter()
        .filter_map(|category| {
            let badges: Vec<SkillBadge> = skills
                .iter()
                .filter(|s| s.category == *category)
                .map(|s| SkillBadge {
                    id: s.id.clone(),
                    label: format!("{} ({})", s.name, s.level.as_str()),
                    tier: LevelTier::from(s.level),
                })
                .collect();
            (!badges.is_empty()).then_some(SkillGroup {
                category: *category,
                skills: badges,
            })
        })
        .collect()
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
