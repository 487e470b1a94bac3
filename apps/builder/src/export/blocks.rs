//! Flattens a `Document` into the linear block sequence written to `.docx`.
//!
//! Section order and emptiness rules match the preview. Contact lines are the
//! exception: they are always emitted with their label, even when blank.

use crate::models::{Certification, Document, Education, Project, WorkExperience};
use crate::render::dates::{date_range, format_date};
use crate::render::preview::SectionKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Title(String),
    Heading(String),
    Plain(String),
    /// Bold title line followed by a plain detail run.
    Entry { title: String, detail: Option<String> },
    ListItem(String),
    Spacer,
}

const CONTACT_LABELS: [&str; 5] = ["Email", "Phone", "LinkedIn", "GitHub", "Portfolio"];

pub fn flatten(doc: &Document) -> Vec<Block> {
    let info = &doc.personal_info;
    let mut blocks = vec![Block::Title(info.full_name.clone())];

    let contacts = [
        &info.email,
        &info.phone,
        &info.linkedin,
        &info.github,
        &info.portfolio,
    ];
    blocks.extend(
        CONTACT_LABELS
            .iter()
            .zip(contacts)
            .map(|(label, value)| Block::Plain(format!("{label}: {value}"))),
    );

    for kind in SectionKind::ORDER {
        if kind.is_empty_in(doc) {
            continue;
        }
        blocks.push(Block::Spacer);
        blocks.push(Block::Heading(export_heading(kind).to_string()));
        append_section(&mut blocks, kind, doc);
    }

    blocks
}

fn export_heading(kind: SectionKind) -> &'static str {
    match kind {
        SectionKind::Skills => "Skills",
        other => other.heading(),
    }
}

fn append_section(blocks: &mut Vec<Block>, kind: SectionKind, doc: &Document) {
    match kind {
        SectionKind::Objective => {
            if let Some(summary) = doc.objective_summary() {
                blocks.push(Block::Plain(summary.to_string()));
            }
        }
        SectionKind::Experience => blocks.extend(doc.work_experience.iter().map(experience_entry)),
        SectionKind::Projects => blocks.extend(doc.projects.iter().map(project_entry)),
        SectionKind::Education => blocks.extend(doc.education.iter().map(education_entry)),
        SectionKind::Skills => blocks.extend(doc.skills.iter().map(|skill| {
            Block::ListItem(format!("{} - {}", skill.name, skill.level.as_str()))
        })),
        SectionKind::Certifications => {
            blocks.extend(doc.certifications.iter().map(certification_item))
        }
    }
}

/// `"Engineer at Acme (Jan 2022 - Present)"`.
pub fn experience_title(exp: &WorkExperience) -> String {
    format!(
        "{} at {} ({})",
        exp.job_title,
        exp.company,
        date_range(&exp.start_date, &exp.end_date, exp.current)
    )
}

fn experience_entry(exp: &WorkExperience) -> Block {
    Block::Entry {
        title: experience_title(exp),
        detail: Some(exp.responsibilities.join(", ")),
    }
}

fn project_entry(project: &Project) -> Block {
    Block::Entry {
        title: format!(
            "{} ({})",
            project.title,
            date_range(&project.start_date, &project.end_date, false)
        ),
        detail: Some(project.description.clone()),
    }
}

fn education_entry(edu: &Education) -> Block {
    let mut parts = Vec::new();
    if !edu.location.trim().is_empty() {
        parts.push(edu.location.clone());
    }
    if !edu.grade.trim().is_empty() {
        parts.push(format!("Grade: {}", edu.grade));
    }
    Block::Entry {
        title: format!(
            "{} at {} ({})",
            edu.degree,
            edu.institution,
            date_range(&edu.start_date, &edu.end_date, false)
        ),
        detail: (!parts.is_empty()).then(|| parts.join(", ")),
    }
}

fn certification_item(cert: &Certification) -> Block {
    let mut line = format!(
        "{} from {} on {}",
        cert.title,
        cert.organization,
        format_date(&cert.date_obtained)
    );
    if let Some(expiry) = cert.expiry_date.as_deref().filter(|d| !d.trim().is_empty()) {
        line.push_str(&format!(", expires {}", format_date(expiry)));
    }
    if let Some(id) = cert.credential_id.as_deref().filter(|d| !d.trim().is_empty()) {
        line.push_str(&format!(" (Credential ID: {id})"));
    }
    Block::ListItem(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PersonalInfo, ProfessionalObjective, Skill, SkillCategory, SkillLevel};

    fn jane() -> Document {
        Document::default().with_personal_info(PersonalInfo {
            full_name: "Jane Doe".into(),
            email: "jane@x.com".into(),
            phone: "555-1111".into(),
            ..Default::default()
        })
    }

    #[test]
    fn test_contact_lines_always_emitted() {
        let blocks = flatten(&jane());
        assert_eq!(
            blocks,
            vec![
                Block::Title("Jane Doe".into()),
                Block::Plain("Email: jane@x.com".into()),
                Block::Plain("Phone: 555-1111".into()),
                Block::Plain("LinkedIn: ".into()),
                Block::Plain("GitHub: ".into()),
                Block::Plain("Portfolio: ".into()),
            ]
        );
    }

    #[test]
    fn test_current_experience_title() {
        let (doc, _) = jane().append(WorkExperience {
            job_title: "Engineer".into(),
            company: "Acme".into(),
            start_date: "2022-01-01".into(),
            end_date: "".into(),
            current: true,
            responsibilities: vec!["Built APIs".into(), "Ran on-call".into()],
            ..Default::default()
        });
        let blocks = flatten(&doc);
        assert!(blocks.contains(&Block::Heading("Work Experience".into())));
        assert!(blocks.contains(&Block::Entry {
            title: "Engineer at Acme (Jan 2022 - Present)".into(),
            detail: Some("Built APIs, Ran on-call".into()),
        }));
    }

    #[test]
    fn test_sections_follow_preview_order() {
        let doc = jane().with_objective(Some(ProfessionalObjective {
            summary: "Builder of things".into(),
        }));
        let (doc, _) = doc.append(Certification {
            title: "CKA".into(),
            organization: "CNCF".into(),
            date_obtained: "2023-03-10".into(),
            ..Default::default()
        });
        let (doc, _) = doc.append(Skill {
            name: "Rust".into(),
            level: SkillLevel::Advanced,
            category: SkillCategory::Programming,
            ..Default::default()
        });

        let headings: Vec<_> = flatten(&doc)
            .into_iter()
            .filter_map(|b| match b {
                Block::Heading(h) => Some(h),
                _ => None,
            })
            .collect();
        assert_eq!(
            headings,
            vec!["Professional Objective", "Skills", "Certifications"]
        );
    }

    #[test]
    fn test_empty_sections_are_skipped() {
        let blocks = flatten(&jane());
        assert!(!blocks.iter().any(|b| matches!(b, Block::Heading(_))));
        assert!(!blocks.contains(&Block::Spacer));
    }

    #[test]
    fn test_skill_and_certification_items() {
        let (doc, _) = jane().append(Skill {
            name: "Rust".into(),
            level: SkillLevel::Intermediate,
            category: SkillCategory::Programming,
            ..Default::default()
        });
        let (doc, _) = doc.append(Certification {
            title: "CKA".into(),
            organization: "CNCF".into(),
            date_obtained: "2023-03-10".into(),
            expiry_date: Some("2026-03-10".into()),
            credential_id: Some("LF-123".into()),
            ..Default::default()
        });
        let blocks = flatten(&doc);
        assert!(blocks.contains(&Block::ListItem("Rust - Intermediate".into())));
        assert!(blocks.contains(&Block::ListItem(
            "CKA from CNCF on Mar 2023, expires Mar 2026 (Credential ID: LF-123)".into()
        )));
    }

    #[test]
    fn test_project_detail_is_description_only() {
        let (doc, _) = jane().append(Project {
            title: "Ledger".into(),
            description: "Bookkeeping.".into(),
            technologies: vec!["Rust".into()],
            ..Default::default()
        });
        let detail = flatten(&doc).into_iter().find_map(|b| match b {
            Block::Entry { title, detail } if title.starts_with("Ledger") => detail,
            _ => None,
        });
        assert_eq!(detail.as_deref(), Some("Bookkeeping."));
    }

    #[test]
    fn test_project_and_education_entries() {
        let (doc, _) = jane().append(Project {
            title: "Ledger".into(),
            description: "Bookkeeping app.".into(),
            technologies: vec!["Rust".into(), "SQLite".into()],
            start_date: "2023-01-01".into(),
            end_date: "2023-06-01".into(),
            ..Default::default()
        });
        let (doc, _) = doc.append(Education {
            degree: "BSc".into(),
            institution: "MIT".into(),
            start_date: "2018-09-01".into(),
            end_date: "2022-06-01".into(),
            grade: "3.9".into(),
            ..Default::default()
        });
        let blocks = flatten(&doc);
        assert!(blocks.contains(&Block::Entry {
            title: "Ledger (Jan 2023 - Jun 2023)".into(),
            detail: Some("Bookkeeping app.".into()),
        }));
        assert!(blocks.contains(&Block::Entry {
            title: "BSc at MIT (Sep 2018 - Jun 2022)".into(),
            detail: Some("Grade: 3.9".into()),
        }));
    }
}
