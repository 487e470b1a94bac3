use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::entries::{EntryId, SectionEntry};
use crate::render::template::TemplateId;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
    pub portfolio: String,
    /// Profile picture as a `data:` URI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

impl PersonalInfo {
    pub fn with_photo(self, data_uri: String) -> Self {
        PersonalInfo {
            photo: Some(data_uri),
            ..self
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfessionalObjective {
    pub summary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkExperience {
    pub id: EntryId,
    pub job_title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    /// Ignored when `current` is set.
    pub end_date: String,
    pub responsibilities: Vec<String>,
    pub current: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub id: EntryId,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub start_date: String,
    pub end_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    pub role: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Certification {
    pub id: EntryId,
    pub title: String,
    pub organization: String,
    pub date_obtained: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub id: EntryId,
    pub degree: String,
    pub institution: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub grade: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillCategory {
    #[default]
    Programming,
    #[serde(rename = "Web Technologies")]
    WebTechnologies,
    Tools,
    #[serde(rename = "Soft Skills")]
    SoftSkills,
}

impl SkillCategory {
    /// Display order used by the preview.
    pub const ALL: [SkillCategory; 4] = [
        SkillCategory::Programming,
        SkillCategory::WebTechnologies,
        SkillCategory::Tools,
        SkillCategory::SoftSkills,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Programming => "Programming",
            SkillCategory::WebTechnologies => "Web Technologies",
            SkillCategory::Tools => "Tools",
            SkillCategory::SoftSkills => "Soft Skills",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    pub id: EntryId,
    pub name: String,
    pub level: SkillLevel,
    pub category: SkillCategory,
}

/// The complete résumé being built.
///
/// Every update consumes the document and hands back the new value; entities
/// owned by other sections are moved through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Document {
    pub personal_info: PersonalInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub professional_objective: Option<ProfessionalObjective>,
    pub work_experience: Vec<WorkExperience>,
    pub projects: Vec<Project>,
    pub education: Vec<Education>,
    pub skills: Vec<Skill>,
    pub certifications: Vec<Certification>,
    #[serde(rename = "selectedTemplate")]
    pub template: TemplateId,
}

impl Document {
    pub fn with_personal_info(self, personal_info: PersonalInfo) -> Self {
        Document {
            personal_info,
            ..self
        }
    }

    pub fn with_objective(self, objective: Option<ProfessionalObjective>) -> Self {
        Document {
            professional_objective: objective,
            ..self
        }
    }

    pub fn with_template(self, template: TemplateId) -> Self {
        Document { template, ..self }
    }

    /// Replaces a whole section, e.g. when an editor commits its draft list.
    /// A row repeating an earlier row's id is given a fresh one.
    pub fn with_section<E: SectionEntry>(mut self, mut entries: Vec<E>) -> Self {
        reissue_duplicate_ids(&mut entries);
        *E::section_mut(&mut self) = entries;
        self
    }

    /// Applies the same id repair to every section, e.g. for a loaded payload.
    pub fn with_unique_ids(mut self) -> Self {
        reissue_duplicate_ids(&mut self.work_experience);
        reissue_duplicate_ids(&mut self.projects);
        reissue_duplicate_ids(&mut self.education);
        reissue_duplicate_ids(&mut self.skills);
        reissue_duplicate_ids(&mut self.certifications);
        self
    }

    pub fn entries<E: SectionEntry>(&self) -> &[E] {
        E::section(self)
    }

    /// Appends `entry` under a freshly generated id and returns that id.
    /// Whatever id the entry carried before is discarded.
    pub fn append<E: SectionEntry>(mut self, mut entry: E) -> (Self, EntryId) {
        let id = EntryId::new();
        entry.set_id(id.clone());
        E::section_mut(&mut self).push(entry);
        (self, id)
    }

    /// Removes the entry with `id`, keeping the order of the rest.
    /// Unknown ids leave the document unchanged.
    pub fn remove<E: SectionEntry>(mut self, id: EntryId) -> Self {
        E::section_mut(&mut self).retain(|e| e.id() != &id);
        self
    }

    /// Replaces the entry sharing `entry`'s id. Unknown ids are a no-op.
    pub fn replace<E: SectionEntry>(mut self, entry: E) -> Self {
        if let Some(slot) = E::section_mut(&mut self)
            .iter_mut()
            .find(|e| e.id() == entry.id())
        {
            *slot = entry;
        }
        self
    }

    /// Rebuilds the entry with `id` through `f`. Unknown ids are a no-op.
    /// The entry keeps its id whatever `f` returns.
    pub fn update<E: SectionEntry>(self, id: EntryId, f: impl FnOnce(E) -> E) -> Self {
        let Some(current) = self.entries::<E>().iter().find(|e| e.id() == &id).cloned() else {
            return self;
        };
        let mut next = f(current);
        next.set_id(id);
        self.replace(next)
    }

    pub fn objective_summary(&self) -> Option<&str> {
        self.professional_objective
            .as_ref()
            .map(|o| o.summary.as_str())
            .filter(|s| !s.trim().is_empty())
    }
}

/// Keeps the first row for each id and re-mints the rest, preserving order.
fn reissue_duplicate_ids<E: SectionEntry>(entries: &mut [E]) {
    let mut seen = HashSet::with_capacity(entries.len());
    for entry in entries.iter_mut() {
        if !seen.insert(entry.id().clone()) {
            let id = EntryId::new();
            seen.insert(id.clone());
            entry.set_id(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(name: &str) -> Skill {
        Skill {
            name: name.to_string(),
            level: SkillLevel::Advanced,
            category: SkillCategory::Programming,
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_document_defaults() {
        let doc = Document::default();
        assert_eq!(doc.personal_info.full_name, "");
        assert!(doc.professional_objective.is_none());
        assert!(doc.work_experience.is_empty());
        assert!(doc.skills.is_empty());
        assert_eq!(doc.template, TemplateId::Modern);
    }

    #[test]
    fn test_append_assigns_fresh_id() {
        let stale = skill("Rust");
        let stale_id = stale.id.clone();
        let (doc, id) = Document::default().append(stale);
        assert_ne!(id, stale_id);
        assert_eq!(doc.skills[0].id, id);
    }

    #[test]
    fn test_append_then_remove_restores_section() {
        let (doc, _) = Document::default().append(skill("Rust"));
        let (doc, _) = doc.append(skill("Go"));
        let before = doc.skills.clone();

        let (doc, id) = doc.append(skill("Zig"));
        assert_eq!(doc.skills.len(), 3);
        let doc = doc.remove::<Skill>(id);
        assert_eq!(doc.skills, before);
    }

    #[test]
    fn test_remove_keeps_order() {
        let (doc, a) = Document::default().append(skill("A"));
        let (doc, b) = doc.append(skill("B"));
        let (doc, c) = doc.append(skill("C"));
        let doc = doc.remove::<Skill>(b);
        let ids: Vec<_> = doc.skills.iter().map(|s| s.id.clone()).collect();
        assert_eq!(ids, vec![a, c]);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let (doc, _) = Document::default().append(skill("Rust"));
        let same = doc.clone().remove::<Skill>(EntryId::new());
        assert_eq!(same, doc);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let (doc, _) = Document::default().append(skill("Rust"));
        let same = doc.clone().update::<Skill>(EntryId::new(), |mut s| {
            s.name = "changed".into();
            s
        });
        assert_eq!(same, doc);
    }

    #[test]
    fn test_update_touches_only_target_section() {
        let (doc, skill_id) = Document::default().append(skill("Rust"));
        let (doc, _) = doc.append(Education {
            degree: "BSc".into(),
            ..Default::default()
        });
        let education_before = doc.education.clone();

        let doc = doc.update::<Skill>(skill_id.clone(), |mut s| {
            s.name = "Rust 2021".into();
            s.id = EntryId::new();
            s
        });
        assert_eq!(doc.skills[0].name, "Rust 2021");
        assert_eq!(doc.skills[0].id, skill_id);
        assert_eq!(doc.education, education_before);
    }

    #[test]
    fn test_replace_by_id() {
        let (doc, id) = Document::default().append(WorkExperience {
            job_title: "Intern".into(),
            ..Default::default()
        });
        let mut edited = doc.work_experience[0].clone();
        edited.job_title = "Engineer".into();
        let doc = doc.replace(edited);
        assert_eq!(doc.work_experience[0].job_title, "Engineer");
        assert_eq!(doc.work_experience[0].id, id);
    }

    #[test]
    fn test_objective_summary_blank_is_none() {
        let doc = Document::default().with_objective(Some(ProfessionalObjective {
            summary: "   ".into(),
        }));
        assert_eq!(doc.objective_summary(), None);
    }

    #[test]
    fn test_deserialize_front_end_payload() {
        let json = r#"{
            "personalInfo": { "fullName": "Jane Doe", "email": "jane@x.com", "phone": "555-1111" },
            "skills": [
                { "name": "React", "level": "Intermediate", "category": "Web Technologies" }
            ],
            "selectedTemplate": "bogus"
        }"#;
        let doc: Document = serde_json::from_str(json).unwrap();
        assert_eq!(doc.personal_info.full_name, "Jane Doe");
        assert_eq!(doc.personal_info.linkedin, "");
        assert_eq!(doc.skills[0].category, SkillCategory::WebTechnologies);
        assert_eq!(doc.skills[0].level, SkillLevel::Intermediate);
        assert_eq!(doc.template, TemplateId::Modern);
        assert!(doc.projects.is_empty());
    }

    #[test]
    fn test_unknown_skill_level_is_rejected() {
        let json = r#"{ "name": "Rust", "level": "Expert", "category": "Tools" }"#;
        assert!(serde_json::from_str::<Skill>(json).is_err());
    }

    #[test]
    fn test_with_section_reissues_repeated_ids() {
        let exp = WorkExperience {
            job_title: "Engineer".into(),
            ..Default::default()
        };
        let doc = Document::default().with_section(vec![exp.clone(), exp.clone(), exp.clone()]);
        let ids: HashSet<_> = doc.work_experience.iter().map(|e| e.id.clone()).collect();
        assert_eq!(ids.len(), 3);
        assert_eq!(doc.work_experience[0].id, exp.id);

        let doc = doc.remove::<WorkExperience>(exp.id);
        assert_eq!(doc.work_experience.len(), 2);
    }

    #[test]
    fn test_with_unique_ids_repairs_payload() {
        let json = r#"{
            "education": [
                { "id": "1", "degree": "BSc" },
                { "id": "1", "degree": "MSc" }
            ]
        }"#;
        let doc: Document = serde_json::from_str(json).unwrap();
        let doc = doc.with_unique_ids();
        assert_eq!(doc.education[0].id.as_str(), "1");
        assert_ne!(doc.education[1].id, doc.education[0].id);
        assert_eq!(doc.education[1].degree, "MSc");
    }

    #[test]
    fn test_deserialize_front_end_ids() {
        let json = r#"{
            "education": [
                { "id": "1", "degree": "BSc", "institution": "MIT",
                  "startDate": "2018-09-01", "endDate": "2022-06-01" },
                { "id": "1718000000000", "degree": "MSc" }
            ]
        }"#;
        let doc: Document = serde_json::from_str(json).unwrap();
        assert_eq!(doc.education[0].id.as_str(), "1");
        assert_eq!(doc.education[1].id.as_str(), "1718000000000");

        let doc = doc.remove::<Education>(serde_json::from_str("\"1\"").unwrap());
        assert_eq!(doc.education.len(), 1);
        assert_eq!(doc.education[0].degree, "MSc");
    }
}
