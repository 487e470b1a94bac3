use crate::editors::{is_blank, trimmed, verdict, FieldProblem, Rejection, SectionEditor};
use crate::models::PersonalInfo;

/// Name, email and phone are required to leave the first step.
pub struct PersonalInfoEditor;

impl SectionEditor for PersonalInfoEditor {
    type Draft = PersonalInfo;
    type Value = PersonalInfo;

    const SECTION: &'static str = "personal_info";

    fn submit(&self, draft: PersonalInfo) -> Result<PersonalInfo, Rejection> {
        let mut problems = Vec::new();
        for (field, value) in [
            ("full_name", &draft.full_name),
            ("email", &draft.email),
            ("phone", &draft.phone),
        ] {
            if is_blank(value) {
                problems.push(FieldProblem::required(None, field));
            }
        }

        let value = PersonalInfo {
            full_name: trimmed(&draft.full_name),
            email: trimmed(&draft.email),
            phone: trimmed(&draft.phone),
            linkedin: trimmed(&draft.linkedin),
            github: trimmed(&draft.github),
            portfolio: trimmed(&draft.portfolio),
            photo: draft.photo.filter(|p| !p.is_empty()),
        };
        verdict(Self::SECTION, value, problems)
    }
}
