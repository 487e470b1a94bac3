pub mod entries;
pub mod resume;

pub use entries::{EntryId, SectionEntry};
pub use resume::{
    Certification, Document, Education, PersonalInfo, ProfessionalObjective, Project, Skill,
    SkillCategory, SkillLevel, WorkExperience,
};
