use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::models::resume::Document;

/// Opaque identity of one entry inside a document section.
///
/// Ids minted here are UUID v4 strings. Ids arriving in a payload are kept as
/// given (`"1"`, a millisecond timestamp, ...) as long as they are not empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    pub fn new() -> Self {
        EntryId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawEntryId {
    Text(String),
    Number(u64),
}

impl<'de> Deserialize<'de> for EntryId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = match RawEntryId::deserialize(deserializer)? {
            RawEntryId::Text(text) => text,
            RawEntryId::Number(n) => n.to_string(),
        };
        if raw.trim().is_empty() {
            return Err(serde::de::Error::custom("entry id must not be empty"));
        }
        Ok(EntryId(raw))
    }
}

/// An identity-bearing record that lives in exactly one section of a `Document`.
///
/// The accessors bind each entry type to its own collection, so generic
/// document operations can only ever touch the targeted section.
pub trait SectionEntry: Clone {
    fn id(&self) -> &EntryId;
    fn set_id(&mut self, id: EntryId);
    fn section(doc: &Document) -> &[Self];
    fn section_mut(doc: &mut Document) -> &mut Vec<Self>;
}

macro_rules! section_entry {
    ($ty:ty, $field:ident) => {
        impl SectionEntry for $ty {
            fn id(&self) -> &EntryId {
                &self.id
            }

            fn set_id(&mut self, id: EntryId) {
                self.id = id;
            }

            fn section(doc: &Document) -> &[Self] {
                &doc.$field
            }

            fn section_mut(doc: &mut Document) -> &mut Vec<Self> {
                &mut doc.$field
            }
        }
    };
}

section_entry!(crate::models::resume::WorkExperience, work_experience);
section_entry!(crate::models::resume::Project, projects);
section_entry!(crate::models::resume::Education, education);
section_entry!(crate::models::resume::Skill, skills);
section_entry!(crate::models::resume::Certification, certifications);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let a = EntryId::new();
        let b = EntryId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_new_id_is_a_uuid() {
        let id = EntryId::new();
        assert!(Uuid::parse_str(id.as_str()).is_ok());
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{id}\""));
    }

    #[test]
    fn test_front_end_ids_are_kept() {
        let short: EntryId = serde_json::from_str("\"1\"").unwrap();
        assert_eq!(short.as_str(), "1");
        let stamp: EntryId = serde_json::from_str("\"1718000000000\"").unwrap();
        assert_eq!(serde_json::to_string(&stamp).unwrap(), "\"1718000000000\"");
        let numeric: EntryId = serde_json::from_str("1718000000000").unwrap();
        assert_eq!(numeric.as_str(), "1718000000000");
    }

    #[test]
    fn test_empty_id_is_rejected() {
        assert!(serde_json::from_str::<EntryId>("\"\"").is_err());
        assert!(serde_json::from_str::<EntryId>("\"  \"").is_err());
    }
}
