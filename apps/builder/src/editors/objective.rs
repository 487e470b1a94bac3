//! Professional objective step, including the canned-suggestion picker.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::editors::{Rejection, SectionEditor};
use crate::models::ProfessionalObjective;

pub const OBJECTIVE_SUGGESTIONS: [&str; 3] = [
    "Dynamic software engineer with expertise in full-stack development, passionate about creating innovative solutions and driving technological advancement in fast-paced environments.",
    "Results-driven professional with strong analytical skills and experience in modern web technologies, seeking to contribute to impactful projects while continuously learning and growing.",
    "Dedicated developer with a passion for clean code, user experience, and collaborative problem-solving, aiming to leverage technical skills to create meaningful digital solutions.",
];

/// Picks one entry of `pool` uniformly. `None` only for an empty pool.
pub fn choose_one<'a, R: Rng + ?Sized>(pool: &[&'a str], rng: &mut R) -> Option<&'a str> {
    pool.choose(rng).copied()
}

pub fn suggest_objective<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    choose_one(&OBJECTIVE_SUGGESTIONS, rng).unwrap_or(OBJECTIVE_SUGGESTIONS[0])
}

/// Always accepts. A blank summary commits as "no objective".
pub struct ObjectiveEditor;

impl SectionEditor for ObjectiveEditor {
    type Draft = ProfessionalObjective;
    type Value = Option<ProfessionalObjective>;

    const SECTION: &'static str = "professional_objective";

    fn submit(&self, draft: ProfessionalObjective) -> Result<Self::Value, Rejection> {
        let summary = draft.summary.trim();
        Ok((!summary.is_empty()).then(|| ProfessionalObjective {
            summary: summary.to_string(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_choose_one_from_empty_pool() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(choose_one(&[], &mut rng), None);
    }

    #[test]
    fn test_choose_one_stays_in_pool() {
        let pool = ["a", "b", "c"];
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let picked = choose_one(&pool, &mut rng).unwrap();
            assert!(pool.contains(&picked));
        }
    }

    #[test]
    fn test_same_seed_same_suggestion() {
        let a = suggest_objective(&mut StdRng::seed_from_u64(3));
        let b = suggest_objective(&mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
        assert!(OBJECTIVE_SUGGESTIONS.contains(&a));
    }

    #[test]
    fn test_every_suggestion_reachable() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(suggest_objective(&mut rng));
        }
        assert_eq!(seen.len(), OBJECTIVE_SUGGESTIONS.len());
    }

    #[test]
    fn test_blank_summary_commits_as_none() {
        let value = ObjectiveEditor
            .submit(ProfessionalObjective {
                summary: "  ".into(),
            })
            .unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_summary_is_trimmed() {
        let value = ObjectiveEditor
            .submit(ProfessionalObjective {
                summary: " Rust engineer \n".into(),
            })
            .unwrap();
        assert_eq!(value.unwrap().summary, "Rust engineer");
    }
}
