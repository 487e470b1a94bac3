use serde::Serialize;

use crate::models::SkillLevel;

/// Visual tier of a skill badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelTier {
    Beginner,
    Intermediate,
    Advanced,
    Neutral,
}

/// Badge colours: background, foreground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TierColors {
    pub background: &'static str,
    pub foreground: &'static str,
}

impl LevelTier {
    /// Maps a raw level label, e.g. from an imported payload. Anything that
    /// is not one of the three levels gets the neutral tier.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Beginner" => LevelTier::Beginner,
            "Intermediate" => LevelTier::Intermediate,
            "Advanced" => LevelTier::Advanced,
            _ => LevelTier::Neutral,
        }
    }

    pub fn colors(&self) -> TierColors {
        match self {
            LevelTier::Beginner => TierColors {
                background: "#fef9c3",
                foreground: "#854d0e",
            },
            LevelTier::Intermediate => TierColors {
                background: "#dbeafe",
                foreground: "#1e40af",
            },
            LevelTier::Advanced => TierColors {
                background: "#dcfce7",
                foreground: "#166534",
            },
            LevelTier::Neutral => TierColors {
                background: "#f3f4f6",
                foreground: "#1f2937",
            },
        }
    }
}

impl From<SkillLevel> for LevelTier {
    fn from(level: SkillLevel) -> Self {
        match level {
            SkillLevel::Beginner => LevelTier::Beginner,
            SkillLevel::Intermediate => LevelTier::Intermediate,
            SkillLevel::Advanced => LevelTier::Advanced,
        }
    }
}
