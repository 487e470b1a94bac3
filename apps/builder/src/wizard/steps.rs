use std::str::FromStr;

use serde::Serialize;

/// One page of the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    PersonalInfo,
    Objective,
    WorkExperience,
    Projects,
    Education,
    Skills,
    Certifications,
    Template,
    Preview,
}

impl Step {
    pub fn title(&self) -> &'static str {
        match self {
            Step::PersonalInfo => "Personal Info",
            Step::Objective => "Objective",
            Step::WorkExperience => "Work Experience",
            Step::Projects => "Projects",
            Step::Education => "Education",
            Step::Skills => "Skills",
            Step::Certifications => "Certifications",
            Step::Template => "Template",
            Step::Preview => "Preview",
        }
    }
}

/// Which sequence of steps the wizard walks through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WizardVariant {
    /// Personal info, education, skills, preview.
    Compact,
    #[default]
    Full,
}

const COMPACT_STEPS: [Step; 4] = [
    Step::PersonalInfo,
    Step::Education,
    Step::Skills,
    Step::Preview,
];

const FULL_STEPS: [Step; 9] = [
    Step::PersonalInfo,
    Step::Objective,
    Step::WorkExperience,
    Step::Projects,
    Step::Education,
    Step::Skills,
    Step::Certifications,
    Step::Template,
    Step::Preview,
];

impl WizardVariant {
    pub fn steps(&self) -> &'static [Step] {
        match self {
            WizardVariant::Compact => &COMPACT_STEPS,
            WizardVariant::Full => &FULL_STEPS,
        }
    }

    pub fn len(&self) -> usize {
        self.steps().len()
    }

    /// Step at a 1-based index.
    pub fn step_at(&self, index: usize) -> Option<Step> {
        index
            .checked_sub(1)
            .and_then(|i| self.steps().get(i))
            .copied()
    }
}

/// Parses the step count used in configuration: `"4"` or `"9"`.
impl FromStr for WizardVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "4" => Ok(WizardVariant::Compact),
            "9" => Ok(WizardVariant::Full),
            other => Err(format!("expected 4 or 9 steps, got '{other}'")),
        }
    }
}

/// Where one step stands, for drawing a progress indicator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepStatus {
    pub index: usize,
    pub title: &'static str,
    pub completed: bool,
    pub current: bool,
}
