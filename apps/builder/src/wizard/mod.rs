// Wizard controller: owns the document and walks it through the steps of the
// chosen variant, committing each step only after its editor accepts it.

pub mod controller;
pub mod steps;

pub use controller::{SectionDraft, Wizard};
pub use steps::{Step, StepStatus, WizardVariant};
