// Preview rendering: template lookup, date display, skill tiers, layout tree, HTML.
// Everything here is a pure function of the document.

pub mod dates;
pub mod html;
pub mod preview;
pub mod template;
pub mod tier;

pub use preview::{render, Layout, SectionBlock, SectionKind};
pub use template::{resolve, TemplateId, TemplateStyle};
