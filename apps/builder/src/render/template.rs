//! Template selector: a closed set of header treatments for the preview.
//!
//! Resolution is total: any identifier that is not one of the four known
//! templates, including a missing one, lands on `modern`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum TemplateId {
    #[default]
    Modern,
    Classic,
    Creative,
    Minimal,
}

impl TemplateId {
    /// Selector order.
    pub const ALL: [TemplateId; 4] = [
        TemplateId::Modern,
        TemplateId::Classic,
        TemplateId::Creative,
        TemplateId::Minimal,
    ];

    pub fn parse(id: &str) -> Self {
        match id.trim().to_ascii_lowercase().as_str() {
            "classic" => TemplateId::Classic,
            "creative" => TemplateId::Creative,
            "minimal" => TemplateId::Minimal,
            _ => TemplateId::Modern,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::Modern => "modern",
            TemplateId::Classic => "classic",
            TemplateId::Creative => "creative",
            TemplateId::Minimal => "minimal",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TemplateId::Modern => "Modern Professional",
            TemplateId::Classic => "Classic Corporate",
            TemplateId::Creative => "Creative Designer",
            TemplateId::Minimal => "Minimal Clean",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TemplateId::Modern => {
                "Clean, modern design with gradient header and elegant typography"
            }
            TemplateId::Classic => "Traditional corporate style with professional color scheme",
            TemplateId::Creative => "Bold and creative design perfect for designers and creatives",
            TemplateId::Minimal => "Ultra-minimal design focusing on content and readability",
        }
    }

    pub fn features(&self) -> [&'static str; 4] {
        match self {
            TemplateId::Modern => [
                "Gradient Header",
                "Modern Typography",
                "Clean Layout",
                "ATS Friendly",
            ],
            TemplateId::Classic => [
                "Professional Colors",
                "Traditional Layout",
                "Corporate Style",
                "Print Friendly",
            ],
            TemplateId::Creative => [
                "Creative Layout",
                "Bold Colors",
                "Designer Friendly",
                "Visual Impact",
            ],
            TemplateId::Minimal => [
                "Minimal Design",
                "Focus on Content",
                "High Readability",
                "Clean Typography",
            ],
        }
    }

    pub fn style(&self) -> TemplateStyle {
        match self {
            TemplateId::Modern => TemplateStyle {
                header: HeaderFill::Gradient {
                    from: "#2563eb",
                    to: "#1e3a8a",
                },
                foreground: "#ffffff",
                border_bottom: None,
            },
            TemplateId::Classic => TemplateStyle {
                header: HeaderFill::Solid { color: "#334155" },
                foreground: "#ffffff",
                border_bottom: None,
            },
            TemplateId::Creative => TemplateStyle {
                header: HeaderFill::Gradient {
                    from: "#9333ea",
                    to: "#db2777",
                },
                foreground: "#ffffff",
                border_bottom: None,
            },
            TemplateId::Minimal => TemplateStyle {
                header: HeaderFill::Solid { color: "#f3f4f6" },
                foreground: "#1f2937",
                border_bottom: Some("#d1d5db"),
            },
        }
    }
}

impl From<String> for TemplateId {
    fn from(id: String) -> Self {
        TemplateId::parse(&id)
    }
}

impl From<&str> for TemplateId {
    fn from(id: &str) -> Self {
        TemplateId::parse(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HeaderFill {
    Solid {
        color: &'static str,
    },
    Gradient {
        from: &'static str,
        to: &'static str,
    },
}

/// Visual treatment of the preview header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TemplateStyle {
    pub header: HeaderFill,
    pub foreground: &'static str,
    pub border_bottom: Option<&'static str>,
}

/// Resolves an optional, untrusted template identifier to its style.
pub fn resolve(id: Option<&str>) -> TemplateStyle {
    id.map(TemplateId::parse).unwrap_or_default().style()
}
