use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

use crate::render::TemplateId;
use crate::wizard::WizardVariant;

/// Application configuration loaded from environment variables.
/// Every variable is optional; only a malformed `WIZARD_STEPS` is an error.
#[derive(Debug, Clone)]
pub struct Config {
    pub export_dir: PathBuf,
    pub default_template: TemplateId,
    pub wizard_variant: WizardVariant,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let wizard_variant = match lookup("WIZARD_STEPS") {
            Some(raw) => raw
                .parse::<WizardVariant>()
                .map_err(|e| anyhow!(e))
                .context("WIZARD_STEPS must be 4 or 9")?,
            None => WizardVariant::default(),
        };

        Ok(Config {
            export_dir: lookup("EXPORT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
            default_template: lookup("RESUME_TEMPLATE")
                .map(TemplateId::from)
                .unwrap_or_default(),
            wizard_variant,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.export_dir, PathBuf::from("."));
        assert_eq!(config.default_template, TemplateId::Modern);
        assert_eq!(config.wizard_variant, WizardVariant::Full);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_reads_overrides() {
        let config = config_from(&[
            ("EXPORT_DIR", "/tmp/out"),
            ("RESUME_TEMPLATE", "Minimal"),
            ("WIZARD_STEPS", "4"),
        ])
        .unwrap();
        assert_eq!(config.export_dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.default_template, TemplateId::Minimal);
        assert_eq!(config.wizard_variant, WizardVariant::Compact);
    }

    #[test]
    fn test_unknown_template_falls_back() {
        let config = config_from(&[("RESUME_TEMPLATE", "neon")]).unwrap();
        assert_eq!(config.default_template, TemplateId::Modern);
    }

    #[test]
    fn test_bad_step_count_is_an_error() {
        let err = config_from(&[("WIZARD_STEPS", "7")]).unwrap_err();
        assert!(format!("{err:#}").contains("WIZARD_STEPS must be 4 or 9"));
    }
}
