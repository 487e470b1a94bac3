use anyhow::{anyhow, Context, Result};
use bytes::Bytes;
use tokio::io::AsyncReadExt;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use builder::config::Config;
use builder::errors::BuilderError;
use builder::export::{self, HTML_EXTENSION};
use builder::models::Document;
use builder::wizard::Wizard;

/// Reads a résumé document as JSON on stdin and writes its HTML preview and
/// `.docx` export into `EXPORT_DIR`.
#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Builder v{}", env!("CARGO_PKG_VERSION"));

    let mut input = String::new();
    tokio::io::stdin()
        .read_to_string(&mut input)
        .await
        .context("Failed to read document from stdin")?;

    // An empty stdin renders the blank document with the configured template.
    let document = if input.trim().is_empty() {
        Document::default().with_template(config.default_template)
    } else {
        serde_json::from_str::<Document>(&input)
            .map_err(BuilderError::from)
            .map_err(fail)?
    };
    let wizard = Wizard::resume(config.wizard_variant, document);

    let artifact = wizard.export().map_err(fail)?;

    let html_name =
        export::resume_file_name(&wizard.document().personal_info.full_name, HTML_EXTENSION);
    let html_path = export::save_bytes(
        &html_name,
        Bytes::from(wizard.preview_html()),
        &config.export_dir,
    )
    .await
    .map_err(fail)?;

    let docx_path = export::save(&artifact, &config.export_dir)
        .await
        .map_err(fail)?;

    println!("{}", html_path.display());
    println!("{}", docx_path.display());
    Ok(())
}

fn fail(e: BuilderError) -> anyhow::Error {
    let notice = e.report();
    anyhow!("{}: {}", notice.code, notice.message)
}
