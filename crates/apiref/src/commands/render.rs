//! `apiref render` command implementation.

use std::io::Write;
use std::path::PathBuf;

use apiref_config::Config;
use apiref_renderer::PageRenderer;
use clap::Args;

use super::{render_document, write_file};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Markdown file to render.
    file: PathBuf,

    /// Write the document here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover apiref.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl RenderArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = Config::load(self.config.as_deref(), None)?;
        let renderer = PageRenderer::new(config.page_renderer_config());

        tracing::info!(file = %self.file.display(), "Rendering page");
        let page = render_document(&renderer, &config, &self.file)?;

        for warning in &page.warnings {
            tracing::warn!(file = %self.file.display(), "{warning}");
        }
        output.warnings(&page.warnings);

        match &self.output {
            Some(path) => {
                write_file(path, &page.document)?;
                output.success(&format!("Rendered {}", path.display()));
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(page.document.as_bytes())?;
                stdout.flush()?;
            }
        }

        Ok(())
    }
}
