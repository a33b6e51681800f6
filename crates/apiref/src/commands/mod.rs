//! CLI command implementations.

mod build;
mod render;

pub(crate) use build::BuildArgs;
pub(crate) use render::RenderArgs;

use std::path::Path;

use apiref_config::Config;
use apiref_renderer::PageRenderer;

use crate::error::CliError;
use crate::template::{PageData, render_page};

/// A page rendered to a standalone HTML document.
pub(crate) struct RenderedPage {
    pub document: String,
    pub warnings: Vec<String>,
}

/// Render one markdown file and wrap it in a document.
///
/// The document title is the page's first H1, falling back to the site title.
pub(crate) fn render_document(
    renderer: &PageRenderer,
    config: &Config,
    source: &Path,
) -> Result<RenderedPage, CliError> {
    let result = renderer.render_file(source)?;
    let stylesheet = config.theme.stylesheet();

    let document = render_page(&PageData {
        title: result.title.as_deref().unwrap_or(&config.site.title),
        html_content: &result.html,
        stylesheet: &stylesheet,
    });

    Ok(RenderedPage {
        document,
        warnings: result.warnings,
    })
}

/// Write a file, creating parent directories as needed.
pub(crate) fn write_file(path: &Path, contents: &str) -> Result<(), CliError> {
    let wrap = |source| CliError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(wrap)?;
    }
    std::fs::write(path, contents).map_err(wrap)
}
