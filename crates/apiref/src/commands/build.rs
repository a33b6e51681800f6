//! `apiref build` command implementation.

use std::fs;
use std::path::{Path, PathBuf};

use apiref_config::{CliSettings, Config};
use apiref_renderer::PageRenderer;
use clap::Args;
use rayon::prelude::*;

use super::{render_document, write_file};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Markdown source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Output directory for the generated pages (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover apiref.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// Outcome of building one page.
struct BuiltPage {
    source: PathBuf,
    warnings: Vec<String>,
}

impl BuildArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            output_dir: self.output_dir,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let source_dir = &config.docs_resolved.source_dir;
        let output_dir = &config.docs_resolved.output_dir;

        if !source_dir.is_dir() {
            return Err(CliError::Validation(format!(
                "Source directory not found: {}",
                source_dir.display()
            )));
        }

        output.info(&format!("Source: {}", source_dir.display()));
        output.info(&format!("Output: {}", output_dir.display()));

        let pages = find_markdown_files(source_dir)?;
        let renderer = PageRenderer::new(config.page_renderer_config());

        let built = pages
            .par_iter()
            .map(|relative| build_page(&renderer, &config, source_dir, output_dir, relative))
            .collect::<Result<Vec<_>, _>>()?;

        let mut warning_count = 0;
        for page in &built {
            for warning in &page.warnings {
                tracing::warn!(page = %page.source.display(), "{warning}");
            }
            output.warnings(&page.warnings);
            warning_count += page.warnings.len();
        }

        output.success(&format!(
            "Built {} page(s) to {}",
            built.len(),
            output_dir.display()
        ));
        if warning_count > 0 {
            output.warning(&format!("{warning_count} warning(s)"));
        }
        Ok(())
    }
}

/// Render one page and write it to the mirrored output path.
fn build_page(
    renderer: &PageRenderer,
    config: &Config,
    source_dir: &Path,
    output_dir: &Path,
    relative: &Path,
) -> Result<BuiltPage, CliError> {
    let source = source_dir.join(relative);
    let target = output_dir.join(relative.with_extension("html"));

    let page = render_document(renderer, config, &source)?;
    write_file(&target, &page.document)?;
    tracing::info!(source = %source.display(), target = %target.display(), "Built page");

    Ok(BuiltPage {
        source: relative.to_path_buf(),
        warnings: page.warnings,
    })
}

/// Collect `.md` files under `root`, as paths relative to it, in sorted order.
///
/// Hidden entries (names starting with `.`) are skipped.
fn find_markdown_files(root: &Path) -> Result<Vec<PathBuf>, CliError> {
    let mut files = Vec::new();
    scan_directory(root, Path::new(""), &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory(dir: &Path, prefix: &Path, files: &mut Vec<PathBuf>) -> Result<(), CliError> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        if name.to_string_lossy().starts_with('.') {
            continue;
        }

        let relative = prefix.join(&name);
        if entry.file_type()?.is_dir() {
            scan_directory(&entry.path(), &relative, files)?;
        } else if relative.extension().is_some_and(|ext| ext == "md") {
            files.push(relative);
        }
    }
    Ok(())
}
