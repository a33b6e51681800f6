//! Page rendering: directives, markdown and title extraction.
//!
//! Provides [`PageRenderer`] for turning one markdown page into an HTML
//! fragment with its overload tables, badges and link buttons resolved.

use std::path::{Path, PathBuf};

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd, html};

use crate::button::LinkButtonDirective;
use crate::directive::{DirectiveProcessor, DirectiveProcessorConfig};
use crate::overload::{
    OverloadDirective, OverloadListDirective, OverloadRenderer, OverloadTheme, OverloadsDirective,
    SinceDirective,
};

/// Result of rendering a markdown page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderResult {
    /// Rendered HTML content.
    pub html: String,
    /// Title extracted from first H1 heading (if enabled).
    pub title: Option<String>,
    /// Warnings generated during conversion (e.g., duplicate overload numbers).
    pub warnings: Vec<String>,
}

/// Error returned when page rendering fails.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Source file not found.
    #[error("Source file not found: {}", .0.display())]
    FileNotFound(PathBuf),
    /// I/O error reading source file.
    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Configuration for [`PageRenderer`].
#[derive(Clone, Debug)]
pub struct PageRendererConfig {
    /// Overload table styling.
    pub theme: OverloadTheme,
    /// URL path the site is served under, prepended to `/`-rooted links.
    pub base_url: String,
    /// Extract title from first H1 heading and drop it from the body.
    pub extract_title: bool,
}

impl Default for PageRendererConfig {
    fn default() -> Self {
        Self {
            theme: OverloadTheme::default(),
            base_url: "/".to_owned(),
            extract_title: true,
        }
    }
}

/// Renders API reference pages.
///
/// Holds no per-page state: every call builds its own directive processor,
/// so one renderer can be shared across threads.
///
/// # Example
///
/// ```
/// use apiref_renderer::{PageRenderer, PageRendererConfig};
///
/// let renderer = PageRenderer::new(PageRendererConfig::default());
/// let result = renderer.render_markdown(
///     "# at\n\n:::overloads\n::overload[constexpr reference at(size_type pos);]{num=1}\n:::\n",
/// );
///
/// assert_eq!(result.title.as_deref(), Some("at"));
/// assert!(result.html.contains(r#"id="overload1""#));
/// ```
#[derive(Clone)]
pub struct PageRenderer {
    config: PageRendererConfig,
    overloads: OverloadRenderer,
}

impl Default for PageRenderer {
    fn default() -> Self {
        Self::new(PageRendererConfig::default())
    }
}

impl PageRenderer {
    /// Create a renderer with the default HTML collaborators.
    #[must_use]
    pub fn new(config: PageRendererConfig) -> Self {
        let overloads = OverloadRenderer::new(config.theme.clone());
        Self { config, overloads }
    }

    /// Use a custom overload renderer (e.g. one with a syntax highlighter).
    #[must_use]
    pub fn with_overload_renderer(mut self, overloads: OverloadRenderer) -> Self {
        self.overloads = overloads;
        self
    }

    /// The configuration this renderer was built with.
    #[must_use]
    pub fn config(&self) -> &PageRendererConfig {
        &self.config
    }

    /// Render markdown text. `::overload-list` paths resolve against the
    /// current directory.
    #[must_use]
    pub fn render_markdown(&self, markdown: &str) -> RenderResult {
        self.render_with(markdown, DirectiveProcessorConfig::new())
    }

    /// Read and render a markdown file. `::overload-list` paths resolve
    /// against the file's directory and warnings carry the file path.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if the file cannot be read.
    pub fn render_file(&self, source_path: &Path) -> Result<RenderResult, RenderError> {
        let markdown = std::fs::read_to_string(source_path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => RenderError::FileNotFound(source_path.to_path_buf()),
            _ => RenderError::Io {
                path: source_path.to_path_buf(),
                source: e,
            },
        })?;

        let base_dir = source_path.parent().unwrap_or_else(|| Path::new("."));
        let directives = DirectiveProcessorConfig::new()
            .with_base_dir(base_dir)
            .with_source_path(source_path);

        tracing::debug!(path = %source_path.display(), "Rendering page");
        Ok(self.render_with(&markdown, directives))
    }

    /// Render markdown with a caller-supplied directive configuration
    /// (e.g. an in-memory `read_file` callback).
    #[must_use]
    pub fn render_with(&self, markdown: &str, directives: DirectiveProcessorConfig) -> RenderResult {
        let mut processor = self.create_processor(directives);
        let processed = processor.process(markdown);

        let parser = Parser::new_ext(&processed, parser_options());
        let (events, title) = split_title(parser, self.config.extract_title);

        let mut output = String::with_capacity(processed.len() * 3 / 2);
        html::push_html(&mut output, events.into_iter());
        processor.post_process(&mut output);

        RenderResult {
            html: output,
            title,
            warnings: processor.warnings(),
        }
    }

    fn create_processor(&self, config: DirectiveProcessorConfig) -> DirectiveProcessor {
        DirectiveProcessor::with_config(config)
            .with_inline(SinceDirective::new(self.overloads.clone()))
            .with_leaf(OverloadDirective::new(self.overloads.clone()))
            .with_leaf(OverloadListDirective::new(self.overloads.clone()))
            .with_leaf(LinkButtonDirective::new(self.config.base_url.clone()))
            .with_container(OverloadsDirective::default())
    }
}

/// Markdown extensions enabled for reference pages.
#[must_use]
pub fn parser_options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_HEADING_ATTRIBUTES
}

/// Collect events, pulling out the text of the first H1 when `extract` is set.
fn split_title(parser: Parser<'_>, extract: bool) -> (Vec<Event<'_>>, Option<String>) {
    let mut events = Vec::new();
    let mut title = None;
    let mut capture: Option<String> = None;
    let mut looking = extract;

    for event in parser {
        if let Some(text) = capture.as_mut() {
            match event {
                Event::End(TagEnd::Heading(HeadingLevel::H1)) => {
                    title = capture.take().map(|t| t.trim().to_owned());
                }
                Event::Text(s) | Event::Code(s) => text.push_str(&s),
                Event::SoftBreak | Event::HardBreak => text.push(' '),
                _ => {}
            }
            continue;
        }

        if looking
            && let Event::Start(Tag::Heading {
                level: HeadingLevel::H1,
                ..
            }) = event
        {
            looking = false;
            capture = Some(String::new());
            continue;
        }

        events.push(event);
    }

    (events, title)
}
