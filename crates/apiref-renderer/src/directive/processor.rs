//! Directive processor for `CommonMark` directives.
//!
//! Handles preprocessing (before pulldown-cmark) and post-processing (after rendering).

use std::io;
use std::path::{Path, PathBuf};

use super::fence::FenceTracker;
use super::parser::{ParsedDirective, parse_container_line, parse_line};
use super::{
    ContainerDirective, DirectiveContext, DirectiveOutput, InlineDirective, LeafDirective,
    Replacements,
};

/// Type alias for the file reading callback function.
pub type ReadFileFn = dyn Fn(&Path) -> io::Result<String> + Send;

/// Configuration for the directive processor.
pub struct DirectiveProcessorConfig {
    /// Base directory for resolving relative paths (e.g., for `::overload-list`).
    pub base_dir: PathBuf,
    /// Path to the source file being rendered (if known).
    pub source_path: Option<PathBuf>,
    /// Callback to read files. Defaults to `std::fs::read_to_string`.
    pub read_file: Option<Box<ReadFileFn>>,
}

impl Default for DirectiveProcessorConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectiveProcessorConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            source_path: None,
            read_file: None,
        }
    }

    /// Set the base directory for resolving relative paths.
    #[must_use]
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    /// Set the source file path.
    #[must_use]
    pub fn with_source_path(mut self, source_path: impl Into<PathBuf>) -> Self {
        self.source_path = Some(source_path.into());
        self
    }

    /// Set the file reading callback.
    #[must_use]
    pub fn with_read_file<F>(mut self, read_file: F) -> Self
    where
        F: Fn(&Path) -> io::Result<String> + Send + 'static,
    {
        self.read_file = Some(Box::new(read_file));
        self
    }

    fn create_context(&self, line: usize) -> DirectiveContext<'_> {
        DirectiveContext {
            source_path: self.source_path.as_deref(),
            base_dir: &self.base_dir,
            line,
            read_file: self.read_file.as_ref().map_or_else(
                || &default_read_file as &dyn Fn(&Path) -> io::Result<String>,
                |f| f.as_ref(),
            ),
        }
    }
}

fn default_read_file(path: &Path) -> io::Result<String> {
    std::fs::read_to_string(path)
}

/// Processor for `CommonMark` directives.
///
/// # Example
///
/// ```
/// use apiref_renderer::directive::DirectiveProcessor;
/// use apiref_renderer::overload::SinceDirective;
///
/// let mut processor = DirectiveProcessor::new().with_inline(SinceDirective::default());
///
/// let output = processor.process("Added :since[20].");
/// assert!(output.contains("since C++20"));
/// ```
pub struct DirectiveProcessor {
    config: DirectiveProcessorConfig,
    inline_handlers: Vec<Box<dyn InlineDirective>>,
    leaf_handlers: Vec<Box<dyn LeafDirective>>,
    container_handlers: Vec<Box<dyn ContainerDirective>>,
    fence: FenceTracker,
    /// Open containers: the handler that accepted each one, or `None` when the
    /// opening line passed through unhandled.
    open_containers: Vec<Option<usize>>,
    /// Warnings in source order.
    warnings: Vec<String>,
    /// Handler warnings already moved into `warnings`, per leaf then container handler.
    seen_warnings: Vec<usize>,
}

impl Default for DirectiveProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectiveProcessor {
    /// Create a new directive processor with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DirectiveProcessorConfig::default())
    }

    /// Create a new directive processor with custom configuration.
    #[must_use]
    pub fn with_config(config: DirectiveProcessorConfig) -> Self {
        Self {
            config,
            inline_handlers: Vec::new(),
            leaf_handlers: Vec::new(),
            container_handlers: Vec::new(),
            fence: FenceTracker::new(),
            open_containers: Vec::new(),
            warnings: Vec::new(),
            seen_warnings: Vec::new(),
        }
    }

    /// Register an inline directive handler.
    #[must_use]
    pub fn with_inline<D: InlineDirective + 'static>(mut self, handler: D) -> Self {
        self.inline_handlers.push(Box::new(handler));
        self
    }

    /// Register a leaf directive handler.
    #[must_use]
    pub fn with_leaf<D: LeafDirective + 'static>(mut self, handler: D) -> Self {
        self.leaf_handlers.push(Box::new(handler));
        self.seen_warnings.insert(self.leaf_handlers.len() - 1, 0);
        self
    }

    /// Register a container directive handler.
    #[must_use]
    pub fn with_container<D: ContainerDirective + 'static>(mut self, handler: D) -> Self {
        self.container_handlers.push(Box::new(handler));
        self.seen_warnings.push(0);
        self
    }

    /// Preprocess markdown, converting directives to HTML or intermediate elements.
    #[must_use]
    pub fn process(&mut self, input: &str) -> String {
        let mut output = String::with_capacity(input.len());

        for (idx, line) in input.lines().enumerate() {
            if idx > 0 {
                output.push('\n');
            }
            let processed = self.process_line(line, idx + 1);
            output.push_str(&processed);
            self.collect_handler_warnings();
        }
        if input.ends_with('\n') {
            output.push('\n');
        }

        for open in self.open_containers.drain(..).flatten() {
            let name = self.container_handlers[open].name().to_owned();
            self.warnings.push(format!(
                "unclosed container directive :::{name} (missing closing :::)"
            ));
        }

        output
    }

    /// Move warnings raised by handlers since the last call into `warnings`.
    fn collect_handler_warnings(&mut self) {
        let handler_warnings = self
            .leaf_handlers
            .iter()
            .map(|h| h.warnings())
            .chain(self.container_handlers.iter().map(|h| h.warnings()));

        for (seen, warnings) in self.seen_warnings.iter_mut().zip(handler_warnings) {
            let new = warnings.get(*seen..).unwrap_or_default();
            self.warnings.extend(new.iter().cloned());
            *seen = warnings.len();
        }
    }

    fn process_line(&mut self, line: &str, line_num: usize) -> String {
        let fence_marker = self.fence.update(line);
        if fence_marker || self.fence.in_fence() {
            return line.to_owned();
        }

        if let Some(directive) = parse_container_line(line) {
            return self.dispatch_container(directive, line, line_num);
        }

        self.process_inline_directives(line, line_num)
    }

    fn process_inline_directives(&mut self, line: &str, line_num: usize) -> String {
        let mut result = String::with_capacity(line.len());
        let mut remaining = line;

        while let Some((directive, start, end)) = parse_line(remaining) {
            result.push_str(&remaining[..start]);

            match self.dispatch_inline_or_leaf(directive, line_num) {
                DirectiveOutput::Html(html) => result.push_str(&html),
                DirectiveOutput::Skip => result.push_str(&remaining[start..end]),
            }

            remaining = &remaining[end..];
        }

        result.push_str(remaining);
        result
    }

    fn dispatch_container(
        &mut self,
        directive: ParsedDirective,
        line: &str,
        line_num: usize,
    ) -> String {
        match directive {
            ParsedDirective::ContainerStart { name, args } => {
                let handler = self.container_handlers.iter().position(|h| h.name() == name);
                let output = match handler {
                    Some(idx) => {
                        let ctx = self.config.create_context(line_num);
                        self.container_handlers[idx].start(args, &ctx)
                    }
                    None => DirectiveOutput::Skip,
                };

                match output {
                    DirectiveOutput::Html(html) => {
                        self.open_containers.push(handler);
                        html
                    }
                    DirectiveOutput::Skip => {
                        self.open_containers.push(None);
                        line.to_owned()
                    }
                }
            }
            ParsedDirective::ContainerEnd { .. } => match self.open_containers.pop() {
                Some(Some(idx)) => self.container_handlers[idx]
                    .end(line_num)
                    .unwrap_or_default(),
                Some(None) => line.to_owned(),
                None => {
                    self.warnings.push(format!(
                        "line {line_num}: stray ::: with no opening directive"
                    ));
                    line.to_owned()
                }
            },
            ParsedDirective::Inline { .. } | ParsedDirective::Leaf { .. } => line.to_owned(),
        }
    }

    fn dispatch_inline_or_leaf(
        &mut self,
        directive: ParsedDirective,
        line_num: usize,
    ) -> DirectiveOutput {
        let ctx = self.config.create_context(line_num);
        match directive {
            ParsedDirective::Inline { name, args } => self
                .inline_handlers
                .iter_mut()
                .find(|h| h.name() == name)
                .map_or(DirectiveOutput::Skip, |h| h.process(args, &ctx)),
            ParsedDirective::Leaf { name, args } => self
                .leaf_handlers
                .iter_mut()
                .find(|h| h.name() == name)
                .map_or(DirectiveOutput::Skip, |h| h.process(args, &ctx)),
            ParsedDirective::ContainerStart { .. } | ParsedDirective::ContainerEnd { .. } => {
                DirectiveOutput::Skip
            }
        }
    }

    /// Post-process rendered HTML.
    ///
    /// Collects all replacements from handlers and applies them in a single pass.
    pub fn post_process(&mut self, html: &mut String) {
        let mut replacements =
            Replacements::with_capacity(self.leaf_handlers.len() + self.container_handlers.len());

        for handler in &mut self.leaf_handlers {
            handler.post_process(&mut replacements);
        }
        for handler in &mut self.container_handlers {
            handler.post_process(&mut replacements);
        }

        replacements.apply(html);
        self.collect_handler_warnings();
    }

    /// All warnings from the processor itself and from every handler, in the
    /// order of the lines that raised them.
    #[must_use]
    pub fn warnings(&self) -> Vec<String> {
        self.warnings.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directive::DirectiveArgs;
    use pretty_assertions::assert_eq;

    struct TestKbd;

    impl InlineDirective for TestKbd {
        fn name(&self) -> &'static str {
            "kbd"
        }

        fn process(&mut self, args: DirectiveArgs, _ctx: &DirectiveContext) -> DirectiveOutput {
            DirectiveOutput::html(format!("<kbd>{}</kbd>", args.content))
        }
    }

    struct TestRow;

    impl LeafDirective for TestRow {
        fn name(&self) -> &'static str {
            "row"
        }

        fn process(&mut self, args: DirectiveArgs, ctx: &DirectiveContext) -> DirectiveOutput {
            DirectiveOutput::html(format!(
                "<tr data-line=\"{}\"><td>{}</td></tr>",
                ctx.line, args.content
            ))
        }
    }

    struct TestTable;

    impl ContainerDirective for TestTable {
        fn name(&self) -> &'static str {
            "table"
        }

        fn start(&mut self, args: DirectiveArgs, _ctx: &DirectiveContext) -> DirectiveOutput {
            if args.classes.iter().any(|c| c == "skip") {
                return DirectiveOutput::Skip;
            }
            DirectiveOutput::html("<table>")
        }

        fn end(&mut self, _line: usize) -> Option<String> {
            Some("</table>".to_owned())
        }
    }

    #[test]
    fn test_inline_directives() {
        let mut processor = DirectiveProcessor::new().with_inline(TestKbd);

        let output = processor.process("Press :kbd[Ctrl+C] then :kbd[Ctrl+V].");
        assert_eq!(output, "Press <kbd>Ctrl+C</kbd> then <kbd>Ctrl+V</kbd>.");
    }

    #[test]
    fn test_leaf_directive_gets_line_number() {
        let mut processor = DirectiveProcessor::new().with_leaf(TestRow);

        let output = processor.process("intro\n::row[void f();]");
        assert_eq!(output, "intro\n<tr data-line=\"2\"><td>void f();</td></tr>");
    }

    #[test]
    fn test_container_wraps_rows() {
        let mut processor = DirectiveProcessor::new()
            .with_leaf(TestRow)
            .with_container(TestTable);

        let output = processor.process(":::table\n::row[a]\n:::\n");
        assert_eq!(
            output,
            "<table>\n<tr data-line=\"2\"><td>a</td></tr>\n</table>\n"
        );
        assert!(processor.warnings().is_empty());
    }

    #[test]
    fn test_unknown_directive_passthrough() {
        let mut processor = DirectiveProcessor::new();

        assert_eq!(processor.process(":unknown[content]"), ":unknown[content]");
        assert_eq!(processor.process("::unknown[x]{a=1}"), "::unknown[x]{a=1}");
    }

    #[test]
    fn test_unknown_container_keeps_its_closing_line() {
        let mut processor = DirectiveProcessor::new().with_container(TestTable);

        let input = ":::table\n:::unknown[Title]{.x}\nBody\n:::\n:::";
        let output = processor.process(input);
        assert_eq!(output, "<table>\n:::unknown[Title]{.x}\nBody\n:::\n</table>");
        assert!(processor.warnings().is_empty());
    }

    #[test]
    fn test_skipped_container_passes_through() {
        let mut processor = DirectiveProcessor::new().with_container(TestTable);

        let output = processor.process(":::table{.skip}\n:::");
        assert_eq!(output, ":::table{.skip}\n:::");
    }

    #[test]
    fn test_code_fence_skipping() {
        let mut processor = DirectiveProcessor::new()
            .with_inline(TestKbd)
            .with_leaf(TestRow);

        let input = "```cpp\n::row[inside]\n:kbd[inside]\n```\n:kbd[outside]";
        let output = processor.process(input);

        assert!(output.contains("::row[inside]"));
        assert!(output.contains(":kbd[inside]"));
        assert!(output.contains("<kbd>outside</kbd>"));
    }

    #[test]
    fn test_unclosed_container_warning() {
        let mut processor = DirectiveProcessor::new().with_container(TestTable);

        let _output = processor.process(":::table\nContent");
        let warnings = processor.warnings();
        assert_eq!(
            warnings,
            vec!["unclosed container directive :::table (missing closing :::)".to_owned()]
        );
    }

    #[test]
    fn test_stray_close_warning() {
        let mut processor = DirectiveProcessor::new();

        let output = processor.process("text\n:::");
        assert_eq!(output, "text\n:::");
        assert_eq!(
            processor.warnings(),
            vec!["line 2: stray ::: with no opening directive".to_owned()]
        );
    }

    #[test]
    fn test_warnings_follow_line_order() {
        #[derive(Default)]
        struct Deprecated {
            warnings: Vec<String>,
        }

        impl LeafDirective for Deprecated {
            fn name(&self) -> &'static str {
                "deprecated"
            }

            fn process(&mut self, args: DirectiveArgs, ctx: &DirectiveContext) -> DirectiveOutput {
                self.warnings
                    .push(format!("line {}: deprecated {}", ctx.line, args.content));
                DirectiveOutput::html("")
            }

            fn warnings(&self) -> &[String] {
                &self.warnings
            }
        }

        let mut processor = DirectiveProcessor::new()
            .with_leaf(Deprecated::default())
            .with_container(TestTable);

        let _output = processor.process("::deprecated[a]

:::

::deprecated[b]
:::table
");
        assert_eq!(
            processor.warnings(),
            vec![
                "line 1: deprecated a".to_owned(),
                "line 3: stray ::: with no opening directive".to_owned(),
                "line 5: deprecated b".to_owned(),
                "unclosed container directive :::table (missing closing :::)".to_owned(),
            ]
        );
    }

    #[test]
    fn test_preserves_trailing_newline() {
        let mut processor = DirectiveProcessor::new();
        assert_eq!(processor.process("a\nb\n"), "a\nb\n");
        assert_eq!(processor.process("a\nb"), "a\nb");
        assert_eq!(processor.process(""), "");
    }

    #[test]
    fn test_read_file_callback_reaches_handlers() {
        struct Echo;

        impl LeafDirective for Echo {
            fn name(&self) -> &'static str {
                "echo"
            }

            fn process(&mut self, args: DirectiveArgs, ctx: &DirectiveContext) -> DirectiveOutput {
                let path = ctx.resolve_path(&args.content);
                ctx.read(&path)
                    .map_or(DirectiveOutput::Skip, DirectiveOutput::Html)
            }
        }

        let config = DirectiveProcessorConfig::new()
            .with_base_dir("/docs/api")
            .with_read_file(|path| Ok(path.display().to_string()));
        let mut processor = DirectiveProcessor::with_config(config).with_leaf(Echo);

        assert_eq!(processor.process("::echo[x.toml]"), "/docs/api/x.toml");
    }

    #[test]
    fn test_config_builder() {
        let config = DirectiveProcessorConfig::new()
            .with_base_dir("/docs")
            .with_source_path("/docs/api/at.md");

        assert_eq!(config.base_dir, PathBuf::from("/docs"));
        assert_eq!(config.source_path, Some(PathBuf::from("/docs/api/at.md")));
        assert!(config.read_file.is_none());
    }
}
