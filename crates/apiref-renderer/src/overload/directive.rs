//! Directives that place overload tables and standard badges in markdown.
//!
//! ```text
//! :::overloads
//! ::overload[constexpr basic_fixed_string() noexcept;]{num=1}
//! ::overload[basic_fixed_string(const basic_fixed_string&) = default;]{num=2 standard=17}
//! :::
//!
//! ::overload-list[constructors.toml]
//!
//! Available :since[20].
//! ```

use std::collections::HashMap;
use std::fmt::Write;

use super::model::{OverloadDescriptor, OverloadFile, StandardVersion, duplicate_numbers};
use super::row::{OverloadRenderer, TABLE_CLOSE, TABLE_OPEN};
use crate::directive::{
    ContainerDirective, DirectiveArgs, DirectiveContext, DirectiveOutput, InlineDirective,
    LeafDirective, Replacements,
};

/// Leaf directive for one overload row: `::overload[signature]{num=N standard=S}`.
///
/// Emits a placeholder during preprocessing and the rendered row during
/// post-processing, so the signature never goes through the markdown parser.
/// Warns when two rows on the page share an anchor.
pub struct OverloadDirective {
    renderer: OverloadRenderer,
    rows: Vec<String>,
    /// Anchor -> line of its first row.
    anchors: HashMap<String, usize>,
    warnings: Vec<String>,
}

impl Default for OverloadDirective {
    fn default() -> Self {
        Self::new(OverloadRenderer::default())
    }
}

impl OverloadDirective {
    #[must_use]
    pub fn new(renderer: OverloadRenderer) -> Self {
        Self {
            renderer,
            rows: Vec::new(),
            anchors: HashMap::new(),
            warnings: Vec::new(),
        }
    }
}

impl LeafDirective for OverloadDirective {
    fn name(&self) -> &'static str {
        "overload"
    }

    fn process(&mut self, args: DirectiveArgs, ctx: &DirectiveContext) -> DirectiveOutput {
        let number = args.get_trimmed("num").unwrap_or_default().to_owned();
        let standard = args.get("standard").and_then(StandardVersion::new);
        let descriptor = OverloadDescriptor {
            number: number.into(),
            signature: args.content,
            standard,
        };

        let anchor = descriptor.anchor();
        if let Some(first) = self.anchors.get(&anchor) {
            self.warnings.push(ctx.located(&format!(
                "duplicate overload number '{}' (anchor #{anchor} first used on line {first})",
                descriptor.number
            )));
        } else {
            self.anchors.insert(anchor, ctx.line);
        }

        let id = self.rows.len();
        self.rows.push(self.renderer.render_descriptor(&descriptor));
        // Own block, so a preceding text line stays a separate paragraph.
        DirectiveOutput::html(format!("\n{}", row_placeholder(id)))
    }

    fn post_process(&mut self, replacements: &mut Replacements) {
        for (id, row) in self.rows.drain(..).enumerate() {
            replacements.add(row_placeholder(id), row);
        }
    }

    fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

fn row_placeholder(id: usize) -> String {
    format!(r#"<apiref-overload data-id="{id}">"#)
}

/// Container directive wrapping `::overload` rows in a table: `:::overloads` ... `:::`.
#[derive(Default)]
pub struct OverloadsDirective {
    depth: usize,
    warnings: Vec<String>,
}

impl ContainerDirective for OverloadsDirective {
    fn name(&self) -> &'static str {
        "overloads"
    }

    fn start(&mut self, _args: DirectiveArgs, ctx: &DirectiveContext) -> DirectiveOutput {
        if self.depth > 0 {
            self.warnings
                .push(ctx.located("nested :::overloads is not supported"));
        }
        self.depth += 1;
        // Leading blank line ends any open paragraph before the table
        DirectiveOutput::html(format!("\n{TABLE_OPEN}"))
    }

    fn end(&mut self, _line: usize) -> Option<String> {
        self.depth = self.depth.saturating_sub(1);
        // Trailing blank line ends the raw HTML block after the table
        Some(format!("{TABLE_CLOSE}\n"))
    }

    fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

/// Leaf directive rendering a whole table from a TOML file:
/// `::overload-list[path.toml]`.
///
/// The file holds `[[overload]]` tables with `num`, `code` and `standard`
/// keys; `code` may span several lines. Paths resolve against the page's
/// directory.
pub struct OverloadListDirective {
    renderer: OverloadRenderer,
    tables: Vec<String>,
    warnings: Vec<String>,
}

impl Default for OverloadListDirective {
    fn default() -> Self {
        Self::new(OverloadRenderer::default())
    }
}

impl OverloadListDirective {
    #[must_use]
    pub fn new(renderer: OverloadRenderer) -> Self {
        Self {
            renderer,
            tables: Vec::new(),
            warnings: Vec::new(),
        }
    }

    fn load(&self, args: &DirectiveArgs, ctx: &DirectiveContext) -> Result<Vec<OverloadDescriptor>, String> {
        let relative = args.content.trim();
        if relative.is_empty() {
            return Err("::overload-list needs a file path".to_owned());
        }

        let path = ctx.resolve_path(relative);
        let contents = ctx
            .read(&path)
            .map_err(|e| format!("failed to read overload list '{relative}': {e}"))?;
        let file: OverloadFile = toml::from_str(&contents)
            .map_err(|e| format!("invalid overload list '{relative}': {}", e.message()))?;

        Ok(file.into_descriptors())
    }
}

impl LeafDirective for OverloadListDirective {
    fn name(&self) -> &'static str {
        "overload-list"
    }

    fn process(&mut self, args: DirectiveArgs, ctx: &DirectiveContext) -> DirectiveOutput {
        let descriptors = match self.load(&args, ctx) {
            Ok(descriptors) => descriptors,
            Err(message) => {
                self.warnings.push(ctx.located(&message));
                return DirectiveOutput::Skip;
            }
        };

        for number in duplicate_numbers(&descriptors) {
            self.warnings.push(ctx.located(&format!(
                "duplicate overload number '{number}' in '{}'",
                args.content.trim()
            )));
        }

        let id = self.tables.len();
        self.tables.push(self.renderer.render_table(&descriptors));

        // Own block: blank lines keep the placeholder out of any paragraph
        let mut placeholder = String::from("\n");
        writeln!(placeholder, "{}", list_placeholder(id)).unwrap();
        DirectiveOutput::html(placeholder)
    }

    fn post_process(&mut self, replacements: &mut Replacements) {
        for (id, table) in self.tables.drain(..).enumerate() {
            replacements.add(list_placeholder(id), table);
        }
    }

    fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

fn list_placeholder(id: usize) -> String {
    format!(r#"<apiref-overload-list data-id="{id}">"#)
}

/// Inline standard badge: `:since[17]`.
///
/// An empty version renders nothing.
#[derive(Default)]
pub struct SinceDirective {
    renderer: OverloadRenderer,
}

impl SinceDirective {
    #[must_use]
    pub fn new(renderer: OverloadRenderer) -> Self {
        Self { renderer }
    }
}

impl InlineDirective for SinceDirective {
    fn name(&self) -> &'static str {
        "since"
    }

    fn process(&mut self, args: DirectiveArgs, _ctx: &DirectiveContext) -> DirectiveOutput {
        let badge = StandardVersion::new(&args.content)
            .map(|standard| self.renderer.badge_html(&standard))
            .unwrap_or_default();
        DirectiveOutput::html(badge)
    }
}
