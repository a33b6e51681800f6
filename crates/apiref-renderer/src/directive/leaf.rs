//! Leaf directive trait.
//!
//! Leaf directives use double-colon syntax: `::name[content]{attrs}`

use super::{DirectiveArgs, DirectiveContext, DirectiveOutput, Replacements};

/// Handler for leaf directives: `::name[content]{attrs}`
///
/// Leaf directives are self-contained blocks. A handler either returns final
/// HTML directly or returns an intermediate element during preprocessing and
/// swaps it for the final HTML in [`post_process`](Self::post_process). The
/// second form keeps multi-line output (code blocks with blank lines) away
/// from the markdown parser.
///
/// Handlers are `Send` but not `Sync`: each page gets its own processor.
///
/// # Example
///
/// ```
/// use apiref_renderer::directive::{
///     DirectiveArgs, DirectiveContext, DirectiveOutput, LeafDirective,
/// };
///
/// struct RuleDirective;
///
/// impl LeafDirective for RuleDirective {
///     fn name(&self) -> &str { "rule" }
///
///     fn process(&mut self, args: DirectiveArgs, _ctx: &DirectiveContext) -> DirectiveOutput {
///         let class = args.classes.first().map_or("rule", String::as_str);
///         DirectiveOutput::html(format!(r#"<hr class="{class}">"#))
///     }
/// }
/// ```
pub trait LeafDirective: Send {
    /// Directive name, matched against `::name[...]`.
    fn name(&self) -> &str;

    /// Process the leaf directive.
    fn process(&mut self, args: DirectiveArgs, ctx: &DirectiveContext) -> DirectiveOutput;

    /// Register string replacements to apply after rendering.
    fn post_process(&mut self, _replacements: &mut Replacements) {}

    /// Warnings generated during processing.
    fn warnings(&self) -> &[String] {
        &[]
    }
}
