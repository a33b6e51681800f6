//! Container directive trait.
//!
//! Container directives use triple-colon syntax: `:::name` ... `:::`

use super::{DirectiveArgs, DirectiveContext, DirectiveOutput, Replacements};

/// Handler for container directives: `:::name` ... `:::`
///
/// Container directives wrap the lines between their opening and closing
/// markers. [`start`](Self::start) and [`end`](Self::end) run during
/// preprocessing; [`post_process`](Self::post_process) runs after rendering.
/// Handlers track their own nesting if they allow it.
///
/// # Example
///
/// ```
/// use apiref_renderer::directive::{
///     ContainerDirective, DirectiveArgs, DirectiveContext, DirectiveOutput,
/// };
///
/// struct NoteDirective;
///
/// impl ContainerDirective for NoteDirective {
///     fn name(&self) -> &str { "note" }
///
///     fn start(&mut self, _args: DirectiveArgs, _ctx: &DirectiveContext) -> DirectiveOutput {
///         DirectiveOutput::html("<div class=\"note\">\n")
///     }
///
///     fn end(&mut self, _line: usize) -> Option<String> {
///         Some("\n</div>".to_string())
///     }
/// }
/// ```
pub trait ContainerDirective: Send {
    /// Directive name, matched against `:::name`.
    fn name(&self) -> &str;

    /// Handle the opening `:::name[content]{attrs}` line.
    ///
    /// Returning [`DirectiveOutput::Skip`] leaves the line untouched and the
    /// matching `:::` is not routed to this handler.
    fn start(&mut self, args: DirectiveArgs, ctx: &DirectiveContext) -> DirectiveOutput;

    /// Handle the closing `:::` line. Only called after a successful `start`.
    fn end(&mut self, line: usize) -> Option<String>;

    /// Register string replacements to apply after rendering.
    fn post_process(&mut self, _replacements: &mut Replacements) {}

    /// Warnings generated during processing.
    fn warnings(&self) -> &[String] {
        &[]
    }
}
