//! Inline directive trait.
//!
//! Inline directives use single-colon syntax: `:name[content]{attrs}`

use super::{DirectiveArgs, DirectiveContext, DirectiveOutput};

/// Handler for inline directives: `:name[content]{attrs}`
///
/// Inline directives appear within text flow and produce inline HTML
/// elements during preprocessing.
///
/// # Example
///
/// ```
/// use apiref_renderer::directive::{DirectiveArgs, DirectiveContext, DirectiveOutput, InlineDirective};
///
/// struct KbdDirective;
///
/// impl InlineDirective for KbdDirective {
///     fn name(&self) -> &str { "kbd" }
///
///     fn process(&mut self, args: DirectiveArgs, _ctx: &DirectiveContext) -> DirectiveOutput {
///         DirectiveOutput::html(format!("<kbd>{}</kbd>", args.content))
///     }
/// }
/// ```
pub trait InlineDirective: Send {
    /// Directive name, matched against `:name[...]`.
    fn name(&self) -> &str;

    /// Process the inline directive.
    ///
    /// Returns [`DirectiveOutput::Html`] to emit HTML, [`DirectiveOutput::Skip`]
    /// to pass through unchanged.
    fn process(&mut self, args: DirectiveArgs, ctx: &DirectiveContext) -> DirectiveOutput;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    struct TestAbbr;

    impl InlineDirective for TestAbbr {
        fn name(&self) -> &'static str {
            "abbr"
        }

        fn process(&mut self, args: DirectiveArgs, _ctx: &DirectiveContext) -> DirectiveOutput {
            match args.get("title") {
                Some(title) => {
                    DirectiveOutput::html(format!(r#"<abbr title="{title}">{}</abbr>"#, args.content))
                }
                None => DirectiveOutput::Skip,
            }
        }
    }

    #[test]
    fn test_inline_directive() {
        let ctx = DirectiveContext {
            source_path: None,
            base_dir: Path::new("."),
            line: 1,
            read_file: &|_| Ok(String::new()),
        };

        let args = DirectiveArgs::parse("SSO", r#"title="small string optimization""#);
        assert_eq!(
            TestAbbr.process(args, &ctx),
            DirectiveOutput::Html(
                r#"<abbr title="small string optimization">SSO</abbr>"#.to_owned()
            )
        );
    }

    #[test]
    fn test_inline_directive_skip() {
        let ctx = DirectiveContext {
            source_path: None,
            base_dir: Path::new("."),
            line: 1,
            read_file: &|_| Ok(String::new()),
        };

        let args = DirectiveArgs::parse("SSO", "");
        assert_eq!(TestAbbr.process(args, &ctx), DirectiveOutput::Skip);
    }
}
