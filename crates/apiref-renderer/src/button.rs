//! Link buttons: `::link-button[Label]{to=/path}`.

use std::fmt::Write;

use crate::directive::{DirectiveArgs, DirectiveContext, DirectiveOutput, LeafDirective};
use crate::html::escape_html;

/// Leaf directive rendering a right-aligned secondary button link.
///
/// Site-absolute targets (`/api/at`) get the site base URL prepended, so
/// pages keep working when the site is served from a sub-path. Other
/// targets (`https://...`, `../at`, `#overload2`) are used as written.
pub struct LinkButtonDirective {
    base_url: String,
    warnings: Vec<String>,
}

impl Default for LinkButtonDirective {
    fn default() -> Self {
        Self::new("/")
    }
}

impl LinkButtonDirective {
    /// Create a link button directive for a site served under `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            warnings: Vec::new(),
        }
    }

    fn resolve(&self, target: &str) -> String {
        match target.strip_prefix('/') {
            Some(rest) if !target.starts_with("//") => {
                let base = self.base_url.trim_end_matches('/');
                format!("{base}/{rest}")
            }
            _ => target.to_owned(),
        }
    }
}

impl LeafDirective for LinkButtonDirective {
    fn name(&self) -> &'static str {
        "link-button"
    }

    fn process(&mut self, args: DirectiveArgs, ctx: &DirectiveContext) -> DirectiveOutput {
        let Some(target) = args.get_trimmed("to") else {
            self.warnings
                .push(ctx.located("::link-button needs a `to` attribute"));
            return DirectiveOutput::Skip;
        };

        let mut html = String::from(r#"<div class="link-button">"#);
        write!(
            html,
            r#"<a class="button button--secondary button--lg" href="{}">{}</a></div>"#,
            escape_html(&self.resolve(target)),
            escape_html(args.content.trim())
        )
        .unwrap();
        DirectiveOutput::html(html)
    }

    fn warnings(&self) -> &[String] {
        &self.warnings
    }
}
