//! Directive output types.

/// Output from directive processing.
///
/// - [`Html`](Self::Html): HTML (final or intermediate) that passes through
///   pulldown-cmark unchanged
/// - [`Skip`](Self::Skip): leave the directive text in place
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DirectiveOutput {
    /// HTML that passes through pulldown-cmark unchanged.
    Html(String),
    /// Don't handle this directive (pass through unchanged).
    Skip,
}

impl DirectiveOutput {
    /// Create an HTML output.
    ///
    /// ```
    /// use apiref_renderer::directive::DirectiveOutput;
    ///
    /// let output = DirectiveOutput::html("<tr></tr>");
    /// assert!(matches!(output, DirectiveOutput::Html(_)));
    /// ```
    #[must_use]
    pub fn html(s: impl Into<String>) -> Self {
        Self::Html(s.into())
    }
}
