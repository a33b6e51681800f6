//! Single-pass string replacement for post-processing.

/// Collects string replacements registered by directive handlers.
///
/// Handlers only register `(from, to)` pairs in
/// [`post_process`](super::LeafDirective::post_process); the processor
/// applies them once after the markdown has been rendered.
///
/// # Example
///
/// ```
/// use apiref_renderer::directive::Replacements;
///
/// let mut html = r#"<apiref-overload data-id="0">"#.to_string();
/// let mut replacements = Replacements::new();
/// replacements.add(r#"<apiref-overload data-id="0">"#, "<tr></tr>");
/// replacements.apply(&mut html);
///
/// assert_eq!(html, "<tr></tr>");
/// ```
#[derive(Debug, Default)]
pub struct Replacements {
    items: Vec<(String, String)>,
}

impl Replacements {
    /// Create a new empty replacements collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new replacements collector with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Register a replacement: all occurrences of `from` will be replaced with `to`.
    ///
    /// Replacements are applied in the order they are added.
    pub fn add(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.items.push((from.into(), to.into()));
    }

    /// Apply all registered replacements, consuming the collector.
    pub fn apply(self, html: &mut String) {
        for (from, to) in self.items {
            if html.contains(&from) {
                *html = html.replace(&from, &to);
            }
        }
    }

    /// Check if there are any replacements registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the number of registered replacements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }
}
