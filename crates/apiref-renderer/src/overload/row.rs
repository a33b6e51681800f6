//! Overload rows: the three-cell structure and its HTML rendering.

use std::fmt::Write;
use std::sync::Arc;

use super::model::{OverloadDescriptor, StandardVersion, anchor_for, badge_text};
use super::theme::OverloadTheme;
use crate::html::{AnchoredHeading, CodePresenter, HeadingPresenter, HtmlCodeBlock, escape_html};

/// One row of an overload table, before rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverloadRow {
    /// Text of the label cell.
    pub label: String,
    /// Id of the label heading.
    pub anchor: String,
    /// Declaration shown in the code cell, verbatim.
    pub code: String,
    /// Text of the badge cell, if the overload carries a standard.
    pub badge: Option<String>,
}

impl OverloadRow {
    /// Derive the row for one descriptor.
    #[must_use]
    pub fn from_descriptor(descriptor: &OverloadDescriptor) -> Self {
        Self {
            label: descriptor.number.to_string(),
            anchor: anchor_for(&descriptor.number),
            code: descriptor.signature.clone(),
            badge: descriptor.standard.as_ref().map(badge_text),
        }
    }
}

/// Renders overload rows and tables to HTML.
///
/// Stateless: rendering the same input twice gives the same output, and
/// rows may be rendered in any order or from several threads.
///
/// # Example
///
/// ```
/// use apiref_renderer::overload::{OverloadDescriptor, OverloadRenderer};
///
/// let renderer = OverloadRenderer::default();
/// let html = renderer.render_descriptor(
///     &OverloadDescriptor::new(4u32, "basic_fixed_string(const basic_fixed_string&) = default;")
///         .with_standard("17"),
/// );
/// assert!(html.contains(r#"id="overload4""#));
/// assert!(html.contains(">since C++17</span>"));
/// ```
#[derive(Clone)]
pub struct OverloadRenderer {
    theme: OverloadTheme,
    code: Arc<dyn CodePresenter>,
    heading: Arc<dyn HeadingPresenter>,
}

impl Default for OverloadRenderer {
    fn default() -> Self {
        Self::new(OverloadTheme::default())
    }
}

impl OverloadRenderer {
    /// Create a renderer with the default HTML collaborators.
    #[must_use]
    pub fn new(theme: OverloadTheme) -> Self {
        Self {
            theme,
            code: Arc::new(HtmlCodeBlock),
            heading: Arc::new(AnchoredHeading),
        }
    }

    /// Use a different code presenter (e.g. a syntax highlighter).
    #[must_use]
    pub fn with_code_presenter(mut self, presenter: impl CodePresenter + 'static) -> Self {
        self.code = Arc::new(presenter);
        self
    }

    /// Use a different heading presenter.
    #[must_use]
    pub fn with_heading_presenter(mut self, presenter: impl HeadingPresenter + 'static) -> Self {
        self.heading = Arc::new(presenter);
        self
    }

    /// The theme this renderer styles badges with.
    #[must_use]
    pub fn theme(&self) -> &OverloadTheme {
        &self.theme
    }

    /// Render one row: label cell, code cell, badge cell.
    #[must_use]
    pub fn render_row(&self, row: &OverloadRow) -> String {
        let mut out = String::from(r#"<tr class="overload"><td class="overload-number">"#);
        self.heading
            .heading(self.theme.label_level, &row.anchor, &row.label, &mut out);
        out.push_str(r#"</td><td class="overload-code">"#);
        self.code.code_block(&self.theme.language, &row.code, &mut out);
        out.push_str(r#"</td><td class="overload-standard">"#);
        if let Some(badge) = &row.badge {
            self.push_badge(badge, &mut out);
        }
        out.push_str("</td></tr>");
        out
    }

    /// Render the row of one descriptor.
    #[must_use]
    pub fn render_descriptor(&self, descriptor: &OverloadDescriptor) -> String {
        self.render_row(&OverloadRow::from_descriptor(descriptor))
    }

    /// Render a complete overload table with rows in input order.
    #[must_use]
    pub fn render_table(&self, descriptors: &[OverloadDescriptor]) -> String {
        let mut out = String::from(TABLE_OPEN);
        for descriptor in descriptors {
            out.push_str(&self.render_descriptor(descriptor));
        }
        out.push_str(TABLE_CLOSE);
        out
    }

    /// Render a standalone badge for a standard revision.
    #[must_use]
    pub fn badge_html(&self, standard: &StandardVersion) -> String {
        let mut out = String::new();
        self.push_badge(&badge_text(standard), &mut out);
        out
    }

    fn push_badge(&self, text: &str, out: &mut String) {
        write!(
            out,
            r#"<span class="overload-badge" style="{}">{}</span>"#,
            escape_html(&self.theme.badge_style()),
            escape_html(text)
        )
        .unwrap();
    }
}

/// Opening markup of an overload table.
pub const TABLE_OPEN: &str = r#"<table class="overloads"><tbody>"#;
/// Closing markup of an overload table.
pub const TABLE_CLOSE: &str = "</tbody></table>";

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BADGE_STYLE: &str =
        "background-color: #00a550; border-radius: 5px; color: #fff; padding: 0.3rem;";

    #[test]
    fn test_row_without_standard() {
        let row = OverloadRow::from_descriptor(&OverloadDescriptor::new(
            1u32,
            "basic_fixed_string() noexcept;",
        ));
        assert_eq!(
            row,
            OverloadRow {
                label: "1".to_owned(),
                anchor: "overload1".to_owned(),
                code: "basic_fixed_string() noexcept;".to_owned(),
                badge: None,
            }
        );

        let html = OverloadRenderer::default().render_row(&row);
        assert_eq!(
            html,
            concat!(
                r#"<tr class="overload"><td class="overload-number">"#,
                r##"<h6 id="overload1" class="anchor">1<a class="hash-link" href="#overload1" aria-label="Direct link to 1">#</a></h6>"##,
                r#"</td><td class="overload-code">"#,
                r#"<pre><code class="language-cpp">basic_fixed_string() noexcept;</code></pre>"#,
                r#"</td><td class="overload-standard"></td></tr>"#,
            )
        );
    }

    #[test]
    fn test_row_with_standard() {
        let descriptor =
            OverloadDescriptor::new(4u32, "basic_fixed_string(const basic_fixed_string&) = default;")
                .with_standard("17");
        let row = OverloadRow::from_descriptor(&descriptor);
        assert_eq!(row.label, "4");
        assert_eq!(row.anchor, "overload4");
        assert_eq!(row.badge.as_deref(), Some("since C++17"));

        let html = OverloadRenderer::default().render_row(&row);
        assert!(html.ends_with(&format!(
            r#"<td class="overload-standard"><span class="overload-badge" style="{BADGE_STYLE}">since C++17</span></td></tr>"#
        )));
        assert!(html.contains("basic_fixed_string(const basic_fixed_string&amp;) = default;"));
    }

    #[test]
    fn test_empty_code_renders_empty_block() {
        let html = OverloadRenderer::default().render_descriptor(&OverloadDescriptor::new(2u32, ""));
        assert!(html.contains(r#"<pre><code class="language-cpp"></code></pre>"#));
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let renderer = OverloadRenderer::default();
        let descriptor = OverloadDescriptor::new(3u32, "void swap(basic_fixed_string&);");
        assert_eq!(
            renderer.render_descriptor(&descriptor),
            renderer.render_descriptor(&descriptor)
        );
    }

    #[test]
    fn test_table_preserves_order() {
        let descriptors = vec![
            OverloadDescriptor::new(3u32, "c();"),
            OverloadDescriptor::new(1u32, "a();"),
            OverloadDescriptor::new(2u32, "b();"),
        ];
        let html = OverloadRenderer::default().render_table(&descriptors);

        assert!(html.starts_with(TABLE_OPEN));
        assert!(html.ends_with(TABLE_CLOSE));
        let positions: Vec<usize> = ["overload3", "overload1", "overload2"]
            .iter()
            .map(|anchor| html.find(&format!(r#"id="{anchor}""#)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_table_equals_concatenated_rows() {
        let renderer = OverloadRenderer::default();
        let descriptors = vec![
            OverloadDescriptor::new(1u32, "a();"),
            OverloadDescriptor::new(2u32, "b();").with_standard("20"),
        ];
        let rows: String = descriptors
            .iter()
            .map(|d| renderer.render_descriptor(d))
            .collect();
        assert_eq!(
            renderer.render_table(&descriptors),
            format!("{TABLE_OPEN}{rows}{TABLE_CLOSE}")
        );
    }

    #[test]
    fn test_theme_drives_badge_and_language() {
        let theme = OverloadTheme {
            badge_background: "#1877f2".to_owned(),
            language: "c++".to_owned(),
            label_level: 5,
            ..OverloadTheme::default()
        };
        let renderer = OverloadRenderer::new(theme);
        let html = renderer.render_descriptor(&OverloadDescriptor::new(1u32, "f();").with_standard("23"));

        assert!(html.contains("background-color: #1877f2;"));
        assert!(html.contains(r#"class="language-c++""#));
        assert!(html.contains("<h5 "));
    }

    #[test]
    fn test_custom_presenters() {
        struct Plain;

        impl CodePresenter for Plain {
            fn code_block(&self, language: &str, code: &str, out: &mut String) {
                out.push_str(&format!("[{language}:{code}]"));
            }
        }

        impl HeadingPresenter for Plain {
            fn heading(&self, level: u8, id: &str, label: &str, out: &mut String) {
                out.push_str(&format!("[h{level}#{id}:{label}]"));
            }
        }

        let renderer = OverloadRenderer::default()
            .with_code_presenter(Plain)
            .with_heading_presenter(Plain);
        let html = renderer.render_descriptor(&OverloadDescriptor::new(1u32, "f();"));

        assert_eq!(
            html,
            r#"<tr class="overload"><td class="overload-number">[h6#overload1:1]</td><td class="overload-code">[cpp:f();]</td><td class="overload-standard"></td></tr>"#
        );
    }

    #[test]
    fn test_badge_html() {
        let renderer = OverloadRenderer::default();
        let standard = StandardVersion::new("20").unwrap();
        assert_eq!(
            renderer.badge_html(&standard),
            format!(r#"<span class="overload-badge" style="{BADGE_STYLE}">since C++20</span>"#)
        );
    }
}
