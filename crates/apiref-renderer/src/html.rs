//! HTML collaborators used by the overload renderer.
//!
//! The renderer never formats code or wires anchors itself. It hands the
//! signature to a [`CodePresenter`] and the row label to a
//! [`HeadingPresenter`], so a site can swap in a syntax highlighter or its own
//! heading markup without touching the row logic.

use std::fmt::Write;

/// Presents a block of source code.
pub trait CodePresenter: Send + Sync {
    /// Append a read-only code display for `code` to `out`.
    ///
    /// `code` is passed verbatim; the presenter is responsible for escaping.
    fn code_block(&self, language: &str, code: &str, out: &mut String);
}

/// Presents a heading that is both a visible label and a link target.
pub trait HeadingPresenter: Send + Sync {
    /// Append a heading of `level` with element id `id` and text `label`.
    fn heading(&self, level: u8, id: &str, label: &str, out: &mut String);
}

/// Plain `<pre><code>` blocks with a `language-*` class for client-side
/// highlighters.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlCodeBlock;

impl CodePresenter for HtmlCodeBlock {
    fn code_block(&self, language: &str, code: &str, out: &mut String) {
        if language.is_empty() {
            write!(out, "<pre><code>{}</code></pre>", escape_html(code)).unwrap();
        } else {
            write!(
                out,
                r#"<pre><code class="language-{}">{}</code></pre>"#,
                escape_html(language),
                escape_html(code)
            )
            .unwrap();
        }
    }
}

/// Headings with an `id` and a trailing `#` self-link.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnchoredHeading;

impl HeadingPresenter for AnchoredHeading {
    fn heading(&self, level: u8, id: &str, label: &str, out: &mut String) {
        let level = level.clamp(1, 6);
        let id = escape_html(id);
        let label = escape_html(label);
        write!(
            out,
            r##"<h{level} id="{id}" class="anchor">{label}<a class="hash-link" href="#{id}" aria-label="Direct link to {label}">#</a></h{level}>"##
        )
        .unwrap();
    }
}

/// Escape text for use in HTML content and attribute values.
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}
