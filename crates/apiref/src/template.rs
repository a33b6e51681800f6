//! HTML document wrapper for rendered pages.

use std::fmt::Write;

use apiref_renderer::escape_html;

/// Everything needed to wrap a page body in a standalone document.
pub(crate) struct PageData<'a> {
    pub title: &'a str,
    pub html_content: &'a str,
    pub stylesheet: &'a str,
}

/// Render a complete HTML document.
pub(crate) fn render_page(page: &PageData<'_>) -> String {
    let mut html = String::with_capacity(page.html_content.len() + page.stylesheet.len() + 512);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(html, "<title>{}</title>", escape_html(page.title));
    html.push_str("<style>\n");
    html.push_str(page.stylesheet);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n<main>\n<article>\n");
    html.push_str(page.html_content);
    if !page.html_content.ends_with('\n') {
        html.push('\n');
    }
    html.push_str("</article>\n</main>\n</body>\n</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page<'a>(title: &'a str, html_content: &'a str) -> PageData<'a> {
        PageData {
            title,
            html_content,
            stylesheet: "table.overloads { width: 100%; }\n",
        }
    }

    #[test]
    fn render_page_contains_content() {
        let html = render_page(&page("at", "<p>Returns a reference.</p>\n"));

        assert!(html.starts_with("<!DOCTYPE html>\n"));
        assert!(html.contains("<title>at</title>"));
        assert!(html.contains("<article>\n<p>Returns a reference.</p>\n</article>"));
        assert!(html.contains("<style>\ntable.overloads { width: 100%; }\n</style>"));
    }

    #[test]
    fn render_page_escapes_title() {
        let html = render_page(&page("operator<=>", ""));
        assert!(html.contains("<title>operator&lt;=&gt;</title>"));
    }
}
