//! Directive argument parsing.
//!
//! Parses the `[content]{#id .class key="value"}` syntax from directives.

use std::collections::HashMap;

/// Parsed arguments from directive syntax.
///
/// Represents the content and attributes extracted from a directive:
/// `::name[content]{#id .class key="value"}`
///
/// # Example
///
/// ```
/// use apiref_renderer::directive::DirectiveArgs;
///
/// let args = DirectiveArgs::parse("size_type size() const noexcept;", "num=3 standard=17 .compact");
/// assert_eq!(args.content, "size_type size() const noexcept;");
/// assert_eq!(args.get("num"), Some("3"));
/// assert_eq!(args.get("standard"), Some("17"));
/// assert_eq!(args.classes, vec!["compact"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectiveArgs {
    /// Content from brackets: `[content]` (empty string if not provided).
    pub content: String,
    /// ID from attributes: `{#id}`.
    pub id: Option<String>,
    /// Classes from attributes: `{.class1 .class2}`.
    pub classes: Vec<String>,
    /// Key-value attributes: `{key="value"}`.
    pub attrs: HashMap<String, String>,
}

impl DirectiveArgs {
    /// Parse content and attributes string into structured arguments.
    ///
    /// `attrs_str` is the text between the braces, without the braces.
    #[must_use]
    pub fn parse(content: &str, attrs_str: &str) -> Self {
        let mut args = Self {
            content: content.to_owned(),
            ..Default::default()
        };

        let mut remaining = attrs_str.trim();

        while !remaining.is_empty() {
            remaining = remaining.trim_start();

            if let Some(rest) = remaining.strip_prefix('#') {
                let (token, tail) = split_selector(rest);
                args.id = Some(token.to_owned());
                remaining = tail;
            } else if let Some(rest) = remaining.strip_prefix('.') {
                let (token, tail) = split_selector(rest);
                args.classes.push(token.to_owned());
                remaining = tail;
            } else if let Some((key, value, rest)) = parse_key_value(remaining) {
                args.attrs.insert(key.to_owned(), value.to_owned());
                remaining = rest;
            } else {
                // Skip one unrecognized character
                let skip = remaining.chars().next().map_or(0, char::len_utf8);
                remaining = &remaining[skip..];
            }
        }

        args
    }

    /// Get an attribute value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    /// Get an attribute value by key, treating blank values as absent.
    ///
    /// ```
    /// use apiref_renderer::directive::DirectiveArgs;
    ///
    /// let args = DirectiveArgs::parse("", r#"standard="" num=" 2 ""#);
    /// assert_eq!(args.get_trimmed("standard"), None);
    /// assert_eq!(args.get_trimmed("num"), Some("2"));
    /// ```
    #[must_use]
    pub fn get_trimmed(&self, key: &str) -> Option<&str> {
        self.get(key).map(str::trim).filter(|v| !v.is_empty())
    }

    /// Reconstruct the original syntax string `[content]{attrs}`.
    ///
    /// Used for pass-through when a directive is not handled.
    #[must_use]
    pub fn to_syntax(&self) -> String {
        let mut result = String::new();

        if !self.content.is_empty() {
            result.push('[');
            result.push_str(&self.content);
            result.push(']');
        }

        let mut attrs_parts = Vec::new();

        if let Some(id) = &self.id {
            attrs_parts.push(format!("#{id}"));
        }

        for class in &self.classes {
            attrs_parts.push(format!(".{class}"));
        }

        // Sorted for deterministic output
        let mut keys: Vec<_> = self.attrs.keys().collect();
        keys.sort();
        for key in keys {
            let escaped = self.attrs[key].replace('"', r#"\""#);
            attrs_parts.push(format!(r#"{key}="{escaped}""#));
        }

        if !attrs_parts.is_empty() {
            result.push('{');
            result.push_str(&attrs_parts.join(" "));
            result.push('}');
        }

        result
    }
}

/// Split an `#id` or `.class` token from the rest of the attribute string.
fn split_selector(s: &str) -> (&str, &str) {
    let end = s
        .find(|c: char| c.is_whitespace() || c == '.' || c == '#')
        .unwrap_or(s.len());
    s.split_at(end)
}

/// Parse a key-value pair from the attributes string.
///
/// Supports: `key="value"`, `key='value'`, `key=value`
fn parse_key_value(s: &str) -> Option<(&str, &str, &str)> {
    let (key, after_eq) = s.split_once('=')?;
    let key = key.trim();

    if key.is_empty() || key.contains(char::is_whitespace) {
        return None;
    }

    for quote in ['"', '\''] {
        if let Some(stripped) = after_eq.strip_prefix(quote) {
            let (value, rest) = stripped.split_once(quote)?;
            return Some((key, value, rest));
        }
    }

    let end = after_eq.find(char::is_whitespace).unwrap_or(after_eq.len());
    let (value, rest) = after_eq.split_at(end);
    Some((key, value, rest))
}
