//! Directive syntax parsing.
//!
//! Parses `CommonMark` directive syntax: `:name`, `::name`, `:::name`

use super::DirectiveArgs;

/// Parsed directive from a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ParsedDirective {
    /// Inline directive: `:name[content]{attrs}`
    Inline { name: String, args: DirectiveArgs },
    /// Leaf directive: `::name[content]{attrs}`
    Leaf { name: String, args: DirectiveArgs },
    /// Container opening: `:::name[content]{attrs}`
    ContainerStart { name: String, args: DirectiveArgs },
    /// Container closing: `:::`
    ContainerEnd { colon_count: usize },
}

/// Find the first inline or leaf directive in a line.
///
/// Returns the directive with its byte span, or `None` if the line holds none.
/// Colon runs that don't introduce a valid directive (`std::size_t`, `a: b`)
/// are skipped so a later directive on the same line is still found. Text
/// inside backtick code spans is never a directive.
pub(crate) fn parse_line(line: &str) -> Option<(ParsedDirective, usize, usize)> {
    let code_spans = code_spans(line);
    let mut search_from = 0;

    while let Some(offset) = line[search_from..].find(':') {
        let start = search_from + offset;

        if let Some(&(_, span_end)) = code_spans
            .iter()
            .find(|&&(span_start, span_end)| span_start < start && start < span_end)
        {
            search_from = span_end;
            continue;
        }

        let colon_count = line[start..].chars().take_while(|&c| c == ':').count();
        let after_colons = start + colon_count;

        // A directive must not be glued to a preceding word (`std::move`)
        let glued = line[..start]
            .chars()
            .next_back()
            .is_some_and(|c| c.is_alphanumeric() || c == '_');

        if !glued
            && colon_count <= 2
            && let Some((directive, end)) = parse_at(line, after_colons, colon_count)
        {
            return Some((directive, start, end));
        }

        search_from = after_colons;
    }

    None
}

/// Byte ranges of the backtick code spans on a line, delimiters included.
///
/// A run of N backticks opens a span that closes at the next run of exactly N
/// backticks; a run with no closing match is literal text.
fn code_spans(line: &str) -> Vec<(usize, usize)> {
    let bytes = line.as_bytes();
    let run_at = |pos: usize| bytes[pos..].iter().take_while(|&&b| b == b'`').count();

    let mut spans = Vec::new();
    let mut pos = 0;
    while let Some(offset) = line[pos..].find('`') {
        let open = pos + offset;
        let len = run_at(open);
        let mut cursor = open + len;
        pos = cursor;

        while let Some(offset) = line[cursor..].find('`') {
            let close = cursor + offset;
            let close_len = run_at(close);
            if close_len == len {
                spans.push((open, close + close_len));
                pos = close + close_len;
                break;
            }
            cursor = close + close_len;
        }
    }
    spans
}

/// Parse the directive body that follows `colon_count` colons at `pos`.
fn parse_at(line: &str, mut pos: usize, colon_count: usize) -> Option<(ParsedDirective, usize)> {
    let after_colons = &line[pos..];

    // Name ends at [, {, or whitespace
    let name_end = after_colons
        .find(|c: char| c == '[' || c == '{' || c.is_whitespace())
        .unwrap_or(after_colons.len());

    let name = &after_colons[..name_end];
    if !is_valid_directive_name(name) {
        return None;
    }
    pos += name_end;

    let (content, content_consumed) = parse_brackets(&line[pos..]);
    // Inline directives need brackets so prose like `note:see` stays prose
    if colon_count == 1 && content_consumed == 0 {
        return None;
    }
    pos += content_consumed;

    let (attrs_str, attrs_consumed) = parse_braces(&line[pos..]);
    pos += attrs_consumed;

    let args = DirectiveArgs::parse(&content, &attrs_str);
    let name = name.to_owned();

    let directive = if colon_count == 1 {
        ParsedDirective::Inline { name, args }
    } else {
        ParsedDirective::Leaf { name, args }
    };

    Some((directive, pos))
}

/// Check if a name is a valid directive name.
///
/// Valid names start with a letter and contain only alphanumeric characters,
/// hyphens, and underscores.
fn is_valid_directive_name(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_alphabetic)
        && name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
}

/// Parse content from brackets: `[content]`, honouring nested brackets.
///
/// Returns (content, `bytes_consumed`).
fn parse_brackets(s: &str) -> (String, usize) {
    parse_delimited(s, '[', ']')
}

/// Parse attributes from braces: `{#id .class key="value"}`
///
/// Returns (`attrs_str` without braces, `bytes_consumed`).
fn parse_braces(s: &str) -> (String, usize) {
    parse_delimited(s, '{', '}')
}

fn parse_delimited(s: &str, open: char, close: char) -> (String, usize) {
    if !s.starts_with(open) {
        return (String::new(), 0);
    }

    let mut depth = 0usize;
    for (i, c) in s.char_indices() {
        if c == open {
            depth += 1;
        } else if c == close {
            depth -= 1;
            if depth == 0 {
                return (s[1..i].to_owned(), i + 1);
            }
        }
    }

    (String::new(), 0)
}

/// Parse a whole line for a container directive.
///
/// Returns `None` if the line is not a container directive.
pub(crate) fn parse_container_line(line: &str) -> Option<ParsedDirective> {
    let trimmed = line.trim();

    if !trimmed.starts_with(":::") {
        return None;
    }

    let colon_count = trimmed.chars().take_while(|&c| c == ':').count();
    let after_colons = trimmed[colon_count..].trim();

    if after_colons.is_empty() {
        return Some(ParsedDirective::ContainerEnd { colon_count });
    }

    let name_end = after_colons
        .find(|c: char| c == '[' || c == '{' || c.is_whitespace())
        .unwrap_or(after_colons.len());

    let name = &after_colons[..name_end];
    if !is_valid_directive_name(name) {
        return None;
    }

    let after_name = after_colons[name_end..].trim_start();
    let (content, content_consumed) = parse_brackets(after_name);
    let (attrs_str, _) = parse_braces(after_name[content_consumed..].trim_start());

    Some(ParsedDirective::ContainerStart {
        name: name.to_owned(),
        args: DirectiveArgs::parse(&content, &attrs_str),
    })
}
