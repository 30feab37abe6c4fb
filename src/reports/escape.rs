//! Escaping for HTML and Markdown output.
//!
//! Titles, descriptions and path templates come straight from the scored
//! document, so they are escaped before being embedded in a report.

/// Replace characters according to `map`, keeping everything else.
fn escape_with(s: &str, map: impl Fn(char) -> Option<&'static str>) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match map(c) {
            Some(replacement) => out.push_str(replacement),
            None => out.push(c),
        }
    }
    out
}

const fn html_entity(c: char) -> Option<&'static str> {
    match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#x27;"),
        _ => None,
    }
}

/// Escape text for HTML element content.
///
/// ```
/// use api_scorer::reports::escape::escape_html;
///
/// assert_eq!(escape_html("<b>\"x\" & 'y'</b>"),
///     "&lt;b&gt;&quot;x&quot; &amp; &#x27;y&#x27;&lt;/b&gt;");
/// ```
pub fn escape_html(s: &str) -> String {
    escape_with(s, html_entity)
}

/// Escape text for a quoted HTML attribute value; whitespace controls are
/// encoded as well.
pub fn escape_html_attr(s: &str) -> String {
    escape_with(s, |c| match c {
        '\n' => Some("&#10;"),
        '\r' => Some("&#13;"),
        '\t' => Some("&#9;"),
        _ => html_entity(c),
    })
}

/// Escape text for a Markdown table cell.
///
/// ```
/// use api_scorer::reports::escape::escape_markdown_table;
///
/// assert_eq!(escape_markdown_table("a | b"), "a \\| b");
/// assert_eq!(escape_markdown_table("line1\nline2"), "line1 line2");
/// ```
pub fn escape_markdown_table(s: &str) -> String {
    escape_with(s, |c| match c {
        '|' => Some("\\|"),
        '`' => Some("\\`"),
        '[' => Some("\\["),
        ']' => Some("\\]"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '\n' => Some(" "),
        '\r' => Some(""),
        _ => None,
    })
}

/// Escape text for inline Markdown (headings, list items).
pub fn escape_markdown_inline(s: &str) -> String {
    escape_with(s, |c| match c {
        '*' => Some("\\*"),
        '_' => Some("\\_"),
        '`' => Some("\\`"),
        '[' => Some("\\["),
        ']' => Some("\\]"),
        '#' => Some("\\#"),
        '|' => Some("\\|"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '\n' => Some(" "),
        '\r' => Some(""),
        _ => None,
    })
}

/// Wrap text in a Markdown code span.
///
/// Code span content is literal, so instead of escaping, the fence is made
/// one backtick longer than the longest backtick run in the text.
///
/// ```
/// use api_scorer::reports::escape::markdown_code_span;
///
/// assert_eq!(markdown_code_span("specs/api.yaml"), "`specs/api.yaml`");
/// assert_eq!(markdown_code_span("a`b"), "``a`b``");
/// ```
pub fn markdown_code_span(s: &str) -> String {
    let text = escape_with(s, |c| match c {
        '\n' => Some(" "),
        '\r' => Some(""),
        _ => None,
    });

    let mut longest = 0;
    let mut run = 0;
    for c in text.chars() {
        if c == '`' {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }

    // One space on each side is stripped by renderers when both are present.
    let padded = text.starts_with('`')
        || text.ends_with('`')
        || (text.starts_with(' ') && text.ends_with(' ') && !text.trim().is_empty());
    let pad = if padded { " " } else { "" };
    let fence = "`".repeat(longest + 1);
    format!("{fence}{pad}{text}{pad}{fence}")
}
