use regex::Regex;

static BOLD_TAG: once_cell::sync::Lazy<Regex> =
    once_cell::sync::Lazy::new(|| Regex::new(r"(?s)\[b\](.*?)\[/b\]").unwrap());

static ITALIC_TAG: once_cell::sync::Lazy<Regex> =
    once_cell::sync::Lazy::new(|| Regex::new(r"(?s)\[i\](.*?)\[/i\]").unwrap());

static QUOTE_TAG: once_cell::sync::Lazy<Regex> =
    once_cell::sync::Lazy::new(|| Regex::new(r"(?s)\[quote\](.*?)\[/quote\]").unwrap());

/// Renders raw BBCode into display markup.
///
/// Input is HTML-escaped first, then the fixed tag set is substituted,
/// then literal newlines become `<br>`. Everything else passes through
/// as literal text.
pub fn render_bbcode(input: &str) -> String
{
    let escaped = input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;");
    let bolded = BOLD_TAG.replace_all(&escaped, "<strong>${1}</strong>");
    let italicized = ITALIC_TAG.replace_all(&bolded, "<em>${1}</em>");
    let quoted = QUOTE_TAG.replace_all(&italicized, "<blockquote>${1}</blockquote>");
    quoted.replace('\n', "<br>")
}
