use std::borrow::Cow;

/// Escapes text so it can be placed inside element content or a quoted
/// attribute value. Covers `&`, `<`, `>`, `"` and `'`.
///
/// Returns the input unchanged (borrowed) when nothing needs escaping.
pub fn escape_text(text: &str) -> Cow<'_, str> {
    html_escape::encode_quoted_attribute(text)
}
