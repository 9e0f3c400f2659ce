//! XML escaping for element text content.

use std::borrow::Cow;

/// Escapes `&`, `<`, and `>` for use as XML text content.
///
/// Returns the input unchanged (borrowed) when it contains none of the
/// special characters. Quotes are left alone: values written by this
/// crate never appear in attribute position.
///
/// # Example
///
/// ```rust
/// use sitemapper::escape_text;
///
/// assert_eq!(escape_text("a&b"), "a&amp;b");
/// assert_eq!(escape_text("plain"), "plain");
/// ```
pub fn escape_text(input: &str) -> Cow<'_, str> {
    let Some(first) = input.find(['&', '<', '>']) else {
        return Cow::Borrowed(input);
    };

    let mut escaped = String::with_capacity(input.len() + 8);
    escaped.push_str(&input[..first]);
    for c in input[first..].chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            c => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}
