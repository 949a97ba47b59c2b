//! Common utility functions shared across the codebase.

/// Clamp a byte range to `text`, moving both ends onto char boundaries.
///
/// The start moves forward and the end moves backward, so the returned range
/// never splits a multi-byte character. An empty range is returned when the
/// adjusted start passes the end.
pub fn window_bounds(text: &str, start: usize, end: usize) -> (usize, usize) {
    let mut start = start.min(text.len());
    let mut end = end.min(text.len());
    while !text.is_char_boundary(start) {
        start += 1;
    }
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    (start, end.max(start))
}

/// Slice `text[start..end]` after clamping with [`window_bounds`].
///
/// ```
/// use i18nscan::utils::window;
///
/// assert_eq!(window("hello", 1, 3), "el");
/// assert_eq!(window("hello", 3, 100), "lo");
/// assert_eq!(window("héllo", 2, 4), "l");
/// ```
pub fn window(text: &str, start: usize, end: usize) -> &str {
    let (start, end) = window_bounds(text, start, end);
    &text[start..end]
}

/// Build a regex alternation body from plain names, escaping each one.
///
/// Names that start with a word character get a leading `\b` so `t` does not
/// match inside `list`.
pub fn word_alternation(names: &[String]) -> String {
    names
        .iter()
        .map(|name| {
            let escaped = regex::escape(name);
            if name.starts_with(|c: char| c.is_alphanumeric() || c == '_') {
                format!(r"\b{}", escaped)
            } else {
                escaped
            }
        })
        .collect::<Vec<_>>()
        .join("|")
}
