//! Source rewriting for extracted text.

/// Words kept in a generated key.
const MAX_SLUG_WORDS: usize = 4;

/// Translation call for a key: `i18next.t('default.save_changes')`.
pub fn build_replacement(function_name: &str, namespace: &str, key: &str) -> String {
    if namespace.is_empty() {
        format!("{}('{}')", function_name, key)
    } else {
        format!("{}('{}.{}')", function_name, namespace, key)
    }
}

/// Strip one leading and one trailing quote character.
pub fn unquote(text: &str) -> &str {
    let text = text
        .strip_prefix(['\'', '"', '`'])
        .unwrap_or(text);
    text.strip_suffix(['\'', '"', '`']).unwrap_or(text)
}

fn is_sentence_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '+' || c == '.' || c.is_whitespace()
}

/// Byte range of the sentence around a 1-based character column.
///
/// A sentence is a run of word characters, whitespace, `+` and `.`;
/// surrounding whitespace is not part of it. Returns `None` when the column
/// is not inside such a run.
pub fn sentence_at(line: &str, col: usize) -> Option<(usize, usize)> {
    let chars: Vec<(usize, char)> = line.char_indices().collect();
    let cursor = col.saturating_sub(1).min(chars.len());

    let mut start = cursor;
    while start > 0 && is_sentence_char(chars[start - 1].1) {
        start -= 1;
    }
    let mut end = cursor;
    while end < chars.len() && is_sentence_char(chars[end].1) {
        end += 1;
    }

    while start < end && chars[start].1.is_whitespace() {
        start += 1;
    }
    while end > start && chars[end - 1].1.is_whitespace() {
        end -= 1;
    }

    if start == end {
        return None;
    }
    let byte_end = chars.get(end).map(|(i, _)| *i).unwrap_or(line.len());
    Some((chars[start].0, byte_end))
}

/// Replace the first occurrence of `text` in `line` with `replacement`.
///
/// Quotes directly around the text are replaced with it. Markup text (next
/// to `>` or `<`, or alone on its line without quotes) is wrapped in `{}`.
/// Returns `None` if `text` is not on the line.
pub fn replace_in_line(line: &str, text: &str, replacement: &str) -> Option<String> {
    if text.is_empty() {
        return None;
    }
    let found = line.find(text)?;
    let bytes = line.as_bytes();
    let is_quote = |b: u8| matches!(b, b'"' | b'\'' | b'`');

    let mut start = found;
    let mut end = found + text.len();
    let mut quoted = false;
    if start > 0 && is_quote(bytes[start - 1]) {
        start -= 1;
        quoted = true;
    }
    if end < bytes.len() && is_quote(bytes[end]) {
        end += 1;
        quoted = true;
    }

    let before = line[..start].trim_end();
    let after = line[end..].trim_start();
    let is_markup = before.ends_with('>')
        || after.starts_with('<')
        || (!quoted && before.is_empty() && after.is_empty());

    let replacement = if is_markup {
        format!("{{{}}}", replacement)
    } else {
        replacement.to_string()
    };

    Some(format!("{}{}{}", &line[..start], replacement, &line[end..]))
}

/// Key generated from the text itself: lower-case words joined by `_`.
///
/// ```
/// use i18nscan::locale::slug_key;
///
/// assert_eq!(slug_key("Save changes!"), "save_changes");
/// assert_eq!(slug_key("Are you sure you want to leave?"), "are_you_sure_you");
/// ```
pub fn slug_key(text: &str) -> String {
    let words: Vec<String> = text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .take(MAX_SLUG_WORDS)
        .map(|w| w.to_lowercase())
        .collect();
    if words.is_empty() {
        "text".to_string()
    } else {
        words.join("_")
    }
}

/// Clean a suggested key: no quotes, no surrounding whitespace, spaces
/// become `_`. Falls back to `slug_key(text)` when nothing is left.
pub fn sanitize_key(suggested: &str, text: &str) -> String {
    let key = unquote(suggested.trim()).trim();
    let key: String = key
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_");
    if key.is_empty() || key.split('.').any(str::is_empty) {
        slug_key(text)
    } else {
        key
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::locale::replace::*;

    #[test]
    fn test_build_replacement() {
        assert_eq!(
            build_replacement("i18next.t", "default", "save"),
            "i18next.t('default.save')"
        );
        assert_eq!(build_replacement("t", "", "save"), "t('save')");
    }

    #[test]
    fn test_unquote() {
        assert_eq!(unquote("'Save'"), "Save");
        assert_eq!(unquote("\"Save\""), "Save");
        assert_eq!(unquote("Save"), "Save");
        assert_eq!(unquote("'Save"), "Save");
    }

    #[test]
    fn test_replace_quoted_text() {
        let line = "  const title = 'Welcome back';";
        let replaced = replace_in_line(line, "Welcome back", "i18next.t('default.welcome_back')");
        assert_eq!(
            replaced.as_deref(),
            Some("  const title = i18next.t('default.welcome_back');")
        );
    }

    #[test]
    fn test_replace_tag_text_wraps_in_braces() {
        let line = "<h1>Hello, World!</h1>";
        let replaced = replace_in_line(line, "Hello, World!", "t('default.hello')");
        assert_eq!(replaced.as_deref(), Some("<h1>{t('default.hello')}</h1>"));
    }

    #[test]
    fn test_replace_spaced_tag_text_wraps_in_braces() {
        let line = "<p> Hello </p>";
        let replaced = replace_in_line(line, "Hello", "t('a.b')");
        assert_eq!(replaced.as_deref(), Some("<p> {t('a.b')} </p>"));
    }

    #[test]
    fn test_replace_standalone_line_text_wraps_in_braces() {
        let line = "    Click me";
        let replaced = replace_in_line(line, "Click me", "t('a.click_me')");
        assert_eq!(replaced.as_deref(), Some("    {t('a.click_me')}"));
    }

    #[test]
    fn test_replace_missing_text() {
        assert_eq!(replace_in_line("const a = 1;", "Hello", "t('x')"), None);
    }

    #[test]
    fn test_sentence_at() {
        let line = "const msg = 'Hello there.';";
        let (start, end) = sentence_at(line, 16).unwrap();
        assert_eq!(&line[start..end], "Hello there.");
    }

    #[test]
    fn test_sentence_at_non_sentence_char() {
        assert_eq!(sentence_at("a = ';'", 6), None);
    }

    #[test]
    fn test_sentence_at_multibyte() {
        let line = "<p>Überprüfen Sie</p>";
        let (start, end) = sentence_at(line, 6).unwrap();
        assert_eq!(&line[start..end], "Überprüfen Sie");
    }

    #[test]
    fn test_slug_key() {
        assert_eq!(slug_key("Hello, World!"), "hello_world");
        assert_eq!(slug_key("!!!"), "text");
    }

    #[test]
    fn test_sanitize_key() {
        assert_eq!(sanitize_key("'greeting'", "Hello"), "greeting");
        assert_eq!(sanitize_key(" welcome back ", "Welcome back"), "welcome_back");
        assert_eq!(sanitize_key("", "Welcome back"), "welcome_back");
        assert_eq!(sanitize_key("a..b", "Welcome"), "welcome");
    }
}
