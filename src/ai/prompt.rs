//! Prompt templates.

/// Placeholder replaced by the text (or code) in custom templates.
pub const TEXT_PLACEHOLDER: &str = "{{text}}";

pub const REVIEW_SYSTEM_PROMPT: &str =
    "You are a helpful assistant that identifies unlocalized text in source code.";

pub const KEY_SYSTEM_PROMPT: &str =
    "You are a helpful assistant that suggests concise i18n keys for given text.";

const DEFAULT_KEY_TEMPLATE: &str = "Suggest a concise i18n key for this text: \"{{text}}\", just a key, \
no dotted combination paths, as simple as possible, prefer to use lower case for no abbr words, \
use underline for multiple word keys, no explanation, no nothing, just the key.";

/// Prompt asking which texts in `code` need translation.
///
/// A custom `template` gets `code` in place of `{{text}}`; otherwise the
/// built-in prompt lists what to extract and what to skip.
pub fn review_prompt(template: &str, code: &str, function_name: &str) -> String {
    if !template.trim().is_empty() {
        return template.replacen(TEXT_PLACEHOLDER, code, 1);
    }

    format!(
        r#"{code}

Analyze the provided code and extract all user-facing English text that requires translation for internationalization. Include:

1. UI text: Labels, buttons, headings, placeholders
2. Messages: Errors, warnings, confirmations, notifications
3. Dynamic content: Sentences with variables (e.g., "Hello, {{username}}")
4. Dates and times: Any format (e.g., "Last updated: {{date}}")
5. Numbers and currencies: Including formatted values
6. Units of measurement

Ignore:
- Code comments
- Variable names
- Text already wrapped in {function_name}('') or with data-i18n=""
- HTML tags and attributes (unless they contain user-facing text)

For each extracted text:
1. Provide the exact text found

Return Empty JSON Array if no user-facing English text is found.

Format the output as a JSON array of objects:
[
  {{
    "text": "extracted text"
  }},
  ...
]"#
    )
}

/// Prompt asking for a key for `text`.
pub fn key_prompt(template: &str, text: &str) -> String {
    let template = if template.trim().is_empty() {
        DEFAULT_KEY_TEMPLATE
    } else {
        template
    };
    template.replacen(TEXT_PLACEHOLDER, text, 1)
}
