//! Unused translation key detection rule.
//!
//! Detects keys declared in a locale file that no source file references,
//! either directly (`default.save`) or through a wildcard (`default.*`).

use std::collections::BTreeSet;

use anyhow::Result;

use crate::{
    core::{AllLocaleMessages, LocaleMessages, context::ScanContext, key_usage::key_covers},
    issues::UnusedKeyIssue,
};

pub fn check_unused_keys_issues(ctx: &ScanContext) -> Result<Vec<UnusedKeyIssue>> {
    Ok(check_unused_keys(ctx.used_keys(), ctx.messages()?))
}

/// Check every declared key against the used keys.
///
/// A declared key counts as used when a used key covers it with or without
/// its namespace, so both `i18next.t('default.save')` and a bare
/// `data-i18n="save"` account for `save` in `default.json`.
pub fn check_unused_keys(
    used_keys: &BTreeSet<String>,
    messages: &AllLocaleMessages,
) -> Vec<UnusedKeyIssue> {
    let (literal, wildcard): (Vec<&String>, Vec<&String>) =
        used_keys.iter().partition(|key| !key.contains('*'));
    let literal: BTreeSet<&str> = literal.into_iter().map(String::as_str).collect();

    let mut issues: Vec<UnusedKeyIssue> = messages
        .values()
        .flat_map(|locale| unused_in(locale, &literal, &wildcard))
        .collect();

    issues.sort_by(|a, b| {
        a.context
            .location
            .file_path
            .cmp(&b.context.location.file_path)
            .then_with(|| a.context.location.line.cmp(&b.context.location.line))
            .then_with(|| a.context.key.cmp(&b.context.key))
    });

    issues
}

fn unused_in(
    locale: &LocaleMessages,
    literal: &BTreeSet<&str>,
    wildcard: &[&String],
) -> Vec<UnusedKeyIssue> {
    locale
        .entries
        .iter()
        .filter_map(|entry| {
            let qualified = locale.qualified_key(&entry.key);
            let used = [qualified.as_str(), entry.key.as_str()].iter().any(|key| {
                literal.contains(key) || wildcard.iter().any(|pattern| key_covers(pattern, key))
            });
            (!used).then(|| UnusedKeyIssue {
                context: entry.clone(),
                qualified_key: qualified,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::core::{MessageContext, MessageLocation};
    use crate::rules::unused::*;

    fn locale(namespace: &str, entries: &[(&str, &str)]) -> AllLocaleMessages {
        let file_path = format!("locale/{}.json", namespace);
        let mut messages = LocaleMessages::new(namespace, file_path.clone());
        for (i, (k, v)) in entries.iter().enumerate() {
            messages.entries.push(MessageContext::new(
                MessageLocation::with_line(file_path.clone(), i + 2),
                *k,
                *v,
            ));
        }
        let mut all = AllLocaleMessages::new();
        all.insert(file_path, messages);
        all
    }

    fn used(keys: &[&str]) -> BTreeSet<String> {
        keys.iter().map(|k| k.to_string()).collect()
    }

    #[test]
    fn test_check_unused_none_unused() {
        let messages = locale("default", &[("save", "Save")]);
        let issues = check_unused_keys(&used(&["default.save"]), &messages);
        assert!(issues.is_empty());
    }

    #[test]
    fn test_check_unused_reports_qualified_key() {
        let messages = locale("default", &[("save", "Save"), ("stale", "Stale")]);
        let issues = check_unused_keys(&used(&["default.save"]), &messages);

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].qualified_key, "default.stale");
        assert_eq!(issues[0].context.value, "Stale");
        assert_eq!(issues[0].context.line(), 3);
    }

    #[test]
    fn test_check_unused_bare_key_counts() {
        let messages = locale("default", &[("save", "Save")]);
        let issues = check_unused_keys(&used(&["save"]), &messages);
        assert!(issues.is_empty());
    }

    #[test]
    fn test_check_unused_trailing_wildcard() {
        let messages = locale(
            "default",
            &[
                ("severity.outage", "Outage"),
                ("severity.minor", "Minor"),
                ("status", "Status"),
            ],
        );
        let issues = check_unused_keys(&used(&["default.severity.*"]), &messages);

        let keys: Vec<&str> = issues.iter().map(|i| i.qualified_key.as_str()).collect();
        assert_eq!(keys, vec!["default.status"]);
    }

    #[test]
    fn test_check_unused_inner_wildcard_matches_one_segment() {
        let messages = locale(
            "menu",
            &[("file.label", "File"), ("file.sub.label", "Sub")],
        );
        let issues = check_unused_keys(&used(&["menu.*.label"]), &messages);

        let keys: Vec<&str> = issues.iter().map(|i| i.qualified_key.as_str()).collect();
        assert_eq!(keys, vec!["menu.file.sub.label"]);
    }

    #[test]
    fn test_check_unused_all_unused() {
        let messages = locale("default", &[("a", "A"), ("b", "B"), ("c", "C")]);
        let issues = check_unused_keys(&BTreeSet::new(), &messages);
        assert_eq!(issues.len(), 3);
    }
}
