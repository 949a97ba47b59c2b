//! Typo detection rule over locale values.

use anyhow::Result;

use crate::{
    core::{
        AllLocaleMessages,
        context::ScanContext,
        spelling::{WordChecker, WordLists, misspelled_words},
    },
    issues::TypoIssue,
};

pub fn check_typos_issues(
    ctx: &ScanContext,
    checker: &dyn WordChecker,
    lists: &WordLists,
) -> Result<Vec<TypoIssue>> {
    Ok(check_typos(ctx.messages()?, checker, lists))
}

/// One issue per misspelled word, in file and line order.
pub fn check_typos(
    messages: &AllLocaleMessages,
    checker: &dyn WordChecker,
    lists: &WordLists,
) -> Vec<TypoIssue> {
    messages
        .values()
        .flat_map(|locale| &locale.entries)
        .flat_map(|entry| {
            misspelled_words(&entry.value, checker, lists)
                .into_iter()
                .map(move |word| TypoIssue {
                    context: entry.clone(),
                    word: word.to_string(),
                })
        })
        .collect()
}
