use anyhow::Result;
use colored::Colorize;

use super::super::args::TyposCommand;
use super::{CommandResult, CommandSummary, helper::finish};
use crate::{
    core::{
        context::ScanContext,
        spelling::{WordLists, load_dictionary},
    },
    issues::Issue,
    rules::typos::check_typos_issues,
};

pub fn typos(cmd: TyposCommand) -> Result<CommandResult> {
    let ctx = ScanContext::new(&cmd.common, None)?;

    let dictionary_path = cmd.dictionary.unwrap_or_else(|| ctx.dictionary_path());
    if ctx.verbose {
        eprintln!(
            "{} using dictionary {}",
            "note:".bold().cyan(),
            dictionary_path.display()
        );
    }
    let dictionary = load_dictionary(&dictionary_path)?;

    let lists = WordLists::load(&ctx.root_dir).unwrap_or_else(|e| {
        eprintln!("{} {:#}; ignoring it", "warning:".bold().yellow(), e);
        WordLists::default()
    });

    let mut issues: Vec<Issue> = check_typos_issues(&ctx, &dictionary, &lists)?
        .into_iter()
        .map(Issue::Typo)
        .collect();

    let message_errors = ctx.message_parse_errors();
    let locale_files = ctx.messages()?.len() + message_errors.len();
    issues.extend(message_errors.into_iter().map(Issue::ParseError));

    Ok(finish(CommandSummary::Typos, issues, 0, locale_files, true))
}
