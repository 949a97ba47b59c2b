use anyhow::Result;

use super::super::args::UnusedCommand;
use super::{CommandResult, CommandSummary, helper::finish};
use crate::{core::context::ScanContext, issues::Issue, rules::unused::check_unused_keys_issues};

pub fn unused(cmd: UnusedCommand) -> Result<CommandResult> {
    let ctx = ScanContext::new(&cmd.common, None)?;

    let mut issues: Vec<Issue> = check_unused_keys_issues(&ctx)?
        .into_iter()
        .map(Issue::UnusedKey)
        .collect();

    let message_errors = ctx.message_parse_errors();
    let locale_files = ctx.messages()?.len() + message_errors.len();
    issues.extend(message_errors.into_iter().map(Issue::ParseError));
    issues.extend(ctx.source_read_errors().iter().cloned().map(Issue::ParseError));

    Ok(finish(
        CommandSummary::Unused,
        issues,
        ctx.files.len(),
        locale_files,
        true,
    ))
}
