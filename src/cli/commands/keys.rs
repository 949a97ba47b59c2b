use anyhow::Result;

use super::super::args::KeysCommand;
use super::{CommandResult, CommandSummary, KeysSummary, helper::finish};
use crate::{core::context::ScanContext, issues::Issue};

pub fn keys(cmd: KeysCommand) -> Result<CommandResult> {
    let ctx = ScanContext::new(&cmd.common, cmd.path.as_deref())?;

    let summary = KeysSummary {
        keys: ctx.used_keys().clone(),
    };
    let issues: Vec<Issue> = ctx
        .source_read_errors()
        .iter()
        .cloned()
        .map(Issue::ParseError)
        .collect();

    Ok(finish(
        CommandSummary::Keys(summary),
        issues,
        ctx.files.len(),
        0,
        true,
    ))
}
