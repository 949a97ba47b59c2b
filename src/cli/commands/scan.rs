use std::collections::BTreeSet;

use anyhow::Result;
use colored::Colorize;

use super::super::args::{AiArgs, ScanCommand};
use super::{CommandResult, CommandSummary, helper::finish};
use crate::{
    ai::{OpenAiClient, review::ReviewOptions, review_occurrences},
    core::context::ScanContext,
    issues::Issue,
    rules::unlocalized::check_unlocalized_text_issues,
};

pub fn scan(cmd: ScanCommand) -> Result<CommandResult> {
    let ctx = ScanContext::new(&cmd.common, cmd.path.as_deref())?;

    let ai_confirmed = if cmd.ai {
        ai_review(&ctx, &cmd.ai_args)
    } else {
        BTreeSet::new()
    };

    let mut issues: Vec<Issue> = check_unlocalized_text_issues(&ctx, &ai_confirmed)
        .into_iter()
        .map(Issue::UnlocalizedText)
        .collect();
    issues.extend(ctx.source_read_errors().iter().cloned().map(Issue::ParseError));

    Ok(finish(CommandSummary::Scan, issues, ctx.files.len(), 0, true))
}

/// Texts confirmed by the AI backend. Empty when no backend is configured.
fn ai_review(ctx: &ScanContext, ai_args: &AiArgs) -> BTreeSet<String> {
    let client = match OpenAiClient::from_config(&ctx.config, ai_args.api_key.as_deref()) {
        Ok(Some(client)) => client,
        Ok(None) => {
            eprintln!(
                "{} no OpenAI API key configured (set {} or {}); reporting heuristic results only",
                "warning:".bold().yellow(),
                "openAiApiKey".cyan(),
                "OPENAI_API_KEY".cyan()
            );
            return BTreeSet::new();
        }
        Err(e) => {
            eprintln!(
                "{} AI review unavailable: {:#}",
                "warning:".bold().yellow(),
                e
            );
            return BTreeSet::new();
        }
    };

    let function_names = ctx.config.detect_prefix_names();
    let options = ReviewOptions {
        max_request_size: ctx.config.max_request_size,
        function_names: &function_names,
        verbose: ctx.verbose,
    };
    review_occurrences(ctx.occurrences(), &client, &options)
}
