use std::path::PathBuf;

use anyhow::{Context, Result};
use colored::Colorize;

use super::super::args::ExtractCommand;
use super::{CommandResult, CommandSummary, helper::finish};
use crate::{
    ai::{KeySuggester, OpenAiClient},
    core::context::ScanContext,
    locale::{AlwaysReuse, ExtractRequest, Extractor, NeverReuse, ReuseStrategy},
};

pub fn extract(cmd: ExtractCommand) -> Result<CommandResult> {
    let ctx = ScanContext::new(&cmd.common, Some(&cmd.file))?;
    let file = ctx
        .files
        .iter()
        .next()
        .map(PathBuf::from)
        .with_context(|| format!("Path '{}' is not a file", cmd.file.display()))?;

    let client = if cmd.ai {
        match OpenAiClient::from_config(&ctx.config, cmd.ai_args.api_key.as_deref())? {
            Some(client) => Some(client),
            None => {
                eprintln!(
                    "{} no OpenAI API key configured; generating the key from the text",
                    "warning:".bold().yellow()
                );
                None
            }
        }
    } else {
        None
    };

    let reuse: &dyn ReuseStrategy = if cmd.reuse { &AlwaysReuse } else { &NeverReuse };
    let locale_file = ctx.target_locale_file();
    let extractor = Extractor {
        config: &ctx.config,
        rules: ctx.scan_rules(),
        locale_file: &locale_file,
        reuse,
        suggester: client.as_ref().map(|c| c as &dyn KeySuggester),
    };

    let outcome = extractor.extract(&ExtractRequest {
        file: &file,
        line: cmd.line,
        col: cmd.col,
        text: cmd.text.as_deref(),
        key: cmd.key.as_deref(),
        apply: cmd.apply,
    })?;

    Ok(finish(
        CommandSummary::Extract(Box::new(outcome)),
        Vec::new(),
        1,
        1,
        true,
    ))
}
