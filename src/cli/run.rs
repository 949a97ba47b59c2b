use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{
        CommandResult, extract::extract, keys::keys, scan::scan, typos::typos, unused::unused,
    },
};

/// Dispatch to the command handler.
///
/// `init` and `serve` do not produce a `CommandResult` and are handled
/// before this point.
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Scan(cmd)) => scan(cmd),
        Some(Command::Unused(cmd)) => unused(cmd),
        Some(Command::Typos(cmd)) => typos(cmd),
        Some(Command::Keys(cmd)) => keys(cmd),
        Some(Command::Extract(cmd)) => extract(cmd),
        Some(Command::Init) | Some(Command::Serve) => {
            bail!("This command should be handled before run()")
        }
        None => bail!("No command provided. Use --help to see available commands."),
    }
}
