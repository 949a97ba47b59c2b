//! Command-line interface layer.
//!
//! Commands produce a `CommandResult`; `report` renders it and
//! `ExitStatus` maps it to the process exit code.

use std::path::Path;

use anyhow::Result;

pub mod args;
pub mod commands;
mod exit_status;
pub mod report;
mod run;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose();

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    if matches!(args.command, Some(Command::Init)) {
        return commands::init::init(Path::new("."));
    }

    let result = run::run(args)?;
    report::print(&result, verbose);

    Ok(ExitStatus::from_result(&result))
}
