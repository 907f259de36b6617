mod commands;
mod domain;
mod services;
#[cfg(test)]
mod test_support;

use std::process::ExitCode;

use crate::commands::base_commands::{CliArgs, Commands};
use crate::commands::calculate_cmd::calculate_command;
use crate::commands::completions_cmd::completions_command;
use crate::commands::context::{AppContext, CommandError};
use crate::commands::export_cmd::export_command;
use crate::commands::presets_cmd::presets_command;
use crate::commands::share_cmd::{decode_command, share_command};
use clap::Parser;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = CliArgs::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: CliArgs) -> Result<(), CommandError> {
    if let Commands::Completions { shell } = args.command {
        completions_command(shell);
        return Ok(());
    }

    let ctx = AppContext::load(args.config.as_deref(), args.locale)?;
    log::debug!(
        "locale {}, default preset '{}'",
        ctx.locale.code(),
        ctx.default_preset
    );

    match args.command {
        cmd @ Commands::Calculate { .. } => calculate_command(&ctx, cmd),
        cmd @ Commands::Export { .. } => export_command(&ctx, cmd),
        cmd @ Commands::Presets { .. } => presets_command(&ctx, cmd),
        cmd @ Commands::Share { .. } => share_command(&ctx, cmd),
        cmd @ Commands::Decode { .. } => decode_command(&ctx, cmd),
        Commands::Completions { .. } => Ok(()),
    }
}
