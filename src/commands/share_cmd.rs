use crate::commands::base_commands::Commands;
use crate::commands::calculate_cmd::render_report;
use crate::commands::context::{AppContext, CommandError};
use crate::services::query_state::{parse_query_pairs, sync_query};
use crate::services::report_types::RoiReport;
use crate::services::session::RoiSession;

pub fn share_command(ctx: &AppContext, cmd: Commands) -> Result<(), CommandError> {
    if let Commands::Share { input, url } = cmd {
        let session = ctx.session(&input)?;
        println!("{}", sync_query(url.as_deref().unwrap_or(""), session.inputs()));
    }
    Ok(())
}

/// Malformed keys never fail the command, they keep the preset's value.
pub fn decode_command(ctx: &AppContext, cmd: Commands) -> Result<(), CommandError> {
    if let Commands::Decode {
        query,
        preset,
        format,
    } = cmd
    {
        let preset = preset.as_deref().unwrap_or(&ctx.default_preset);
        let mut session = RoiSession::from_preset(&ctx.presets, preset)?;
        session.apply_query(parse_query_pairs(&query));

        let report = RoiReport::from_session(&session, ctx.locale);
        if let Some(message) = &report.validation_error {
            eprintln!("{message}");
        }
        println!("{}", render_report(&report, format)?);
    }
    Ok(())
}
