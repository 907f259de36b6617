use crate::commands::base_commands::{Commands, OutputFormat};
use crate::commands::context::{AppContext, CommandError};
use crate::commands::report_format::{format_roi_report, method_note};
use crate::services::report_types::RoiReport;

pub fn calculate_command(ctx: &AppContext, cmd: Commands) -> Result<(), CommandError> {
    if let Commands::Calculate {
        input,
        format,
        method_note: show_method_note,
        contact_path,
    } = cmd
    {
        let session = ctx.session(&input)?;
        session
            .validate()
            .map_err(|e| CommandError::Invalid(e.message(ctx.locale)))?;

        let report = RoiReport::from_session(&session, ctx.locale);
        println!("{}", render_report(&report, format)?);

        if show_method_note {
            println!();
            println!("{}", method_note(ctx.locale));
        }
        if let Some(contact_path) = contact_path {
            let link = session
                .submit(&contact_path)
                .map_err(|e| CommandError::Invalid(e.message(ctx.locale)))?;
            println!("{link}");
        }
    }
    Ok(())
}

pub(crate) fn render_report(report: &RoiReport, format: OutputFormat) -> Result<String, CommandError> {
    match format {
        OutputFormat::Text => Ok(format_roi_report(report)),
        OutputFormat::Yaml => {
            serde_yaml::to_string(report).map_err(|e| CommandError::Serialize(e.to_string()))
        }
        OutputFormat::Json => serde_json::to_string_pretty(report)
            .map_err(|e| CommandError::Serialize(e.to_string())),
    }
}
