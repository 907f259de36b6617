use chrono::NaiveDate;

use crate::commands::base_commands::Commands;
use crate::commands::context::{AppContext, CommandError};
use crate::services::csv_export::{export_filename, export_record, write_csv_file};

pub fn export_command(ctx: &AppContext, cmd: Commands) -> Result<(), CommandError> {
    if let Commands::Export {
        input,
        output,
        date,
    } = cmd
    {
        let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
            .map_err(|_| CommandError::InvalidDate(date.clone()))?;
        let session = ctx.session(&input)?;

        // Exports are allowed for out-of-range inputs, only flagged.
        if let Err(e) = session.validate() {
            log::warn!("exporting inputs that fail validation: {e}");
        }

        let record = export_record(session.inputs(), &session.result(), ctx.locale, date);
        let output = output.unwrap_or_else(|| export_filename(date));
        write_csv_file(&output, &record)?;
        log::debug!("wrote {} csv rows", record.rows.len());
        println!("ROI export written to {output}");
    }
    Ok(())
}
