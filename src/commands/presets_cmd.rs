use crate::commands::base_commands::{Commands, OutputFormat};
use crate::commands::context::{AppContext, CommandError};
use crate::commands::report_format::format_preset_table;
use crate::domain::preset::Preset;

pub fn presets_command(ctx: &AppContext, cmd: Commands) -> Result<(), CommandError> {
    if let Commands::Presets { format } = cmd {
        let presets: Vec<&Preset> = ctx.presets.iter().collect();
        let output = match format {
            OutputFormat::Text => format_preset_table(&ctx.presets, &ctx.default_preset),
            OutputFormat::Yaml => serde_yaml::to_string(&presets)
                .map_err(|e| CommandError::Serialize(e.to_string()))?,
            OutputFormat::Json => serde_json::to_string_pretty(&presets)
                .map_err(|e| CommandError::Serialize(e.to_string()))?,
        };
        println!("{output}");
    }
    Ok(())
}
