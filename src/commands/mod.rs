pub mod base_commands;
pub mod calculate_cmd;
pub mod completions_cmd;
pub mod context;
pub mod export_cmd;
pub mod presets_cmd;
pub mod report_format;
pub mod share_cmd;
