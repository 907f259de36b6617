pub mod calculation;
pub mod config_yaml;
pub mod csv_export;
pub mod formatting;
pub mod query_state;
pub mod report_types;
pub mod session;
pub mod validation;
