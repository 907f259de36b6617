use chrono::Local;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::domain::locale::Locale;
use crate::domain::roi::RoiDraft;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    /// Optional YAML config with locale and extra presets
    #[arg(long, global = true)]
    pub config: Option<String>,
    /// Language for labels, messages and number formatting
    #[arg(short, long, global = true, value_enum)]
    pub locale: Option<Locale>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Yaml,
    Json,
}

/// Calculator inputs: a preset plus optional per-field overrides.
#[derive(Args, Debug, Clone, PartialEq)]
pub struct InputArgs {
    /// Preset to start from (defaults to the configured default preset)
    #[arg(short, long)]
    pub preset: Option<String>,
    /// Number of team members
    #[arg(short, long)]
    pub team: Option<u32>,
    /// Hourly rate in EUR
    #[arg(short, long)]
    pub rate: Option<f64>,
    /// Hours saved per week per person
    #[arg(long)]
    pub hours: Option<f64>,
    /// Adoption as a fraction, 0.7 = 70%
    #[arg(short, long)]
    pub adoption: Option<f64>,
}

impl InputArgs {
    pub fn draft(&self) -> RoiDraft {
        RoiDraft {
            team_size: self.team,
            hourly_rate: self.rate,
            hours_saved_per_week: self.hours,
            adoption: self.adoption,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate the inputs and print the projected savings
    Calculate {
        #[command(flatten)]
        input: InputArgs,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Print how the savings are calculated
        #[arg(long)]
        method_note: bool,
        /// Print the contact link carrying preset and annual savings
        #[arg(long)]
        contact_path: Option<String>,
    },
    /// Export inputs and results to a CSV file
    Export {
        #[command(flatten)]
        input: InputArgs,
        /// Output CSV file (defaults to roi-calculator-<date>.csv)
        #[arg(short, long)]
        output: Option<String>,
        /// Date stamped into the export (YYYY-MM-DD)
        #[arg(short, long, default_value_t = default_export_date())]
        date: String,
    },
    /// List the available presets
    Presets {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print the inputs as a shareable query string
    Share {
        #[command(flatten)]
        input: InputArgs,
        /// Existing URL or query string to write the inputs into
        #[arg(short, long)]
        url: Option<String>,
    },
    /// Read inputs from a shared query string or URL and print the savings
    Decode {
        /// Query string or URL, e.g. "team=5&rate=65"
        query: String,
        /// Preset supplying values for missing or malformed keys
        #[arg(short, long)]
        preset: Option<String>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn default_export_date() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}
