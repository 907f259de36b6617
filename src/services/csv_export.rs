use std::io::Write;
use std::path::Path;

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::locale::Locale;
use crate::domain::roi::{RoiInputs, RoiResult};
use crate::services::formatting::{format_currency, format_percent};

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("failed to encode csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to write export file: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    pub label: String,
    pub value: String,
}

impl ExportRow {
    fn new(label: &str, value: impl Into<String>) -> Self {
        Self {
            label: label.to_string(),
            value: value.into(),
        }
    }

    fn blank() -> Self {
        Self::new("", "")
    }
}

/// Two-column table describing one calculation, ready for CSV encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRecord {
    pub rows: Vec<ExportRow>,
}

struct ExportLabels {
    title: &'static str,
    date: &'static str,
    input: &'static str,
    team_size: &'static str,
    hourly_rate: &'static str,
    hours_saved: &'static str,
    adoption: &'static str,
    result: &'static str,
    weekly: &'static str,
    monthly: &'static str,
    annual: &'static str,
    hours_annually: &'static str,
}

fn labels(locale: Locale) -> ExportLabels {
    match locale {
        Locale::Nl => ExportLabels {
            title: "ROI-calculator",
            date: "Datum",
            input: "INPUT",
            team_size: "Teamgrootte",
            hourly_rate: "Uurtarief (EUR)",
            hours_saved: "Uren bespaard per week",
            adoption: "Adoptiepercentage",
            result: "RESULTAAT",
            weekly: "Besparing per week",
            monthly: "Besparing per maand",
            annual: "Besparing per jaar",
            hours_annually: "Uren bespaard per jaar",
        },
        Locale::En => ExportLabels {
            title: "ROI Calculator",
            date: "Date",
            input: "INPUT",
            team_size: "Team size",
            hourly_rate: "Hourly rate (EUR)",
            hours_saved: "Hours saved per week",
            adoption: "Adoption rate",
            result: "RESULT",
            weekly: "Savings per week",
            monthly: "Savings per month",
            annual: "Savings per year",
            hours_annually: "Hours saved per year",
        },
    }
}

/// Builds the export table. The date is the only part not derived from
/// `inputs` and `result`, so equal arguments always give equal rows.
pub fn export_record(
    inputs: &RoiInputs,
    result: &RoiResult,
    locale: Locale,
    date: NaiveDate,
) -> ExportRecord {
    let l = labels(locale);
    let rows = vec![
        ExportRow::new(l.title, ""),
        ExportRow::new(l.date, date.format(locale.date_pattern()).to_string()),
        ExportRow::blank(),
        ExportRow::new(l.input, ""),
        ExportRow::new(l.team_size, inputs.team_size.to_string()),
        ExportRow::new(l.hourly_rate, inputs.hourly_rate.to_string()),
        ExportRow::new(l.hours_saved, inputs.hours_saved_per_week.to_string()),
        ExportRow::new(l.adoption, format_percent(inputs.adoption)),
        ExportRow::blank(),
        ExportRow::new(l.result, ""),
        ExportRow::new(l.weekly, format_currency(result.weekly_savings, locale)),
        ExportRow::new(l.monthly, format_currency(result.monthly_savings, locale)),
        ExportRow::new(l.annual, format_currency(result.annual_savings, locale)),
        ExportRow::new(l.hours_annually, result.hours_saved_annually.to_string()),
    ];
    ExportRecord { rows }
}

pub fn export_filename(date: NaiveDate) -> String {
    format!("roi-calculator-{}.csv", date.format("%Y-%m-%d"))
}

pub fn write_csv<W: Write>(writer: W, record: &ExportRecord) -> Result<(), ExportError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);
    for row in &record.rows {
        csv_writer.write_record([row.label.as_str(), row.value.as_str()])?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_csv_file<P: AsRef<Path>>(path: P, record: &ExportRecord) -> Result<(), ExportError> {
    let mut buffer = Vec::new();
    write_csv(&mut buffer, record)?;
    std::fs::write(path, buffer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::calculation::calculate;
    use crate::test_support::{inputs, on_date};

    fn record_for(locale: Locale) -> ExportRecord {
        let x = inputs(5, 65.0, 2.0, 0.7);
        export_record(&x, &calculate(&x), locale, on_date(2026, 3, 7))
    }

    fn encode(record: &ExportRecord) -> String {
        let mut buffer = Vec::new();
        write_csv(&mut buffer, record).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn export_record_has_fixed_layout() {
        let record = record_for(Locale::Nl);
        let labels: Vec<&str> = record.rows.iter().map(|r| r.label.as_str()).collect();

        assert_eq!(
            labels,
            vec![
                "ROI-calculator",
                "Datum",
                "",
                "INPUT",
                "Teamgrootte",
                "Uurtarief (EUR)",
                "Uren bespaard per week",
                "Adoptiepercentage",
                "",
                "RESULTAAT",
                "Besparing per week",
                "Besparing per maand",
                "Besparing per jaar",
                "Uren bespaard per jaar",
            ]
        );
    }

    #[test]
    fn export_record_values_are_raw_inputs_and_formatted_results() {
        let record = record_for(Locale::Nl);
        let values: Vec<&str> = record.rows.iter().map(|r| r.value.as_str()).collect();

        assert_eq!(values[1], "7-3-2026");
        assert_eq!(&values[4..8], &["5", "65", "2", "70%"]);
        assert_eq!(&values[10..14], &["€ 455", "€ 1.972", "€ 23.660", "364"]);
    }

    #[test]
    fn export_record_is_idempotent() {
        assert_eq!(record_for(Locale::En), record_for(Locale::En));
        assert_eq!(encode(&record_for(Locale::En)), encode(&record_for(Locale::En)));
    }

    #[test]
    fn english_export_uses_english_labels_and_dates() {
        let record = record_for(Locale::En);
        assert_eq!(record.rows[1], ExportRow::new("Date", "3/7/2026"));
        assert_eq!(record.rows[9], ExportRow::new("RESULT", ""));
        assert_eq!(record.rows[12], ExportRow::new("Savings per year", "€23,660"));
    }

    #[test]
    fn write_csv_quotes_values_containing_commas() {
        let output = encode(&record_for(Locale::En));
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 14);
        assert_eq!(lines[0], "ROI Calculator,");
        assert_eq!(lines[2], ",");
        assert_eq!(lines[4], "Team size,5");
        assert_eq!(lines[7], "Adoption rate,70%");
        assert_eq!(lines[11], "Savings per month,\"€1,972\"");
        assert_eq!(lines[13], "Hours saved per year,364");
    }

    #[test]
    fn dutch_csv_needs_no_quoting() {
        let output = encode(&record_for(Locale::Nl));
        assert!(output.contains("Besparing per jaar,€ 23.660\n"));
    }

    #[test]
    fn export_filename_uses_iso_date() {
        assert_eq!(
            export_filename(on_date(2026, 3, 7)),
            "roi-calculator-2026-03-07.csv"
        );
    }

    #[test]
    fn write_csv_file_writes_utf8() {
        let dir = assert_fs::TempDir::new().unwrap();
        let path = dir.path().join("export.csv");

        write_csv_file(&path, &record_for(Locale::Nl)).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("ROI-calculator,\n"));
        assert!(contents.contains("€ 1.972"));
    }
}
