use crate::domain::locale::Locale;
use crate::domain::preset::PresetTable;
use crate::services::formatting::format_percent;
use crate::services::report_types::RoiReport;

pub fn format_roi_report(report: &RoiReport) -> String {
    let inputs = &report.inputs;
    let formatted = &report.formatted;

    let mut lines = Vec::new();
    match report.locale {
        Locale::Nl => {
            lines.push(format!("ROI-berekening (preset: {})", report.preset));
            lines.push(format!("Teamgrootte: {} personen", inputs.team_size));
            lines.push(format!("Uurtarief: {} EUR", inputs.hourly_rate));
            lines.push(format!("Uren bespaard per week: {} uur", inputs.hours_saved_per_week));
            lines.push(format!("Adoptiepercentage: {}", format_percent(inputs.adoption)));
            lines.push(String::new());
            lines.push(format!("Besparing per week: {}", formatted.weekly_savings));
            lines.push(format!("Besparing per maand: {}", formatted.monthly_savings));
            lines.push(format!("Besparing per jaar: {}", formatted.annual_savings));
            lines.push(format!("Uren bespaard: {} uur/jaar", formatted.hours_saved_annually));
        }
        Locale::En => {
            lines.push(format!("ROI calculation (preset: {})", report.preset));
            lines.push(format!("Team size: {} people", inputs.team_size));
            lines.push(format!("Hourly rate: {} EUR", inputs.hourly_rate));
            lines.push(format!("Hours saved per week: {} h", inputs.hours_saved_per_week));
            lines.push(format!("Adoption rate: {}", format_percent(inputs.adoption)));
            lines.push(String::new());
            lines.push(format!("Savings per week: {}", formatted.weekly_savings));
            lines.push(format!("Savings per month: {}", formatted.monthly_savings));
            lines.push(format!("Savings per year: {}", formatted.annual_savings));
            lines.push(format!("Hours saved: {} h/year", formatted.hours_saved_annually));
        }
    }

    lines.join("\n")
}

pub fn method_note(locale: Locale) -> &'static str {
    match locale {
        Locale::Nl => {
            "Rekenmethode: teamgrootte × uurtarief × uren per week × 52 weken × adoptiepercentage. \
             Dit is een indicatie; werkelijke resultaten kunnen variëren per organisatie en proces."
        }
        Locale::En => {
            "Method: team size × hourly rate × hours per week × 52 weeks × adoption rate. \
             This is an estimate; actual results vary per organisation and process."
        }
    }
}

pub fn format_preset_table(presets: &PresetTable, default_preset: &str) -> String {
    let mut lines = Vec::new();
    lines.push("Preset | Team | Rate | Hours/week | Adoption".to_string());
    lines.push("-------|------|------|------------|---------".to_string());
    for preset in presets.iter() {
        let marker = if preset.name == default_preset { " *" } else { "" };
        lines.push(format!(
            "{name}{marker} | {team} | {rate} | {hours} | {adoption}",
            name = preset.name,
            team = preset.inputs.team_size,
            rate = preset.inputs.hourly_rate,
            hours = preset.inputs.hours_saved_per_week,
            adoption = format_percent(preset.inputs.adoption),
        ));
    }
    lines.join("\n")
}
