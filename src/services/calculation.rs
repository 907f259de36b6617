use crate::domain::roi::{MONTHS_PER_YEAR, RoiInputs, RoiResult, WEEKS_PER_YEAR};

/// Projects savings for the given inputs.
///
/// Pure arithmetic: out-of-range inputs are computed like any other, so
/// callers decide whether to [`validate`](crate::services::validation::validate)
/// first. Every figure is rounded to whole euros or whole hours.
pub fn calculate(inputs: &RoiInputs) -> RoiResult {
    let team_size = f64::from(inputs.team_size);

    let weekly_savings =
        team_size * inputs.hourly_rate * inputs.hours_saved_per_week * inputs.adoption;
    let monthly_savings = weekly_savings * (WEEKS_PER_YEAR / MONTHS_PER_YEAR);
    let annual_savings = weekly_savings * WEEKS_PER_YEAR;
    let hours_saved_annually =
        team_size * inputs.hours_saved_per_week * WEEKS_PER_YEAR * inputs.adoption;

    RoiResult {
        weekly_savings: whole_units(weekly_savings),
        monthly_savings: whole_units(monthly_savings),
        annual_savings: whole_units(annual_savings),
        hours_saved_annually: whole_units(hours_saved_annually),
    }
}

// `as` saturates at the i64 bounds and maps NaN to 0.
fn whole_units(value: f64) -> i64 {
    value.round() as i64
}
