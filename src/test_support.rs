use chrono::NaiveDate;

use crate::domain::roi::RoiInputs;

pub fn inputs(team_size: u32, hourly_rate: f64, hours_saved_per_week: f64, adoption: f64) -> RoiInputs {
    RoiInputs {
        team_size,
        hourly_rate,
        hours_saved_per_week,
        adoption,
    }
}

pub fn on_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
