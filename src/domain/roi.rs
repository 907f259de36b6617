use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

pub const WEEKS_PER_YEAR: f64 = 52.0;
pub const MONTHS_PER_YEAR: f64 = 12.0;

pub const TEAM_SIZE_RANGE: RangeInclusive<u32> = 1..=1000;
pub const HOURLY_RATE_RANGE: RangeInclusive<f64> = 10.0..=500.0;
pub const HOURS_SAVED_RANGE: RangeInclusive<f64> = 0.5..=40.0;
pub const ADOPTION_RANGE: RangeInclusive<f64> = 0.1..=1.0;

/// Parameters of one savings projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoiInputs {
    pub team_size: u32,
    /// EUR per hour.
    pub hourly_rate: f64,
    /// Per person.
    pub hours_saved_per_week: f64,
    /// Fraction of the team using the automation, `0.6` = 60%.
    pub adoption: f64,
}

impl Default for RoiInputs {
    fn default() -> Self {
        Self {
            team_size: 5,
            hourly_rate: 65.0,
            hours_saved_per_week: 2.0,
            adoption: 0.7,
        }
    }
}

/// Partially filled inputs, as a form looks while the user is still typing.
///
/// Also used as a set of overrides on top of a complete [`RoiInputs`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RoiDraft {
    pub team_size: Option<u32>,
    pub hourly_rate: Option<f64>,
    pub hours_saved_per_week: Option<f64>,
    pub adoption: Option<f64>,
}

impl RoiDraft {
    pub fn is_empty(&self) -> bool {
        *self == RoiDraft::default()
    }

    /// Returns `base` with every populated field of the draft written over it.
    pub fn apply_to(&self, base: RoiInputs) -> RoiInputs {
        RoiInputs {
            team_size: self.team_size.unwrap_or(base.team_size),
            hourly_rate: self.hourly_rate.unwrap_or(base.hourly_rate),
            hours_saved_per_week: self
                .hours_saved_per_week
                .unwrap_or(base.hours_saved_per_week),
            adoption: self.adoption.unwrap_or(base.adoption),
        }
    }
}

impl From<RoiInputs> for RoiDraft {
    fn from(inputs: RoiInputs) -> Self {
        Self {
            team_size: Some(inputs.team_size),
            hourly_rate: Some(inputs.hourly_rate),
            hours_saved_per_week: Some(inputs.hours_saved_per_week),
            adoption: Some(inputs.adoption),
        }
    }
}

/// Savings derived from [`RoiInputs`], each rounded to whole units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoiResult {
    pub weekly_savings: i64,
    pub monthly_savings: i64,
    pub annual_savings: i64,
    pub hours_saved_annually: i64,
}

/// The input fields in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoiField {
    TeamSize,
    HourlyRate,
    HoursSavedPerWeek,
    Adoption,
}

impl RoiField {
    pub const COUNT: usize = 4;
    pub const ALL: [RoiField; Self::COUNT] = [
        RoiField::TeamSize,
        RoiField::HourlyRate,
        RoiField::HoursSavedPerWeek,
        RoiField::Adoption,
    ];

    /// Key used when the field is stored in a URL query string.
    pub fn query_key(self) -> &'static str {
        match self {
            RoiField::TeamSize => "team",
            RoiField::HourlyRate => "rate",
            RoiField::HoursSavedPerWeek => "hours",
            RoiField::Adoption => "adoptie",
        }
    }

    pub fn from_query_key(key: &str) -> Option<Self> {
        RoiField::ALL.into_iter().find(|field| field.query_key() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_overrides_only_populated_fields() {
        let draft = RoiDraft {
            hourly_rate: Some(90.0),
            ..RoiDraft::default()
        };

        let merged = draft.apply_to(RoiInputs::default());

        assert_eq!(merged.team_size, 5);
        assert_eq!(merged.hourly_rate, 90.0);
        assert_eq!(merged.hours_saved_per_week, 2.0);
        assert_eq!(merged.adoption, 0.7);
    }

    #[test]
    fn empty_draft_is_detected() {
        assert!(RoiDraft::default().is_empty());
        assert!(!RoiDraft::from(RoiInputs::default()).is_empty());
    }

    #[test]
    fn query_keys_map_back_to_fields() {
        for field in RoiField::ALL {
            assert_eq!(RoiField::from_query_key(field.query_key()), Some(field));
        }
        assert_eq!(RoiField::from_query_key("preset"), None);
    }
}
