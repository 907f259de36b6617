use thiserror::Error;

use crate::domain::locale::Locale;
use crate::domain::roi::{
    ADOPTION_RANGE, HOURLY_RATE_RANGE, HOURS_SAVED_RANGE, RoiDraft, TEAM_SIZE_RANGE,
};

/// First input range violation found by [`validate`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Team size must be between 1 and 1000")]
    TeamSize,
    #[error("Hourly rate must be between €10 and €500")]
    HourlyRate,
    #[error("Hours saved must be between 0.5 and 40")]
    HoursSavedPerWeek,
    #[error("Adoption must be between 10% and 100%")]
    Adoption,
}

impl ValidationError {
    pub fn message(self, locale: Locale) -> String {
        match locale {
            Locale::En => self.to_string(),
            Locale::Nl => match self {
                ValidationError::TeamSize => "Teamgrootte moet tussen 1 en 1000 zijn",
                ValidationError::HourlyRate => "Uurtarief moet tussen €10 en €500 zijn",
                ValidationError::HoursSavedPerWeek => "Bespaarde uren moet tussen 0,5 en 40 zijn",
                ValidationError::Adoption => "Adoptie moet tussen 10% en 100% zijn",
            }
            .to_string(),
        }
    }
}

/// Checks a possibly incomplete set of inputs.
///
/// Fields are checked in the order team size, hourly rate, hours saved,
/// adoption and only the first violation is returned. A missing field counts
/// as a violation of that field, NaN fails every range.
pub fn validate(draft: &RoiDraft) -> Result<(), ValidationError> {
    if !draft.team_size.is_some_and(|v| TEAM_SIZE_RANGE.contains(&v)) {
        return Err(ValidationError::TeamSize);
    }
    if !draft.hourly_rate.is_some_and(|v| HOURLY_RATE_RANGE.contains(&v)) {
        return Err(ValidationError::HourlyRate);
    }
    if !draft
        .hours_saved_per_week
        .is_some_and(|v| HOURS_SAVED_RANGE.contains(&v))
    {
        return Err(ValidationError::HoursSavedPerWeek);
    }
    if !draft.adoption.is_some_and(|v| ADOPTION_RANGE.contains(&v)) {
        return Err(ValidationError::Adoption);
    }
    Ok(())
}
