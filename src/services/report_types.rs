use serde::Serialize;

use crate::domain::locale::Locale;
use crate::domain::roi::{RoiInputs, RoiResult};
use crate::services::formatting::{format_currency, format_hours};
use crate::services::query_state::to_query_string;
use crate::services::session::RoiSession;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FormattedResult {
    pub weekly_savings: String,
    pub monthly_savings: String,
    pub annual_savings: String,
    pub hours_saved_annually: String,
}

impl FormattedResult {
    pub fn new(result: &RoiResult, locale: Locale) -> Self {
        Self {
            weekly_savings: format_currency(result.weekly_savings, locale),
            monthly_savings: format_currency(result.monthly_savings, locale),
            annual_savings: format_currency(result.annual_savings, locale),
            hours_saved_annually: format_hours(result.hours_saved_annually, locale),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RoiReport {
    pub preset: String,
    pub locale: Locale,
    pub inputs: RoiInputs,
    pub result: RoiResult,
    pub formatted: FormattedResult,
    pub query: String,
    /// Localized message when the inputs are out of range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_error: Option<String>,
}

impl RoiReport {
    pub fn from_session(session: &RoiSession, locale: Locale) -> Self {
        let result = session.result();
        Self {
            preset: session.preset().to_string(),
            locale,
            inputs: *session.inputs(),
            result,
            formatted: FormattedResult::new(&result, locale),
            query: to_query_string(session.inputs()),
            validation_error: session.validate().err().map(|e| e.message(locale)),
        }
    }
}
