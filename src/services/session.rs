use crate::domain::preset::{PresetError, PresetTable};
use crate::domain::roi::{RoiDraft, RoiInputs, RoiResult};
use crate::services::calculation::calculate;
use crate::services::query_state::{decode_from_query, handoff_url};
use crate::services::validation::{ValidationError, validate};

/// Holds the inputs the user is currently editing.
///
/// The engine functions stay pure; this is the only place inputs change.
/// Results are recomputed on every read, never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct RoiSession {
    preset: String,
    inputs: RoiInputs,
}

impl RoiSession {
    pub fn from_preset(presets: &PresetTable, name: &str) -> Result<Self, PresetError> {
        let preset = presets.resolve(name)?;
        log::debug!("starting session from preset '{}': {:?}", preset.name, preset.inputs);
        Ok(Self {
            preset: preset.name.clone(),
            inputs: preset.inputs,
        })
    }

    pub fn preset(&self) -> &str {
        &self.preset
    }

    pub fn inputs(&self) -> &RoiInputs {
        &self.inputs
    }

    /// Last write wins for every populated field.
    pub fn apply(&mut self, overrides: &RoiDraft) {
        if !overrides.is_empty() {
            log::debug!("applying input overrides: {overrides:?}");
        }
        self.inputs = overrides.apply_to(self.inputs);
    }

    /// Loads fields from shared query state, keeping current values for
    /// anything missing or malformed.
    pub fn apply_query<I, K, V>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.inputs = decode_from_query(pairs, &self.inputs);
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate(&RoiDraft::from(self.inputs))
    }

    pub fn result(&self) -> RoiResult {
        calculate(&self.inputs)
    }

    /// Contact link for a submitted calculation. Refused while any input is
    /// out of range.
    pub fn submit(&self, contact_path: &str) -> Result<String, ValidationError> {
        self.validate()?;
        Ok(handoff_url(contact_path, &self.preset, &self.result()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::query_state::encode_to_query;
    use crate::test_support::inputs;

    fn light_session() -> RoiSession {
        RoiSession::from_preset(&PresetTable::builtin(), "light").unwrap()
    }

    #[test]
    fn session_starts_from_preset_inputs() {
        let session = RoiSession::from_preset(&PresetTable::builtin(), "manufacturing").unwrap();
        assert_eq!(session.preset(), "manufacturing");
        assert_eq!(session.inputs(), &inputs(25, 55.0, 4.0, 0.6));
    }

    #[test]
    fn unknown_preset_is_an_error() {
        let err = RoiSession::from_preset(&PresetTable::builtin(), "retail").unwrap_err();
        assert!(matches!(err, PresetError::Unknown { .. }));
    }

    #[test]
    fn result_tracks_latest_inputs() {
        let mut session = light_session();
        assert_eq!(session.result().annual_savings, 23660);

        session.apply(&RoiDraft {
            team_size: Some(10),
            ..RoiDraft::default()
        });
        assert_eq!(session.result().annual_savings, 47320);

        session.apply(&RoiDraft {
            team_size: Some(1),
            ..RoiDraft::default()
        });
        assert_eq!(session.result().weekly_savings, 91);
    }

    #[test]
    fn query_state_falls_back_to_current_inputs() {
        let mut session = light_session();
        session.apply_query([("rate", "80"), ("hours", "oops")]);
        assert_eq!(session.inputs(), &inputs(5, 80.0, 2.0, 0.7));
    }

    #[test]
    fn query_pairs_round_trip_through_a_new_session() {
        let mut session = light_session();
        session.apply(&RoiDraft::from(inputs(14, 82.5, 1.5, 0.95)));

        let mut restored = RoiSession::from_preset(&PresetTable::builtin(), "configurators").unwrap();
        restored.apply_query(encode_to_query(session.inputs()));

        assert_eq!(restored.inputs(), session.inputs());
    }

    #[test]
    fn submit_requires_valid_inputs() {
        let mut session = light_session();
        assert_eq!(
            session.submit("/contact").unwrap(),
            "/contact?preset=light&annualSavings=23660"
        );

        session.apply(&RoiDraft {
            adoption: Some(0.0),
            ..RoiDraft::default()
        });
        assert_eq!(session.submit("/contact"), Err(ValidationError::Adoption));
    }
}
