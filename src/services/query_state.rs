//! Shareable URL query state for the calculator inputs.
//!
//! Keys: `team`, `rate`, `hours`, `adoptie`. Decoding is lenient. Any key that
//! is missing or does not parse keeps the caller's default for that field, so
//! a damaged link still opens a usable calculator.

use std::borrow::Cow;

use crate::domain::roi::{RoiField, RoiInputs, RoiResult};

/// Flat key/value pairs in field order.
pub fn encode_to_query(inputs: &RoiInputs) -> Vec<(&'static str, String)> {
    RoiField::ALL
        .into_iter()
        .map(|field| (field.query_key(), field_value(inputs, field)))
        .collect()
}

fn field_value(inputs: &RoiInputs, field: RoiField) -> String {
    match field {
        RoiField::TeamSize => inputs.team_size.to_string(),
        RoiField::HourlyRate => inputs.hourly_rate.to_string(),
        RoiField::HoursSavedPerWeek => inputs.hours_saved_per_week.to_string(),
        RoiField::Adoption => inputs.adoption.to_string(),
    }
}

/// Reads inputs from query pairs, falling back to `defaults` per field.
///
/// When a key repeats, its first occurrence is used.
pub fn decode_from_query<I, K, V>(pairs: I, defaults: &RoiInputs) -> RoiInputs
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut decoded = *defaults;
    let mut seen = [false; RoiField::COUNT];

    for (key, value) in pairs {
        let Some(field) = RoiField::from_query_key(key.as_ref()) else {
            continue;
        };
        let slot = field as usize;
        if seen[slot] {
            continue;
        }
        seen[slot] = true;

        let raw = value.as_ref().trim();
        let applied = match field {
            RoiField::TeamSize => parse_team_size(raw).map(|v| decoded.team_size = v),
            RoiField::HourlyRate => parse_finite(raw).map(|v| decoded.hourly_rate = v),
            RoiField::HoursSavedPerWeek => {
                parse_finite(raw).map(|v| decoded.hours_saved_per_week = v)
            }
            RoiField::Adoption => parse_finite(raw).map(|v| decoded.adoption = v),
        };
        if applied.is_none() {
            log::debug!(
                "ignoring unparseable query value {}={:?}, keeping default",
                field.query_key(),
                raw
            );
        }
    }

    decoded
}

fn parse_finite(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

// Accepts `5` and integral floats such as `5.0`; `5.5` and `5abc` do not parse.
fn parse_team_size(raw: &str) -> Option<u32> {
    raw.parse::<u32>().ok().or_else(|| {
        parse_finite(raw)
            .filter(|v| v.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(v))
            .map(|v| v as u32)
    })
}

pub fn to_query_string(inputs: &RoiInputs) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(encode_to_query(inputs))
        .finish()
}

/// Decoded pairs of a bare query string, one with a leading `?`, or a full URL.
/// A `#fragment` is never part of the query.
pub fn parse_query_pairs(query: &str) -> form_urlencoded::Parse<'_> {
    form_urlencoded::parse(UrlParts::split(query).query.as_bytes())
}

/// Writes the inputs into an existing URL or query string.
///
/// Calculator keys that are already present are replaced where they stand,
/// other parameters are kept in their order and new keys are appended.
pub fn sync_query(existing: &str, inputs: &RoiInputs) -> String {
    let parts = UrlParts::split(existing);
    let encoded = encode_to_query(inputs);

    let mut written = [false; RoiField::COUNT];
    let mut pairs: Vec<(Cow<str>, Cow<str>)> = Vec::new();
    for (key, value) in form_urlencoded::parse(parts.query.as_bytes()) {
        match RoiField::from_query_key(&key) {
            Some(field) => {
                let slot = field as usize;
                if !written[slot] {
                    written[slot] = true;
                    pairs.push((key, Cow::Owned(encoded[slot].1.clone())));
                }
            }
            None => pairs.push((key, value)),
        }
    }
    for field in RoiField::ALL {
        let slot = field as usize;
        if !written[slot] {
            let (key, value) = &encoded[slot];
            pairs.push((Cow::Borrowed(*key), Cow::Owned(value.clone())));
        }
    }

    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish();
    parts.join(&query)
}

/// Query for the contact page after the user submits a calculation.
pub fn handoff_query(preset: &str, result: &RoiResult) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair("preset", preset)
        .append_pair("annualSavings", &result.annual_savings.to_string())
        .finish()
}

pub fn handoff_url(contact_path: &str, preset: &str, result: &RoiResult) -> String {
    let parts = UrlParts::split(contact_path);
    let handoff = handoff_query(preset, result);
    if parts.query.is_empty() {
        parts.join(&handoff)
    } else {
        parts.join(&format!("{}&{handoff}", parts.query))
    }
}

/// A URL, path or bare query string cut into the pieces the query helpers
/// rewrite. `bare` inputs have no base and are written back without `?`.
struct UrlParts<'a> {
    base: &'a str,
    query: &'a str,
    fragment: Option<&'a str>,
    bare: bool,
}

impl<'a> UrlParts<'a> {
    fn split(value: &'a str) -> Self {
        let (rest, fragment) = match value.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment)),
            None => (value, None),
        };
        match rest.split_once('?') {
            Some((base, query)) => Self {
                base,
                query,
                fragment,
                bare: false,
            },
            // `team=5&rate=65` is a query, `/roi/a=b` is a path.
            None if rest.is_empty() || (rest.contains('=') && !rest.contains('/')) => Self {
                base: "",
                query: rest,
                fragment,
                bare: true,
            },
            None => Self {
                base: rest,
                query: "",
                fragment,
                bare: false,
            },
        }
    }

    fn join(&self, query: &str) -> String {
        let mut url = self.base.to_string();
        if !query.is_empty() {
            if !self.bare {
                url.push('?');
            }
            url.push_str(query);
        }
        if let Some(fragment) = self.fragment {
            url.push('#');
            url.push_str(fragment);
        }
        url
    }
}
