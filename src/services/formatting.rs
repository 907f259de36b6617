use num_format::ToFormattedString;

use crate::domain::locale::Locale;

/// Renders whole euros with the locale's digit grouping and symbol placement.
///
/// `nl` follows `Intl.NumberFormat('nl-NL')`: `€ 1.999`, `€ -1.999`.
/// `en` gives `€1,999`, `-€1,999`.
pub fn format_currency(amount: i64, locale: Locale) -> String {
    let digits = group_digits(amount.unsigned_abs(), locale);
    let negative = amount < 0;
    match (locale, negative) {
        (Locale::Nl, false) => format!("€ {digits}"),
        (Locale::Nl, true) => format!("€ -{digits}"),
        (Locale::En, false) => format!("€{digits}"),
        (Locale::En, true) => format!("-€{digits}"),
    }
}

/// `0.7` renders as `70%`.
pub fn format_percent(fraction: f64) -> String {
    format!("{}%", (fraction * 100.0).round() as i64)
}

pub fn format_hours(hours: i64, locale: Locale) -> String {
    let digits = group_digits(hours.unsigned_abs(), locale);
    if hours < 0 {
        format!("-{digits}")
    } else {
        digits
    }
}

fn group_digits(value: u64, locale: Locale) -> String {
    value.to_formatted_string(&locale.number_locale())
}
