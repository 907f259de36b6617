use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Languages the calculator can render labels, messages and numbers in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Nl,
    En,
}

impl Locale {
    pub fn code(self) -> &'static str {
        match self {
            Locale::Nl => "nl",
            Locale::En => "en",
        }
    }

    /// CLDR number locale used for digit grouping.
    pub fn number_locale(self) -> num_format::Locale {
        match self {
            Locale::Nl => num_format::Locale::nl,
            Locale::En => num_format::Locale::en,
        }
    }

    /// Short date pattern matching `toLocaleDateString` for the locale.
    pub fn date_pattern(self) -> &'static str {
        match self {
            Locale::Nl => "%-d-%-m-%Y",
            Locale::En => "%-m/%-d/%Y",
        }
    }
}
